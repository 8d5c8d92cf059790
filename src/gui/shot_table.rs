//! Shot Table Widget
//! "All Shots" tab: the preview columns for every shot, as loaded.

use crate::data::ShotTable;
use egui::{Color32, RichText, ScrollArea};

pub struct ShotTableView;

impl ShotTableView {
    pub fn show(ui: &mut egui::Ui, csv_name: &str, table: &ShotTable) {
        ui.heading(format!("All Shots: {}", csv_name));
        ui.add_space(5.0);

        if !table.missing.is_empty() {
            ui.label(
                RichText::new(format!("Columns not in CSV: {}", table.missing.join(", ")))
                    .size(11.0)
                    .color(Color32::from_rgb(243, 156, 18)),
            );
            ui.add_space(5.0);
        }

        ScrollArea::both().auto_shrink([false, false]).show(ui, |ui| {
            egui::Grid::new("all_shots_table")
                .striped(true)
                .min_col_width(40.0)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("#").strong());
                    for header in &table.headers {
                        ui.label(RichText::new(header).strong());
                    }
                    ui.end_row();

                    for (i, row) in table.rows.iter().enumerate() {
                        ui.label(RichText::new(i.to_string()).color(Color32::GRAY));
                        for cell in row {
                            ui.label(cell);
                        }
                        ui.end_row();
                    }
                });
        });
    }
}
