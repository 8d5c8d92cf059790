//! Lesson Panel Widget
//! Left sidebar with the base folder, lesson selector and reload control.

use crate::data::Lesson;
use egui::{Color32, ComboBox, RichText};
use std::path::Path;

/// Left sidebar for choosing a lesson folder.
pub struct LessonPanel {
    pub status: String,
}

impl Default for LessonPanel {
    fn default() -> Self {
        Self {
            status: "Ready".to_string(),
        }
    }
}

impl LessonPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    /// Draw the panel. `selected` is the index into `lessons` of the open lesson.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        base_dir: &Path,
        lessons: &[Lesson],
        selected: Option<usize>,
    ) -> LessonPanelAction {
        let mut action = LessonPanelAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("⛳ Lesson Viewer")
                    .size(22.0)
                    .color(Color32::from_rgb(46, 139, 87)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Base Folder Section =====
        ui.label(RichText::new("📁 Lessons Folder").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let dir_text = base_dir
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| base_dir.display().to_string());
                    ui.label(RichText::new(dir_text).size(12.0))
                        .on_hover_text(base_dir.display().to_string());

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📂 Browse").clicked() {
                            action = LessonPanelAction::BrowseBaseDir;
                        }
                    });
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Lesson Section =====
        ui.label(RichText::new("Select Lesson Folder").size(14.0).strong());
        ui.add_space(5.0);

        if lessons.is_empty() {
            ui.label(RichText::new("No lessons available").color(Color32::GRAY));
        } else {
            let selected_text = selected
                .and_then(|i| lessons.get(i))
                .map(|l| l.name.as_str())
                .unwrap_or("");

            ComboBox::from_id_salt("lesson_select")
                .width(ui.available_width() - 10.0)
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for (i, lesson) in lessons.iter().enumerate() {
                        if ui
                            .selectable_label(selected == Some(i), &lesson.name)
                            .clicked()
                            && selected != Some(i)
                        {
                            action = LessonPanelAction::SelectLesson(i);
                        }
                    }
                });

            ui.add_space(8.0);
            ui.add_enabled_ui(selected.is_some(), |ui| {
                if ui
                    .button("🔄 Reload")
                    .on_hover_text("Re-read the lesson CSV from disk")
                    .clicked()
                {
                    action = LessonPanelAction::Reload;
                }
            });
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(5.0);

        let status_color = if self.status.starts_with("Error") {
            Color32::from_rgb(220, 53, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }
}

/// Actions triggered by the lesson panel
#[derive(Debug, Clone, PartialEq)]
pub enum LessonPanelAction {
    None,
    SelectLesson(usize),
    BrowseBaseDir,
    Reload,
}
