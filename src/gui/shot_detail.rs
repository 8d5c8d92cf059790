//! Shot Detail Widget
//! "Video Player" tab: shot selector, metrics dashboard and radar video.

use crate::data::{clamp_index, resolve_video, shot_label, shot_metrics, Metric, VideoStatus};
use egui::{Color32, ComboBox, RichText};
use polars::prelude::DataFrame;
use std::path::Path;

const ERROR_COLOR: Color32 = Color32::from_rgb(220, 53, 69);
const LABEL_COLOR: Color32 = Color32::from_rgb(102, 102, 102);

/// Split metrics into dashboard rows of at most `per_row` cells.
pub fn metric_rows(metrics: &[Metric], per_row: usize) -> Vec<&[Metric]> {
    metrics.chunks(per_row.max(1)).collect()
}

/// Per-shot view state that survives between frames.
#[derive(Default)]
pub struct ShotDetail {
    /// Last failure to hand a video to the system player.
    play_error: Option<String>,
}

impl ShotDetail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.play_error = None;
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        df: &DataFrame,
        lesson_dir: &Path,
        selected: &mut usize,
        metric_columns: &[String],
        per_row: usize,
    ) {
        ui.heading("Select a Shot to Play Video");
        ui.add_space(5.0);

        let row_count = df.height();
        if row_count == 0 {
            ui.label(RichText::new("No shots in this lesson").color(Color32::GRAY));
            return;
        }
        *selected = clamp_index(*selected, row_count);

        ui.horizontal(|ui| {
            ui.label("Choose shot by index:");
            ComboBox::from_id_salt("shot_select")
                .width(360.0)
                .selected_text(shot_label(df, *selected))
                .show_ui(ui, |ui| {
                    for idx in 0..row_count {
                        if ui
                            .selectable_label(*selected == idx, shot_label(df, idx))
                            .clicked()
                            && *selected != idx
                        {
                            *selected = idx;
                            self.play_error = None;
                        }
                    }
                });
        });

        ui.add_space(12.0);
        ui.heading("Shot Metrics");
        ui.add_space(5.0);

        let metrics = shot_metrics(df, *selected, metric_columns);
        for row in metric_rows(&metrics, per_row) {
            ui.columns(per_row.max(1), |cols| {
                for (col, metric) in cols.iter_mut().zip(row) {
                    col.vertical_centered(|ui| {
                        ui.label(RichText::new(&metric.label).size(11.0).color(LABEL_COLOR));
                        ui.label(RichText::new(&metric.value).size(14.0).strong());
                    });
                }
            });
            ui.add_space(6.0);
        }

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        self.show_video(ui, resolve_video(df, *selected, lesson_dir));
    }

    fn show_video(&mut self, ui: &mut egui::Ui, status: VideoStatus) {
        match status {
            VideoStatus::Found { path, size_bytes } => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();

                ui.horizontal(|ui| {
                    ui.label(RichText::new(format!("🎬 {}", name)).size(14.0));
                    ui.label(
                        RichText::new(format!("({:.1} MB)", size_bytes as f64 / 1_048_576.0))
                            .size(11.0)
                            .color(Color32::GRAY),
                    );
                });
                ui.add_space(5.0);

                let button = egui::Button::new(RichText::new("▶ Play video").size(15.0))
                    .min_size(egui::vec2(150.0, 30.0));
                if ui.add(button).clicked() {
                    tracing::info!("Playing {}", path.display());
                    self.play_error = open::that(&path).err().map(|e| {
                        tracing::warn!("Failed to open {}: {}", path.display(), e);
                        format!("Could not open video player: {}", e)
                    });
                }

                if let Some(error) = &self.play_error {
                    ui.label(RichText::new(error).color(ERROR_COLOR));
                }
            }
            VideoStatus::NotFound { path } => {
                ui.label(
                    RichText::new(format!("Video not found: {}", path.display()))
                        .color(ERROR_COLOR),
                );
            }
            VideoStatus::NoReference => {
                ui.label(
                    RichText::new("Video not found: no radar video recorded for this shot")
                        .color(ERROR_COLOR),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(n: usize) -> Vec<Metric> {
        (0..n)
            .map(|i| Metric {
                label: format!("m{}", i),
                value: i.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_metric_rows_wrap_at_eight() {
        let all = metrics(13);
        let rows = metric_rows(&all, 8);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 8);
        assert_eq!(rows[1].len(), 5);
        assert_eq!(rows[1][0].label, "m8");
    }

    #[test]
    fn test_metric_rows_zero_width_is_one_per_row() {
        let all = metrics(3);
        assert_eq!(metric_rows(&all, 0).len(), 3);
    }
}
