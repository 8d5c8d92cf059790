//! Lesson Viewer Main Application
//! Main window with the lesson sidebar and the shot table / video tabs.

use crate::config::ViewerConfig;
use crate::data::{discover_lessons, find_lesson_csv, CsvCache, Lesson, LoaderError, ShotTable};
use crate::gui::{LessonPanel, LessonPanelAction, ShotDetail, ShotTableView};
use egui::{Color32, RichText, SidePanel};
use polars::prelude::DataFrame;
use std::path::PathBuf;
use std::sync::Arc;

/// Which view the central panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    AllShots,
    VideoPlayer,
}

/// Which lesson and shot the user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub lesson: Option<usize>,
    pub shot: usize,
}

impl Selection {
    /// Switch lesson; the shot choice does not carry over.
    pub fn select_lesson(&mut self, lesson: usize) {
        if self.lesson != Some(lesson) {
            self.lesson = Some(lesson);
            self.shot = 0;
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A lesson whose CSV parsed successfully.
struct LoadedLesson {
    lesson: Lesson,
    csv_path: PathBuf,
    df: Arc<DataFrame>,
    table: ShotTable,
}

impl LoadedLesson {
    fn csv_name(&self) -> String {
        self.csv_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// Main application window.
pub struct LessonViewerApp {
    config: ViewerConfig,
    base_dir: PathBuf,
    lessons: Vec<Lesson>,
    cache: CsvCache,
    selection: Selection,
    tab: Tab,
    loaded: Option<LoadedLesson>,
    load_error: Option<String>,

    lesson_panel: LessonPanel,
    shot_detail: ShotDetail,
}

impl LessonViewerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: ViewerConfig, base_dir: PathBuf) -> Self {
        let mut app = Self {
            config,
            base_dir,
            lessons: Vec::new(),
            cache: CsvCache::new(),
            selection: Selection::default(),
            tab: Tab::default(),
            loaded: None,
            load_error: None,
            lesson_panel: LessonPanel::new(),
            shot_detail: ShotDetail::new(),
        };
        app.refresh_lessons();
        app
    }

    /// Re-list the base folder and open the first lesson, if any.
    fn refresh_lessons(&mut self) {
        self.lessons = discover_lessons(&self.base_dir, &self.config.excluded_dirs);
        self.selection.clear();
        self.loaded = None;
        self.load_error = None;

        if self.lessons.is_empty() {
            self.lesson_panel.set_status("No lessons available");
        } else {
            self.lesson_panel
                .set_status(&format!("{} lessons found", self.lessons.len()));
            self.open_lesson(0);
        }
    }

    fn open_lesson(&mut self, index: usize) {
        let Some(lesson) = self.lessons.get(index).cloned() else {
            return;
        };
        self.selection.select_lesson(index);
        self.shot_detail.reset();

        match self.load_lesson(&lesson) {
            Ok(loaded) => {
                self.lesson_panel.set_status(&format!(
                    "Loaded {} shots from {}",
                    loaded.table.row_count(),
                    loaded.csv_name()
                ));
                self.loaded = Some(loaded);
                self.load_error = None;
            }
            Err(e) => {
                tracing::warn!("Lesson {}: {}", lesson.name, e);
                self.lesson_panel.set_status(&format!("Error: {}", e));
                self.loaded = None;
                self.load_error = Some(e.to_string());
            }
        }
    }

    fn load_lesson(&mut self, lesson: &Lesson) -> Result<LoadedLesson, LoaderError> {
        let csv_path = find_lesson_csv(&lesson.path)?;
        let df = self.cache.load(&csv_path)?;
        tracing::debug!("{} lesson CSVs cached", self.cache.len());
        let table = ShotTable::from_frame(&df, &self.config.preview_columns)?;
        Ok(LoadedLesson {
            lesson: lesson.clone(),
            csv_path,
            df,
            table,
        })
    }

    /// Drop the cached CSV of the open lesson and parse it again.
    fn handle_reload(&mut self) {
        let Some(index) = self.selection.lesson else {
            return;
        };
        if let Some(loaded) = &self.loaded {
            self.cache.invalidate(&loaded.csv_path);
        }
        let shot = self.selection.shot;
        self.open_lesson(index);
        self.selection.shot = shot;
    }

    fn handle_browse_base_dir(&mut self) {
        if let Some(dir) = rfd::FileDialog::new()
            .set_directory(&self.base_dir)
            .pick_folder()
        {
            tracing::info!("Base folder changed to {}", dir.display());
            self.base_dir = dir;
            self.cache.clear();
            self.refresh_lessons();
        }
    }

    fn show_central(&mut self, ui: &mut egui::Ui) {
        ui.heading("Golf Launch Monitor Viewer");
        ui.add_space(5.0);

        if let Some(error) = &self.load_error {
            ui.label(RichText::new(error).size(14.0).color(Color32::from_rgb(220, 53, 69)));
            return;
        }

        let Some(loaded) = &self.loaded else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No lessons available").size(20.0));
            });
            return;
        };

        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.tab, Tab::AllShots, "All Shots");
            ui.selectable_value(&mut self.tab, Tab::VideoPlayer, "Video Player");
        });
        ui.separator();

        match self.tab {
            Tab::AllShots => ShotTableView::show(ui, &loaded.csv_name(), &loaded.table),
            Tab::VideoPlayer => {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.shot_detail.show(
                        ui,
                        &loaded.df,
                        &loaded.lesson.path,
                        &mut self.selection.shot,
                        &self.config.metric_columns,
                        self.config.metrics_per_row,
                    );
                });
            }
        }
    }
}

impl eframe::App for LessonViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        SidePanel::left("lesson_panel")
            .min_width(240.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                let action = self.lesson_panel.show(
                    ui,
                    &self.base_dir,
                    &self.lessons,
                    self.selection.lesson,
                );

                match action {
                    LessonPanelAction::SelectLesson(index) => self.open_lesson(index),
                    LessonPanelAction::BrowseBaseDir => self.handle_browse_base_dir(),
                    LessonPanelAction::Reload => self.handle_reload(),
                    LessonPanelAction::None => {}
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_central(ui);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_change_resets_shot() {
        let mut selection = Selection::default();
        selection.select_lesson(0);
        selection.shot = 7;

        selection.select_lesson(0);
        assert_eq!(selection.shot, 7);

        selection.select_lesson(1);
        assert_eq!(selection, Selection { lesson: Some(1), shot: 0 });
    }

    #[test]
    fn test_selection_clear() {
        let mut selection = Selection { lesson: Some(2), shot: 4 };
        selection.clear();
        assert_eq!(selection, Selection::default());
    }
}
