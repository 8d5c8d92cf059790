//! GUI module - User interface components

mod app;
mod lesson_panel;
mod shot_detail;
mod shot_table;

pub use app::LessonViewerApp;
pub use lesson_panel::{LessonPanel, LessonPanelAction};
pub use shot_detail::ShotDetail;
pub use shot_table::ShotTableView;
