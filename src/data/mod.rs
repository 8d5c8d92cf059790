//! Data module - lesson discovery, CSV loading and shot records

mod lessons;
mod loader;
mod shots;

pub use lessons::{discover_lessons, find_lesson_csv, Lesson};
pub use loader::{CsvCache, LoaderError};
pub use shots::{
    clamp_index, resolve_video, shot_label, shot_metrics, Metric, ShotTable, VideoStatus,
};
