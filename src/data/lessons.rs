//! Lesson discovery: one subdirectory of the base directory per lesson.

use super::loader::LoaderError;
use std::fs;
use std::path::{Path, PathBuf};

/// A lesson folder holding one CSV and its radar videos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub name: String,
    pub path: PathBuf,
}

/// List the lesson folders directly under `base_dir`, sorted by name.
///
/// Directories named in `excluded` (virtualenvs and the like) are skipped.
/// An unreadable base directory yields no lessons.
pub fn discover_lessons(base_dir: &Path, excluded: &[String]) -> Vec<Lesson> {
    let entries = match fs::read_dir(base_dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Cannot list {}: {}", base_dir.display(), e);
            return Vec::new();
        }
    };

    let mut lessons: Vec<Lesson> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().to_string();
            if excluded.iter().any(|ex| *ex == name) {
                None
            } else {
                Some(Lesson {
                    name,
                    path: entry.path(),
                })
            }
        })
        .collect();

    lessons.sort_by(|a, b| a.name.cmp(&b.name));
    tracing::debug!("Found {} lessons in {}", lessons.len(), base_dir.display());
    lessons
}

/// First `*.csv` file (by name) inside a lesson folder.
pub fn find_lesson_csv(lesson_dir: &Path) -> Result<PathBuf, LoaderError> {
    let no_csv = || LoaderError::NoCsv {
        dir: lesson_dir.to_path_buf(),
    };

    let entries = fs::read_dir(lesson_dir).map_err(|_| no_csv())?;
    let mut csvs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
        })
        .collect();

    csvs.sort();
    if csvs.len() > 1 {
        tracing::warn!(
            "{} CSV files in {}, using {}",
            csvs.len(),
            lesson_dir.display(),
            csvs[0].display()
        );
    }
    csvs.into_iter().next().ok_or_else(no_csv)
}
