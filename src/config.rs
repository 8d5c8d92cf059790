//! Viewer configuration: command line plus an optional JSON settings file.

use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Settings file looked up in the base directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "lesson_viewer.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "golf-lesson-viewer", version, about = "Golf launch monitor lesson viewer")]
pub struct Args {
    /// Folder containing one subfolder per lesson (defaults to the current directory)
    pub base_dir: Option<PathBuf>,

    /// JSON settings file (defaults to lesson_viewer.json in the base folder)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Column sets and layout knobs for the viewer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Subfolder names that are never lessons.
    pub excluded_dirs: Vec<String>,
    /// Columns shown in the "All Shots" table.
    pub preview_columns: Vec<String>,
    /// Columns shown in the shot metrics dashboard.
    pub metric_columns: Vec<String>,
    pub metrics_per_row: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            excluded_dirs: strings(&["venv", ".venv"]),
            preview_columns: strings(&[
                "Player",
                "Time",
                "Club",
                "Club Speed [mph]",
                "Shot Type",
                "Carry [yds]",
                "Radar Video",
            ]),
            metric_columns: strings(&[
                "Index",
                "Carry [yds]",
                "Total [yds]",
                "Smash",
                "Spin [rpm]",
                "Club Path [deg]",
                "V-Plane [deg]",
                "Height [ft]",
                "Club Speed [mph]",
                "AOA [deg]",
                "Low Point [in]",
                "Club",
                "Shot Type",
            ]),
            metrics_per_row: 8,
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl ViewerConfig {
    /// Parse a settings file. Fields left out keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.metrics_per_row = config.metrics_per_row.max(1);
        Ok(config)
    }

    /// Resolve the effective config: an explicit file must exist, the
    /// per-folder file is optional.
    pub fn resolve(explicit: Option<&Path>, base_dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            tracing::info!("Using config {}", path.display());
            return Self::from_file(path);
        }

        let local = base_dir.join(CONFIG_FILE_NAME);
        if local.is_file() {
            tracing::info!("Using config {}", local.display());
            Self::from_file(&local)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let dir = TempDir::new().unwrap();
        let config = ViewerConfig::resolve(None, dir.path()).unwrap();
        assert_eq!(config, ViewerConfig::default());
        assert_eq!(config.metrics_per_row, 8);
        assert_eq!(config.metric_columns[0], "Index");
        assert_eq!(config.preview_columns.len(), 7);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "excluded_dirs": ["venv", "archive"], "metrics_per_row": 0 }"#,
        )
        .unwrap();

        let config = ViewerConfig::resolve(None, dir.path()).unwrap();
        assert_eq!(config.excluded_dirs, vec!["venv", "archive"]);
        assert_eq!(config.metrics_per_row, 1);
        assert_eq!(config.preview_columns, ViewerConfig::default().preview_columns);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        let err = ViewerConfig::resolve(Some(&path), dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let err = ViewerConfig::resolve(Some(&dir.path().join("none.json")), dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["golf-lesson-viewer", "/lessons", "--config", "v.json"]);
        assert_eq!(args.base_dir, Some(PathBuf::from("/lessons")));
        assert_eq!(args.config, Some(PathBuf::from("v.json")));
    }
}
