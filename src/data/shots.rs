//! Shot Records Module
//! Row-level access to a lesson frame: cell text, the preview table,
//! selector labels, the metrics dashboard and radar video lookup.

use polars::prelude::*;
use std::path::{Path, PathBuf};

/// Shown for a metric whose column is absent or whose cell is empty.
pub const PLACEHOLDER: &str = "N/A";

pub const CLUB_COL: &str = "Club";
pub const SHOT_TYPE_COL: &str = "Shot Type";
pub const CARRY_COL: &str = "Carry [yds]";
pub const VIDEO_COL: &str = "Radar Video";
/// Metric label that always shows the selected row position.
pub const INDEX_LABEL: &str = "Index";

/// Render a single cell as text. `None` for a missing column, a row out of
/// range, a null or a NaN.
pub fn cell_text(df: &DataFrame, column: &str, row: usize) -> Option<String> {
    let value = df.column(column).ok()?.get(row).ok()?;
    match value {
        AnyValue::Null => None,
        AnyValue::String(s) => Some(s.to_string()),
        AnyValue::StringOwned(s) => Some(s.to_string()),
        AnyValue::Float64(v) => format_float(v),
        AnyValue::Float32(v) => format_float(v as f64),
        other => Some(other.to_string().trim_matches('"').to_string()),
    }
}

/// Whole numbers keep one decimal so float columns read consistently.
fn format_float(v: f64) -> Option<String> {
    if v.is_nan() {
        None
    } else if v.fract() == 0.0 && v.abs() < 1e15 {
        Some(format!("{:.1}", v))
    } else {
        Some(v.to_string())
    }
}

/// Clamp a selected index into the frame's row range.
pub fn clamp_index(index: usize, row_count: usize) -> usize {
    index.min(row_count.saturating_sub(1))
}

/// Selector text: `"{index}: {club} | {shot type} | Carry {carry} yd"`.
pub fn shot_label(df: &DataFrame, index: usize) -> String {
    let field = |col: &str| cell_text(df, col, index).unwrap_or_else(|| PLACEHOLDER.to_string());
    format!(
        "{}: {} | {} | Carry {} yd",
        index,
        field(CLUB_COL),
        field(SHOT_TYPE_COL),
        field(CARRY_COL)
    )
}

/// The "All Shots" preview: a fixed column subset rendered as text, rows in
/// file order.
#[derive(Debug, Clone, Default)]
pub struct ShotTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Requested preview columns the CSV does not have.
    pub missing: Vec<String>,
}

impl ShotTable {
    pub fn from_frame(df: &DataFrame, preview_columns: &[String]) -> Result<Self, PolarsError> {
        let (present, missing): (Vec<String>, Vec<String>) = preview_columns
            .iter()
            .cloned()
            .partition(|name| df.column(name).is_ok());

        if !missing.is_empty() {
            tracing::warn!("Preview columns not in CSV: {}", missing.join(", "));
        }

        let projected = df
            .clone()
            .lazy()
            .select(present.iter().map(|name| col(name.as_str())).collect::<Vec<_>>())
            .collect()?;

        let rows = (0..projected.height())
            .map(|row| {
                present
                    .iter()
                    .map(|name| cell_text(&projected, name, row).unwrap_or_default())
                    .collect()
            })
            .collect();

        Ok(Self {
            headers: present,
            rows,
            missing,
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// One labeled value in the metrics dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

/// Metrics for one shot, in `metric_columns` order.
pub fn shot_metrics(df: &DataFrame, index: usize, metric_columns: &[String]) -> Vec<Metric> {
    metric_columns
        .iter()
        .map(|name| {
            let value = if name == INDEX_LABEL {
                index.to_string()
            } else {
                cell_text(df, name, index).unwrap_or_else(|| PLACEHOLDER.to_string())
            };
            Metric {
                label: name.clone(),
                value,
            }
        })
        .collect()
}

/// Where a shot's radar video stands on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoStatus {
    Found { path: PathBuf, size_bytes: u64 },
    NotFound { path: PathBuf },
    /// The row has no `Radar Video` value.
    NoReference,
}

/// Resolve a shot's `Radar Video` filename against its lesson folder.
pub fn resolve_video(df: &DataFrame, index: usize, lesson_dir: &Path) -> VideoStatus {
    let Some(file_name) = cell_text(df, VIDEO_COL, index).filter(|s| !s.trim().is_empty()) else {
        return VideoStatus::NoReference;
    };

    let path = lesson_dir.join(file_name.trim());
    match path.metadata() {
        Ok(meta) if meta.is_file() => VideoStatus::Found {
            path,
            size_bytes: meta.len(),
        },
        _ => {
            tracing::warn!("Video not found: {}", path.display());
            VideoStatus::NotFound { path }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn lesson_frame(rows: usize) -> DataFrame {
        let clubs: Vec<String> = (0..rows)
            .map(|i| if i % 2 == 0 { "Driver" } else { "7 Iron" }.to_string())
            .collect();
        let carry: Vec<i64> = (0..rows as i64).map(|i| 100 + i).collect();
        let videos: Vec<String> = (0..rows).map(|i| format!("shot_{:03}.mp4", i)).collect();
        DataFrame::new(vec![
            Column::new("Player".into(), vec!["Sam"; rows]),
            Column::new("Club".into(), clubs),
            Column::new("Shot Type".into(), vec!["Draw"; rows]),
            Column::new("Carry [yds]".into(), carry),
            Column::new("Spin [rpm]".into(), vec![2500.5f64; rows]),
            Column::new("Radar Video".into(), videos),
        ])
        .unwrap()
    }

    #[test]
    fn test_cell_text_variants() {
        let df = DataFrame::new(vec![
            Column::new("s".into(), [Some("x"), None]),
            Column::new("f".into(), [1.0f64, f64::NAN]),
            Column::new("i".into(), [7i64, 8]),
        ])
        .unwrap();

        assert_eq!(cell_text(&df, "s", 0).as_deref(), Some("x"));
        assert_eq!(cell_text(&df, "s", 1), None);
        assert_eq!(cell_text(&df, "f", 0).as_deref(), Some("1.0"));
        assert_eq!(cell_text(&df, "f", 1), None);
        assert_eq!(cell_text(&df, "i", 1).as_deref(), Some("8"));
        assert_eq!(cell_text(&df, "missing", 0), None);
        assert_eq!(cell_text(&df, "i", 5), None);
    }

    #[test]
    fn test_shot_table_projects_preview_columns_in_order() {
        let df = lesson_frame(6);
        let preview = columns(&["Player", "Club", "Carry [yds]", "Radar Video", "Time"]);

        let table = ShotTable::from_frame(&df, &preview).unwrap();

        assert_eq!(table.row_count(), 6);
        assert_eq!(table.headers, columns(&["Player", "Club", "Carry [yds]", "Radar Video"]));
        assert_eq!(table.missing, columns(&["Time"]));
        for (i, row) in table.rows.iter().enumerate() {
            assert_eq!(row.len(), 4);
            assert_eq!(row[2], (100 + i).to_string());
            assert_eq!(row[3], format!("shot_{:03}.mp4", i));
        }
    }

    #[test]
    fn test_shot_label_format() {
        let df = lesson_frame(3);
        assert_eq!(shot_label(&df, 1), "1: 7 Iron | Draw | Carry 101 yd");
    }

    #[test]
    fn test_shot_label_with_missing_columns() {
        let df = DataFrame::new(vec![Column::new("Club".into(), ["Wedge"])]).unwrap();
        assert_eq!(shot_label(&df, 0), "0: Wedge | N/A | Carry N/A yd");
    }

    #[test]
    fn test_metrics_missing_column_is_placeholder() {
        let df = lesson_frame(2);
        let metrics = shot_metrics(&df, 0, &columns(&["Index", "Smash", "Club"]));

        assert_eq!(metrics[1].label, "Smash");
        assert_eq!(metrics[1].value, PLACEHOLDER);
        assert_eq!(metrics[2].value, "Driver");
    }

    #[test]
    fn test_metrics_follow_selected_row() {
        let df = lesson_frame(10);
        let metrics = shot_metrics(&df, 3, &columns(&["Index", "Carry [yds]", "Club", "Spin [rpm]"]));

        let values: Vec<&str> = metrics.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(values, vec!["3", "103", "7 Iron", "2500.5"]);
    }

    #[test]
    fn test_clamp_index() {
        assert_eq!(clamp_index(3, 10), 3);
        assert_eq!(clamp_index(12, 10), 9);
        assert_eq!(clamp_index(4, 0), 0);
    }

    #[test]
    fn test_resolve_video_found_and_missing() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("shot_000.mp4"), b"0123456789").unwrap();
        let df = lesson_frame(2);

        assert_eq!(
            resolve_video(&df, 0, dir.path()),
            VideoStatus::Found {
                path: dir.path().join("shot_000.mp4"),
                size_bytes: 10,
            }
        );
        assert_eq!(
            resolve_video(&df, 1, dir.path()),
            VideoStatus::NotFound {
                path: dir.path().join("shot_001.mp4"),
            }
        );
    }

    #[test]
    fn test_resolve_video_without_column() {
        let dir = TempDir::new().unwrap();
        let df = DataFrame::new(vec![Column::new("Club".into(), ["Driver"])]).unwrap();
        assert_eq!(resolve_video(&df, 0, dir.path()), VideoStatus::NoReference);
    }
}
