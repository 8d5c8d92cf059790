//! CSV Data Loader Module
//! Decodes lesson CSVs (Windows-1252) with Polars and memoizes them by path.

use encoding_rs::WINDOWS_1252;
use polars::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Rows sampled for schema inference.
const INFER_SCHEMA_ROWS: usize = 10_000;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("No CSV file found in {}", dir.display())]
    NoCsv { dir: PathBuf },
}

/// Decode raw Windows-1252 bytes and parse them as a CSV with a header row.
pub fn parse_csv_bytes(bytes: &[u8]) -> Result<DataFrame, LoaderError> {
    let (text, _, had_errors) = WINDOWS_1252.decode(bytes);
    if had_errors {
        tracing::warn!("CSV contained bytes outside Windows-1252, replaced");
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .with_ignore_errors(true)
        .into_reader_with_file_handle(Cursor::new(text.into_owned().into_bytes()))
        .finish()?;

    Ok(df)
}

/// Read and parse a CSV file from disk, bypassing the cache.
pub fn read_csv(path: &Path) -> Result<DataFrame, LoaderError> {
    let bytes = fs::read(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_csv_bytes(&bytes)
}

/// Path-keyed memo of parsed CSVs.
///
/// A cached entry is returned as-is until it is invalidated, even if the
/// file on disk has changed since it was parsed.
#[derive(Default)]
pub struct CsvCache {
    entries: HashMap<PathBuf, Arc<DataFrame>>,
}

impl CsvCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a CSV, parsing it only on the first request for `path`.
    pub fn load(&mut self, path: &Path) -> Result<Arc<DataFrame>, LoaderError> {
        if let Some(df) = self.entries.get(path) {
            tracing::debug!("CSV cache hit: {}", path.display());
            return Ok(Arc::clone(df));
        }

        let df = Arc::new(read_csv(path)?);
        tracing::info!(
            "Loaded {} ({} rows, {} columns)",
            path.display(),
            df.height(),
            df.width()
        );
        self.entries.insert(path.to_path_buf(), Arc::clone(&df));
        Ok(df)
    }

    /// Drop the cached frame for one path. Returns whether it was cached.
    pub fn invalidate(&mut self, path: &Path) -> bool {
        self.entries.remove(path).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[allow(dead_code)]
    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
