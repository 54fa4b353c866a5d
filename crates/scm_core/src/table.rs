//! CSV table reading and writing.
//!
//! Tables are always read and written whole. [`TableWriter`] overwrites
//! existing files and keeps a log of what it wrote. [`read_raw_table`] keeps
//! every cell as the text found in the file, so a table read and written back
//! is unchanged; [`read_table`] deserialises the same rows into typed records.
//! Both check the header for required columns before looking at any row.

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{PipelineError, Result};

/// Record of a written file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    /// File path
    pub path: PathBuf,
    /// Data rows written (header excluded)
    pub rows: usize,
    /// Size in bytes
    pub bytes: u64,
}

/// A CSV table held as text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    /// Header row, in file order
    pub headers: StringRecord,
    /// Data rows
    pub rows: Vec<StringRecord>,
}

impl RawTable {
    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the column named `name`
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Position of `name`, or [`PipelineError::MissingColumn`] naming `path`.
    pub fn require_column(&self, path: &Path, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| PipelineError::missing_column(path, name))
    }

    /// Deserialise every row by header name
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        self.rows
            .iter()
            .map(|row| row.deserialize(Some(&self.headers)).map_err(PipelineError::from))
            .collect()
    }
}

/// Writer for CSV tables under one output directory
pub struct TableWriter {
    /// Output directory
    output_dir: PathBuf,
    /// Written files log
    written_files: Vec<WrittenFile>,
}

impl TableWriter {
    /// Create a new table writer, creating the output directory if needed
    pub fn new(output_dir: impl AsRef<Path>) -> Result<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        fs::create_dir_all(&output_dir)?;

        Ok(Self {
            output_dir,
            written_files: Vec::new(),
        })
    }

    /// Write `rows` to `file_name`, replacing any existing file.
    ///
    /// The header is written from `columns` so that an empty table still
    /// carries it; `columns` must match the serialised field order of `T`.
    pub fn write_table<T: Serialize>(
        &mut self,
        file_name: &str,
        columns: &[&str],
        rows: &[T],
    ) -> Result<PathBuf> {
        let path = self.output_dir.join(file_name);

        let mut writer = WriterBuilder::new().has_headers(false).from_path(&path)?;
        writer.write_record(columns)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        drop(writer);

        self.record_written(path, rows.len())
    }

    /// Write a text table to `file_name` exactly as held, replacing any existing file.
    pub fn write_raw_table(&mut self, file_name: &str, table: &RawTable) -> Result<PathBuf> {
        let path = self.output_dir.join(file_name);

        let mut writer = WriterBuilder::new().has_headers(false).from_path(&path)?;
        writer.write_record(&table.headers)?;
        for row in &table.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        drop(writer);

        self.record_written(path, table.len())
    }

    fn record_written(&mut self, path: PathBuf, rows: usize) -> Result<PathBuf> {
        let bytes = fs::metadata(&path)?.len();
        info!(path = %path.display(), rows, bytes, "Table written");

        self.written_files.push(WrittenFile {
            path: path.clone(),
            rows,
            bytes,
        });
        Ok(path)
    }

    /// Get list of written files
    pub fn written_files(&self) -> &[WrittenFile] {
        &self.written_files
    }

    /// Consume the writer and return its log
    pub fn into_written_files(self) -> Vec<WrittenFile> {
        self.written_files
    }
}

/// Fail with [`PipelineError::MissingInput`] unless `path` is an existing file.
pub fn require_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(PipelineError::missing_input(path))
    }
}

/// Read the CSV table at `path` as text, cells untouched.
pub fn read_raw_table(path: &Path, required: &[&str]) -> Result<RawTable> {
    require_file(path)?;

    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();

    let table = RawTable {
        headers,
        rows: Vec::new(),
    };
    for column in required {
        table.require_column(path, column)?;
    }

    let rows = rdr.records().collect::<std::result::Result<Vec<_>, _>>()?;
    info!(path = %path.display(), rows = rows.len(), "Table loaded");

    Ok(RawTable { rows, ..table })
}

/// Read every row of the CSV table at `path` into `T`.
pub fn read_table<T: DeserializeOwned>(path: &Path, required: &[&str]) -> Result<Vec<T>> {
    read_raw_table(path, required)?.deserialize()
}
