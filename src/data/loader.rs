//! CSV Data Loader Module
//! Handles CSV file loading and column extraction using Polars.

use polars::prelude::*;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse CSV {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
}

/// Reader settings passed straight to the Polars CSV reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    pub has_header: bool,
    pub separator: u8,
    /// Rows scanned before a column dtype is fixed. `None` scans the whole file.
    pub infer_schema_length: Option<usize>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            separator: b',',
            infer_schema_length: None,
        }
    }
}

/// Load a CSV file with the default reader settings
/// (comma-delimited, header row, full-file type inference).
pub fn read_csv(file_path: impl AsRef<Path>) -> Result<DataFrame, LoaderError> {
    DataLoader::default().load_csv(file_path)
}

/// Handles CSV file loading with Polars.
#[derive(Debug, Clone, Default)]
pub struct DataLoader {
    options: CsvOptions,
}

impl DataLoader {
    pub fn new(options: CsvOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CsvOptions {
        &self.options
    }

    /// Load a CSV file using Polars.
    ///
    /// The file is read into memory once, so a missing, unreadable or
    /// non-regular path surfaces as [`LoaderError::FileAccess`]. Everything
    /// after that read is a [`LoaderError::Parse`]: empty content, bytes that
    /// are not UTF-8, and anything the CSV reader rejects. Malformed rows are
    /// never skipped.
    pub fn load_csv(&self, file_path: impl AsRef<Path>) -> Result<DataFrame, LoaderError> {
        let path = file_path.as_ref();
        let bytes = read_bytes(path)?;
        let parse_error = |source: PolarsError| LoaderError::Parse {
            path: path.to_path_buf(),
            source,
        };

        if bytes.is_empty() {
            return Err(parse_error(PolarsError::NoData("empty CSV".into())));
        }
        if let Err(e) = std::str::from_utf8(&bytes) {
            return Err(parse_error(PolarsError::ComputeError(
                format!("invalid utf-8 sequence at byte {}", e.valid_up_to()).into(),
            )));
        }

        tracing::info!(path = %path.display(), bytes = bytes.len(), "Loading CSV");

        let separator = self.options.separator;
        let df = CsvReadOptions::default()
            .with_has_header(self.options.has_header)
            .with_infer_schema_length(self.options.infer_schema_length)
            .with_ignore_errors(false)
            .map_parse_options(|parse| parse.with_separator(separator))
            .into_reader_with_file_handle(Cursor::new(bytes))
            .finish()
            .map_err(parse_error)?;

        tracing::info!(
            path = %path.display(),
            rows = df.height(),
            columns = df.width(),
            "Loaded CSV"
        );

        Ok(df)
    }
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, LoaderError> {
    let access_error = |source: io::Error| LoaderError::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let metadata = std::fs::metadata(path).map_err(access_error)?;
    if !metadata.is_file() {
        return Err(access_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }
    std::fs::read(path).map_err(access_error)
}

/// Get list of column names, in frame order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Whether a dtype holds plain integers or floats.
pub fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

/// Get list of numeric column names.
pub fn numeric_columns(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|col| is_numeric(col.dtype()))
        .map(|col| col.name().to_string())
        .collect()
}
