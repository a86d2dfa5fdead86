//! Named tabular datasets loaded from flat CSV files.
//!
//! A [`Store`] maps a dataset name to `<root>/<name>.csv` and loads it as a
//! [`Table`]: an immutable mapping from column name to a typed column. A
//! column is numeric when every one of its values parses as `f64`, and text
//! otherwise. Each `get` opens the file, reads it, and closes it before
//! returning; no handle is shared between calls.
//!
//! # File format
//!
//! - First non-empty line is the header (comma-separated column names)
//! - One row per line, values comma-separated, no quoting
//! - Empty lines and lines starting with `#` are skipped
//!
//! # Example
//!
//! ```ignore
//! use statsum::data::Store;
//!
//! let store = Store::new("data");
//! let skulls = store.get("skulls")?;
//! let etruscan = skulls.real_where("size", "type", "Etruscan")?;
//! ```

mod csv;

pub use csv::Store;

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while loading or reading a table.
#[derive(Debug)]
pub enum DataError {
    /// IO error reading a file.
    Io(std::io::Error),

    /// No file backs the requested table name.
    MissingTable {
        /// The requested table name.
        name: String,
        /// The path that was tried.
        path: PathBuf,
    },

    /// Malformed content at a specific line.
    Parse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Description of the parse error.
        message: String,
    },

    /// A row with the wrong number of values.
    RaggedRow {
        /// Line number of the offending row (1-indexed).
        line: usize,
        /// Number of columns declared by the header.
        expected: usize,
        /// Number of values found.
        got: usize,
    },

    /// A table with a header but no data rows.
    EmptyTable {
        /// The table name.
        name: String,
    },

    /// The requested column does not exist.
    MissingColumn {
        /// The requested column name.
        name: String,
        /// The columns that do exist.
        available: Vec<String>,
    },

    /// The column exists but has the wrong type.
    ColumnType {
        /// The requested column name.
        name: String,
        /// The type the caller asked for.
        expected: &'static str,
    },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Io(e) => write!(f, "IO error: {}", e),
            DataError::MissingTable { name, path } => {
                write!(f, "No table '{}' at {}", name, path.display())
            }
            DataError::Parse { line, message } => {
                write!(f, "Parse error at line {}: {}", line, message)
            }
            DataError::RaggedRow {
                line,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Ragged row at line {}: expected {} values, got {}",
                    line, expected, got
                )
            }
            DataError::EmptyTable { name } => {
                write!(f, "Table '{}' has no data rows", name)
            }
            DataError::MissingColumn { name, available } => {
                write!(
                    f,
                    "No column '{}' in table. Available columns: {:?}",
                    name, available
                )
            }
            DataError::ColumnType { name, expected } => {
                write!(f, "Column '{}' is not a {} column", name, expected)
            }
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DataError {
    fn from(e: std::io::Error) -> Self {
        DataError::Io(e)
    }
}

/// A typed column of a table.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Every value parsed as `f64`.
    Real(Vec<f64>),
    /// At least one value did not parse as a number.
    Text(Vec<String>),
}

impl Column {
    /// Number of values in the column.
    pub fn len(&self) -> usize {
        match self {
            Column::Real(v) => v.len(),
            Column::Text(v) => v.len(),
        }
    }

    /// Whether the column holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An immutable named table: columns in header order, addressable by name.
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    order: Vec<String>,
    columns: HashMap<String, Column>,
    rows: usize,
}

impl Table {
    pub(crate) fn new(
        name: String,
        order: Vec<String>,
        columns: HashMap<String, Column>,
        rows: usize,
    ) -> Self {
        Self {
            name,
            order,
            columns,
            rows,
        }
    }

    /// The table name (the dataset name it was requested under).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of data rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column names in header order.
    pub fn column_names(&self) -> &[String] {
        &self.order
    }

    /// A column by name.
    pub fn column(&self, name: &str) -> Result<&Column, DataError> {
        self.columns.get(name).ok_or_else(|| DataError::MissingColumn {
            name: name.to_string(),
            available: self.order.clone(),
        })
    }

    /// A numeric column by name.
    pub fn real(&self, name: &str) -> Result<&[f64], DataError> {
        match self.column(name)? {
            Column::Real(v) => Ok(v),
            Column::Text(_) => Err(DataError::ColumnType {
                name: name.to_string(),
                expected: "numeric",
            }),
        }
    }

    /// A text column by name.
    pub fn text(&self, name: &str) -> Result<&[String], DataError> {
        match self.column(name)? {
            Column::Text(v) => Ok(v),
            Column::Real(_) => Err(DataError::ColumnType {
                name: name.to_string(),
                expected: "text",
            }),
        }
    }

    /// Values of a numeric column restricted to rows where a text key
    /// column equals `key`.
    ///
    /// This is how a long-format table splits into named samples, e.g.
    /// skull breadths by origin.
    pub fn real_where(
        &self,
        value_column: &str,
        key_column: &str,
        key: &str,
    ) -> Result<Vec<f64>, DataError> {
        let values = self.real(value_column)?;
        let keys = self.text(key_column)?;
        Ok(values
            .iter()
            .zip(keys)
            .filter(|(_, k)| k.as_str() == key)
            .map(|(v, _)| *v)
            .collect())
    }
}
