//! CSV-backed table store with scoped file access.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use super::{Column, DataError, Table};

/// A directory of named CSV datasets.
///
/// `get` resolves a table name to `<root>/<name>.csv`, opens the file,
/// parses it, and closes it before returning. The store itself holds only
/// the root path; there is no open handle between calls, so an error in
/// one `get` cannot leak state into the next.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Create a store rooted at a directory of `.csv` files.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Load the named table.
    ///
    /// # Errors
    /// `MissingTable` if no file backs the name, otherwise any
    /// [`DataError`] produced while reading or parsing the file.
    pub fn get(&self, name: &str) -> Result<Table, DataError> {
        let path = self.root.join(format!("{}.csv", name));
        let file = File::open(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DataError::MissingTable {
                    name: name.to_string(),
                    path: path.clone(),
                }
            } else {
                DataError::Io(e)
            }
        })?;

        parse_table(name, BufReader::new(file))
    }
}

/// Parse a header line plus data rows into a typed table.
fn parse_table<R: BufRead>(name: &str, reader: R) -> Result<Table, DataError> {
    let mut header: Option<Vec<String>> = None;
    let mut cells: Vec<Vec<String>> = Vec::new();
    let mut rows = 0usize;

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split(',').map(str::trim).collect();

        match &header {
            None => {
                if parts.iter().any(|p| p.is_empty()) {
                    return Err(DataError::Parse {
                        line: line_num + 1,
                        message: "header has an empty column name".to_string(),
                    });
                }
                cells = vec![Vec::new(); parts.len()];
                header = Some(parts.iter().map(|p| p.to_string()).collect());
            }
            Some(names) => {
                if parts.len() != names.len() {
                    return Err(DataError::RaggedRow {
                        line: line_num + 1,
                        expected: names.len(),
                        got: parts.len(),
                    });
                }
                for (col, value) in cells.iter_mut().zip(&parts) {
                    col.push(value.to_string());
                }
                rows += 1;
            }
        }
    }

    let order = header.ok_or_else(|| DataError::Parse {
        line: 1,
        message: "file has no header line".to_string(),
    })?;
    if rows == 0 {
        return Err(DataError::EmptyTable {
            name: name.to_string(),
        });
    }

    let mut columns = HashMap::with_capacity(order.len());
    for (column_name, raw) in order.iter().zip(cells) {
        columns.insert(column_name.clone(), type_column(raw));
    }

    Ok(Table::new(name.to_string(), order, columns, rows))
}

/// A column is numeric when every value parses as `f64`, text otherwise.
fn type_column(raw: Vec<String>) -> Column {
    let parsed: Result<Vec<f64>, _> = raw.iter().map(|v| v.parse::<f64>()).collect();
    match parsed {
        Ok(values) => Column::Real(values),
        Err(_) => Column::Text(raw),
    }
}
