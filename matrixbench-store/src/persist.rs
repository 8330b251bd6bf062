//! Plain-text persistence
//!
//! A matrix file holds one row per line with comma-separated values and no
//! header. History exports hold one entry per line.

use std::fs;
use std::path::Path;
use matrixbench_core::BenchError;
use matrixbench_matrix::Matrix;
use thiserror::Error;

/// Failures while reading or writing persisted text
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: '{field}' is not a number")]
    InvalidField { line: usize, field: String },

    #[error("line {line} has {got} values, expected {expected}")]
    RaggedRow { line: usize, got: usize, expected: usize },

    #[error("file is empty or has no matrix rows")]
    Empty,

    #[error(transparent)]
    Shape(#[from] BenchError),
}

impl PersistError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        PersistError::Io { path: path.display().to_string(), source }
    }
}

impl From<PersistError> for BenchError {
    fn from(err: PersistError) -> Self {
        match err {
            PersistError::Io { .. } => BenchError::io(err.to_string()),
            PersistError::InvalidField { .. } | PersistError::RaggedRow { .. } => {
                BenchError::invalid_data(err.to_string())
            }
            PersistError::Empty => BenchError::empty_file(),
            PersistError::Shape(e) => e,
        }
    }
}

/// Parse matrix text; blank lines are skipped
pub fn parse_matrix(text: &str) -> Result<Matrix, PersistError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let row = line.split(',')
            .map(|field| {
                let field = field.trim();
                field.parse::<f64>().map_err(|_| PersistError::InvalidField {
                    line: idx + 1,
                    field: field.to_string(),
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(PersistError::RaggedRow { line: idx + 1, got: row.len(), expected: first.len() });
            }
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(PersistError::Empty);
    }

    Ok(Matrix::from_rows(rows)?)
}

/// Render matrix text, newline after every row
pub fn format_matrix(m: &Matrix) -> String {
    let mut out = String::new();
    for row in m.as_dmatrix().row_iter() {
        let fields: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        out.push_str(&fields.join(","));
        out.push('\n');
    }
    out
}

pub fn read_matrix(path: impl AsRef<Path>) -> Result<Matrix, PersistError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| PersistError::io(path, e))?;
    parse_matrix(&text)
}

pub fn write_matrix(path: impl AsRef<Path>, m: &Matrix) -> Result<(), PersistError> {
    let path = path.as_ref();
    fs::write(path, format_matrix(m)).map_err(|e| PersistError::io(path, e))
}

/// One entry per line, in log order
pub fn format_history<S: AsRef<str>>(entries: &[S]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(entry.as_ref());
        out.push('\n');
    }
    out
}

pub fn write_history<S: AsRef<str>>(path: impl AsRef<Path>, entries: &[S]) -> Result<(), PersistError> {
    let path = path.as_ref();
    fs::write(path, format_history(entries)).map_err(|e| PersistError::io(path, e))
}
