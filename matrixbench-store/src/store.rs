//! Named-matrix store

use std::collections::BTreeMap;
use matrixbench_core::BenchError;
use matrixbench_matrix::Matrix;
use crate::history::HistoryLog;

/// Mapping from name to matrix, plus the session's operation history
#[derive(Debug, Clone, Default)]
pub struct MatrixStore {
    matrices: BTreeMap<String, Matrix>,
    history: HistoryLog,
}

impl MatrixStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or silently overwrite
    pub fn put(&mut self, name: impl Into<String>, matrix: Matrix) {
        let name = name.into();
        let (rows, cols) = matrix.shape();
        if self.matrices.insert(name.clone(), matrix).is_some() {
            tracing::debug!(%name, rows, cols, "matrix overwritten");
        } else {
            tracing::debug!(%name, rows, cols, "matrix stored");
        }
    }

    pub fn get(&self, name: &str) -> Result<&Matrix, BenchError> {
        self.matrices.get(name).ok_or_else(|| BenchError::not_found(name))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Matrix, BenchError> {
        self.matrices.get_mut(name).ok_or_else(|| BenchError::not_found(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.matrices.contains_key(name)
    }

    /// Delete `name` and log the removal; absent names leave the log untouched
    pub fn remove(&mut self, name: &str) -> Result<Matrix, BenchError> {
        let removed = self.matrices.remove(name).ok_or_else(|| BenchError::not_found(name))?;
        self.history.push(format!("Matrix removed → {}", name));
        tracing::debug!(%name, "matrix removed");
        Ok(removed)
    }

    pub fn record(&mut self, description: impl Into<String>) {
        self.history.push(description);
    }

    pub fn history(&self) -> &[String] {
        self.history.entries()
    }

    /// Names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.matrices.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Matrix)> {
        self.matrices.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }
}
