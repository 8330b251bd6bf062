//! Core matrix type

use std::fmt;
use matrixbench_core::BenchError;
use nalgebra::DMatrix;
use serde::{Serialize, Deserialize};

/// A non-empty rectangular grid of `f64`
///
/// Serializes as a nested list of rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    data: DMatrix<f64>,
}

impl Matrix {
    /// Create a matrix from rows; rows must be non-empty and equally long
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, BenchError> {
        if rows.is_empty() {
            return Err(BenchError::invalid_data("matrix has no rows"));
        }

        let nrows = rows.len();
        let ncols = rows[0].len();
        if ncols == 0 {
            return Err(BenchError::invalid_data("matrix rows must have at least one column"));
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != ncols {
                return Err(BenchError::invalid_data(format!(
                    "row {} has {} columns, expected {}",
                    i, row.len(), ncols
                )));
            }
        }

        let data = DMatrix::from_fn(nrows, ncols, |i, j| rows[i][j]);
        Ok(Matrix { data })
    }

    /// Wrap a nalgebra matrix; callers guarantee both dimensions are >= 1
    pub(crate) fn from_dmatrix(data: DMatrix<f64>) -> Self {
        debug_assert!(data.nrows() > 0 && data.ncols() > 0);
        Matrix { data }
    }

    /// Wrap a nalgebra matrix, rejecting empty shapes
    pub fn try_from_dmatrix(data: DMatrix<f64>) -> Result<Self, BenchError> {
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(BenchError::invalid_data("matrix must be at least 1×1"));
        }
        Ok(Matrix { data })
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.data.shape()
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Get element at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get((row, col)).copied()
    }

    /// Overwrite element at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), BenchError> {
        let (rows, cols) = self.shape();
        match self.data.get_mut((row, col)) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(BenchError::out_of_range(format!(
                "index ({}, {}) outside {}×{} matrix", row, col, rows, cols
            ))),
        }
    }

    /// Borrow the underlying nalgebra matrix
    pub fn as_dmatrix(&self) -> &DMatrix<f64> {
        &self.data
    }

    pub fn into_dmatrix(self) -> DMatrix<f64> {
        self.data
    }

    /// Convert to rows of values
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }

    pub fn row(&self, row: usize) -> Option<Vec<f64>> {
        if row >= self.rows() {
            return None;
        }
        Some(self.data.row(row).iter().copied().collect())
    }

    /// Iterate entries row by row
    pub fn iter_row_major(&self) -> impl Iterator<Item = f64> + '_ {
        let (rows, cols) = self.shape();
        (0..rows).flat_map(move |i| (0..cols).map(move |j| self.data[(i, j)]))
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = BenchError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Matrix::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(m: Matrix) -> Self {
        m.to_rows()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.data.row_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, val) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", val)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrixbench_core::codes;

    #[test]
    fn test_matrix_creation() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();

        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 2);
        assert!(m.is_square());
    }

    #[test]
    fn test_matrix_get() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();

        assert_eq!(m.get(0, 0), Some(1.0));
        assert_eq!(m.get(0, 1), Some(2.0));
        assert_eq!(m.get(1, 1), Some(4.0));
        assert_eq!(m.get(2, 2), None);
    }

    #[test]
    fn test_rejects_ragged_and_empty() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(err.is(codes::INVALID_DATA));
        assert!(Matrix::from_rows(vec![]).is_err());
        assert!(Matrix::from_rows(vec![vec![]]).is_err());
    }

    #[test]
    fn test_set_in_and_out_of_bounds() {
        let mut m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0]]).unwrap();
        m.set(0, 2, 9.5).unwrap();
        assert_eq!(m.row(0), Some(vec![1.0, 2.0, 9.5]));

        let err = m.set(1, 0, 1.0).unwrap_err();
        assert!(err.is(codes::OUT_OF_RANGE));
    }

    #[test]
    fn test_to_rows_preserves_layout() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        let m = Matrix::from_rows(rows.clone()).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.to_rows(), rows);
        assert_eq!(m.iter_row_major().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_serde_nested_list() {
        let m = Matrix::from_rows(vec![vec![1.5, 2.0], vec![3.0, 4.0]]).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[1.5,2.0],[3.0,4.0]]");

        let back: Matrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
        assert!(serde_json::from_str::<Matrix>("[[1.0],[2.0,3.0]]").is_err());
    }

    #[test]
    fn test_display() {
        let m = Matrix::from_rows(vec![vec![1.0, 0.5], vec![-2.0, 4.0]]).unwrap();
        assert_eq!(m.to_string(), "[[1, 0.5], [-2, 4]]");
    }
}
