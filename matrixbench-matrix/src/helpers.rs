//! Shape checks and boundary validation

use matrixbench_core::BenchError;
use crate::types::Matrix;

/// Check that two matrices have compatible dimensions for multiplication
pub fn check_product_dims(a: &Matrix, b: &Matrix, func: &str) -> Result<(), BenchError> {
    if a.cols() != b.rows() {
        return Err(BenchError::dimension_mismatch(format!(
            "{}: columns of A ({}) must equal rows of B ({}), got {}×{} and {}×{}",
            func, a.cols(), b.rows(), a.rows(), a.cols(), b.rows(), b.cols()
        )));
    }
    Ok(())
}

/// Check that two matrices have the same dimensions
pub fn check_same_dims(a: &Matrix, b: &Matrix, func: &str) -> Result<(), BenchError> {
    if a.shape() != b.shape() {
        return Err(BenchError::dimension_mismatch(format!(
            "{}: matrices must have same dimensions: {}×{} vs {}×{}",
            func, a.rows(), a.cols(), b.rows(), b.cols()
        )));
    }
    Ok(())
}

/// Check that a matrix is square
pub fn check_square(m: &Matrix, func: &str) -> Result<(), BenchError> {
    if !m.is_square() {
        return Err(BenchError::not_square(func, m.rows(), m.cols()));
    }
    Ok(())
}

/// Check requested dimensions lie in `1..=max`
pub fn check_dims(rows: usize, cols: usize, max: usize) -> Result<(), BenchError> {
    if rows == 0 || cols == 0 {
        return Err(BenchError::out_of_range("rows and columns must be greater than 0"));
    }
    if rows > max || cols > max {
        return Err(BenchError::out_of_range(format!(
            "matrix is too large ({}×{}), maximum is {}×{}", rows, cols, max, max
        )));
    }
    Ok(())
}

/// Reject NaN and ±infinity
pub fn check_finite(value: f64, what: &str) -> Result<(), BenchError> {
    if !value.is_finite() {
        return Err(BenchError::invalid_value(format!("{} must be finite, got {}", what, value)));
    }
    Ok(())
}

/// Validate a user-entered grid: shape bounds and finite entries
pub fn check_rows(rows: &[Vec<f64>], max: usize) -> Result<(), BenchError> {
    let cols = rows.first().map_or(0, Vec::len);
    check_dims(rows.len(), cols, max)?;

    for (i, row) in rows.iter().enumerate() {
        for (j, &val) in row.iter().enumerate() {
            check_finite(val, &format!("element ({},{})", i, j))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrixbench_core::codes;

    fn m(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_check_product_dims() {
        let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let b = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert!(check_product_dims(&b, &a, "matrix_product").is_ok());

        let err = check_product_dims(&a, &b, "matrix_product").unwrap_err();
        assert!(err.is(codes::DIMENSION_MISMATCH));
    }

    #[test]
    fn test_check_square() {
        let err = check_square(&m(vec![vec![1.0, 2.0]]), "determinant").unwrap_err();
        assert!(err.is(codes::NOT_SQUARE));
        assert!(err.message.contains("1×2"));
    }

    #[test]
    fn test_check_dims_bounds() {
        assert!(check_dims(1, 1, 50).is_ok());
        assert!(check_dims(50, 50, 50).is_ok());
        assert!(check_dims(0, 3, 50).unwrap_err().is(codes::OUT_OF_RANGE));
        assert!(check_dims(51, 3, 50).unwrap_err().is(codes::OUT_OF_RANGE));
    }

    #[test]
    fn test_check_rows_rejects_nan_and_inf() {
        assert!(check_rows(&[vec![1.0, 2.0]], 50).is_ok());
        let err = check_rows(&[vec![1.0, f64::NAN]], 50).unwrap_err();
        assert!(err.is(codes::INVALID_VALUE));
        assert!(err.message.contains("(0,1)"));
        assert!(check_rows(&[vec![f64::NEG_INFINITY]], 50).is_err());
        assert!(check_rows(&[], 50).unwrap_err().is(codes::OUT_OF_RANGE));
    }
}
