//! Matrix operations: element-wise arithmetic, product, transpose, adjugate, inverse

use matrixbench_core::BenchError;
use nalgebra::DMatrix;
use crate::helpers::*;
use crate::props::{det_of, minor_of};
use crate::types::Matrix;

// ============ element-wise ============

pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix, BenchError> {
    check_same_dims(a, b, "add")?;
    Ok(Matrix::from_dmatrix(a.as_dmatrix() + b.as_dmatrix()))
}

pub fn subtract(a: &Matrix, b: &Matrix) -> Result<Matrix, BenchError> {
    check_same_dims(a, b, "subtract")?;
    Ok(Matrix::from_dmatrix(a.as_dmatrix() - b.as_dmatrix()))
}

pub fn hadamard(a: &Matrix, b: &Matrix) -> Result<Matrix, BenchError> {
    check_same_dims(a, b, "hadamard")?;
    Ok(Matrix::from_dmatrix(a.as_dmatrix().component_mul(b.as_dmatrix())))
}

/// Element-wise `a / b`; a zero divisor yields `+inf` whatever the numerator
pub fn elementwise_divide(a: &Matrix, b: &Matrix) -> Result<Matrix, BenchError> {
    check_same_dims(a, b, "elementwise_divide")?;
    let data = a.as_dmatrix().zip_map(b.as_dmatrix(), |x, y| {
        if y != 0.0 { x / y } else { f64::INFINITY }
    });
    Ok(Matrix::from_dmatrix(data))
}

// ============ product ============

/// Standard triple loop, accumulating over `k` in ascending order
pub fn matrix_product(a: &Matrix, b: &Matrix) -> Result<Matrix, BenchError> {
    check_product_dims(a, b, "matrix_product")?;

    let (da, db) = (a.as_dmatrix(), b.as_dmatrix());
    let inner = a.cols();
    let data = DMatrix::from_fn(a.rows(), b.cols(), |i, j| {
        let mut sum = 0.0;
        for k in 0..inner {
            sum += da[(i, k)] * db[(k, j)];
        }
        sum
    });
    Ok(Matrix::from_dmatrix(data))
}

// ============ unary ============

pub fn transpose(m: &Matrix) -> Matrix {
    Matrix::from_dmatrix(m.as_dmatrix().transpose())
}

pub fn scalar_multiply(m: &Matrix, s: f64) -> Matrix {
    Matrix::from_dmatrix(m.as_dmatrix() * s)
}

/// `C[i][j] = (-1)^(i+j) * det(minor(m, i, j))`
pub fn cofactor_matrix(m: &Matrix) -> Result<Matrix, BenchError> {
    check_square(m, "cofactor_matrix")?;
    let dm = m.as_dmatrix();
    let data = DMatrix::from_fn(m.rows(), m.cols(), |i, j| {
        let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
        sign * det_of(&minor_of(dm, i, j))
    });
    Ok(Matrix::from_dmatrix(data))
}

/// Transpose of the cofactor matrix
pub fn adjugate(m: &Matrix) -> Result<Matrix, BenchError> {
    check_square(m, "adjugate")?;
    let cofactors = cofactor_matrix(m)?;
    Ok(transpose(&cofactors))
}

/// `adjugate(m) / det(m)`; fails when the determinant is exactly zero
pub fn inverse(m: &Matrix) -> Result<Matrix, BenchError> {
    check_square(m, "inverse")?;

    let det = det_of(m.as_dmatrix());
    if det == 0.0 {
        return Err(BenchError::singular());
    }

    let adj = adjugate(m)?;
    Ok(Matrix::from_dmatrix(adj.into_dmatrix().map(|x| x / det)))
}
