//! matrixbench Matrix - Linear algebra engine
//!
//! Pure operations over `f64` matrices:
//! - Construction (from rows, identity, zeros, random)
//! - Element-wise operations (add, subtract, hadamard, elementwise_divide)
//! - Products and transforms (matrix_product, transpose, scalar_multiply)
//! - Square-matrix operations (determinant, adjugate, inverse)
//!
//! Nothing here knows about matrix names, the store or the history log.

mod types;
mod helpers;
mod construct;
mod ops;
mod props;

pub use types::Matrix;
pub use helpers::{check_dims, check_finite, check_rows, check_same_dims, check_product_dims, check_square};
pub use construct::{identity, zeros, random};
pub use ops::{
    add, subtract, hadamard, elementwise_divide,
    matrix_product, transpose, scalar_multiply,
    cofactor_matrix, adjugate, inverse,
};
pub use props::{determinant, determinant_with, minor, CofactorStep, StepObserver, NoTrace};

use matrixbench_core::{BenchError, OperationKind};

/// Result of evaluating an operation
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Matrix(Matrix),
    Scalar(f64),
}

impl Outcome {
    pub fn into_matrix(self) -> Option<Matrix> {
        match self {
            Outcome::Matrix(m) => Some(m),
            Outcome::Scalar(_) => None,
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Outcome::Scalar(s) => Some(*s),
            Outcome::Matrix(_) => None,
        }
    }
}

/// Dispatch `kind` over its operands
///
/// `scalar` is required by `ScalarMultiply` and ignored otherwise.
pub fn evaluate(kind: OperationKind, operands: &[&Matrix], scalar: Option<f64>) -> Result<Outcome, BenchError> {
    let expected = kind.arity().matrix_operands();
    if operands.len() != expected {
        return Err(BenchError::arg_count(kind.name(), expected, operands.len()));
    }

    let outcome = match kind {
        OperationKind::Add => Outcome::Matrix(add(operands[0], operands[1])?),
        OperationKind::Subtract => Outcome::Matrix(subtract(operands[0], operands[1])?),
        OperationKind::MatrixProduct => Outcome::Matrix(matrix_product(operands[0], operands[1])?),
        OperationKind::Hadamard => Outcome::Matrix(hadamard(operands[0], operands[1])?),
        OperationKind::ElementwiseDivide => Outcome::Matrix(elementwise_divide(operands[0], operands[1])?),
        OperationKind::Transpose => Outcome::Matrix(transpose(operands[0])),
        OperationKind::Determinant => Outcome::Scalar(determinant(operands[0])?),
        OperationKind::Adjugate => Outcome::Matrix(adjugate(operands[0])?),
        OperationKind::Inverse => Outcome::Matrix(inverse(operands[0])?),
        OperationKind::ScalarMultiply => {
            let s = scalar.ok_or_else(|| BenchError::arg_count(kind.name(), 2, 1)
                .with_note("scalar operand missing"))?;
            Outcome::Matrix(scalar_multiply(operands[0], s))
        }
    };
    Ok(outcome)
}
