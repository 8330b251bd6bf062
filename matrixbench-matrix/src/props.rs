//! Determinant by cofactor expansion, minors

use matrixbench_core::BenchError;
use nalgebra::DMatrix;
use serde::Serialize;
use crate::helpers::check_square;
use crate::types::Matrix;

/// One column of a first-row cofactor expansion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CofactorStep {
    /// Recursion level, 0 for the outermost matrix
    pub depth: usize,
    /// Entry `M[0][column]` being expanded
    pub coefficient: f64,
    pub column: usize,
    /// Signed contribution `(-1)^column * coefficient * det(minor)`
    pub cofactor: f64,
}

/// Receives expansion steps as the determinant recursion unwinds
pub trait StepObserver {
    fn on_step(&mut self, step: &CofactorStep);
}

/// Observer that discards every step
pub struct NoTrace;

impl StepObserver for NoTrace {
    fn on_step(&mut self, _step: &CofactorStep) {}
}

impl StepObserver for Vec<CofactorStep> {
    fn on_step(&mut self, step: &CofactorStep) {
        self.push(step.clone());
    }
}

/// Determinant of a square matrix
pub fn determinant(m: &Matrix) -> Result<f64, BenchError> {
    determinant_with(m, &mut NoTrace)
}

/// Determinant, reporting each expansion step to `observer`
///
/// 1×1 and 2×2 sub-problems are closed-form and produce no steps.
pub fn determinant_with(m: &Matrix, observer: &mut dyn StepObserver) -> Result<f64, BenchError> {
    check_square(m, "determinant")?;
    Ok(expand(m.as_dmatrix(), 0, observer))
}

/// Submatrix with `row` and `col` removed
pub fn minor(m: &Matrix, row: usize, col: usize) -> Result<Matrix, BenchError> {
    if row >= m.rows() || col >= m.cols() {
        return Err(BenchError::out_of_range(format!(
            "minor: index ({}, {}) outside {}×{} matrix", row, col, m.rows(), m.cols()
        )));
    }
    if m.rows() < 2 || m.cols() < 2 {
        return Err(BenchError::out_of_range(format!(
            "minor: {}×{} matrix has no non-empty minor", m.rows(), m.cols()
        )));
    }
    Ok(Matrix::from_dmatrix(minor_of(m.as_dmatrix(), row, col)))
}

pub(crate) fn minor_of(m: &DMatrix<f64>, row: usize, col: usize) -> DMatrix<f64> {
    m.clone().remove_row(row).remove_column(col)
}

/// Determinant of a square nalgebra matrix without tracing
///
/// The empty matrix has determinant 1, which makes the cofactor of a 1×1 matrix 1.
pub(crate) fn det_of(m: &DMatrix<f64>) -> f64 {
    expand(m, 0, &mut NoTrace)
}

fn expand(m: &DMatrix<f64>, depth: usize, observer: &mut dyn StepObserver) -> f64 {
    match m.nrows() {
        0 => 1.0,
        1 => m[(0, 0)],
        2 => m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)],
        n => {
            let mut det = 0.0;
            for c in 0..n {
                let sub = minor_of(m, 0, c);
                let sign = if c % 2 == 0 { 1.0 } else { -1.0 };
                let coefficient = m[(0, c)];
                let cofactor = sign * coefficient * expand(&sub, depth + 1, observer);

                tracing::trace!(depth, column = c, coefficient, cofactor, "cofactor expansion step");
                observer.on_step(&CofactorStep { depth, coefficient, column: c, cofactor });

                det += cofactor;
            }
            det
        }
    }
}
