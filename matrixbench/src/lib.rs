//! matrixbench - Interactive matrix workbench
//!
//! `Workbench` is the one interface console and GUI front-ends share: it
//! resolves operand names in the store, runs the engine, stores successful
//! results under the caller's name and appends a history entry. A failed
//! operation leaves both the store and the history untouched.

mod shared;

pub use shared::SharedWorkbench;
pub use matrixbench_core::{BenchConfig, BenchError, OperationKind, Arity, codes};
pub use matrixbench_matrix::{Matrix, Outcome, CofactorStep};
pub use matrixbench_store::{MatrixStore, HistoryLog};

use std::path::Path;
use matrixbench_matrix::{check_dims, check_finite, check_rows, determinant_with, evaluate};
use matrixbench_store::persist;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Main workbench session
pub struct Workbench {
    config: BenchConfig,
    store: MatrixStore,
    rng: StdRng,
}

impl Workbench {
    pub fn new(config: BenchConfig) -> Result<Self, BenchError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { config, store: MatrixStore::new(), rng })
    }

    /// Session configured from `MATRIXBENCH_*` environment variables
    pub fn from_env() -> Result<Self, BenchError> {
        Self::new(BenchConfig::from_env()?)
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn store(&self) -> &MatrixStore {
        &self.store
    }

    pub fn get(&self, name: &str) -> Result<&Matrix, BenchError> {
        self.store.get(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.store.names()
    }

    pub fn history(&self) -> &[String] {
        self.store.history()
    }

    // ========== Creation and editing ==========

    /// Store a user-entered matrix; an existing name is overwritten
    pub fn create(&mut self, name: &str, rows: Vec<Vec<f64>>) -> Result<&Matrix, BenchError> {
        check_rows(&rows, self.config.max_dim).map_err(|e| e.for_matrix(name))?;
        let matrix = Matrix::from_rows(rows).map_err(|e| e.for_matrix(name))?;
        self.commit(name, matrix, format!("Matrix '{}' created", name))
    }

    /// Store a matrix of random integers in `[min, max]`
    pub fn create_random(&mut self, name: &str, rows: usize, cols: usize, min: i64, max: i64) -> Result<&Matrix, BenchError> {
        check_dims(rows, cols, self.config.max_dim).map_err(|e| e.for_matrix(name))?;
        let matrix = matrixbench_matrix::random(rows, cols, min, max, &mut self.rng)
            .map_err(|e| e.for_matrix(name))?;
        self.commit(name, matrix, format!("Matrix '{}' created", name))
    }

    pub fn set_element(&mut self, name: &str, row: usize, col: usize, value: f64) -> Result<(), BenchError> {
        check_finite(value, "value")?;
        self.store.get_mut(name)?
            .set(row, col, value)
            .map_err(|e| e.for_matrix(name))?;
        self.store.record(format!("Matrix '{}' modified", name));
        tracing::info!(%name, row, col, value, "element updated");
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Result<Matrix, BenchError> {
        self.store.remove(name)
    }

    // ========== Operations ==========

    /// Run `kind` over the named operands
    ///
    /// Matrix results are stored as `result`. Determinants are scalars and
    /// are returned without touching the store.
    pub fn apply(&mut self, kind: OperationKind, operands: &[&str], scalar: Option<f64>, result: &str) -> Result<Outcome, BenchError> {
        self.run(kind, operands, scalar, result).map_err(|e| {
            tracing::warn!(operation = kind.name(), error = %e, "operation rejected");
            e.in_operation(kind.name())
        })
    }

    fn run(&mut self, kind: OperationKind, operands: &[&str], scalar: Option<f64>, result: &str) -> Result<Outcome, BenchError> {
        let expected = kind.arity().matrix_operands();
        if operands.len() != expected {
            return Err(BenchError::arg_count(kind.name(), expected, operands.len()));
        }
        if kind == OperationKind::Determinant {
            return self.determinant(operands[0]).map(Outcome::Scalar);
        }
        // only ScalarMultiply reads the scalar
        if kind == OperationKind::ScalarMultiply {
            if let Some(s) = scalar {
                check_finite(s, "scalar")?;
            }
        }

        let outcome = {
            let matrices = operands.iter()
                .map(|name| self.store.get(name))
                .collect::<Result<Vec<_>, _>>()?;
            evaluate(kind, &matrices, scalar)?
        };

        if let Outcome::Matrix(ref m) = outcome {
            let description = describe(kind, result, scalar);
            self.commit(result, m.clone(), description)?;
        }
        Ok(outcome)
    }

    /// Add, Subtract, MatrixProduct, Hadamard or ElementwiseDivide
    pub fn binary(&mut self, kind: OperationKind, a: &str, b: &str, result: &str) -> Result<&Matrix, BenchError> {
        if kind.arity() != Arity::Binary {
            return Err(BenchError::arg_count(kind.name(), kind.arity().matrix_operands(), 2));
        }
        self.apply(kind, &[a, b], None, result)?;
        self.store.get(result)
    }

    pub fn transpose(&mut self, a: &str, result: &str) -> Result<&Matrix, BenchError> {
        self.apply(OperationKind::Transpose, &[a], None, result)?;
        self.store.get(result)
    }

    pub fn adjugate(&mut self, a: &str, result: &str) -> Result<&Matrix, BenchError> {
        self.apply(OperationKind::Adjugate, &[a], None, result)?;
        self.store.get(result)
    }

    pub fn inverse(&mut self, a: &str, result: &str) -> Result<&Matrix, BenchError> {
        self.apply(OperationKind::Inverse, &[a], None, result)?;
        self.store.get(result)
    }

    pub fn scale(&mut self, a: &str, s: f64, result: &str) -> Result<&Matrix, BenchError> {
        self.apply(OperationKind::ScalarMultiply, &[a], Some(s), result)?;
        self.store.get(result)
    }

    /// Determinant of the named matrix
    ///
    /// With `trace_steps` enabled every expansion step is logged first.
    pub fn determinant(&mut self, name: &str) -> Result<f64, BenchError> {
        let (det, steps) = self.determinant_steps_quiet(name)?;
        if self.config.trace_steps {
            for step in &steps {
                self.store.record(describe_step(step));
            }
        }
        self.store.record(format!("Determinant of '{}' computed", name));
        tracing::info!(%name, det, "determinant computed");
        Ok(det)
    }

    /// Determinant together with its first-row expansion steps
    pub fn determinant_steps(&mut self, name: &str) -> Result<(f64, Vec<CofactorStep>), BenchError> {
        let (det, steps) = self.determinant_steps_quiet(name)?;
        self.store.record(format!("Determinant of '{}' computed", name));
        Ok((det, steps))
    }

    fn determinant_steps_quiet(&self, name: &str) -> Result<(f64, Vec<CofactorStep>), BenchError> {
        let matrix = self.store.get(name)?;
        let mut steps: Vec<CofactorStep> = Vec::new();
        let det = determinant_with(matrix, &mut steps)
            .map_err(|e| e.for_matrix(name).in_operation(OperationKind::Determinant.name()))?;
        Ok((det, steps))
    }

    // ========== Persistence ==========

    /// Write the named matrix; relative paths resolve against `data_dir`
    pub fn save(&self, name: &str, path: impl AsRef<Path>) -> Result<(), BenchError> {
        let matrix = self.store.get(name)?;
        let path = self.config.resolve(path);
        persist::write_matrix(&path, matrix)?;
        tracing::info!(%name, path = %path.display(), "matrix saved");
        Ok(())
    }

    /// Read a matrix file and store it as `name`
    pub fn load(&mut self, path: impl AsRef<Path>, name: &str) -> Result<&Matrix, BenchError> {
        let path = self.config.resolve(path);
        let matrix = persist::read_matrix(&path)
            .map_err(|e| BenchError::from(e).for_matrix(name))?;
        let description = format!("Matrix '{}' loaded from {}", name, path.display());
        self.commit(name, matrix, description)
    }

    pub fn export_history(&self, path: impl AsRef<Path>) -> Result<(), BenchError> {
        let path = self.config.resolve(path);
        persist::write_history(&path, self.store.history())?;
        tracing::info!(path = %path.display(), entries = self.store.history().len(), "history exported");
        Ok(())
    }

    fn commit(&mut self, name: &str, matrix: Matrix, description: String) -> Result<&Matrix, BenchError> {
        tracing::info!(%name, rows = matrix.rows(), cols = matrix.cols(), %description, "result stored");
        self.store.put(name, matrix);
        self.store.record(description);
        self.store.get(name)
    }
}

/// History line for a stored operation result
fn describe(kind: OperationKind, result: &str, scalar: Option<f64>) -> String {
    match kind {
        OperationKind::Transpose => format!("Transpose → {}", result),
        OperationKind::Adjugate => format!("Adjugate → {}", result),
        OperationKind::Inverse => format!("Inverse → {}", result),
        OperationKind::ScalarMultiply => format!("Scalar ({}) → {}", scalar.unwrap_or(1.0), result),
        _ => format!("Result of {} → {}", kind.label(), result),
    }
}

fn describe_step(step: &CofactorStep) -> String {
    format!(
        "{}Expand element {} in column {}: {}",
        " ".repeat(step.depth), step.coefficient, step.column, step.cofactor
    )
}
