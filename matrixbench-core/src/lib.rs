//! matrixbench Core - Fundamental types
//!
//! This crate provides the types shared by every matrixbench crate:
//! - `BenchError`: Structured errors with machine-readable codes
//! - `OperationKind`: The operations the workbench performs, with metadata
//! - `BenchConfig`: Limits, data directory and tracing switches

mod error;
mod operation;
mod config;

pub use error::{BenchError, ErrorContext, codes};
pub use operation::{OperationKind, OperationMeta, Arity, ShapeRule};
pub use config::{BenchConfig, DEFAULT_MAX_DIM};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{BenchError, OperationKind, Arity, BenchConfig};
    pub use crate::error::codes;
}
