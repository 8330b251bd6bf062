//! Structured errors
//!
//! Every engine, store and persistence failure surfaces as a `BenchError`
//! carrying a machine-readable code. Front-ends present the message and
//! re-prompt; nothing in the core retries.

use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
    pub const NOT_SQUARE: &str = "NOT_SQUARE";
    pub const SINGULAR: &str = "SINGULAR";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const INVALID_DATA: &str = "INVALID_DATA";
    pub const EMPTY_FILE: &str = "EMPTY_FILE";
    // Boundary validation
    pub const INVALID_VALUE: &str = "INVALID_VALUE";
    pub const OUT_OF_RANGE: &str = "OUT_OF_RANGE";
    pub const ARG_COUNT: &str = "ARG_COUNT";
    pub const IO_ERROR: &str = "IO_ERROR";
    pub const INVALID_CONFIG: &str = "INVALID_CONFIG";
}

/// Context about where an error occurred
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Matrix name involved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<String>,

    /// Operation that failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub notes: Vec<String>,
}

/// Structured error returned by every fallible matrixbench call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Where the error occurred
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ErrorContext>,
}

impl BenchError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            context: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: set matrix context
    pub fn for_matrix(mut self, name: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.matrix = Some(name.into());
        self
    }

    /// Builder: set operation context
    pub fn in_operation(mut self, operation: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.operation = Some(operation.into());
        self
    }

    /// Builder: add propagation note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.notes.push(note.into());
        self
    }

    /// True when this error carries the given code
    pub fn is(&self, code: &str) -> bool {
        self.code == code
    }

    // ========== Common Error Constructors ==========

    pub fn dimension_mismatch(details: impl Into<String>) -> Self {
        Self::new(codes::DIMENSION_MISMATCH, format!("Dimension mismatch: {}", details.into()))
            .with_suggestion("Check operand shapes with rows()/cols()")
    }

    pub fn not_square(func: &str, rows: usize, cols: usize) -> Self {
        Self::new(codes::NOT_SQUARE,
            format!("{} requires a square matrix, got {}×{}", func, rows, cols))
    }

    pub fn singular() -> Self {
        Self::new(codes::SINGULAR, "Matrix is singular (determinant is 0)")
            .with_suggestion("A matrix with zero determinant has no inverse")
    }

    pub fn not_found(name: &str) -> Self {
        Self::new(codes::NOT_FOUND, format!("No matrix named '{}'", name))
            .with_suggestion("List stored matrices with names()")
            .for_matrix(name)
    }

    pub fn invalid_data(details: impl Into<String>) -> Self {
        Self::new(codes::INVALID_DATA, format!("Invalid matrix data: {}", details.into()))
            .with_suggestion("Each line must hold comma-separated numbers")
    }

    pub fn empty_file() -> Self {
        Self::new(codes::EMPTY_FILE, "File is empty or has no matrix rows")
    }

    pub fn invalid_value(details: impl Into<String>) -> Self {
        Self::new(codes::INVALID_VALUE, format!("Invalid value: {}", details.into()))
    }

    pub fn out_of_range(details: impl Into<String>) -> Self {
        Self::new(codes::OUT_OF_RANGE, format!("Out of range: {}", details.into()))
    }

    pub fn arg_count(func: &str, expected: usize, got: usize) -> Self {
        Self::new(codes::ARG_COUNT,
            format!("{}() expects {} operands, got {}", func, expected, got))
    }

    pub fn io(details: impl Into<String>) -> Self {
        Self::new(codes::IO_ERROR, format!("I/O error: {}", details.into()))
    }

    pub fn invalid_config(details: impl Into<String>) -> Self {
        Self::new(codes::INVALID_CONFIG, format!("Invalid configuration: {}", details.into()))
    }
}

impl std::fmt::Display for BenchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for BenchError {}
