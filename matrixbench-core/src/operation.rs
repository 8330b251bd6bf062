//! Operation kinds and their metadata

use serde::{Deserialize, Serialize};

/// How many operands an operation consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arity {
    /// One matrix
    Unary,
    /// Two matrices
    Binary,
    /// One matrix and one scalar
    Scalar,
}

impl Arity {
    /// Number of matrix operands
    pub fn matrix_operands(self) -> usize {
        match self {
            Arity::Unary | Arity::Scalar => 1,
            Arity::Binary => 2,
        }
    }
}

/// Shape rule the engine enforces before computing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeRule {
    /// Any well-formed matrix
    Any,
    /// Both operands share rows and columns
    SameShape,
    /// cols(A) == rows(B)
    Chained,
    /// rows == cols
    Square,
}

/// Every operation the workbench can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Add,
    Subtract,
    MatrixProduct,
    Hadamard,
    ElementwiseDivide,
    Transpose,
    Determinant,
    Adjugate,
    Inverse,
    ScalarMultiply,
}

/// Static metadata describing an operation
#[derive(Debug, Clone, Serialize)]
pub struct OperationMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub arity: Arity,
    pub shape: ShapeRule,
    pub returns: &'static str,
    pub related: &'static [&'static str],
}

impl OperationKind {
    pub const ALL: [OperationKind; 10] = [
        OperationKind::Add,
        OperationKind::Subtract,
        OperationKind::MatrixProduct,
        OperationKind::Hadamard,
        OperationKind::ElementwiseDivide,
        OperationKind::Transpose,
        OperationKind::Determinant,
        OperationKind::Adjugate,
        OperationKind::Inverse,
        OperationKind::ScalarMultiply,
    ];

    pub fn meta(self) -> OperationMeta {
        match self {
            OperationKind::Add => OperationMeta {
                name: "add", description: "Element-wise matrix addition", usage: "add(a, b)",
                arity: Arity::Binary, shape: ShapeRule::SameShape, returns: "Matrix",
                related: &["subtract", "scalar_multiply"],
            },
            OperationKind::Subtract => OperationMeta {
                name: "subtract", description: "Element-wise matrix subtraction", usage: "subtract(a, b)",
                arity: Arity::Binary, shape: ShapeRule::SameShape, returns: "Matrix",
                related: &["add", "scalar_multiply"],
            },
            OperationKind::MatrixProduct => OperationMeta {
                name: "matrix_product", description: "Matrix multiplication", usage: "matrix_product(a, b)",
                arity: Arity::Binary, shape: ShapeRule::Chained, returns: "Matrix",
                related: &["hadamard", "transpose"],
            },
            OperationKind::Hadamard => OperationMeta {
                name: "hadamard", description: "Element-wise multiplication (Hadamard product)", usage: "hadamard(a, b)",
                arity: Arity::Binary, shape: ShapeRule::SameShape, returns: "Matrix",
                related: &["matrix_product", "elementwise_divide"],
            },
            OperationKind::ElementwiseDivide => OperationMeta {
                name: "elementwise_divide", description: "Element-wise division, x/0 gives +inf", usage: "elementwise_divide(a, b)",
                arity: Arity::Binary, shape: ShapeRule::SameShape, returns: "Matrix",
                related: &["hadamard", "scalar_multiply"],
            },
            OperationKind::Transpose => OperationMeta {
                name: "transpose", description: "Matrix transpose", usage: "transpose(m)",
                arity: Arity::Unary, shape: ShapeRule::Any, returns: "Matrix",
                related: &["matrix_product", "adjugate"],
            },
            OperationKind::Determinant => OperationMeta {
                name: "determinant", description: "Determinant by cofactor expansion along the first row", usage: "determinant(m)",
                arity: Arity::Unary, shape: ShapeRule::Square, returns: "Number",
                related: &["inverse", "adjugate"],
            },
            OperationKind::Adjugate => OperationMeta {
                name: "adjugate", description: "Transpose of the cofactor matrix", usage: "adjugate(m)",
                arity: Arity::Unary, shape: ShapeRule::Square, returns: "Matrix",
                related: &["determinant", "inverse"],
            },
            OperationKind::Inverse => OperationMeta {
                name: "inverse", description: "Inverse via adjugate / determinant", usage: "inverse(m)",
                arity: Arity::Unary, shape: ShapeRule::Square, returns: "Matrix",
                related: &["adjugate", "determinant"],
            },
            OperationKind::ScalarMultiply => OperationMeta {
                name: "scalar_multiply", description: "Scalar multiplication", usage: "scalar_multiply(m, s)",
                arity: Arity::Scalar, shape: ShapeRule::Any, returns: "Matrix",
                related: &["hadamard", "add"],
            },
        }
    }

    pub fn name(self) -> &'static str {
        self.meta().name
    }

    pub fn arity(self) -> Arity {
        self.meta().arity
    }

    /// Look up an operation by its snake_case name
    pub fn from_name(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::ALL.iter().copied().find(|k| k.name() == lower)
    }

    /// Label used in history entries, e.g. `MATRIX_PRODUCT`
    pub fn label(self) -> String {
        self.name().to_uppercase()
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
