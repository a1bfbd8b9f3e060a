//! Unary column operations: cast, math, and NaN predicates.
//!
//! Each operation dispatches a runtime `(operation, LogicalType)` pair to
//! a monomorphized kernel before any parallel work is issued, then runs the
//! elementwise pass and attaches the output validity mask. Unsupported
//! combinations fail up front — no buffer is allocated and no work is
//! enqueued for a pair without a kernel.

pub mod cast;
pub mod math;
pub mod predicate;

pub use cast::cast;
pub use math::unary_operation;
pub use predicate::{is_nan, is_not_nan};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unary math operations.
///
/// The result type always equals the input type. Each operation is defined
/// for an explicit subset of logical types (see [`math::unary_operation`]);
/// there is no implicit promotion of integer inputs to float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    /// Sine (floats only).
    Sin,
    /// Cosine (floats only).
    Cos,
    /// Tangent (floats only).
    Tan,
    /// Inverse sine (floats only).
    ArcSin,
    /// Inverse cosine (floats only).
    ArcCos,
    /// Inverse tangent (floats only).
    ArcTan,
    /// Hyperbolic sine (floats only).
    Sinh,
    /// Hyperbolic cosine (floats only).
    Cosh,
    /// Hyperbolic tangent (floats only).
    Tanh,
    /// Base-e exponential (floats only).
    Exp,
    /// Natural logarithm (floats only).
    Log,
    /// Square root (floats only).
    Sqrt,
    /// Cube root (floats only).
    Cbrt,
    /// Round toward positive infinity (floats only).
    Ceil,
    /// Round toward negative infinity (floats only).
    Floor,
    /// Round half away from zero (floats only).
    Round,
    /// Absolute value (signed integers and floats).
    Abs,
    /// Arithmetic negation (signed integers and floats).
    Negate,
    /// Bitwise complement (integers only).
    BitInvert,
    /// Logical complement (booleans only).
    Not,
}

impl UnaryOp {
    /// Returns the display name of the operation.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            UnaryOp::Sin => "SIN",
            UnaryOp::Cos => "COS",
            UnaryOp::Tan => "TAN",
            UnaryOp::ArcSin => "ARCSIN",
            UnaryOp::ArcCos => "ARCCOS",
            UnaryOp::ArcTan => "ARCTAN",
            UnaryOp::Sinh => "SINH",
            UnaryOp::Cosh => "COSH",
            UnaryOp::Tanh => "TANH",
            UnaryOp::Exp => "EXP",
            UnaryOp::Log => "LOG",
            UnaryOp::Sqrt => "SQRT",
            UnaryOp::Cbrt => "CBRT",
            UnaryOp::Ceil => "CEIL",
            UnaryOp::Floor => "FLOOR",
            UnaryOp::Round => "ROUND",
            UnaryOp::Abs => "ABS",
            UnaryOp::Negate => "NEGATE",
            UnaryOp::BitInvert => "BIT_INVERT",
            UnaryOp::Not => "NOT",
        }
    }

    /// Returns all supported operations.
    #[must_use]
    pub fn all() -> &'static [UnaryOp] {
        &[
            UnaryOp::Sin,
            UnaryOp::Cos,
            UnaryOp::Tan,
            UnaryOp::ArcSin,
            UnaryOp::ArcCos,
            UnaryOp::ArcTan,
            UnaryOp::Sinh,
            UnaryOp::Cosh,
            UnaryOp::Tanh,
            UnaryOp::Exp,
            UnaryOp::Log,
            UnaryOp::Sqrt,
            UnaryOp::Cbrt,
            UnaryOp::Ceil,
            UnaryOp::Floor,
            UnaryOp::Round,
            UnaryOp::Abs,
            UnaryOp::Negate,
            UnaryOp::BitInvert,
            UnaryOp::Not,
        ]
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
