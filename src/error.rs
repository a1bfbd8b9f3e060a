//! Error types for rudf transform operations.

use thiserror::Error;

use crate::types::LogicalType;

/// Result type alias using [`RudfError`].
pub type Result<T> = std::result::Result<T, RudfError>;

/// Error types for rudf transform operations.
///
/// No operation is retried or silently downgraded: a dispatch failure is
/// reported before any parallel work is issued, and an allocation or
/// execution failure aborts the whole operation with no partial column
/// exposed to the caller.
#[derive(Debug, Error)]
pub enum RudfError {
    /// No kernel exists for the requested operation/type combination.
    #[error("Unsupported type: {operation} is not defined for {input}")]
    UnsupportedType {
        operation: String,
        input: LogicalType,
    },

    /// The memory resource could not satisfy an output buffer request.
    #[error("Allocation failure: {requested} bytes requested, {in_use} in use, limit is {limit} bytes")]
    AllocationFailure {
        requested: usize,
        in_use: usize,
        limit: usize,
    },

    /// The parallel elementwise pass could not complete.
    #[error("Execution failure: {0}")]
    ExecutionFailure(String),

    /// A validity mask does not cover the same number of rows as the data.
    #[error("Length mismatch: validity mask covers {mask_len} rows, column has {data_len}")]
    LengthMismatch { mask_len: usize, data_len: usize },
}
