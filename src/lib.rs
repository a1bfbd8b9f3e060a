//! rudf - Elementwise columnar transform core
//!
//! The unary-operation slice of a columnar data engine: one input column
//! in, one output column out, with a single-argument operation (type cast,
//! numeric unary function, or boolean predicate) applied independently to
//! every row and null information propagated alongside.
//!
//! Execution services are injected: every operation takes a
//! [`TransformContext`] naming the [`ExecutionQueue`] the parallel pass
//! runs on and the [`MemoryResource`] output buffers are drawn from.
//!
//! ```
//! use rudf::{cast, Column, LogicalType, TransformContext};
//!
//! let ctx = TransformContext::default();
//! let col = Column::from_values(vec![300_i32]);
//! let out = cast(&col.view(), LogicalType::Int8, &ctx).unwrap();
//! assert_eq!(out.data().as_int8(), Some(&[44_i8][..]));
//! ```

pub mod column;
pub mod error;
pub mod exec;
pub mod ops;
pub mod transform;
pub mod types;

pub use column::{Column, ColumnData, ColumnElement, ColumnView, ValidityMask};
pub use error::{Result, RudfError};
pub use exec::{
    AllocationToken, ExecutionQueue, HostMemoryResource, MemoryResource, MemoryStats,
    TransformContext,
};
pub use ops::{cast, is_nan, is_not_nan, unary_operation, UnaryOp};
pub use types::LogicalType;
