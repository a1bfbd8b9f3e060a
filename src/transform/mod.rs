//! Elementwise transform engine.
//!
//! The execution primitive behind every unary operation: apply a pure
//! per-element function to positions `[0, n)` with no ordering dependency
//! between positions. One logical lane per row, no shared mutable state,
//! so the pass parallelizes freely across the queue's workers.

use rayon::prelude::*;

use crate::column::{Column, ColumnData};
use crate::error::Result;
use crate::exec::TransformContext;
use crate::types::LogicalType;

/// Applies `f` to every input element, producing the output buffer.
///
/// Guarantees `out[i] == f(input[i])` for every position once the call
/// returns; makes no guarantee about the order positions are evaluated in,
/// so `f` must be a pure function of a single element. Per-element
/// functions are infallible by contract — an operation whose element
/// computation can fail does not belong in the unary core.
///
/// # Errors
///
/// Returns [`crate::RudfError::ExecutionFailure`] if the parallel pass
/// could not complete; no partial output is exposed.
pub fn apply<T, U, F>(input: &[T], f: F, ctx: &TransformContext) -> Result<Vec<U>>
where
    T: Copy + Sync,
    U: Send,
    F: Fn(T) -> U + Sync,
{
    ctx.queue.run(|| input.par_iter().map(|&x| f(x)).collect())
}

/// Builds a boolean column by evaluating `predicate` over every position.
///
/// The builder attaches no validity mask itself; null-aware semantics are
/// layered on by the caller afterward. This is the general building block
/// behind `is_nan` and similar checks.
///
/// # Errors
///
/// Returns [`crate::RudfError::AllocationFailure`] if the output buffer
/// cannot be reserved, or [`crate::RudfError::ExecutionFailure`] if the
/// parallel pass fails.
pub fn true_if<T, P>(values: &[T], predicate: P, ctx: &TransformContext) -> Result<Column>
where
    T: Copy + Sync,
    P: Fn(T) -> bool + Sync,
{
    let token = ctx.allocate(values.len() * LogicalType::Bool.byte_size())?;
    let flags = apply(values, predicate, ctx)?;
    Ok(Column::new(ColumnData::Bool(flags)).with_allocation(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::exec::{ExecutionQueue, HostMemoryResource, MemoryResource};

    #[test]
    fn test_apply_maps_every_position() {
        let ctx = TransformContext::default();
        let input: Vec<i32> = (0..10_000).collect();
        let output = apply(&input, |x| x * 2, &ctx).unwrap();
        assert_eq!(output.len(), input.len());
        for (i, value) in output.iter().enumerate() {
            assert_eq!(*value, input[i] * 2);
        }
    }

    #[test]
    fn test_apply_preserves_position_order() {
        // Evaluation order is unspecified but output position i must hold
        // f(input[i]) regardless of how the work was split.
        let ctx = TransformContext {
            queue: ExecutionQueue::with_threads(8).unwrap(),
            ..TransformContext::default()
        };
        let input: Vec<u64> = (0..100_000).collect();
        let output = apply(&input, |x| x + 1, &ctx).unwrap();
        assert!(output.iter().enumerate().all(|(i, v)| *v == i as u64 + 1));
    }

    #[test]
    fn test_apply_empty_input() {
        let ctx = TransformContext::default();
        let output: Vec<i64> = apply(&[] as &[i64], |x| x, &ctx).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_apply_type_change() {
        let ctx = TransformContext::default();
        let output = apply(&[1.5_f64, 2.5], |x| x as i32, &ctx).unwrap();
        assert_eq!(output, vec![1, 2]);
    }

    #[test]
    fn test_true_if_builds_bool_column() {
        let ctx = TransformContext::default();
        let col = true_if(&[1_i32, -2, 3, -4], |x| x > 0, &ctx).unwrap();
        assert_eq!(col.logical_type(), LogicalType::Bool);
        assert!(col.validity().is_none());
        assert_eq!(col.data().as_bool(), Some(&[true, false, true, false][..]));
    }

    #[test]
    fn test_true_if_accounts_one_byte_per_row() {
        let memory = Arc::new(HostMemoryResource::unbounded());
        let ctx = TransformContext::new(ExecutionQueue::default_queue(), memory.clone());
        let col = true_if(&[0.0_f32; 100], |x| x == 0.0, &ctx).unwrap();
        assert_eq!(memory.bytes_in_use(), 100);
        drop(col);
        assert_eq!(memory.bytes_in_use(), 0);
    }

    #[test]
    fn test_true_if_allocation_failure_produces_no_column() {
        let memory = Arc::new(HostMemoryResource::with_limit(10));
        let ctx = TransformContext::new(ExecutionQueue::default_queue(), memory.clone());
        let result = true_if(&[0_u8; 64], |x| x == 0, &ctx);
        assert!(result.is_err());
        assert_eq!(memory.bytes_in_use(), 0);
    }
}
