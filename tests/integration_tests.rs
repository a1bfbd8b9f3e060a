//! Integration tests for rudf: end-to-end unary operations with injected
//! execution queues and memory resources.

use std::sync::Arc;

use rudf::{
    cast, is_nan, is_not_nan, unary_operation, Column, ExecutionQueue, HostMemoryResource,
    LogicalType, MemoryResource, TransformContext, UnaryOp, ValidityMask,
};

// =============================================================================
// Specification Scenarios
// =============================================================================

#[test]
fn test_is_nan_scenario() {
    // [1.0, NaN, -0.0, null] -> is_nan -> [false, true, false, null]
    let ctx = TransformContext::default();
    let col = Column::from_values(vec![1.0_f64, f64::NAN, -0.0, 0.0])
        .with_validity(Some(ValidityMask::from_bools(&[true, true, true, false])))
        .unwrap();

    let out = is_nan(&col.view(), &ctx).unwrap();
    assert_eq!(out.logical_type(), LogicalType::Bool);
    assert_eq!(out.len(), 4);
    assert_eq!(out.data().as_bool(), Some(&[false, true, false, false][..]));
    let mask = out.validity().unwrap();
    assert!(mask.get(0));
    assert!(mask.get(1));
    assert!(mask.get(2));
    assert!(!mask.get(3));
}

#[test]
fn test_narrowing_cast_scenario() {
    // [300]: Int32 -> Int8 gives [44], length 1, no validity mask.
    let ctx = TransformContext::default();
    let col = Column::from_values(vec![300_i32]);
    let out = cast(&col.view(), LogicalType::Int8, &ctx).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out.data().as_int8(), Some(&[44_i8][..]));
    assert!(out.validity().is_none());
}

#[test]
fn test_widen_then_narrow_round_trip() {
    let ctx = TransformContext::default();
    let col = Column::from_values(vec![i8::MIN, -17, 0, 42, i8::MAX]);
    let wide = cast(&col.view(), LogicalType::Int64, &ctx).unwrap();
    let back = cast(&wide.view(), LogicalType::Int8, &ctx).unwrap();
    assert_eq!(back.data(), col.data());
}

// =============================================================================
// Dispatch Failure Semantics
// =============================================================================

#[test]
fn test_dispatch_failure_issues_no_allocation() {
    let memory = Arc::new(HostMemoryResource::unbounded());
    let ctx = TransformContext::new(ExecutionQueue::default_queue(), memory.clone());

    let col = Column::from_values(vec![1_u64, 2, 3]);
    assert!(unary_operation(&col.view(), UnaryOp::Sqrt, &ctx).is_err());
    assert!(is_nan(&col.view(), &ctx).is_err());

    let stats = memory.stats();
    assert_eq!(stats.allocations, 0);
    assert_eq!(memory.bytes_in_use(), 0);
}

#[test]
fn test_allocation_failure_aborts_whole_operation() {
    // 1000 rows cast to Int64 needs 8000 bytes; the limit refuses it.
    let memory = Arc::new(HostMemoryResource::with_limit(4096));
    let ctx = TransformContext::new(ExecutionQueue::default_queue(), memory.clone());

    let col = Column::from_values(vec![0_i32; 1000]);
    let result = cast(&col.view(), LogicalType::Int64, &ctx);
    assert!(result.is_err());
    assert_eq!(memory.bytes_in_use(), 0);

    // A smaller output still fits afterwards.
    let out = cast(&col.view(), LogicalType::Int8, &ctx).unwrap();
    assert_eq!(out.len(), 1000);
}

// =============================================================================
// Injected Execution Services
// =============================================================================

#[test]
fn test_dedicated_queue_produces_identical_results() {
    let default_ctx = TransformContext::default();
    let queue_ctx = TransformContext::new(
        ExecutionQueue::with_threads(3).unwrap(),
        Arc::new(HostMemoryResource::unbounded()),
    );

    let values: Vec<f64> = (0..10_000).map(|i| f64::from(i) * 0.25 - 1000.0).collect();
    let col = Column::from_values(values);

    let a = unary_operation(&col.view(), UnaryOp::Sin, &default_ctx).unwrap();
    let b = unary_operation(&col.view(), UnaryOp::Sin, &queue_ctx).unwrap();
    assert_eq!(a.data(), b.data());
}

#[test]
fn test_output_buffers_released_when_columns_drop() {
    let memory = Arc::new(HostMemoryResource::unbounded());
    let ctx = TransformContext::new(ExecutionQueue::default_queue(), memory.clone());

    let col = Column::from_values(vec![1.5_f32; 256]);
    let a = cast(&col.view(), LogicalType::Float64, &ctx).unwrap();
    let b = is_nan(&col.view(), &ctx).unwrap();
    assert_eq!(memory.bytes_in_use(), 256 * 8 + 256);

    drop(a);
    assert_eq!(memory.bytes_in_use(), 256);
    drop(b);
    assert_eq!(memory.bytes_in_use(), 0);
}

#[test]
fn test_chained_operations() {
    // cast -> math -> predicate, nulls surviving the whole chain.
    let ctx = TransformContext::default();
    let col = Column::from_options(vec![Some(4_i32), None, Some(-9)]);

    let floats = cast(&col.view(), LogicalType::Float64, &ctx).unwrap();
    let roots = unary_operation(&floats.view(), UnaryOp::Sqrt, &ctx).unwrap();
    let nans = is_nan(&roots.view(), &ctx).unwrap();

    // sqrt(-9) is NaN; the null row stays null throughout.
    assert_eq!(nans.data().as_bool(), Some(&[false, false, true][..]));
    assert_eq!(nans.null_count(), 1);
    assert!(!nans.is_valid(1));
}

// =============================================================================
// Property-Based Tests
// =============================================================================

mod proptest_properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Repeated casts of identical input yield bit-identical output.
        #[test]
        fn test_cast_is_deterministic(values in proptest::collection::vec(any::<f64>(), 0..200)) {
            let ctx = TransformContext::default();
            let col = Column::from_values(values);
            let first = cast(&col.view(), LogicalType::Int32, &ctx).unwrap();
            let second = cast(&col.view(), LogicalType::Int32, &ctx).unwrap();
            prop_assert_eq!(first.data(), second.data());
        }

        /// Widening an integer column and narrowing back is the identity.
        #[test]
        fn test_widen_narrow_identity(values in proptest::collection::vec(any::<i16>(), 0..200)) {
            let ctx = TransformContext::default();
            let col = Column::from_values(values);
            let wide = cast(&col.view(), LogicalType::Int64, &ctx).unwrap();
            let back = cast(&wide.view(), LogicalType::Int16, &ctx).unwrap();
            prop_assert_eq!(back.data(), col.data());
        }

        /// is_nan and is_not_nan are exact complements for valid rows.
        #[test]
        fn test_nan_predicates_complement(values in proptest::collection::vec(any::<f32>(), 0..200)) {
            let ctx = TransformContext::default();
            let col = Column::from_values(values);
            let a = is_nan(&col.view(), &ctx).unwrap();
            let b = is_not_nan(&col.view(), &ctx).unwrap();
            let a = a.data().as_bool().unwrap();
            let b = b.data().as_bool().unwrap();
            for i in 0..a.len() {
                prop_assert_ne!(a[i], b[i]);
            }
        }

        /// Null count and bit pattern survive every non-predicate op.
        #[test]
        fn test_null_preservation(flags in proptest::collection::vec(any::<bool>(), 1..200)) {
            let ctx = TransformContext::default();
            let values = vec![1.0_f64; flags.len()];
            let mask = ValidityMask::from_bools(&flags);
            let col = Column::from_values(values).with_validity(Some(mask.clone())).unwrap();

            let casted = cast(&col.view(), LogicalType::Float32, &ctx).unwrap();
            prop_assert_eq!(casted.null_count(), col.null_count());
            prop_assert_eq!(casted.validity().unwrap(), &mask);

            let negated = unary_operation(&col.view(), UnaryOp::Negate, &ctx).unwrap();
            prop_assert_eq!(negated.null_count(), col.null_count());
            prop_assert_eq!(negated.validity().unwrap(), &mask);
        }

        /// Bit-invert is an involution on unsigned integers.
        #[test]
        fn test_bit_invert_involution(values in proptest::collection::vec(any::<u64>(), 0..200)) {
            let ctx = TransformContext::default();
            let col = Column::from_values(values);
            let once = unary_operation(&col.view(), UnaryOp::BitInvert, &ctx).unwrap();
            let twice = unary_operation(&once.view(), UnaryOp::BitInvert, &ctx).unwrap();
            prop_assert_eq!(twice.data(), col.data());
        }
    }
}
