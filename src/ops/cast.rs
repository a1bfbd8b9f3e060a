//! Type casts between numeric and boolean columns.
//!
//! Every `(source, target)` pair over the supported logical types has a
//! defined, deterministic conversion rule. The rules are fixed by this
//! module rather than left to an ambient platform conversion:
//!
//! - integer -> integer: two's-complement truncation (wrap to target width)
//! - float -> integer: truncate toward zero, saturating at the target's
//!   bounds; NaN converts to 0
//! - integer -> float: round to the nearest representable value
//! - float -> float: IEEE-754 conversion (f64 -> f32 may round, and values
//!   beyond f32 range become +/- infinity)
//! - numeric -> bool: `x != 0`; NaN is nonzero and converts to `true`
//! - bool -> numeric: `false` -> 0, `true` -> 1
//! - identity casts copy the buffer unchanged
//!
//! Casts never invalidate or revalidate a row: the output validity mask is
//! a structural copy of the input's, and a column without a mask produces a
//! column without a mask.

use crate::column::{Column, ColumnData, ColumnView};
use crate::error::Result;
use crate::exec::TransformContext;
use crate::transform;
use crate::types::LogicalType;

/// Conversion surface for cast kernels: one target per supported type.
///
/// The `to_*` methods encode the rules documented at module level; the
/// numeric implementations are Rust `as` conversions, which match those
/// rules exactly and are spelled out here so the contract is explicit.
trait CastElement: Copy + Send + Sync {
    fn to_i8(self) -> i8;
    fn to_i16(self) -> i16;
    fn to_i32(self) -> i32;
    fn to_i64(self) -> i64;
    fn to_u8(self) -> u8;
    fn to_u16(self) -> u16;
    fn to_u32(self) -> u32;
    fn to_u64(self) -> u64;
    fn to_f32(self) -> f32;
    fn to_f64(self) -> f64;
    fn to_bool(self) -> bool;
}

macro_rules! impl_cast_element {
    ($($t:ty),* $(,)?) => {$(
        #[allow(clippy::unnecessary_cast)]
        impl CastElement for $t {
            fn to_i8(self) -> i8 { self as i8 }
            fn to_i16(self) -> i16 { self as i16 }
            fn to_i32(self) -> i32 { self as i32 }
            fn to_i64(self) -> i64 { self as i64 }
            fn to_u8(self) -> u8 { self as u8 }
            fn to_u16(self) -> u16 { self as u16 }
            fn to_u32(self) -> u32 { self as u32 }
            fn to_u64(self) -> u64 { self as u64 }
            fn to_f32(self) -> f32 { self as f32 }
            fn to_f64(self) -> f64 { self as f64 }
            #[allow(clippy::float_cmp)]
            fn to_bool(self) -> bool { self != (0 as $t) }
        }
    )*};
}

impl_cast_element!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl CastElement for bool {
    fn to_i8(self) -> i8 {
        i8::from(self)
    }
    fn to_i16(self) -> i16 {
        i16::from(self)
    }
    fn to_i32(self) -> i32 {
        i32::from(self)
    }
    fn to_i64(self) -> i64 {
        i64::from(self)
    }
    fn to_u8(self) -> u8 {
        u8::from(self)
    }
    fn to_u16(self) -> u16 {
        u16::from(self)
    }
    fn to_u32(self) -> u32 {
        u32::from(self)
    }
    fn to_u64(self) -> u64 {
        u64::from(self)
    }
    fn to_f32(self) -> f32 {
        f32::from(u8::from(self))
    }
    fn to_f64(self) -> f64 {
        f64::from(u8::from(self))
    }
    fn to_bool(self) -> bool {
        self
    }
}

/// Casts a column to `target`, producing a freshly allocated column.
///
/// The per-pair conversion rules are documented at module level. The
/// output validity mask is a structural copy of the input's (default null
/// policy); `null_count` is carried over unchanged.
///
/// # Errors
///
/// Returns [`crate::RudfError::AllocationFailure`] if the output buffer
/// cannot be reserved, or [`crate::RudfError::ExecutionFailure`] if the
/// parallel pass fails. Every `(source, target)` pair over the supported
/// types has a defined conversion, so dispatch itself cannot fail here.
pub fn cast(input: &ColumnView<'_>, target: LogicalType, ctx: &TransformContext) -> Result<Column> {
    let token = ctx.allocate(input.len().saturating_mul(target.byte_size()))?;
    let data = match input.data() {
        ColumnData::Int8(v) => cast_slice(v, target, ctx)?,
        ColumnData::Int16(v) => cast_slice(v, target, ctx)?,
        ColumnData::Int32(v) => cast_slice(v, target, ctx)?,
        ColumnData::Int64(v) => cast_slice(v, target, ctx)?,
        ColumnData::UInt8(v) => cast_slice(v, target, ctx)?,
        ColumnData::UInt16(v) => cast_slice(v, target, ctx)?,
        ColumnData::UInt32(v) => cast_slice(v, target, ctx)?,
        ColumnData::UInt64(v) => cast_slice(v, target, ctx)?,
        ColumnData::Float32(v) => cast_slice(v, target, ctx)?,
        ColumnData::Float64(v) => cast_slice(v, target, ctx)?,
        ColumnData::Bool(v) => cast_slice(v, target, ctx)?,
    };
    Column::new(data)
        .with_allocation(token)
        .with_validity(input.validity().cloned())
}

/// Runs the monomorphized conversion kernel for one source type.
///
/// The target match selects the kernel once; the elementwise pass then
/// runs with no per-element branching.
fn cast_slice<T: CastElement>(
    values: &[T],
    target: LogicalType,
    ctx: &TransformContext,
) -> Result<ColumnData> {
    Ok(match target {
        LogicalType::Int8 => ColumnData::Int8(transform::apply(values, T::to_i8, ctx)?),
        LogicalType::Int16 => ColumnData::Int16(transform::apply(values, T::to_i16, ctx)?),
        LogicalType::Int32 => ColumnData::Int32(transform::apply(values, T::to_i32, ctx)?),
        LogicalType::Int64 => ColumnData::Int64(transform::apply(values, T::to_i64, ctx)?),
        LogicalType::UInt8 => ColumnData::UInt8(transform::apply(values, T::to_u8, ctx)?),
        LogicalType::UInt16 => ColumnData::UInt16(transform::apply(values, T::to_u16, ctx)?),
        LogicalType::UInt32 => ColumnData::UInt32(transform::apply(values, T::to_u32, ctx)?),
        LogicalType::UInt64 => ColumnData::UInt64(transform::apply(values, T::to_u64, ctx)?),
        LogicalType::Float32 => ColumnData::Float32(transform::apply(values, T::to_f32, ctx)?),
        LogicalType::Float64 => ColumnData::Float64(transform::apply(values, T::to_f64, ctx)?),
        LogicalType::Bool => ColumnData::Bool(transform::apply(values, T::to_bool, ctx)?),
    })
}
