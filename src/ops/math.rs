//! Unary math kernels and their dispatch table.
//!
//! Support table (result type always equals input type):
//!
//! | operation group                        | supported input types      |
//! |----------------------------------------|----------------------------|
//! | trig, hyperbolic, exp, log, sqrt, cbrt | Float32, Float64           |
//! | ceil, floor, round                     | Float32, Float64           |
//! | abs, negate                            | signed integers and floats |
//! | bit invert                             | all integers               |
//! | not                                    | Bool                       |
//!
//! Integer abs/negate wrap on overflow (`i8::MIN` negates to itself), the
//! same two's-complement behavior the cast kernels use. There is no
//! implicit promotion: requesting a trig function on an integer column is
//! an unsupported combination, not a cast-then-apply.

use crate::column::{Column, ColumnData, ColumnElement, ColumnView};
use crate::error::{Result, RudfError};
use crate::exec::TransformContext;
use crate::ops::UnaryOp;
use crate::transform;

macro_rules! float_kernels {
    ($name:ident, $t:ty) => {
        fn $name(op: UnaryOp) -> Option<fn($t) -> $t> {
            Some(match op {
                UnaryOp::Sin => <$t>::sin,
                UnaryOp::Cos => <$t>::cos,
                UnaryOp::Tan => <$t>::tan,
                UnaryOp::ArcSin => <$t>::asin,
                UnaryOp::ArcCos => <$t>::acos,
                UnaryOp::ArcTan => <$t>::atan,
                UnaryOp::Sinh => <$t>::sinh,
                UnaryOp::Cosh => <$t>::cosh,
                UnaryOp::Tanh => <$t>::tanh,
                UnaryOp::Exp => <$t>::exp,
                UnaryOp::Log => <$t>::ln,
                UnaryOp::Sqrt => <$t>::sqrt,
                UnaryOp::Cbrt => <$t>::cbrt,
                UnaryOp::Ceil => <$t>::ceil,
                UnaryOp::Floor => <$t>::floor,
                UnaryOp::Round => <$t>::round,
                UnaryOp::Abs => <$t>::abs,
                UnaryOp::Negate => |x: $t| -x,
                _ => return None,
            })
        }
    };
}

macro_rules! signed_int_kernels {
    ($name:ident, $t:ty) => {
        fn $name(op: UnaryOp) -> Option<fn($t) -> $t> {
            Some(match op {
                UnaryOp::Abs => <$t>::wrapping_abs,
                UnaryOp::Negate => <$t>::wrapping_neg,
                UnaryOp::BitInvert => |x: $t| !x,
                _ => return None,
            })
        }
    };
}

macro_rules! unsigned_int_kernels {
    ($name:ident, $t:ty) => {
        fn $name(op: UnaryOp) -> Option<fn($t) -> $t> {
            Some(match op {
                UnaryOp::BitInvert => |x: $t| !x,
                _ => return None,
            })
        }
    };
}

float_kernels!(kernel_f32, f32);
float_kernels!(kernel_f64, f64);
signed_int_kernels!(kernel_i8, i8);
signed_int_kernels!(kernel_i16, i16);
signed_int_kernels!(kernel_i32, i32);
signed_int_kernels!(kernel_i64, i64);
unsigned_int_kernels!(kernel_u8, u8);
unsigned_int_kernels!(kernel_u16, u16);
unsigned_int_kernels!(kernel_u32, u32);
unsigned_int_kernels!(kernel_u64, u64);

fn kernel_bool(op: UnaryOp) -> Option<fn(bool) -> bool> {
    match op {
        UnaryOp::Not => Some(|x| !x),
        _ => None,
    }
}

/// Applies a unary math operation to every row of a column.
///
/// The output column has the same logical type as the input and its
/// validity mask is a structural copy of the input's.
///
/// # Errors
///
/// Returns [`RudfError::UnsupportedType`] if the operation has no kernel
/// for the column's type (detected before any buffer is allocated or any
/// parallel work issued), [`RudfError::AllocationFailure`] if the output
/// buffer cannot be reserved, or [`RudfError::ExecutionFailure`] if the
/// parallel pass fails.
pub fn unary_operation(
    input: &ColumnView<'_>,
    op: UnaryOp,
    ctx: &TransformContext,
) -> Result<Column> {
    let column = match input.data() {
        ColumnData::Int8(v) => run_kernel(v, kernel_i8(op), op, ctx)?,
        ColumnData::Int16(v) => run_kernel(v, kernel_i16(op), op, ctx)?,
        ColumnData::Int32(v) => run_kernel(v, kernel_i32(op), op, ctx)?,
        ColumnData::Int64(v) => run_kernel(v, kernel_i64(op), op, ctx)?,
        ColumnData::UInt8(v) => run_kernel(v, kernel_u8(op), op, ctx)?,
        ColumnData::UInt16(v) => run_kernel(v, kernel_u16(op), op, ctx)?,
        ColumnData::UInt32(v) => run_kernel(v, kernel_u32(op), op, ctx)?,
        ColumnData::UInt64(v) => run_kernel(v, kernel_u64(op), op, ctx)?,
        ColumnData::Float32(v) => run_kernel(v, kernel_f32(op), op, ctx)?,
        ColumnData::Float64(v) => run_kernel(v, kernel_f64(op), op, ctx)?,
        ColumnData::Bool(v) => run_kernel(v, kernel_bool(op), op, ctx)?,
    };
    column.with_validity(input.validity().cloned())
}

/// Runs a resolved kernel, or rejects the combination if none exists.
///
/// Dispatch failure happens here, before the allocation request.
fn run_kernel<T>(
    values: &[T],
    kernel: Option<fn(T) -> T>,
    op: UnaryOp,
    ctx: &TransformContext,
) -> Result<Column>
where
    T: ColumnElement + Send + Sync,
{
    let Some(f) = kernel else {
        return Err(RudfError::UnsupportedType {
            operation: op.to_string(),
            input: T::LOGICAL_TYPE,
        });
    };
    let token = ctx.allocate(values.len().saturating_mul(T::LOGICAL_TYPE.byte_size()))?;
    let out = transform::apply(values, f, ctx)?;
    Ok(Column::new(T::into_data(out)).with_allocation(token))
}
