//! NaN predicates over floating-point columns.
//!
//! Both predicates produce a boolean column and are only defined for
//! Float32/Float64 inputs. Null handling follows the predicate policy:
//! "is this unknown value NaN?" is itself unknown, so a null input row
//! yields a null output row; every valid row gets a definite true/false.
//! Positive and negative infinity are not NaN.

use crate::column::{Column, ColumnData, ColumnView};
use crate::error::{Result, RudfError};
use crate::exec::TransformContext;
use crate::transform::true_if;

/// Builds a boolean column that is `true` where the input is NaN.
///
/// # Errors
///
/// Returns [`RudfError::UnsupportedType`] for non-floating-point inputs
/// (detected before any work is issued), [`RudfError::AllocationFailure`]
/// if the output buffer cannot be reserved, or
/// [`RudfError::ExecutionFailure`] if the parallel pass fails.
pub fn is_nan(input: &ColumnView<'_>, ctx: &TransformContext) -> Result<Column> {
    nan_predicate(input, ctx, "is_nan", f32::is_nan, f64::is_nan)
}

/// Builds a boolean column that is `true` where the input is not NaN.
///
/// For every valid row, `is_not_nan` is the exact complement of
/// [`is_nan`].
///
/// # Errors
///
/// Same failure modes as [`is_nan`].
pub fn is_not_nan(input: &ColumnView<'_>, ctx: &TransformContext) -> Result<Column> {
    nan_predicate(input, ctx, "is_not_nan", |x| !x.is_nan(), |x| !x.is_nan())
}

fn nan_predicate(
    input: &ColumnView<'_>,
    ctx: &TransformContext,
    name: &str,
    pred32: fn(f32) -> bool,
    pred64: fn(f64) -> bool,
) -> Result<Column> {
    let column = match input.data() {
        ColumnData::Float32(v) => true_if(v, pred32, ctx)?,
        ColumnData::Float64(v) => true_if(v, pred64, ctx)?,
        other => {
            return Err(RudfError::UnsupportedType {
                operation: name.to_string(),
                input: other.logical_type(),
            })
        }
    };
    column.with_validity(input.validity().cloned())
}
