//! Column representation: typed buffers, validity masks, and views.
//!
//! A [`Column`] owns its element buffer and optional [`ValidityMask`]; a
//! [`ColumnView`] is the borrowed, read-only form handed to operations.
//! Element storage is a closed tagged union ([`ColumnData`]) with one
//! variant per [`LogicalType`], so type dispatch is a single `match` and
//! never open-ended dynamic dispatch.

pub mod validity;

pub use validity::ValidityMask;

use crate::error::{Result, RudfError};
use crate::exec::AllocationToken;
use crate::types::LogicalType;

/// Typed element storage, one variant per [`LogicalType`].
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    /// 8-bit signed integers.
    Int8(Vec<i8>),
    /// 16-bit signed integers.
    Int16(Vec<i16>),
    /// 32-bit signed integers.
    Int32(Vec<i32>),
    /// 64-bit signed integers.
    Int64(Vec<i64>),
    /// 8-bit unsigned integers.
    UInt8(Vec<u8>),
    /// 16-bit unsigned integers.
    UInt16(Vec<u16>),
    /// 32-bit unsigned integers.
    UInt32(Vec<u32>),
    /// 64-bit unsigned integers.
    UInt64(Vec<u64>),
    /// 32-bit floats.
    Float32(Vec<f32>),
    /// 64-bit floats.
    Float64(Vec<f64>),
    /// Booleans.
    Bool(Vec<bool>),
}

impl ColumnData {
    /// Returns the logical type of the stored elements.
    #[must_use]
    pub fn logical_type(&self) -> LogicalType {
        match self {
            ColumnData::Int8(_) => LogicalType::Int8,
            ColumnData::Int16(_) => LogicalType::Int16,
            ColumnData::Int32(_) => LogicalType::Int32,
            ColumnData::Int64(_) => LogicalType::Int64,
            ColumnData::UInt8(_) => LogicalType::UInt8,
            ColumnData::UInt16(_) => LogicalType::UInt16,
            ColumnData::UInt32(_) => LogicalType::UInt32,
            ColumnData::UInt64(_) => LogicalType::UInt64,
            ColumnData::Float32(_) => LogicalType::Float32,
            ColumnData::Float64(_) => LogicalType::Float64,
            ColumnData::Bool(_) => LogicalType::Bool,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Int8(v) => v.len(),
            ColumnData::Int16(v) => v.len(),
            ColumnData::Int32(v) => v.len(),
            ColumnData::Int64(v) => v.len(),
            ColumnData::UInt8(v) => v.len(),
            ColumnData::UInt16(v) => v.len(),
            ColumnData::UInt32(v) => v.len(),
            ColumnData::UInt64(v) => v.len(),
            ColumnData::Float32(v) => v.len(),
            ColumnData::Float64(v) => v.len(),
            ColumnData::Bool(v) => v.len(),
        }
    }

    /// Returns true if the buffer holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Attempts to view the elements as `i8`.
    #[must_use]
    pub fn as_int8(&self) -> Option<&[i8]> {
        match self {
            ColumnData::Int8(v) => Some(v),
            _ => None,
        }
    }

    /// Attempts to view the elements as `i16`.
    #[must_use]
    pub fn as_int16(&self) -> Option<&[i16]> {
        match self {
            ColumnData::Int16(v) => Some(v),
            _ => None,
        }
    }

    /// Attempts to view the elements as `i32`.
    #[must_use]
    pub fn as_int32(&self) -> Option<&[i32]> {
        match self {
            ColumnData::Int32(v) => Some(v),
            _ => None,
        }
    }

    /// Attempts to view the elements as `i64`.
    #[must_use]
    pub fn as_int64(&self) -> Option<&[i64]> {
        match self {
            ColumnData::Int64(v) => Some(v),
            _ => None,
        }
    }

    /// Attempts to view the elements as `u8`.
    #[must_use]
    pub fn as_uint8(&self) -> Option<&[u8]> {
        match self {
            ColumnData::UInt8(v) => Some(v),
            _ => None,
        }
    }

    /// Attempts to view the elements as `u16`.
    #[must_use]
    pub fn as_uint16(&self) -> Option<&[u16]> {
        match self {
            ColumnData::UInt16(v) => Some(v),
            _ => None,
        }
    }

    /// Attempts to view the elements as `u32`.
    #[must_use]
    pub fn as_uint32(&self) -> Option<&[u32]> {
        match self {
            ColumnData::UInt32(v) => Some(v),
            _ => None,
        }
    }

    /// Attempts to view the elements as `u64`.
    #[must_use]
    pub fn as_uint64(&self) -> Option<&[u64]> {
        match self {
            ColumnData::UInt64(v) => Some(v),
            _ => None,
        }
    }

    /// Attempts to view the elements as `f32`.
    #[must_use]
    pub fn as_float32(&self) -> Option<&[f32]> {
        match self {
            ColumnData::Float32(v) => Some(v),
            _ => None,
        }
    }

    /// Attempts to view the elements as `f64`.
    #[must_use]
    pub fn as_float64(&self) -> Option<&[f64]> {
        match self {
            ColumnData::Float64(v) => Some(v),
            _ => None,
        }
    }

    /// Attempts to view the elements as `bool`.
    #[must_use]
    pub fn as_bool(&self) -> Option<&[bool]> {
        match self {
            ColumnData::Bool(v) => Some(v),
            _ => None,
        }
    }
}

/// Element types that can back a [`Column`].
pub trait ColumnElement: Copy {
    /// The logical type tag for this element type.
    const LOGICAL_TYPE: LogicalType;

    /// Wraps a buffer of this element type in the matching variant.
    fn into_data(values: Vec<Self>) -> ColumnData;
}

macro_rules! impl_column_element {
    ($($t:ty => $variant:ident),* $(,)?) => {$(
        impl ColumnElement for $t {
            const LOGICAL_TYPE: LogicalType = LogicalType::$variant;

            fn into_data(values: Vec<Self>) -> ColumnData {
                ColumnData::$variant(values)
            }
        }
    )*};
}

impl_column_element!(
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
    f32 => Float32,
    f64 => Float64,
    bool => Bool,
);

/// A fixed-length, typed, nullable sequence of values.
///
/// The column exclusively owns its buffers. When it was produced by a
/// transform operation it also carries the allocation token from the
/// memory resource that sized it; dropping the column returns those bytes.
#[derive(Debug)]
pub struct Column {
    data: ColumnData,
    validity: Option<ValidityMask>,
    null_count: usize,
    #[allow(dead_code)]
    allocation: Option<AllocationToken>,
}

impl Column {
    /// Creates a column with no validity mask (every row valid).
    #[must_use]
    pub fn new(data: ColumnData) -> Self {
        Column {
            data,
            validity: None,
            null_count: 0,
            allocation: None,
        }
    }

    /// Creates a column from an owned buffer of values, all valid.
    #[must_use]
    pub fn from_values<T: ColumnElement>(values: Vec<T>) -> Self {
        Column::new(T::into_data(values))
    }

    /// Creates a column from optional values; `None` rows become null.
    ///
    /// If every value is present, no validity mask is attached.
    #[must_use]
    pub fn from_options<T: ColumnElement + Default>(values: Vec<Option<T>>) -> Self {
        if values.iter().all(Option::is_some) {
            return Column::from_values(values.into_iter().flatten().collect());
        }
        let valid: Vec<bool> = values.iter().map(Option::is_some).collect();
        let data: Vec<T> = values.into_iter().map(Option::unwrap_or_default).collect();
        let mask = ValidityMask::from_bools(&valid);
        let null_count = mask.null_count();
        Column {
            data: T::into_data(data),
            validity: Some(mask),
            null_count,
            allocation: None,
        }
    }

    /// Attaches (or removes) a validity mask, consuming the column.
    ///
    /// # Errors
    ///
    /// Returns [`RudfError::LengthMismatch`] if the mask does not cover
    /// exactly as many rows as the data buffer.
    pub fn with_validity(mut self, validity: Option<ValidityMask>) -> Result<Self> {
        if let Some(ref mask) = validity {
            if mask.len() != self.data.len() {
                return Err(RudfError::LengthMismatch {
                    mask_len: mask.len(),
                    data_len: self.data.len(),
                });
            }
        }
        self.null_count = validity.as_ref().map_or(0, ValidityMask::null_count);
        self.validity = validity;
        Ok(self)
    }

    /// Records the allocation token backing this column's buffers.
    pub(crate) fn with_allocation(mut self, token: AllocationToken) -> Self {
        self.allocation = Some(token);
        self
    }

    /// Returns the logical type of the column.
    #[must_use]
    pub fn logical_type(&self) -> LogicalType {
        self.data.logical_type()
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the column has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the element buffer.
    #[must_use]
    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    /// Returns the validity mask, if any.
    ///
    /// An absent mask means every row is valid.
    #[must_use]
    pub fn validity(&self) -> Option<&ValidityMask> {
        self.validity.as_ref()
    }

    /// Returns the cached number of null rows.
    #[must_use]
    pub fn null_count(&self) -> usize {
        self.null_count
    }

    /// Returns the validity of a single row.
    ///
    /// # Panics
    /// Panics if `row >= len`.
    #[must_use]
    pub fn is_valid(&self, row: usize) -> bool {
        assert!(row < self.len(), "row {} out of bounds ({})", row, self.len());
        self.validity.as_ref().map_or(true, |mask| mask.get(row))
    }

    /// Borrows the column as a read-only view.
    #[must_use]
    pub fn view(&self) -> ColumnView<'_> {
        ColumnView {
            data: &self.data,
            validity: self.validity.as_ref(),
            null_count: self.null_count,
        }
    }
}

/// Borrowed, read-only view of a column.
///
/// This is the sole input contract for transform operations: the engine
/// never mutates an input column.
#[derive(Debug, Clone, Copy)]
pub struct ColumnView<'a> {
    data: &'a ColumnData,
    validity: Option<&'a ValidityMask>,
    null_count: usize,
}

impl<'a> ColumnView<'a> {
    /// Returns the logical type of the viewed column.
    #[must_use]
    pub fn logical_type(&self) -> LogicalType {
        self.data.logical_type()
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the view has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the element buffer.
    #[must_use]
    pub fn data(&self) -> &'a ColumnData {
        self.data
    }

    /// Returns the validity mask, if any.
    #[must_use]
    pub fn validity(&self) -> Option<&'a ValidityMask> {
        self.validity
    }

    /// Returns the number of null rows.
    #[must_use]
    pub fn null_count(&self) -> usize {
        self.null_count
    }
}
