//! `LogicalType` definitions for rudf columns.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported logical element types.
///
/// This is a closed set: every operation in the crate is defined for an
/// explicit subset of these types, and anything outside that subset is
/// rejected at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalType {
    /// 8-bit signed integer.
    Int8,
    /// 16-bit signed integer.
    Int16,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 8-bit unsigned integer.
    UInt8,
    /// 16-bit unsigned integer.
    UInt16,
    /// 32-bit unsigned integer.
    UInt32,
    /// 64-bit unsigned integer.
    UInt64,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
    /// Boolean.
    Bool,
}

impl LogicalType {
    /// Returns the display name of the logical type.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            LogicalType::Int8 => "INT8",
            LogicalType::Int16 => "INT16",
            LogicalType::Int32 => "INT32",
            LogicalType::Int64 => "INT64",
            LogicalType::UInt8 => "UINT8",
            LogicalType::UInt16 => "UINT16",
            LogicalType::UInt32 => "UINT32",
            LogicalType::UInt64 => "UINT64",
            LogicalType::Float32 => "FLOAT32",
            LogicalType::Float64 => "FLOAT64",
            LogicalType::Bool => "BOOL",
        }
    }

    /// Returns the byte size of one element.
    ///
    /// All supported types are fixed width.
    #[must_use]
    pub fn byte_size(&self) -> usize {
        match self {
            LogicalType::Int8 | LogicalType::UInt8 | LogicalType::Bool => 1,
            LogicalType::Int16 | LogicalType::UInt16 => 2,
            LogicalType::Int32 | LogicalType::UInt32 | LogicalType::Float32 => 4,
            LogicalType::Int64 | LogicalType::UInt64 | LogicalType::Float64 => 8,
        }
    }

    /// Returns whether this type is numeric (integral or floating).
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        !matches!(self, LogicalType::Bool)
    }

    /// Returns whether this type is an integer type.
    #[must_use]
    pub fn is_integral(&self) -> bool {
        matches!(
            self,
            LogicalType::Int8
                | LogicalType::Int16
                | LogicalType::Int32
                | LogicalType::Int64
                | LogicalType::UInt8
                | LogicalType::UInt16
                | LogicalType::UInt32
                | LogicalType::UInt64
        )
    }

    /// Returns whether this type is a floating-point type.
    #[must_use]
    pub fn is_floating(&self) -> bool {
        matches!(self, LogicalType::Float32 | LogicalType::Float64)
    }

    /// Returns whether this type carries a sign.
    #[must_use]
    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            LogicalType::Int8
                | LogicalType::Int16
                | LogicalType::Int32
                | LogicalType::Int64
                | LogicalType::Float32
                | LogicalType::Float64
        )
    }

    /// Converts to an Arrow data type.
    #[must_use]
    pub fn to_arrow(&self) -> arrow::datatypes::DataType {
        match self {
            LogicalType::Int8 => arrow::datatypes::DataType::Int8,
            LogicalType::Int16 => arrow::datatypes::DataType::Int16,
            LogicalType::Int32 => arrow::datatypes::DataType::Int32,
            LogicalType::Int64 => arrow::datatypes::DataType::Int64,
            LogicalType::UInt8 => arrow::datatypes::DataType::UInt8,
            LogicalType::UInt16 => arrow::datatypes::DataType::UInt16,
            LogicalType::UInt32 => arrow::datatypes::DataType::UInt32,
            LogicalType::UInt64 => arrow::datatypes::DataType::UInt64,
            LogicalType::Float32 => arrow::datatypes::DataType::Float32,
            LogicalType::Float64 => arrow::datatypes::DataType::Float64,
            LogicalType::Bool => arrow::datatypes::DataType::Boolean,
        }
    }

    /// Converts from an Arrow data type.
    ///
    /// Returns None for unsupported Arrow types.
    #[must_use]
    pub fn from_arrow(arrow_type: &arrow::datatypes::DataType) -> Option<Self> {
        match arrow_type {
            arrow::datatypes::DataType::Int8 => Some(LogicalType::Int8),
            arrow::datatypes::DataType::Int16 => Some(LogicalType::Int16),
            arrow::datatypes::DataType::Int32 => Some(LogicalType::Int32),
            arrow::datatypes::DataType::Int64 => Some(LogicalType::Int64),
            arrow::datatypes::DataType::UInt8 => Some(LogicalType::UInt8),
            arrow::datatypes::DataType::UInt16 => Some(LogicalType::UInt16),
            arrow::datatypes::DataType::UInt32 => Some(LogicalType::UInt32),
            arrow::datatypes::DataType::UInt64 => Some(LogicalType::UInt64),
            arrow::datatypes::DataType::Float32 => Some(LogicalType::Float32),
            arrow::datatypes::DataType::Float64 => Some(LogicalType::Float64),
            arrow::datatypes::DataType::Boolean => Some(LogicalType::Bool),
            _ => None,
        }
    }

    /// Returns all supported logical types.
    #[must_use]
    pub fn all() -> &'static [LogicalType] {
        &[
            LogicalType::Int8,
            LogicalType::Int16,
            LogicalType::Int32,
            LogicalType::Int64,
            LogicalType::UInt8,
            LogicalType::UInt16,
            LogicalType::UInt32,
            LogicalType::UInt64,
            LogicalType::Float32,
            LogicalType::Float64,
            LogicalType::Bool,
        ]
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_sizes() {
        assert_eq!(LogicalType::Int8.byte_size(), 1);
        assert_eq!(LogicalType::UInt16.byte_size(), 2);
        assert_eq!(LogicalType::Float32.byte_size(), 4);
        assert_eq!(LogicalType::Int64.byte_size(), 8);
        assert_eq!(LogicalType::Bool.byte_size(), 1);
    }

    #[test]
    fn test_classification() {
        assert!(LogicalType::Int32.is_numeric());
        assert!(LogicalType::Int32.is_integral());
        assert!(!LogicalType::Int32.is_floating());
        assert!(LogicalType::Int32.is_signed());

        assert!(LogicalType::UInt64.is_integral());
        assert!(!LogicalType::UInt64.is_signed());

        assert!(LogicalType::Float64.is_floating());
        assert!(LogicalType::Float64.is_signed());
        assert!(!LogicalType::Float64.is_integral());

        assert!(!LogicalType::Bool.is_numeric());
        assert!(!LogicalType::Bool.is_integral());
    }

    #[test]
    fn test_arrow_round_trip() {
        for lt in LogicalType::all() {
            assert_eq!(LogicalType::from_arrow(&lt.to_arrow()), Some(*lt));
        }
    }

    #[test]
    fn test_from_arrow_unsupported() {
        assert_eq!(
            LogicalType::from_arrow(&arrow::datatypes::DataType::Utf8),
            None
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(LogicalType::Float32.to_string(), "FLOAT32");
        assert_eq!(LogicalType::UInt8.to_string(), "UINT8");
    }
}
