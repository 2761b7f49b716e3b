//! Fixed mapping from value kinds to single-byte wire tags.
//!
//! Tags are part of the contract with the remote reader: no two kinds share
//! a byte, and a byte is never reused for different semantics across versions
//! of this format.

use crate::value::Value;

/// One byte identifying a value's wire kind.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Null = 0x00,
    Boolean = 0x01,
    Int64 = 0x02,
    Float64 = 0x03,
    String = 0x04,
    Bytes = 0x05,
    Tuple = 0x06,
    Record = 0x07,
}

impl TypeTag {
    /// Every registered tag, in byte order.
    pub const ALL: [TypeTag; 8] = [
        TypeTag::Null,
        TypeTag::Boolean,
        TypeTag::Int64,
        TypeTag::Float64,
        TypeTag::String,
        TypeTag::Bytes,
        TypeTag::Tuple,
        TypeTag::Record,
    ];

    /// The wire byte for this tag.
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Human-readable kind name.
    pub const fn name(self) -> &'static str {
        match self {
            TypeTag::Null => "null",
            TypeTag::Boolean => "boolean",
            TypeTag::Int64 => "int64",
            TypeTag::Float64 => "float64",
            TypeTag::String => "string",
            TypeTag::Bytes => "bytes",
            TypeTag::Tuple => "tuple",
            TypeTag::Record => "record",
        }
    }

    /// Classify a value.
    ///
    /// The kind is carried by the variant itself, so no predicate chain is
    /// needed; dynamic ingress paths (e.g. JSON conversion) must keep the
    /// documented priority order: boolean before integer, string before raw
    /// bytes.
    pub fn of(value: &Value) -> TypeTag {
        match value {
            Value::Null => TypeTag::Null,
            Value::Boolean(_) => TypeTag::Boolean,
            Value::Int64(_) => TypeTag::Int64,
            Value::Float64(_) => TypeTag::Float64,
            Value::String(_) => TypeTag::String,
            Value::Bytes(_) => TypeTag::Bytes,
            Value::Tuple(_) => TypeTag::Tuple,
            Value::Record(_) => TypeTag::Record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_distinct() {
        for (i, a) in TypeTag::ALL.iter().enumerate() {
            for b in &TypeTag::ALL[i + 1..] {
                assert_ne!(a.byte(), b.byte(), "{} and {} share a byte", a.name(), b.name());
            }
        }
    }

    #[test]
    fn bytes_are_stable() {
        assert_eq!(TypeTag::Null.byte(), 0x00);
        assert_eq!(TypeTag::Boolean.byte(), 0x01);
        assert_eq!(TypeTag::Int64.byte(), 0x02);
        assert_eq!(TypeTag::Float64.byte(), 0x03);
        assert_eq!(TypeTag::String.byte(), 0x04);
        assert_eq!(TypeTag::Bytes.byte(), 0x05);
        assert_eq!(TypeTag::Tuple.byte(), 0x06);
        assert_eq!(TypeTag::Record.byte(), 0x07);
    }

    #[test]
    fn boolean_classifies_before_integer() {
        assert_eq!(TypeTag::of(&Value::Boolean(true)), TypeTag::Boolean);
        assert_eq!(TypeTag::of(&Value::Int64(1)), TypeTag::Int64);
    }
}
