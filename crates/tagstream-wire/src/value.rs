//! The closed set of values this format can put on the wire.

use bytes::Bytes;

use crate::record::TileRecord;
use crate::tag::TypeTag;

/// A value that can be encoded for the remote reader.
///
/// The kind is fixed at construction, so dispatch never needs to probe a
/// value with ordered predicate tests. For a given stream position, tuples
/// are fixed in arity and per-position kind (see the Slot contract in
/// `tagstream-collect`).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Int64(i64),
    Float64(f64),
    String(String),
    Bytes(Bytes),
    Tuple(Vec<Value>),
    Record(Box<TileRecord>),
}

impl Value {
    /// The wire tag for this value.
    pub fn tag(&self) -> TypeTag {
        TypeTag::of(self)
    }

    /// Human-readable kind name, for diagnostics.
    pub fn kind(&self) -> &'static str {
        self.tag().name()
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Bytes> for Value {
    fn from(v: Bytes) -> Self {
        Value::Bytes(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Tuple(v)
    }
}

impl From<TileRecord> for Value {
    fn from(v: TileRecord) -> Self {
        Value::Record(Box::new(v))
    }
}
