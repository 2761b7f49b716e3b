//! Runtime dispatch: classify a value, emit its framing, cache an encoder.

use std::fmt;
use std::sync::Arc;

use bytes::{BufMut, BytesMut};

use crate::error::{Result, WireError};
use crate::marshal::ExtensionMarshal;
use crate::record::encode_record;
use crate::scalar::{put_bool, put_bytes, put_f64, put_i64, put_str};
use crate::tag::TypeTag;
use crate::value::Value;

/// A payload encoder bound to one value kind.
///
/// Holds no tag — framing belongs to [`Encoder::resolve`]. Tuple encoders
/// cache one child encoder per position, resolved once from a sample value;
/// record encoders hold the shared extension marshal handle.
#[derive(Clone)]
pub enum Encoder {
    Null,
    Boolean,
    Int64,
    Float64,
    String,
    Bytes,
    Tuple(Vec<Encoder>),
    Record(Arc<dyn ExtensionMarshal>),
}

impl Encoder {
    /// Classify `sample`, append its framing bytes to `framing`, and return
    /// the matching payload encoder.
    ///
    /// Framing is the tag byte; for tuples additionally a u32 BE element
    /// count followed, depth-first, by the framing of each position. Record
    /// framing is the tag alone — the field layout is fixed. All framing for
    /// a composite value precedes any payload byte, so a stream factors as
    /// `framing ++ payload(v1) ++ payload(v2) ++ ...`.
    pub fn resolve(
        sample: &Value,
        marshal: &Arc<dyn ExtensionMarshal>,
        framing: &mut BytesMut,
    ) -> Result<Encoder> {
        framing.put_u8(sample.tag().byte());
        match sample {
            Value::Null => Ok(Encoder::Null),
            Value::Boolean(_) => Ok(Encoder::Boolean),
            Value::Int64(_) => Ok(Encoder::Int64),
            Value::Float64(_) => Ok(Encoder::Float64),
            Value::String(_) => Ok(Encoder::String),
            Value::Bytes(_) => Ok(Encoder::Bytes),
            Value::Tuple(items) => {
                framing.put_u32(items.len() as u32);
                let mut children = Vec::with_capacity(items.len());
                for item in items {
                    children.push(Encoder::resolve(item, marshal, framing)?);
                }
                Ok(Encoder::Tuple(children))
            }
            Value::Record(_) => Ok(Encoder::Record(Arc::clone(marshal))),
        }
    }

    /// The tag this encoder is bound to.
    pub fn tag(&self) -> TypeTag {
        match self {
            Encoder::Null => TypeTag::Null,
            Encoder::Boolean => TypeTag::Boolean,
            Encoder::Int64 => TypeTag::Int64,
            Encoder::Float64 => TypeTag::Float64,
            Encoder::String => TypeTag::String,
            Encoder::Bytes => TypeTag::Bytes,
            Encoder::Tuple(_) => TypeTag::Tuple,
            Encoder::Record(_) => TypeTag::Record,
        }
    }

    /// Human-readable kind name, for diagnostics.
    pub fn kind(&self) -> &'static str {
        self.tag().name()
    }

    /// Append the payload bytes for `value`.
    ///
    /// Fails with [`WireError::SlotMismatch`] when `value` diverges from the
    /// kind (or tuple arity) this encoder was resolved against. Per-position
    /// kind drift inside a tuple is caught by the child encoder.
    pub fn encode(&self, value: &Value, dst: &mut BytesMut) -> Result<()> {
        match (self, value) {
            (Encoder::Null, Value::Null) => Ok(()),
            (Encoder::Boolean, Value::Boolean(v)) => {
                put_bool(dst, *v);
                Ok(())
            }
            (Encoder::Int64, Value::Int64(v)) => {
                put_i64(dst, *v);
                Ok(())
            }
            (Encoder::Float64, Value::Float64(v)) => {
                put_f64(dst, *v);
                Ok(())
            }
            (Encoder::String, Value::String(v)) => put_str(dst, v),
            (Encoder::Bytes, Value::Bytes(v)) => put_bytes(dst, v),
            (Encoder::Tuple(children), Value::Tuple(items)) => {
                if children.len() != items.len() {
                    return Err(WireError::SlotMismatch {
                        expected: format!("tuple[{}]", children.len()),
                        got: format!("tuple[{}]", items.len()),
                    });
                }
                for (child, item) in children.iter().zip(items) {
                    child.encode(item, dst)?;
                }
                Ok(())
            }
            (Encoder::Record(marshal), Value::Record(record)) => {
                encode_record(record, marshal.as_ref(), dst)
            }
            (encoder, value) => Err(WireError::SlotMismatch {
                expected: encoder.kind().to_owned(),
                got: value.kind().to_owned(),
            }),
        }
    }
}

impl fmt::Debug for Encoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoder::Tuple(children) => f.debug_tuple("Tuple").field(children).finish(),
            other => f.write_str(other.kind()),
        }
    }
}
