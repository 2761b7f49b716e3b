//! The eager collector: full framing on every call.

use std::sync::Arc;

use bytes::{BufMut, BytesMut};
use tagstream_wire::record::encode_record;
use tagstream_wire::scalar::{put_bool, put_bytes, put_f64, put_i64, put_str};
use tagstream_wire::{EmptyMarshal, ExtensionMarshal, Result, TypeTag, Value};

use crate::sink::Sink;

const INITIAL_BUFFER_CAPACITY: usize = 8 * 1024;

/// Streams independently framed values onto a sink.
///
/// Every call classifies the value and writes tag plus payload; tuples are
/// framed with a single-byte element count and each element is re-tagged,
/// recursively. This count width deliberately diverges from the adaptive
/// collector's u32 framing — readers of the two stream flavors are distinct.
pub struct EagerCollector<S> {
    sink: S,
    marshal: Arc<dyn ExtensionMarshal>,
    buf: BytesMut,
}

impl<S: Sink> EagerCollector<S> {
    /// Bind a collector to `sink` with a zero-length extension marshal.
    pub fn new(sink: S) -> Self {
        Self::with_marshal(sink, Arc::new(EmptyMarshal))
    }

    /// Bind a collector to `sink` with an explicit extension marshal for
    /// tile records.
    pub fn with_marshal(sink: S, marshal: Arc<dyn ExtensionMarshal>) -> Self {
        Self {
            sink,
            marshal,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
        }
    }

    /// Classify and encode `value`, framing included, as one sink write.
    pub fn collect(&mut self, value: &Value) -> Result<()> {
        self.buf.clear();
        encode_value(value, self.marshal.as_ref(), &mut self.buf)?;
        self.sink.write(&self.buf)?;
        tracing::trace!(kind = value.kind(), len = self.buf.len(), "value written");
        Ok(())
    }

    /// Write a pre-encoded buffer as a bytes value, bypassing kind
    /// inspection: bytes tag, u32 BE length, then the buffer verbatim.
    /// The caller asserts the payload is what the reader expects.
    pub fn collect_raw(&mut self, bytes: &[u8]) -> Result<()> {
        self.buf.clear();
        self.buf.put_u8(TypeTag::Bytes.byte());
        put_bytes(&mut self.buf, bytes)?;
        self.sink.write(&self.buf)?;
        tracing::trace!(len = bytes.len(), "raw buffer passed through");
        Ok(())
    }

    /// Borrow the sink.
    pub fn get_ref(&self) -> &S {
        &self.sink
    }

    /// Mutably borrow the sink (e.g. for the owner's end-of-stream signal).
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the collector and return the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

fn encode_value(value: &Value, marshal: &dyn ExtensionMarshal, dst: &mut BytesMut) -> Result<()> {
    dst.put_u8(value.tag().byte());
    match value {
        Value::Null => Ok(()),
        Value::Boolean(v) => {
            put_bool(dst, *v);
            Ok(())
        }
        Value::Int64(v) => {
            put_i64(dst, *v);
            Ok(())
        }
        Value::Float64(v) => {
            put_f64(dst, *v);
            Ok(())
        }
        Value::String(v) => put_str(dst, v),
        Value::Bytes(v) => put_bytes(dst, v),
        Value::Tuple(items) => {
            // Low byte only: arity above 255 is not representable in this
            // framing.
            dst.put_u8(items.len() as u8);
            for item in items {
                encode_value(item, marshal, dst)?;
            }
            Ok(())
        }
        Value::Record(record) => encode_record(record, marshal, dst),
    }
}
