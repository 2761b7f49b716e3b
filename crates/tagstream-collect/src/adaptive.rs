//! The adaptive collector: frame once, payload-only thereafter.

use std::sync::Arc;

use bytes::BytesMut;
use tagstream_wire::{EmptyMarshal, Encoder, ExtensionMarshal, Result, Value};

use crate::sink::Sink;

const INITIAL_BUFFER_CAPACITY: usize = 8 * 1024;

/// Slot lifecycle: the transition to `Bound` happens on the first collect
/// call and is irreversible for the life of the collector.
enum Slot {
    Unbound,
    Bound(Encoder),
}

/// Streams same-shaped values onto a sink, emitting wire framing (tag and,
/// for tuples, a u32 BE count plus child tags) exactly once per collector
/// lifetime.
///
/// The collector realizes the Slot contract: one output position carries one
/// consistent value kind — and for tuples one arity and per-position kind —
/// for its whole lifetime. Values diverging from the first one fail with
/// [`WireError::SlotMismatch`](tagstream_wire::WireError::SlotMismatch).
///
/// An optional key, set before first use, reshapes every collected value `v`
/// into the 2-tuple `(key, v)`; the key payload is re-encoded on every call,
/// so keyed output is byte-identical to collecting `(key, v)` unkeyed.
pub struct AdaptiveCollector<S> {
    sink: S,
    marshal: Arc<dyn ExtensionMarshal>,
    key: Option<Value>,
    slot: Slot,
    buf: BytesMut,
}

impl<S: Sink> AdaptiveCollector<S> {
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
            key: None,
            slot: Slot::Unbound,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
        }
    }

    /// Reshape every collected value `v` into `(key, v)`.
    ///
    /// Must be called before the first collect; the effective slot kind
    /// becomes a 2-tuple of the key kind and the value kind.
    pub fn with_key(mut self, key: Value) -> Self {
        debug_assert!(
            matches!(self.slot, Slot::Unbound),
            "key set after slot bound"
        );
        self.key = Some(key);
        self
    }

    /// Whether the slot has bound an encoder.
    pub fn is_bound(&self) -> bool {
        matches!(self.slot, Slot::Bound(_))
    }

    /// Encode `value` onto the sink.
    ///
    /// The first call writes framing plus payload in a single sink write and
    /// binds the slot; every later call writes payload only.
    pub fn collect(&mut self, value: Value) -> Result<()> {
        let value = match &self.key {
            Some(key) => Value::Tuple(vec![key.clone(), value]),
            None => value,
        };
        self.buf.clear();
        match &self.slot {
            Slot::Unbound => {
                let encoder = Encoder::resolve(&value, &self.marshal, &mut self.buf)?;
                let framing_len = self.buf.len();
                encoder.encode(&value, &mut self.buf)?;
                self.sink.write(&self.buf)?;
                tracing::debug!(kind = encoder.kind(), framing_len, "slot bound");
                self.slot = Slot::Bound(encoder);
            }
            Slot::Bound(encoder) => {
                encoder.encode(&value, &mut self.buf)?;
                self.sink.write(&self.buf)?;
                tracing::trace!(len = self.buf.len(), "payload written");
            }
        }
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
