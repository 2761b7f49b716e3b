//! Sink-bound collectors for the tagstream wire format.
//!
//! A collector binds to a [`Sink`] for the lifetime of an output channel and
//! turns application values into tagged wire bytes. Two disciplines share
//! the tag vocabulary of `tagstream-wire`:
//!
//! - [`AdaptiveCollector`] emits framing (tag, counts, child tags) once, on
//!   first use, then streams payload-only bytes for every later value.
//! - [`EagerCollector`] classifies and frames every value independently.
//!
//! Everything here is synchronous and single-threaded: a collect call
//! returns after its bytes were handed to the sink, in call order.

pub mod adaptive;
pub mod eager;
pub mod sink;

pub use adaptive::AdaptiveCollector;
pub use eager::EagerCollector;
pub use sink::{BufferSink, Sink, WriteSink};
pub use tagstream_wire::{Result, WireError};
