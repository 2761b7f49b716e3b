//! Type-tagged binary value encoding.
//!
//! Defines the wire vocabulary shared with a cooperating reader on the other
//! side of a process boundary:
//! - A single byte tag per value kind ([`TypeTag`])
//! - Big-endian scalar payloads, u32 length prefixes ([`scalar`])
//! - Tuples with per-position encoders cached from a sample ([`Encoder`])
//! - One fixed-shape domain record with an opaque extension blob ([`TileRecord`])
//!
//! This crate only encodes. Decoding is the remote reader's concern, and the
//! transport carrying the bytes lives behind the `Sink` trait in
//! `tagstream-collect`.

pub mod encoder;
pub mod error;
pub mod marshal;
pub mod record;
pub mod scalar;
pub mod tag;
pub mod value;

pub use bytes::Bytes;
pub use encoder::Encoder;
pub use error::{Result, WireError};
pub use marshal::{EmptyMarshal, ExtensionMarshal, JsonMarshal};
pub use record::{encode_record, TileRecord};
pub use tag::TypeTag;
pub use value::Value;
