//! Type-tagged binary value streaming across process boundaries.
//!
//! tagstream encodes heterogeneous application values — scalars, nested
//! tuples, and a fixed-shape geospatial tile record — into a compact,
//! tag-prefixed wire format read by a cooperating remote decoder.
//!
//! # Crate Structure
//!
//! - [`wire`] — tag registry, scalar/tuple/record encoders, dispatch
//! - [`collect`] — sink capability and the adaptive/eager collectors

/// Re-export wire format types.
pub mod wire {
    pub use tagstream_wire::*;
}

/// Re-export collector types.
pub mod collect {
    pub use tagstream_collect::*;
}
