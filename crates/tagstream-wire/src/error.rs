/// Errors that can occur while encoding values onto a sink.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The value's runtime kind has no registered tag.
    #[error("unsupported type: {0}")]
    UnsupportedType(&'static str),

    /// A bound slot observed a value whose kind or shape diverges from the
    /// sample the slot was bound against.
    #[error("slot mismatch (bound to {expected}, got {got})")]
    SlotMismatch { expected: String, got: String },

    /// A string or byte payload does not fit the u32 length prefix.
    #[error("payload too large ({size} bytes, max 4294967295)")]
    PayloadTooLarge { size: usize },

    /// An I/O error from the sink, propagated unchanged.
    #[error("sink write error: {0}")]
    Io(#[from] std::io::Error),

    /// The extension marshal failed to render the record.
    #[error("extension marshal error: {0}")]
    Marshal(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WireError>;
