/// Errors from encoding or decoding Recall documents.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// An in-memory sequence could not be serialized. Does not occur for
    /// well-formed items; surfaced rather than panicking.
    #[error("failed to encode history document: {0}")]
    Encode(#[source] serde_json::Error),

    /// The byte stream is not a valid document of the expected shape
    /// (malformed JSON, wrong element type, truncated stream).
    #[error("malformed document: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Result alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
