//! Error types for the core module.

/// Core error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The identifier did not split into exactly two segments on `/`.
    #[error("malformed identifier `{input}`: expected owner/repo, found {segments} segment(s)")]
    MalformedIdentifier {
        /// Raw text as typed.
        input: String,
        /// Number of segments the split produced.
        segments: usize,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
