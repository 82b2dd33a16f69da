//! # Error Types
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations. Hashing itself cannot fail; errors come only from parsing
//! hex digests and from writing output.

use thiserror::Error;

/// Top-level error type for cryptolab.
#[derive(Error, Debug)]
pub enum CryptolabError {
    /// A hex digest string could not be parsed.
    #[error("digest parse error: {0}")]
    DigestParse(#[from] DigestParseError),

    /// IO error, e.g. a failed write to standard output.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error parsing a hex-encoded SHA-256 digest.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestParseError {
    /// The trimmed input was not exactly 64 characters.
    #[error("digest hex must be {expected} chars, got {actual}")]
    InvalidLength {
        /// Required number of hex characters.
        expected: usize,
        /// Number of characters supplied.
        actual: usize,
    },

    /// A character outside `0-9a-fA-F` was found.
    #[error("invalid hex character {character:?} at position {position}")]
    InvalidCharacter {
        /// Zero-based character offset into the trimmed input.
        position: usize,
        /// The offending character.
        character: char,
    },
}
