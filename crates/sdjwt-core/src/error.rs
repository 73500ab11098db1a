//! # Error Types
//!
//! Errors raised by the shared primitives. The engines built on top of this
//! crate wrap these in their own error enums.
//!
//! ## Design
//!
//! - Decode errors name the structural defect, never the disclosure
//!   contents.
//! - Hasher failures are propagated verbatim; nothing here retries.

use thiserror::Error;

/// A disclosure string could not be encoded or decoded.
#[derive(Error, Debug)]
pub enum DisclosureError {
    /// The transport string is not valid base64url (no padding).
    #[error("disclosure is not valid base64url: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded bytes are not UTF-8.
    #[error("disclosure is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// JSON serialization or parsing failed.
    #[error("disclosure JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The decoded JSON is not an array.
    #[error("disclosure must be a JSON array")]
    NotAnArray,

    /// The decoded array has neither 2 nor 3 elements.
    #[error("disclosure array must have 2 (salt, value) or 3 (salt, key, value) elements, got {0}")]
    InvalidLength(usize),

    /// The first element of the array is not a string.
    #[error("disclosure salt must be a string")]
    SaltNotString,
}

/// The injected hash function failed or could not be resolved.
#[derive(Error, Debug)]
pub enum HashError {
    /// No hasher is available for the requested algorithm identifier.
    #[error("unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The hasher itself reported a failure.
    #[error("hasher failed: {0}")]
    Failed(String),
}

/// A digest index could not be built from a list of disclosures.
#[derive(Error, Debug)]
pub enum IndexError {
    /// A disclosure in the list failed to decode.
    #[error("disclosure #{position} is invalid: {source}")]
    Disclosure {
        /// Zero-based position in the presented list.
        position: usize,
        /// The decode failure.
        #[source]
        source: DisclosureError,
    },

    /// Hashing a disclosure failed.
    #[error(transparent)]
    Hash(#[from] HashError),

    /// More disclosures were presented than the configured limit allows.
    #[error("{count} disclosures exceed the limit of {limit}")]
    TooManyDisclosures {
        /// Number of disclosures presented.
        count: usize,
        /// Configured maximum.
        limit: usize,
    },
}
