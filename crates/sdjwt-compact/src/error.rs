//! Errors of the compact envelope: framing, JWT structure, issuance,
//! verification and presentation.

use sdjwt_pack::PackError;
use sdjwt_verify::{PathIndexError, UnpackError};
use thiserror::Error;

/// Failure reported by an injected signer or verifier.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The combined `jwt~d1~...~dn~[kb]` string is malformed.
#[derive(Error, Debug)]
pub enum CompactError {
    /// No `~` separator at all.
    #[error("not a compact SD-JWT: missing '~' separator")]
    MissingSeparator,

    /// The issuer JWT segment is empty.
    #[error("compact SD-JWT has an empty issuer JWT")]
    EmptyJwt,

    /// A disclosure segment between two separators is empty.
    #[error("compact SD-JWT has an empty disclosure at position {position}")]
    EmptyDisclosure {
        /// Zero-based disclosure position.
        position: usize,
    },
}

/// A JWT is not `header.payload.signature` with JSON-object header and
/// payload.
#[derive(Error, Debug)]
pub enum JwtError {
    /// Not exactly three dot-separated segments.
    #[error("JWT must have 3 segments, got {0}")]
    SegmentCount(usize),

    /// A segment is not base64url.
    #[error("JWT {segment} is not valid base64url: {source}")]
    Base64 {
        /// `header`, `payload` or `signature`.
        segment: &'static str,
        #[source]
        source: base64::DecodeError,
    },

    /// A segment is not JSON.
    #[error("JWT {segment} is not valid JSON: {source}")]
    Json {
        /// `header` or `payload`.
        segment: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A segment is JSON but not an object.
    #[error("JWT {segment} must be a JSON object")]
    NotAnObject {
        /// `header` or `payload`.
        segment: &'static str,
    },
}

/// Issuance failed.
#[derive(Error, Debug)]
pub enum IssueError {
    /// The payload to issue is not a JSON object.
    #[error("SD-JWT payload must be a JSON object")]
    InvalidPayload,

    /// Blinding the payload failed.
    #[error(transparent)]
    Pack(#[from] PackError),

    /// The header or payload could not be serialized.
    #[error(transparent)]
    Jwt(#[from] JwtError),

    /// The signer reported a failure.
    #[error("signer failed: {0}")]
    Signer(#[source] CallbackError),
}

/// Verification failed. Every variant means the presentation must not be
/// trusted.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// The combined format is malformed.
    #[error(transparent)]
    Compact(#[from] CompactError),

    /// The issuer JWT or key-binding JWT is malformed.
    #[error(transparent)]
    Jwt(#[from] JwtError),

    /// The issuer signature did not verify, or the verifier failed.
    #[error("failed to verify SD-JWT signature")]
    InvalidSignature,

    /// Key binding is required but the payload has no `cnf.jwk`.
    #[error("no holder public key (cnf.jwk) in SD-JWT")]
    MissingHolderKey,

    /// Key binding is required but no key-binding JWT was presented.
    #[error("no key-binding JWT found")]
    MissingKeyBindingJwt,

    /// The key-binding JWT header `typ` is not `kb+jwt`.
    #[error("key-binding JWT has invalid header type {0:?}")]
    InvalidKeyBindingType(Option<String>),

    /// The key-binding JWT payload lacks a required claim.
    #[error("key-binding JWT has no {0} claim")]
    MissingKeyBindingClaim(&'static str),

    /// The key-binding verifier rejected the proof or failed.
    #[error("failed to verify key-binding JWT")]
    KeyBindingRejected,

    /// The disclosures could not be applied to the payload.
    #[error(transparent)]
    Unpack(#[from] UnpackError),
}

/// Building a presentation or listing its paths failed.
#[derive(Error, Debug)]
pub enum PresentError {
    /// The combined format is malformed.
    #[error(transparent)]
    Compact(#[from] CompactError),

    /// The issuer JWT is malformed.
    #[error(transparent)]
    Jwt(#[from] JwtError),

    /// A path could not be resolved or indexing failed.
    #[error(transparent)]
    PathIndex(#[from] PathIndexError),
}
