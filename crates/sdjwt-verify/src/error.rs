//! Verification-side errors.
//!
//! The unpack path is the attack surface of credential verification: every
//! malformed or ambiguous input fails closed with its own variant, so a
//! gateway can tell a bad credential from its own misconfiguration.

use sdjwt_core::{HashError, IndexError};
use thiserror::Error;

/// Errors raised while reconstructing claims from a blinded tree.
#[derive(Error, Debug)]
pub enum UnpackError {
    /// A disclosure referenced from `_sd` has no key, or its key is not a
    /// non-empty string.
    #[error("disclosure {digest} has an invalid claim name: {key}")]
    InvalidClaimName {
        /// Digest of the offending disclosure.
        digest: String,
        /// The key as JSON, or `<none>` for a 2-element disclosure.
        key: String,
    },

    /// A disclosure names a reserved claim.
    #[error("disclosed claim name {0:?} is reserved")]
    ReservedClaimName(String),

    /// A disclosed claim collides with a claim already present at the same
    /// level.
    #[error("disclosed claim {0:?} conflicts with an existing claim")]
    ClaimConflict(String),

    /// An array marker resolves to a 3-element disclosure.
    #[error("array element disclosure {digest} is malformed: expected 2 elements (salt, value)")]
    ArrayElementShape {
        /// Digest of the offending disclosure.
        digest: String,
    },

    /// `_sd` is not an array of strings.
    #[error("_sd at {path} must be an array of digest strings")]
    MalformedDigestArray {
        /// Location of the offending object.
        path: String,
    },

    /// An object carrying `...` is not a single-field marker with a string
    /// digest.
    #[error("array element marker at {path} must be {{\"...\": <digest string>}}")]
    MalformedArrayMarker {
        /// Location of the offending element.
        path: String,
    },

    /// A resolved digest is referenced more than once in the tree.
    #[error("digest {digest} is referenced more than once")]
    DuplicateDigestReference {
        /// The repeated digest.
        digest: String,
    },

    /// The blinded tree or a disclosed value nests too deep.
    #[error("nesting depth exceeds limit of {limit} at {path}")]
    DepthLimitExceeded {
        /// Location where the limit was hit.
        path: String,
        /// Configured maximum depth.
        limit: usize,
    },

    /// `_sd_alg` names an algorithm no hasher is available for.
    #[error("unsupported hash algorithm: {0}")]
    UnsupportedHashAlgorithm(String),

    /// The presented disclosures could not be indexed.
    #[error(transparent)]
    Index(#[from] IndexError),

    /// The hasher failed.
    #[error(transparent)]
    Hash(#[from] HashError),
}

impl UnpackError {
    pub(crate) fn from_provider(err: HashError) -> Self {
        match err {
            HashError::UnsupportedAlgorithm(alg) => Self::UnsupportedHashAlgorithm(alg),
            other => Self::Hash(other),
        }
    }
}

/// Errors raised by the disclosure path index.
#[derive(Error, Debug)]
pub enum PathIndexError {
    /// No disclosure is reachable at the requested path.
    #[error("cannot find disclosure for path {0}")]
    UnknownPath(String),

    /// The blinded tree or a disclosed value nests too deep.
    #[error("nesting depth exceeds limit of {limit} at {path}")]
    DepthLimitExceeded {
        /// Location where the limit was hit.
        path: String,
        /// Configured maximum depth.
        limit: usize,
    },

    /// The presented disclosures could not be indexed.
    #[error(transparent)]
    Index(#[from] IndexError),

    /// `_sd_alg` could not be resolved to a hasher.
    #[error(transparent)]
    Hash(#[from] HashError),
}
