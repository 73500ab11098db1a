//! Pack-time errors. Every variant signals an issuer-side programming error
//! (bad frame, bad claims, colliding disclosures), never attacker input.

use sdjwt_core::{DisclosureError, HashError};
use thiserror::Error;

/// Errors raised while blinding a claim tree.
#[derive(Error, Debug)]
pub enum PackError {
    /// The frame, or a nested frame, is not an object or has a malformed
    /// directive.
    #[error("invalid disclosure frame at {path}: {reason}")]
    InvalidFrame {
        /// Location of the offending frame level.
        path: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The claims at a framed position are not an object or array.
    #[error("claims at {path} must be an object or array")]
    InvalidClaims {
        /// Location of the offending claims.
        path: String,
    },

    /// A frame names a child that does not exist in the claims.
    #[error("disclosure frame targets {path}, which is not present in the claims")]
    MissingFrameTarget {
        /// Location the frame points at.
        path: String,
    },

    /// A reserved name would be emitted as a claim name.
    #[error("claim name {name:?} at {path} is reserved and cannot be used")]
    ReservedClaimName {
        /// Location of the offending claim.
        path: String,
        /// The reserved name.
        name: String,
    },

    /// Both `_sd_decoy` and the deprecated `_decoyCount` were supplied.
    #[error("frame at {path} sets both _sd_decoy and _decoyCount")]
    ConflictingDecoyCount {
        /// Location of the offending frame level.
        path: String,
    },

    /// The decoy count is negative.
    #[error("decoy count at {path} must not be negative, got {count}")]
    NegativeDecoyCount {
        /// Location of the offending frame level.
        path: String,
        /// The count as supplied.
        count: i64,
    },

    /// The decoy count is not a non-negative integer.
    #[error("decoy count at {path} must be a non-negative integer, got {value}")]
    InvalidDecoyCount {
        /// Location of the offending frame level.
        path: String,
        /// The value as supplied.
        value: String,
    },

    /// Two disclosures in one batch hash to the same digest.
    #[error("duplicate digest {digest} in disclosure batch")]
    DuplicateDigest {
        /// The colliding digest.
        digest: String,
    },

    /// The frame or claims nest deeper than the configured limit.
    #[error("nesting depth exceeds limit of {limit} at {path}")]
    DepthLimitExceeded {
        /// Location where the limit was hit.
        path: String,
        /// Configured maximum depth.
        limit: usize,
    },

    /// The hasher failed.
    #[error(transparent)]
    Hash(#[from] HashError),

    /// A disclosure could not be serialized.
    #[error(transparent)]
    Disclosure(#[from] DisclosureError),
}
