//! # Reserved Names
//!
//! The closed set of property names with structural meaning in blinded
//! claim trees and disclosure frames. Every component matches against these
//! constants; none of them spells the literals itself.

/// Per-object array of digests of the disclosed properties at that level.
/// Also the frame directive naming the keys/indices to blind.
pub const SD_DIGESTS: &str = "_sd";

/// Top-level property naming the digest algorithm of the whole structure.
pub const SD_ALG: &str = "_sd_alg";

/// Key of the single-field marker object that replaces a disclosed array
/// element.
pub const ARRAY_ELEMENT_DIGEST: &str = "...";

/// Frame directive: number of decoy digests to add at this level.
pub const SD_DECOY: &str = "_sd_decoy";

/// Deprecated alias of [`SD_DECOY`]. A frame may carry one or the other,
/// never both.
pub const SD_DECOY_COUNT_DEPRECATED: &str = "_decoyCount";

/// Digest algorithm assumed when a blinded tree carries no [`SD_ALG`].
pub const DEFAULT_HASH_ALG: &str = "sha-256";

/// Names that may never appear as the key of an object-property disclosure.
pub const RESERVED_CLAIM_NAMES: [&str; 2] = [SD_DIGESTS, ARRAY_ELEMENT_DIGEST];

/// Returns `true` if `name` may not be used as a disclosed claim name.
pub fn is_reserved_claim_name(name: &str) -> bool {
    RESERVED_CLAIM_NAMES.contains(&name)
}

/// Returns `true` if `key` is a frame directive rather than a nested frame.
pub fn is_frame_directive(key: &str) -> bool {
    matches!(key, SD_DIGESTS | SD_DECOY | SD_DECOY_COUNT_DEPRECATED)
}
