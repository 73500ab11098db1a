//! # Decoy Digests
//!
//! A decoy is a digest with no disclosure behind it: the hash of a fresh
//! salt. Decoys have the same length and alphabet as real digests, so an
//! observer cannot tell from the size of an `_sd` array or the length of a
//! disclosable array how many real claims are hidden.
//!
//! Counts are unsigned; a negative count in a JSON frame is rejected when
//! the frame is parsed.

use sdjwt_core::{HashError, Hasher, SaltGenerator};

/// Produce `count` decoy digests.
pub fn create_decoys(
    count: usize,
    hasher: &dyn Hasher,
    salts: &dyn SaltGenerator,
) -> Result<Vec<String>, HashError> {
    (0..count).map(|_| hasher.hash(&salts.generate())).collect()
}
