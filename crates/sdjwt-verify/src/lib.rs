//! # sdjwt-verify — Verification-Side Engines
//!
//! Everything a verifier or holder does with a blinded tree and a set of
//! presented disclosures:
//!
//! - **Unpack engine** (`unpack.rs`): [`unpack`] reconstructs the revealed
//!   claims; [`unpack_payload`] additionally handles `_sd_alg`.
//! - **Disclosure path index** (`path_index.rs`): [`DisclosurePathIndex`]
//!   lists what can be revealed and where, and selects the minimal
//!   disclosure set for a list of paths.
//!
//! ## Security Invariant
//!
//! This crate receives attacker-controlled input. Every structural defect
//! is a distinct [`UnpackError`] variant; nothing is silently repaired, and
//! every traversal is depth-bounded.
//!
//! ## Crate Policy
//!
//! - Depends only on `sdjwt-core` internally.
//! - Purely synchronous: all hashing happens while the digest index is
//!   built.

pub mod error;
pub mod path_index;
pub mod unpack;

pub use error::{PathIndexError, UnpackError};
pub use path_index::{DisclosureEntry, DisclosurePathIndex, SelectOptions};
pub use unpack::{unpack, unpack_payload, unpack_with_options, UnpackOptions};
