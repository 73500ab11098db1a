//! # sdjwt-core — Foundational Types for Selective Disclosure
//!
//! This crate is the leaf of the workspace. It defines the primitives shared
//! by the issuance side (`sdjwt-pack`) and the verification side
//! (`sdjwt-verify`, `sdjwt-compact`):
//!
//! - **Disclosure codec** ([`Disclosure`]): the `[salt, value]` and
//!   `[salt, key, value]` fragments and their base64url transport string.
//! - **Hashing** ([`Hasher`], [`HashAlgorithm`], [`HasherProvider`]): the
//!   injected content-addressing function, with a SHA-2 implementation.
//! - **Digest index** ([`DigestIndex`]): digest → decoded disclosure, rebuilt
//!   fresh for every unpack or path-index operation.
//! - **Reserved names** ([`reserved`]): `_sd`, `...`, `_sd_alg` and the frame
//!   directives, shared by every component.
//! - **Salts** ([`SaltGenerator`]), **traversal limits** ([`Limits`]) and
//!   **disclosure paths** ([`DisclosurePath`]).
//!
//! ## Key Design Principles
//!
//! 1. **The encoded string is the source of truth.** A [`Disclosure`] keeps
//!    the exact transport string it was decoded from; digests are always
//!    computed over that string, never over a re-serialization of the
//!    decoded value.
//!
//! 2. **Claim trees are `serde_json::Value`.** A closed tagged union with
//!    exhaustive `match` everywhere. No engine mutates its input tree.
//!
//! 3. **Bounded traversal.** Every recursive walk over untrusted input is
//!    bounded by [`Limits`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `sdjwt-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod digest_index;
pub mod disclosure;
pub mod encoding;
pub mod error;
pub mod hasher;
pub mod limits;
pub mod path;
pub mod reserved;
pub mod salt;

// Re-export primary types for ergonomic imports.
pub use digest_index::DigestIndex;
pub use disclosure::Disclosure;
pub use error::{DisclosureError, HashError, IndexError};
pub use hasher::{
    payload_hash_alg, DefaultHasherProvider, HashAlgorithm, Hasher, HasherProvider, Sha2Hasher,
};
pub use limits::Limits;
pub use path::DisclosurePath;
pub use salt::{FixedSalt, RandomSalt, SaltGenerator, DEFAULT_SALT_LENGTH};
