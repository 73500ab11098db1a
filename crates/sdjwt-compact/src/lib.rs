//! # sdjwt-compact — Compact SD-JWT Envelope
//!
//! The wire form `jwt~d1~...~dn~[kb]` and the three flows built on it:
//!
//! - **Issue** (`issue.rs`): [`issue`] packs, stamps `_sd_alg`/`cnf` and
//!   signs through an injected [`Signer`].
//! - **Verify** (`verify.rs`): [`verify`] checks the issuer signature through
//!   an injected [`Verifier`], enforces the [`KeyBindingPolicy`], and
//!   unpacks.
//! - **Present** (`present.rs`): [`present`] keeps the issuer JWT and
//!   selects the disclosures for a list of paths.
//!
//! ## Crate Policy
//!
//! - No key material and no JOSE algorithm code: signing and signature
//!   checks are async callbacks owned by the caller.
//! - Hashing stays synchronous and is resolved from `_sd_alg` through a
//!   [`HasherProvider`](sdjwt_core::HasherProvider).

pub mod compact;
pub mod error;
pub mod issue;
pub mod jwt;
pub mod present;
pub mod verify;

pub use compact::{combine, split, SdJwtParts, FORMAT_SEPARATOR};
pub use error::{CallbackError, CompactError, IssueError, JwtError, PresentError, VerifyError};
pub use issue::{issue, IssueOptions, Signer, SD_JWT_TYP};
pub use jwt::{decode_jwt, DecodedJwt};
pub use present::{list_disclosure_paths, present};
pub use verify::{verify, KeyBindingPolicy, KeyBindingVerifier, Verifier, VerifyOptions, KB_JWT_TYP};
