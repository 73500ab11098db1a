//! # sdjwt-pack — Issuance-Side Blinding
//!
//! Turns a claim tree into a blinded tree plus the disclosures that can
//! re-reveal it:
//!
//! - **Frame** (`frame.rs`): the validated [`DisclosureFrame`], parsed once
//!   from its JSON form or built in code.
//! - **Pack engine** (`pack.rs`): [`pack`], recursive over the claims and
//!   mirrored by the frame, including recursive disclosures.
//! - **Decoys** (`decoy.rs`): digests of fresh salts that pad `_sd` arrays
//!   and disclosable arrays.
//!
//! ## Crate Policy
//!
//! - Depends only on `sdjwt-core` internally.
//! - Pack errors are issuer bugs; every one is a distinct [`PackError`]
//!   variant.

pub mod decoy;
pub mod error;
pub mod frame;
pub mod pack;

pub use decoy::create_decoys;
pub use error::PackError;
pub use frame::{DisclosureFrame, Selector};
pub use pack::{pack, pack_with_frame_value, PackOptions, PackedClaims};
