//! # sdjwt-cli — Selective-Disclosure Command-Line Tool
//!
//! File-driven front end to the pack, unpack and path-index engines, plus a
//! decoder for compact SD-JWTs.
//!
//! ## Subcommands
//!
//! - `pack`: blind claims against a disclosure frame
//! - `unpack`: reveal a payload with a disclosure list
//! - `paths`: list every revealable path and its value
//! - `select`: minimal disclosure list for a set of paths
//! - `inspect`: decode a compact SD-JWT
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here; semantics live in the library crates.
//! - No signing and no signature verification.
//! - Results go to stdout as JSON; logs go to stderr.

pub mod input;
pub mod inspect;
pub mod pack;
pub mod reveal;
