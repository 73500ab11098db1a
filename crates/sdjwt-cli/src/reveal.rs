//! # Unpack, Paths and Select Subcommands
//!
//! All three take a blinded payload plus a disclosure list. `_sd_alg` in
//! the payload picks the digest algorithm.
//!
//! ```bash
//! sdjwt unpack --payload payload.json --disclosures disclosures.json
//! sdjwt paths  --payload payload.json --disclosures disclosures.json
//! sdjwt select --payload payload.json --disclosures disclosures.json \
//!     --path '$.address.street' --path nationalities[1]
//! ```

use std::collections::BTreeMap;

use anyhow::Result;
use clap::Args;
use serde_json::Value;

use sdjwt_core::{DefaultHasherProvider, Limits};
use sdjwt_verify::{unpack_payload, DisclosurePathIndex, SelectOptions, UnpackOptions};

use crate::input::{print_json, PresentationArgs};

/// Arguments for `sdjwt unpack` and `sdjwt paths`.
#[derive(Args, Debug)]
pub struct RevealArgs {
    #[command(flatten)]
    pub input: PresentationArgs,

    /// Pretty-print the output.
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for `sdjwt select`.
#[derive(Args, Debug)]
pub struct SelectArgs {
    #[command(flatten)]
    pub input: PresentationArgs,

    /// Path to reveal, e.g. `$.address.street` or `nationalities[0]`. Repeatable.
    #[arg(long = "path", required = true)]
    pub paths: Vec<String>,

    /// Skip paths that match no disclosure instead of failing.
    #[arg(long)]
    pub ignore_invalid: bool,

    /// Pretty-print the output.
    #[arg(long)]
    pub pretty: bool,
}

pub fn unpack_claims(input: &PresentationArgs) -> Result<Value> {
    let (payload, disclosures) = input.load()?;
    Ok(unpack_payload(
        &payload,
        &disclosures,
        &DefaultHasherProvider,
        &UnpackOptions::default(),
    )?)
}

fn path_index(input: &PresentationArgs) -> Result<DisclosurePathIndex> {
    let (payload, disclosures) = input.load()?;
    Ok(DisclosurePathIndex::from_payload(
        &payload,
        &disclosures,
        &DefaultHasherProvider,
        &Limits::default(),
    )?)
}

pub fn disclosure_paths(input: &PresentationArgs) -> Result<BTreeMap<String, Value>> {
    Ok(path_index(input)?.list_disclosure_paths())
}

pub fn select_disclosures(args: &SelectArgs) -> Result<Vec<String>> {
    let index = path_index(&args.input)?;
    Ok(index.disclosures_for_paths(
        &args.paths,
        SelectOptions {
            ignore_invalid: args.ignore_invalid,
        },
    )?)
}

/// Execute `sdjwt unpack`.
pub fn run_unpack(args: &RevealArgs) -> Result<u8> {
    print_json(&unpack_claims(&args.input)?, args.pretty)?;
    Ok(0)
}

/// Execute `sdjwt paths`.
pub fn run_paths(args: &RevealArgs) -> Result<u8> {
    print_json(&disclosure_paths(&args.input)?, args.pretty)?;
    Ok(0)
}

/// Execute `sdjwt select`.
pub fn run_select(args: &SelectArgs) -> Result<u8> {
    print_json(&select_disclosures(args)?, args.pretty)?;
    Ok(0)
}
