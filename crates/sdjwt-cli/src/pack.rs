//! # Pack Subcommand
//!
//! ```bash
//! sdjwt pack --claims claims.json --frame frame.yaml --hash-alg sha-384
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use sdjwt_core::reserved::SD_ALG;
use sdjwt_core::{FixedSalt, HashAlgorithm, Sha2Hasher};
use sdjwt_pack::{pack, DisclosureFrame, PackOptions};

use crate::input::{load_document, print_json};

/// Arguments for `sdjwt pack`.
#[derive(Args, Debug)]
pub struct PackArgs {
    /// Claims to blind (JSON or YAML object).
    #[arg(long)]
    pub claims: PathBuf,

    /// Disclosure frame (JSON or YAML object).
    #[arg(long)]
    pub frame: PathBuf,

    /// Digest algorithm: sha-256, sha-384 or sha-512.
    #[arg(long, default_value = "sha-256")]
    pub hash_alg: HashAlgorithm,

    /// Use one fixed salt for every disclosure. For reproducible fixtures only.
    #[arg(long)]
    pub fixed_salt: Option<String>,

    /// Decoy digests to add to the top-level `_sd`, replacing the frame's own count.
    #[arg(long)]
    pub decoys: Option<usize>,

    /// Pretty-print the output.
    #[arg(long)]
    pub pretty: bool,
}

/// Output of `sdjwt pack`: the blinded claims (with `_sd_alg`) and every
/// disclosure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackedDocument {
    pub claims: Value,
    pub disclosures: Vec<String>,
}

/// Blind the claims in `args`.
pub fn pack_document(args: &PackArgs) -> Result<PackedDocument> {
    let claims = load_document(&args.claims)?;
    if !claims.is_object() {
        bail!("{} must contain a JSON object", args.claims.display());
    }
    let frame_value = load_document(&args.frame)?;
    let mut frame = DisclosureFrame::from_value(&frame_value)
        .with_context(|| format!("invalid frame in {}", args.frame.display()))?;
    if let Some(decoys) = args.decoys {
        frame = frame.decoys(decoys);
    }

    let mut options = PackOptions::default();
    if let Some(salt) = &args.fixed_salt {
        tracing::warn!("packing with a fixed salt; output is linkable");
        options = options.with_salt_generator(FixedSalt::new(salt.clone()));
    }

    let hasher = Sha2Hasher::new(args.hash_alg);
    let packed = pack(&claims, &frame, &hasher, &options)?;

    let mut blinded = packed.claims;
    if let Value::Object(map) = &mut blinded {
        map.insert(SD_ALG.to_string(), Value::String(args.hash_alg.as_str().to_string()));
    }
    Ok(PackedDocument {
        claims: blinded,
        disclosures: packed.disclosures,
    })
}

/// Execute `sdjwt pack`.
pub fn run_pack(args: &PackArgs) -> Result<u8> {
    let doc = pack_document(args)?;
    print_json(&doc, args.pretty)?;
    Ok(0)
}
