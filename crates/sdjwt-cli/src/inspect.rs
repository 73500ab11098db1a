//! # Inspect Subcommand
//!
//! Decodes a compact SD-JWT for reading. Nothing is verified.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use serde_json::{Map, Value};

use sdjwt_compact::{decode_jwt, split};
use sdjwt_core::{DefaultHasherProvider, Disclosure, HasherProvider};

use crate::input::{load_text, print_json};

/// Arguments for `sdjwt inspect`.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// File holding the compact SD-JWT (`-` for stdin).
    pub compact: PathBuf,

    /// Pretty-print the output.
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Serialize)]
pub struct InspectedDisclosure {
    pub digest: String,
    pub salt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<Value>,
    pub value: Value,
}

#[derive(Debug, Serialize)]
pub struct InspectedJwt {
    pub header: Map<String, Value>,
    pub payload: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct Inspection {
    pub header: Map<String, Value>,
    pub payload: Map<String, Value>,
    pub disclosures: Vec<InspectedDisclosure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_binding: Option<InspectedJwt>,
}

pub fn inspect(compact: &str) -> Result<Inspection> {
    let parts = split(compact)?;
    let jwt = decode_jwt(&parts.jwt).context("issuer JWT")?;

    let hasher = DefaultHasherProvider.hasher_for_payload(&Value::Object(jwt.payload.clone()))?;

    let disclosures = parts
        .disclosures
        .iter()
        .enumerate()
        .map(|(i, encoded)| -> Result<InspectedDisclosure> {
            let d = Disclosure::decode(encoded).with_context(|| format!("disclosure {i}"))?;
            Ok(InspectedDisclosure {
                digest: d.digest(hasher.as_ref())?,
                salt: d.salt().to_string(),
                key: d.raw_key().cloned(),
                value: d.value().clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let key_binding = parts
        .key_binding_jwt
        .as_deref()
        .map(|kb| decode_jwt(kb).context("key-binding JWT"))
        .transpose()?
        .map(|kb| InspectedJwt {
            header: kb.header,
            payload: kb.payload,
        });

    Ok(Inspection {
        header: jwt.header,
        payload: jwt.payload,
        disclosures,
        key_binding,
    })
}

/// Execute `sdjwt inspect`.
pub fn run_inspect(args: &InspectArgs) -> Result<u8> {
    let compact = load_text(&args.compact)?;
    print_json(&inspect(&compact)?, args.pretty)?;
    Ok(0)
}
