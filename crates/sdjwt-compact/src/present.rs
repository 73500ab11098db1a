//! Holder-side presentation: list what a compact SD-JWT can reveal, and
//! re-emit it with only the disclosures needed for a set of paths.

use std::collections::BTreeMap;

use serde_json::Value;

use sdjwt_core::{HasherProvider, Limits};
use sdjwt_verify::{DisclosurePathIndex, SelectOptions};

use crate::compact::{combine, split, SdJwtParts};
use crate::error::PresentError;
use crate::jwt::decode_jwt;

fn path_index(
    parts: &SdJwtParts,
    provider: &dyn HasherProvider,
    limits: &Limits,
) -> Result<DisclosurePathIndex, PresentError> {
    let jwt = decode_jwt(&parts.jwt)?;
    let payload = Value::Object(jwt.payload);
    Ok(DisclosurePathIndex::from_payload(
        &payload,
        &parts.disclosures,
        provider,
        limits,
    )?)
}

/// `{path: disclosed value}` for every disclosure carried by `compact`.
pub fn list_disclosure_paths(
    compact: &str,
    provider: &dyn HasherProvider,
) -> Result<BTreeMap<String, Value>, PresentError> {
    let parts = split(compact)?;
    Ok(path_index(&parts, provider, &Limits::default())?.list_disclosure_paths())
}

/// Build a presentation revealing `paths`.
///
/// The issuer JWT is kept byte-for-byte; the disclosures are the ones for
/// `paths` plus every ancestor disclosure they need. Any key-binding JWT
/// on the input is dropped: the holder binds the new presentation itself.
pub fn present<S: AsRef<str>>(
    compact: &str,
    paths: &[S],
    provider: &dyn HasherProvider,
    options: SelectOptions,
) -> Result<String, PresentError> {
    let parts = split(compact)?;
    let index = path_index(&parts, provider, &Limits::default())?;
    let selected = index.disclosures_for_paths(paths, options)?;

    tracing::debug!(
        requested = paths.len(),
        selected = selected.len(),
        available = parts.disclosures.len(),
        "built presentation"
    );
    Ok(combine(&parts.jwt, &selected, None))
}
