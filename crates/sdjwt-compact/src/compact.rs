//! # Combined Format
//!
//! `<issuer-jwt>~<disclosure>~...~<disclosure>~[<key-binding-jwt>]`
//!
//! The string always ends with a `~` when no key-binding JWT is attached.
//! Disclosures are carried verbatim; digests are computed over exactly the
//! strings found here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CompactError;

/// Separator between the segments of the combined format.
pub const FORMAT_SEPARATOR: char = '~';

/// The segments of a compact SD-JWT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdJwtParts {
    /// Issuer-signed JWT.
    pub jwt: String,
    /// Disclosures, in presentation order.
    pub disclosures: Vec<String>,
    /// Key-binding JWT, if the holder attached one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_binding_jwt: Option<String>,
}

impl SdJwtParts {
    /// Re-assemble the combined format.
    pub fn to_compact(&self) -> String {
        combine(&self.jwt, &self.disclosures, self.key_binding_jwt.as_deref())
    }
}

impl FromStr for SdJwtParts {
    type Err = CompactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        split(s)
    }
}

impl fmt::Display for SdJwtParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_compact())
    }
}

/// Split the combined format into its parts.
///
/// The final segment is the key-binding JWT when non-empty. Empty segments
/// anywhere else are rejected.
pub fn split(compact: &str) -> Result<SdJwtParts, CompactError> {
    let mut segments: Vec<&str> = compact.split(FORMAT_SEPARATOR).collect();
    if segments.len() < 2 {
        return Err(CompactError::MissingSeparator);
    }

    let jwt = segments.remove(0);
    if jwt.is_empty() {
        return Err(CompactError::EmptyJwt);
    }

    let key_binding_jwt = match segments.pop() {
        Some(kb) if !kb.is_empty() => Some(kb.to_string()),
        _ => None,
    };

    let disclosures = segments
        .into_iter()
        .enumerate()
        .map(|(position, d)| {
            if d.is_empty() {
                Err(CompactError::EmptyDisclosure { position })
            } else {
                Ok(d.to_string())
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SdJwtParts {
        jwt: jwt.to_string(),
        disclosures,
        key_binding_jwt,
    })
}

/// Join an issuer JWT, disclosures and an optional key-binding JWT.
pub fn combine<S: AsRef<str>>(jwt: &str, disclosures: &[S], key_binding_jwt: Option<&str>) -> String {
    let mut out = String::from(jwt);
    out.push(FORMAT_SEPARATOR);
    for d in disclosures {
        out.push_str(d.as_ref());
        out.push(FORMAT_SEPARATOR);
    }
    if let Some(kb) = key_binding_jwt {
        out.push_str(kb);
    }
    out
}
