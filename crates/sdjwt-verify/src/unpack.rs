//! # Unpack Engine
//!
//! Reconstructs a claim tree from a blinded tree and a [`DigestIndex`] built
//! from the disclosures presented alongside it.
//!
//! ## Algorithm
//!
//! Recursive, mirroring pack:
//!
//! - Scalars pass through.
//! - Arrays: a `{"...": digest}` marker is replaced by the unpacked value of
//!   its disclosure, or dropped if the digest is not in the index (an
//!   undisclosed element or a decoy). Other elements are unpacked in place.
//! - Objects: plain properties are unpacked first. Then every digest in
//!   `_sd` that resolves adds its disclosed claim; digests that do not
//!   resolve are skipped. `_sd` itself is never emitted.
//!
//! ## Security Invariants
//!
//! - A disclosed claim never overwrites an existing claim at the same level
//!   ([`UnpackError::ClaimConflict`]).
//! - A resolved digest is consumed at most once across the whole tree,
//!   including through recursive disclosures
//!   ([`UnpackError::DuplicateDigestReference`]).
//! - A non-array `_sd`, a non-string digest, or a marker object with extra
//!   fields is rejected rather than passed through.
//! - Nesting depth is bounded by [`Limits::max_depth`].

use std::collections::HashSet;

use serde_json::{Map, Value};

use sdjwt_core::reserved::{is_reserved_claim_name, ARRAY_ELEMENT_DIGEST, SD_ALG, SD_DIGESTS};
use sdjwt_core::{Disclosure, DigestIndex, DisclosurePath, HasherProvider, Limits};

use crate::error::UnpackError;

/// Knobs for [`unpack_with_options`] and [`unpack_payload`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnpackOptions {
    pub limits: Limits,
}

/// Unpack under default [`UnpackOptions`].
pub fn unpack(blinded: &Value, index: &DigestIndex) -> Result<Value, UnpackError> {
    unpack_with_options(blinded, index, &UnpackOptions::default())
}

/// Reconstruct the claims revealed by `index` from `blinded`.
///
/// # Errors
///
/// See [`UnpackError`]. Any error aborts the whole operation; no partial
/// tree is returned.
pub fn unpack_with_options(
    blinded: &Value,
    index: &DigestIndex,
    options: &UnpackOptions,
) -> Result<Value, UnpackError> {
    let mut unpacker = Unpacker {
        index,
        limits: &options.limits,
        consumed: HashSet::new(),
    };

    match unpacker.unpack_value(blinded, &DisclosurePath::root(), 0) {
        Ok(value) => {
            tracing::debug!(
                presented = index.len(),
                revealed = unpacker.consumed.len(),
                "unpacked claims"
            );
            Ok(value)
        }
        Err(err) => {
            tracing::warn!(error = %err, "rejected blinded claims");
            Err(err)
        }
    }
}

/// Unpack a full payload: read `_sd_alg` (default `sha-256`), resolve the
/// hasher through `provider`, index `disclosures`, and reconstruct the
/// claims. `_sd_alg` is not part of the output.
pub fn unpack_payload<S: AsRef<str>>(
    payload: &Value,
    disclosures: &[S],
    provider: &dyn HasherProvider,
    options: &UnpackOptions,
) -> Result<Value, UnpackError> {
    let hasher = provider
        .hasher_for_payload(payload)
        .map_err(UnpackError::from_provider)?;
    let index = DigestIndex::build_with_limits(disclosures, hasher.as_ref(), &options.limits)?;

    let mut body = payload.clone();
    if let Value::Object(map) = &mut body {
        map.remove(SD_ALG);
    }
    unpack_with_options(&body, &index, options)
}

struct Unpacker<'a> {
    index: &'a DigestIndex,
    limits: &'a Limits,
    consumed: HashSet<String>,
}

impl<'a> Unpacker<'a> {
    fn unpack_value(
        &mut self,
        value: &Value,
        path: &DisclosurePath,
        depth: usize,
    ) -> Result<Value, UnpackError> {
        if !self.limits.depth_ok(depth) {
            return Err(UnpackError::DepthLimitExceeded {
                path: path.to_string(),
                limit: self.limits.max_depth,
            });
        }

        match value {
            Value::Array(items) => self.unpack_array(items, path, depth),
            Value::Object(map) => self.unpack_object(map, path, depth),
            scalar => Ok(scalar.clone()),
        }
    }

    fn unpack_array(
        &mut self,
        items: &[Value],
        path: &DisclosurePath,
        depth: usize,
    ) -> Result<Value, UnpackError> {
        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let item_path = path.index(i);
            match array_marker(item, &item_path)? {
                Some(digest) => {
                    let Some(disclosure) = self.resolve(digest)? else {
                        continue;
                    };
                    if !disclosure.is_array_element() {
                        return Err(UnpackError::ArrayElementShape {
                            digest: digest.to_string(),
                        });
                    }
                    out.push(self.unpack_value(disclosure.value(), &item_path, depth + 1)?);
                }
                None => out.push(self.unpack_value(item, &item_path, depth + 1)?),
            }
        }
        Ok(Value::Array(out))
    }

    fn unpack_object(
        &mut self,
        map: &Map<String, Value>,
        path: &DisclosurePath,
        depth: usize,
    ) -> Result<Value, UnpackError> {
        let mut out = Map::new();
        for (key, value) in map {
            if key == SD_DIGESTS {
                continue;
            }
            out.insert(key.clone(), self.unpack_value(value, &path.key(key), depth + 1)?);
        }

        let Some(sd) = map.get(SD_DIGESTS) else {
            return Ok(Value::Object(out));
        };
        let Value::Array(digests) = sd else {
            return Err(UnpackError::MalformedDigestArray {
                path: path.to_string(),
            });
        };

        for digest in digests {
            let Value::String(digest) = digest else {
                return Err(UnpackError::MalformedDigestArray {
                    path: path.to_string(),
                });
            };
            let Some(disclosure) = self.resolve(digest)? else {
                continue;
            };
            let key = claim_name(digest, disclosure)?;
            if out.contains_key(key) {
                return Err(UnpackError::ClaimConflict(key.to_string()));
            }
            let value = self.unpack_value(disclosure.value(), &path.key(key), depth + 1)?;
            out.insert(key.to_string(), value);
        }
        Ok(Value::Object(out))
    }

    fn resolve(&mut self, digest: &str) -> Result<Option<&'a Disclosure>, UnpackError> {
        let Some(disclosure) = self.index.get(digest) else {
            tracing::trace!(%digest, "digest not disclosed");
            return Ok(None);
        };
        if !self.consumed.insert(digest.to_string()) {
            return Err(UnpackError::DuplicateDigestReference {
                digest: digest.to_string(),
            });
        }
        Ok(Some(disclosure))
    }
}

/// The digest of a `{"...": digest}` marker, `None` for any other value.
fn array_marker<'v>(item: &'v Value, path: &DisclosurePath) -> Result<Option<&'v str>, UnpackError> {
    let Value::Object(map) = item else {
        return Ok(None);
    };
    let Some(digest) = map.get(ARRAY_ELEMENT_DIGEST) else {
        return Ok(None);
    };
    match digest {
        Value::String(digest) if map.len() == 1 => Ok(Some(digest.as_str())),
        _ => Err(UnpackError::MalformedArrayMarker {
            path: path.to_string(),
        }),
    }
}

fn claim_name<'d>(digest: &str, disclosure: &'d Disclosure) -> Result<&'d str, UnpackError> {
    let invalid = |key: String| UnpackError::InvalidClaimName {
        digest: digest.to_string(),
        key,
    };
    match disclosure.raw_key() {
        None => Err(invalid("<none>".to_string())),
        Some(Value::String(key)) if key.is_empty() => Err(invalid("\"\"".to_string())),
        Some(Value::String(key)) if is_reserved_claim_name(key) => {
            Err(UnpackError::ReservedClaimName(key.clone()))
        }
        Some(Value::String(key)) => Ok(key.as_str()),
        Some(other) => Err(invalid(other.to_string())),
    }
}
