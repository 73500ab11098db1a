//! # Pack Engine
//!
//! Turns a claim tree and a [`DisclosureFrame`] into a blinded tree and the
//! ordered list of disclosures that can re-reveal it.
//!
//! ## Algorithm
//!
//! Recursive over the shape of the claims, mirrored by the frame:
//!
//! 1. Every child named by a nested frame is packed first, and the packed
//!    result replaces that child in the working copy. A disclosed value can
//!    therefore itself contain blinded sub-claims (recursive disclosure).
//! 2. Arrays: each selected index is wrapped in a `[salt, value]`
//!    disclosure and replaced in place by `{"...": digest}`. Decoy markers
//!    are appended after the last element.
//! 3. Objects: each selected key is wrapped in a `[salt, key, value]`
//!    disclosure and removed; its digest goes to `_sd`. Decoys are added to
//!    the same set, which is then sorted. An empty `_sd` is never emitted.
//!
//! Child disclosures precede their parent's in the output list. Values no
//! nested frame reshapes are copied or disclosed verbatim, after a walk that
//! holds them to the same depth limit and reserved names as framed levels.
//!
//! ## Security Invariants
//!
//! - Digests are unique within one batch. The unpack side cannot tell two
//!   same-digest disclosures apart, so a collision is a pack error.
//! - `_sd` and `...` are never emitted as claim names, disclosed or not.
//! - The caller's claim tree is read, never mutated.

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::{Map, Value};

use sdjwt_core::reserved::{is_reserved_claim_name, ARRAY_ELEMENT_DIGEST, SD_DIGESTS};
use sdjwt_core::{Disclosure, DisclosurePath, Hasher, Limits, RandomSalt, SaltGenerator};

use crate::decoy::create_decoys;
use crate::error::PackError;
use crate::frame::DisclosureFrame;

/// Knobs for [`pack`].
#[derive(Clone)]
pub struct PackOptions {
    /// Source of salts for disclosures and decoys.
    pub salt_generator: Arc<dyn SaltGenerator>,
    /// Depth bound for frames and the whole claim tree, framed or not.
    pub limits: Limits,
}

impl Default for PackOptions {
    fn default() -> Self {
        Self {
            salt_generator: Arc::new(RandomSalt::default()),
            limits: Limits::default(),
        }
    }
}

impl std::fmt::Debug for PackOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PackOptions")
            .field("salt_generator", &"<dyn SaltGenerator>")
            .field("limits", &self.limits)
            .finish()
    }
}

impl PackOptions {
    pub fn with_salt_generator(mut self, salts: impl SaltGenerator + 'static) -> Self {
        self.salt_generator = Arc::new(salts);
        self
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }
}

/// Output of [`pack`].
#[derive(Debug, Clone, PartialEq)]
pub struct PackedClaims {
    /// The blinded claim tree.
    pub claims: Value,
    /// Encoded disclosures, children before parents.
    pub disclosures: Vec<String>,
}

/// Blind `claims` according to `frame`.
///
/// # Errors
///
/// - [`PackError::InvalidClaims`] if `claims`, or any framed child, is not an
///   object or array.
/// - [`PackError::MissingFrameTarget`] if the frame names a child the claims
///   do not have.
/// - [`PackError::ReservedClaimName`] for a `_sd` or `...` claim name
///   anywhere in the claims.
/// - [`PackError::DuplicateDigest`] if two disclosures hash equal.
/// - [`PackError::DepthLimitExceeded`] if any claim, framed or not, nests
///   past `options.limits.max_depth`.
pub fn pack(
    claims: &Value,
    frame: &DisclosureFrame,
    hasher: &dyn Hasher,
    options: &PackOptions,
) -> Result<PackedClaims, PackError> {
    let mut packer = Packer {
        hasher,
        options,
        disclosures: Vec::new(),
        seen: HashSet::new(),
    };
    let claims = packer.pack_level(claims, frame, &DisclosurePath::root(), 0)?;

    tracing::debug!(
        alg = hasher.algorithm(),
        disclosures = packer.disclosures.len(),
        "packed claims"
    );
    Ok(PackedClaims {
        claims,
        disclosures: packer.disclosures,
    })
}

/// Parse `frame` from its JSON form and [`pack`].
pub fn pack_with_frame_value(
    claims: &Value,
    frame: &Value,
    hasher: &dyn Hasher,
    options: &PackOptions,
) -> Result<PackedClaims, PackError> {
    let frame = DisclosureFrame::from_value_with_limits(frame, &options.limits)?;
    pack(claims, &frame, hasher, options)
}

struct Packer<'a> {
    hasher: &'a dyn Hasher,
    options: &'a PackOptions,
    disclosures: Vec<String>,
    seen: HashSet<String>,
}

impl Packer<'_> {
    fn pack_level(
        &mut self,
        claims: &Value,
        frame: &DisclosureFrame,
        path: &DisclosurePath,
        depth: usize,
    ) -> Result<Value, PackError> {
        self.check_depth(path, depth)?;
        match claims {
            Value::Array(items) => self.pack_array(items, frame, path, depth),
            Value::Object(map) => self.pack_object(map, frame, path, depth),
            _ => Err(PackError::InvalidClaims {
                path: path.to_string(),
            }),
        }
    }

    fn pack_array(
        &mut self,
        items: &[Value],
        frame: &DisclosureFrame,
        path: &DisclosurePath,
        depth: usize,
    ) -> Result<Value, PackError> {
        let mut framed = Vec::with_capacity(frame.children().len());
        for (key, child) in frame.children() {
            let index: usize = key.parse().map_err(|_| PackError::InvalidFrame {
                path: path.key(key).to_string(),
                reason: "frames for array elements must be keyed by index".to_string(),
            })?;
            framed.push((index, child));
        }
        framed.sort_by_key(|(index, _)| *index);

        let mut packed_children = Vec::with_capacity(framed.len());
        for (index, child) in framed {
            let child_path = path.index(index);
            let item = items.get(index).ok_or_else(|| PackError::MissingFrameTarget {
                path: child_path.to_string(),
            })?;
            packed_children.push((index, self.pack_level(item, child, &child_path, depth + 1)?));
        }

        let mut out = Vec::with_capacity(items.len() + frame.decoy_count());
        for (index, item) in items.iter().enumerate() {
            let value = match take_packed(&mut packed_children, |i| *i == index) {
                Some(packed) => packed,
                None => self.verbatim(item, &path.index(index), depth + 1)?,
            };
            if frame.is_selected_index(index) {
                let salt = self.options.salt_generator.generate();
                let digest = self.push(Disclosure::array_element(salt, value)?)?;
                out.push(array_marker(digest));
            } else {
                out.push(value);
            }
        }

        let decoys = create_decoys(
            frame.decoy_count(),
            self.hasher,
            self.options.salt_generator.as_ref(),
        )?;
        out.extend(decoys.into_iter().map(array_marker));

        Ok(Value::Array(out))
    }

    fn pack_object(
        &mut self,
        map: &Map<String, Value>,
        frame: &DisclosureFrame,
        path: &DisclosurePath,
        depth: usize,
    ) -> Result<Value, PackError> {
        let mut packed_children = Vec::with_capacity(frame.children().len());
        for (key, child) in frame.children() {
            let child_path = path.key(key);
            let item = map.get(key).ok_or_else(|| PackError::MissingFrameTarget {
                path: child_path.to_string(),
            })?;
            packed_children.push((key.as_str(), self.pack_level(item, child, &child_path, depth + 1)?));
        }

        let mut out = Map::new();
        let mut sd = Vec::new();
        for (key, item) in map {
            let item_path = path.key(key);
            if is_reserved_claim_name(key) {
                return Err(PackError::ReservedClaimName {
                    path: item_path.to_string(),
                    name: key.clone(),
                });
            }
            let value = match take_packed(&mut packed_children, |k| *k == key.as_str()) {
                Some(packed) => packed,
                None => self.verbatim(item, &item_path, depth + 1)?,
            };
            if frame.is_selected_name(key) {
                let salt = self.options.salt_generator.generate();
                let digest = self.push(Disclosure::object_property(salt, key.as_str(), value)?)?;
                sd.push(digest);
            } else {
                out.insert(key.clone(), value);
            }
        }

        sd.extend(create_decoys(
            frame.decoy_count(),
            self.hasher,
            self.options.salt_generator.as_ref(),
        )?);

        if !sd.is_empty() {
            sd.sort();
            out.insert(
                SD_DIGESTS.to_string(),
                Value::Array(sd.into_iter().map(Value::String).collect()),
            );
        }
        Ok(Value::Object(out))
    }

    /// Copy of a value no nested frame touches, once the whole subtree has
    /// been checked.
    fn verbatim(
        &self,
        value: &Value,
        path: &DisclosurePath,
        depth: usize,
    ) -> Result<Value, PackError> {
        self.check_verbatim(value, path, depth)?;
        Ok(value.clone())
    }

    fn check_verbatim(
        &self,
        value: &Value,
        path: &DisclosurePath,
        depth: usize,
    ) -> Result<(), PackError> {
        self.check_depth(path, depth)?;
        match value {
            Value::Array(items) => items.iter().enumerate().try_for_each(|(index, item)| {
                self.check_verbatim(item, &path.index(index), depth + 1)
            }),
            Value::Object(map) => map.iter().try_for_each(|(key, item)| {
                let item_path = path.key(key);
                if is_reserved_claim_name(key) {
                    return Err(PackError::ReservedClaimName {
                        path: item_path.to_string(),
                        name: key.clone(),
                    });
                }
                self.check_verbatim(item, &item_path, depth + 1)
            }),
            _ => Ok(()),
        }
    }

    fn check_depth(&self, path: &DisclosurePath, depth: usize) -> Result<(), PackError> {
        if self.options.limits.depth_ok(depth) {
            Ok(())
        } else {
            Err(PackError::DepthLimitExceeded {
                path: path.to_string(),
                limit: self.options.limits.max_depth,
            })
        }
    }

    fn push(&mut self, disclosure: Disclosure) -> Result<String, PackError> {
        let digest = disclosure.digest(self.hasher)?;
        if !self.seen.insert(digest.clone()) {
            return Err(PackError::DuplicateDigest { digest });
        }
        self.disclosures.push(disclosure.encoded().to_string());
        Ok(digest)
    }
}

fn take_packed<K>(packed: &mut Vec<(K, Value)>, matches: impl Fn(&K) -> bool) -> Option<Value> {
    let pos = packed.iter().position(|(k, _)| matches(k))?;
    Some(packed.swap_remove(pos).1)
}

fn array_marker(digest: String) -> Value {
    let mut marker = Map::new();
    marker.insert(ARRAY_ELEMENT_DIGEST.to_string(), Value::String(digest));
    Value::Object(marker)
}
