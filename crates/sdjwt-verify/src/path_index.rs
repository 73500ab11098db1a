//! # Disclosure Path Index
//!
//! One traversal of a blinded tree that records where every resolvable
//! digest would land in the reconstructed claims, and which disclosure it
//! was found inside. A holder uses it to list what a credential can reveal
//! and to assemble a minimal presentation for a chosen set of claims.
//!
//! ## Paths
//!
//! Object-property disclosures append `.key` to the path of the object that
//! carries them. Array-element disclosures take the path of their slot,
//! `[i]`, where `i` is the index in the *blinded* array. Traversal continues
//! into each disclosed value, so recursive disclosures produce nested paths
//! (`$.a`, `$.a.b`, ...).
//!
//! ## Parent chains
//!
//! A digest found inside the value of disclosure `P` records `P` as its
//! parent. A child disclosure is useless without every ancestor, so
//! selection always pulls in the full chain.
//!
//! Traversal is lenient: a malformed `_sd` entry or marker is ignored here.
//! Rejecting it is the unpack engine's job.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde_json::{Map, Value};

use sdjwt_core::reserved::{ARRAY_ELEMENT_DIGEST, SD_DIGESTS};
use sdjwt_core::{Disclosure, DigestIndex, DisclosurePath, HasherProvider, Limits};

use crate::error::PathIndexError;

/// Knobs for [`DisclosurePathIndex::disclosures_for_paths`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectOptions {
    /// Skip requested paths that resolve to nothing instead of failing.
    pub ignore_invalid: bool,
}

/// One resolved disclosure as reported by
/// [`DisclosurePathIndex::disclosure_map`].
#[derive(Debug, Clone, PartialEq)]
pub struct DisclosureEntry {
    /// Where the disclosure lands in the reconstructed claims.
    pub path: DisclosurePath,
    /// The encoded disclosure.
    pub disclosure: String,
    /// The disclosed value, still blinded below this level.
    pub value: Value,
    /// Encoded ancestor disclosures, nearest first.
    pub parents: Vec<String>,
}

/// path → digest and child digest → parent digest for one blinded tree.
#[derive(Debug, Clone, Default)]
pub struct DisclosurePathIndex {
    path_to_digest: BTreeMap<DisclosurePath, String>,
    parent_of: HashMap<String, String>,
    resolved: HashMap<String, Disclosure>,
}

impl DisclosurePathIndex {
    /// Index `blinded` under default [`Limits`].
    pub fn new(blinded: &Value, index: &DigestIndex) -> Result<Self, PathIndexError> {
        Self::with_limits(blinded, index, &Limits::default())
    }

    /// Index `blinded`, resolving digests through `index`.
    pub fn with_limits(
        blinded: &Value,
        index: &DigestIndex,
        limits: &Limits,
    ) -> Result<Self, PathIndexError> {
        let mut builder = Builder {
            index,
            limits,
            out: Self::default(),
        };
        builder.walk(blinded, None, &DisclosurePath::root(), 0)?;

        tracing::debug!(
            paths = builder.out.path_to_digest.len(),
            nested = builder.out.parent_of.len(),
            "indexed disclosure paths"
        );
        Ok(builder.out)
    }

    /// Index a full payload: read `_sd_alg`, resolve the hasher through
    /// `provider` and index `disclosures` first.
    pub fn from_payload<S: AsRef<str>>(
        payload: &Value,
        disclosures: &[S],
        provider: &dyn HasherProvider,
        limits: &Limits,
    ) -> Result<Self, PathIndexError> {
        let hasher = provider.hasher_for_payload(payload)?;
        let index = DigestIndex::build_with_limits(disclosures, hasher.as_ref(), limits)?;
        Self::with_limits(payload, &index, limits)
    }

    /// `{path: disclosed value}` for every indexed path. Values are taken
    /// from the disclosure as-is; nested blinded claims are not unpacked.
    pub fn list_disclosure_paths(&self) -> BTreeMap<String, Value> {
        self.path_to_digest
            .iter()
            .filter_map(|(path, digest)| {
                let disclosure = self.resolved.get(digest)?;
                Some((path.to_string(), disclosure.value().clone()))
            })
            .collect()
    }

    /// The digest recorded at `path`, if any.
    pub fn digest_at(&self, path: &str) -> Option<&str> {
        self.path_to_digest
            .get(&DisclosurePath::parse_lenient(path))
            .map(String::as_str)
    }

    /// Encoded disclosures needed to reveal `paths`: each requested
    /// disclosure followed by its ancestors, deduplicated, in first-seen
    /// order. Bare paths are rooted at `$.`.
    ///
    /// # Errors
    ///
    /// [`PathIndexError::UnknownPath`] for a path with no disclosure, unless
    /// `options.ignore_invalid` is set.
    pub fn disclosures_for_paths<S: AsRef<str>>(
        &self,
        paths: &[S],
        options: SelectOptions,
    ) -> Result<Vec<String>, PathIndexError> {
        let mut selected = Vec::new();
        let mut seen = HashSet::new();

        for requested in paths {
            let requested = requested.as_ref();
            let Some(digest) = self.digest_at(requested) else {
                if options.ignore_invalid {
                    tracing::debug!(path = requested, "ignoring unknown disclosure path");
                    continue;
                }
                return Err(PathIndexError::UnknownPath(requested.to_string()));
            };

            for digest in std::iter::once(digest).chain(self.ancestors(digest)) {
                if seen.insert(digest) {
                    if let Some(disclosure) = self.resolved.get(digest) {
                        selected.push(disclosure.encoded().to_string());
                    }
                }
            }
        }
        Ok(selected)
    }

    /// Every resolved disclosure keyed by digest, with its path, value and
    /// ancestor chain.
    pub fn disclosure_map(&self) -> BTreeMap<String, DisclosureEntry> {
        self.path_to_digest
            .iter()
            .filter_map(|(path, digest)| {
                let disclosure = self.resolved.get(digest)?;
                let parents = self
                    .ancestors(digest)
                    .filter_map(|d| self.resolved.get(d))
                    .map(|d| d.encoded().to_string())
                    .collect();
                let entry = DisclosureEntry {
                    path: path.clone(),
                    disclosure: disclosure.encoded().to_string(),
                    value: disclosure.value().clone(),
                    parents,
                };
                Some((digest.clone(), entry))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.path_to_digest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path_to_digest.is_empty()
    }

    /// Ancestor digests of `digest`, nearest first. Stops on a repeat.
    fn ancestors<'s>(&'s self, digest: &'s str) -> impl Iterator<Item = &'s str> + 's {
        let mut visited = HashSet::from([digest]);
        let mut current = digest;
        std::iter::from_fn(move || {
            let parent = self.parent_of.get(current)?.as_str();
            if !visited.insert(parent) {
                return None;
            }
            current = parent;
            Some(parent)
        })
    }
}

struct Builder<'a> {
    index: &'a DigestIndex,
    limits: &'a Limits,
    out: DisclosurePathIndex,
}

impl Builder<'_> {
    fn walk(
        &mut self,
        value: &Value,
        parent: Option<&str>,
        path: &DisclosurePath,
        depth: usize,
    ) -> Result<(), PathIndexError> {
        if !self.limits.depth_ok(depth) {
            return Err(PathIndexError::DepthLimitExceeded {
                path: path.to_string(),
                limit: self.limits.max_depth,
            });
        }

        match value {
            Value::Object(map) => self.walk_object(map, parent, path, depth),
            Value::Array(items) => self.walk_array(items, parent, path, depth),
            _ => Ok(()),
        }
    }

    fn walk_object(
        &mut self,
        map: &Map<String, Value>,
        parent: Option<&str>,
        path: &DisclosurePath,
        depth: usize,
    ) -> Result<(), PathIndexError> {
        for (key, child) in map {
            if key == SD_DIGESTS || key == ARRAY_ELEMENT_DIGEST {
                continue;
            }
            if child.is_object() || child.is_array() {
                self.walk(child, parent, &path.key(key), depth + 1)?;
            }
        }

        if let Some(Value::Array(digests)) = map.get(SD_DIGESTS) {
            for digest in digests.iter().filter_map(Value::as_str) {
                self.record(digest, parent, path, depth)?;
            }
        }
        Ok(())
    }

    fn walk_array(
        &mut self,
        items: &[Value],
        parent: Option<&str>,
        path: &DisclosurePath,
        depth: usize,
    ) -> Result<(), PathIndexError> {
        for (i, item) in items.iter().enumerate() {
            let item_path = path.index(i);
            match item {
                Value::Object(map) => match map.get(ARRAY_ELEMENT_DIGEST) {
                    Some(Value::String(digest)) => self.record(digest, parent, &item_path, depth)?,
                    Some(_) => {}
                    None => self.walk(item, parent, &item_path, depth + 1)?,
                },
                Value::Array(_) => self.walk(item, parent, &item_path, depth + 1)?,
                _ => {}
            }
        }
        Ok(())
    }

    fn record(
        &mut self,
        digest: &str,
        parent: Option<&str>,
        path: &DisclosurePath,
        depth: usize,
    ) -> Result<(), PathIndexError> {
        let Some(disclosure) = self.index.get(digest) else {
            tracing::trace!(%digest, "digest not disclosed");
            return Ok(());
        };

        if let Some(parent) = parent {
            self.out
                .parent_of
                .insert(digest.to_string(), parent.to_string());
        }

        let disclosure_path = if disclosure.is_array_element() {
            path.clone()
        } else {
            match disclosure.key() {
                Some(key) => path.key(key),
                None => {
                    tracing::trace!(%digest, "skipping disclosure with non-string claim name");
                    return Ok(());
                }
            }
        };

        self.out
            .path_to_digest
            .insert(disclosure_path.clone(), digest.to_string());
        self.out
            .resolved
            .insert(digest.to_string(), disclosure.clone());

        self.walk(disclosure.value(), Some(digest), &disclosure_path, depth + 1)
    }
}
