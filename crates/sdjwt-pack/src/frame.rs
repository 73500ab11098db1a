//! # Disclosure Frame
//!
//! A frame mirrors the shape of a claim tree and says, level by level,
//! which object keys or array indices to blind, how many decoys to add, and
//! which children carry their own nested frame:
//!
//! ```json
//! { "_sd": ["given_name", "address"], "_sd_decoy": 2,
//!   "address": { "_sd": ["street_address"] },
//!   "nationalities": { "_sd": [0, 1] } }
//! ```
//!
//! [`DisclosureFrame::from_value`] validates the JSON form once, up front,
//! so the pack engine works against a typed structure and never sees a
//! malformed directive. Frames can also be built in code with the builder
//! methods.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use sdjwt_core::reserved::{SD_DECOY, SD_DECOY_COUNT_DEPRECATED, SD_DIGESTS};
use sdjwt_core::{DisclosurePath, Limits};

use crate::error::PackError;

/// One entry of a frame's `_sd` set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Selector {
    /// An object key.
    Name(String),
    /// An array index.
    Index(usize),
}

impl Selector {
    pub fn matches_name(&self, name: &str) -> bool {
        matches!(self, Selector::Name(n) if n == name)
    }

    pub fn matches_index(&self, index: usize) -> bool {
        matches!(self, Selector::Index(i) if *i == index)
    }

    fn to_value(&self) -> Value {
        match self {
            Selector::Name(n) => Value::String(n.clone()),
            Selector::Index(i) => Value::from(*i),
        }
    }
}

impl From<&str> for Selector {
    fn from(name: &str) -> Self {
        Selector::Name(name.to_string())
    }
}

impl From<String> for Selector {
    fn from(name: String) -> Self {
        Selector::Name(name)
    }
}

impl From<usize> for Selector {
    fn from(index: usize) -> Self {
        Selector::Index(index)
    }
}

/// A validated disclosure frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisclosureFrame {
    selectors: Vec<Selector>,
    decoys: usize,
    children: BTreeMap<String, DisclosureFrame>,
}

impl DisclosureFrame {
    /// An empty frame: blinds nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a key or index at this level as selectively disclosable.
    pub fn disclose(mut self, selector: impl Into<Selector>) -> Self {
        let selector = selector.into();
        if !self.selectors.contains(&selector) {
            self.selectors.push(selector);
        }
        self
    }

    /// Add `count` decoy digests at this level.
    pub fn decoys(mut self, count: usize) -> Self {
        self.decoys = count;
        self
    }

    /// Attach a nested frame for the child named `key`. Array children are
    /// keyed by their decimal index.
    pub fn child(mut self, key: impl Into<String>, frame: DisclosureFrame) -> Self {
        self.children.insert(key.into(), frame);
        self
    }

    pub fn selectors(&self) -> &[Selector] {
        &self.selectors
    }

    pub fn decoy_count(&self) -> usize {
        self.decoys
    }

    pub fn children(&self) -> &BTreeMap<String, DisclosureFrame> {
        &self.children
    }

    pub fn is_selected_name(&self, name: &str) -> bool {
        self.selectors.iter().any(|s| s.matches_name(name))
    }

    pub fn is_selected_index(&self, index: usize) -> bool {
        self.selectors.iter().any(|s| s.matches_index(index))
    }

    /// Parse and validate the JSON form under default [`Limits`].
    pub fn from_value(value: &Value) -> Result<Self, PackError> {
        Self::from_value_with_limits(value, &Limits::default())
    }

    /// Parse and validate the JSON form.
    ///
    /// # Errors
    ///
    /// - [`PackError::InvalidFrame`] if any level is not an object, or `_sd`
    ///   is not an array of strings and non-negative integers.
    /// - [`PackError::ConflictingDecoyCount`] if a level sets both
    ///   `_sd_decoy` and `_decoyCount`.
    /// - [`PackError::NegativeDecoyCount`] / [`PackError::InvalidDecoyCount`]
    ///   for a count that is not a non-negative integer.
    /// - [`PackError::DepthLimitExceeded`] past `limits.max_depth`.
    pub fn from_value_with_limits(value: &Value, limits: &Limits) -> Result<Self, PackError> {
        parse_level(value, &DisclosurePath::root(), 0, limits)
    }

    /// The JSON form, using `_sd_decoy` for the decoy count.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        if !self.selectors.is_empty() {
            let sd = self.selectors.iter().map(Selector::to_value).collect();
            map.insert(SD_DIGESTS.to_string(), Value::Array(sd));
        }
        if self.decoys > 0 {
            map.insert(SD_DECOY.to_string(), Value::from(self.decoys));
        }
        for (key, child) in &self.children {
            map.insert(key.clone(), child.to_value());
        }
        Value::Object(map)
    }
}

fn parse_level(
    value: &Value,
    path: &DisclosurePath,
    depth: usize,
    limits: &Limits,
) -> Result<DisclosureFrame, PackError> {
    if !limits.depth_ok(depth) {
        return Err(PackError::DepthLimitExceeded {
            path: path.to_string(),
            limit: limits.max_depth,
        });
    }

    let Value::Object(map) = value else {
        return Err(PackError::InvalidFrame {
            path: path.to_string(),
            reason: "expected an object".to_string(),
        });
    };

    let selectors = match map.get(SD_DIGESTS) {
        None => Vec::new(),
        Some(sd) => parse_selectors(sd, path)?,
    };

    let decoys = match (map.get(SD_DECOY), map.get(SD_DECOY_COUNT_DEPRECATED)) {
        (Some(_), Some(_)) => {
            return Err(PackError::ConflictingDecoyCount {
                path: path.to_string(),
            })
        }
        (Some(count), None) | (None, Some(count)) => parse_decoy_count(count, path)?,
        (None, None) => 0,
    };

    let mut children = BTreeMap::new();
    for (key, child) in map {
        if sdjwt_core::reserved::is_frame_directive(key) {
            continue;
        }
        let child_path = path.key(key);
        children.insert(key.clone(), parse_level(child, &child_path, depth + 1, limits)?);
    }

    let mut frame = DisclosureFrame {
        selectors: Vec::with_capacity(selectors.len()),
        decoys,
        children,
    };
    for selector in selectors {
        frame = frame.disclose(selector);
    }
    Ok(frame)
}

fn parse_selectors(sd: &Value, path: &DisclosurePath) -> Result<Vec<Selector>, PackError> {
    let Value::Array(items) = sd else {
        return Err(PackError::InvalidFrame {
            path: path.to_string(),
            reason: format!("{SD_DIGESTS} must be an array"),
        });
    };

    items
        .iter()
        .map(|item| match item {
            Value::String(name) => Ok(Selector::Name(name.clone())),
            Value::Number(n) => n
                .as_u64()
                .and_then(|i| usize::try_from(i).ok())
                .map(Selector::Index)
                .ok_or_else(|| PackError::InvalidFrame {
                    path: path.to_string(),
                    reason: format!("array index {n} in {SD_DIGESTS} is not a non-negative integer"),
                }),
            other => Err(PackError::InvalidFrame {
                path: path.to_string(),
                reason: format!("{SD_DIGESTS} entries must be strings or indices, got {other}"),
            }),
        })
        .collect()
}

fn parse_decoy_count(count: &Value, path: &DisclosurePath) -> Result<usize, PackError> {
    let invalid = || PackError::InvalidDecoyCount {
        path: path.to_string(),
        value: count.to_string(),
    };

    let Value::Number(n) = count else {
        return Err(invalid());
    };

    if let Some(u) = n.as_u64() {
        return usize::try_from(u).map_err(|_| invalid());
    }
    if let Some(i) = n.as_i64() {
        return Err(PackError::NegativeDecoyCount {
            path: path.to_string(),
            count: i,
        });
    }
    Err(invalid())
}
