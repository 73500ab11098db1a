//! # Disclosure Paths
//!
//! A path string locates a disclosable node in the reconstructed claim
//! tree: `$` is the root, `.name` selects an object property and `[i]`
//! selects an array element, e.g. `$.address.street_address` or
//! `$.nationalities[1]`.
//!
//! Property names are appended verbatim. Names containing `.` or `[` are
//! not escaped, so such paths are ambiguous; lookups are exact-match on the
//! string, which keeps them consistent with how the index was built.

use serde::{Deserialize, Serialize};

/// Root of every path.
pub const ROOT: &str = "$";

/// A path into a claim tree.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisclosurePath(String);

impl DisclosurePath {
    /// The root path `$`.
    pub fn root() -> Self {
        Self(ROOT.to_string())
    }

    /// Path of property `name` below `self`.
    pub fn key(&self, name: &str) -> Self {
        Self(format!("{}.{}", self.0, name))
    }

    /// Path of element `index` below `self`.
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }

    /// Accepts both rooted (`$.a.b`, `$[0]`) and bare (`a.b`) forms. Bare
    /// paths are rooted with `$.`.
    pub fn parse_lenient(input: &str) -> Self {
        if input == ROOT || input.starts_with("$.") || input.starts_with("$[") {
            Self(input.to_string())
        } else {
            Self(format!("{ROOT}.{input}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for DisclosurePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DisclosurePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
