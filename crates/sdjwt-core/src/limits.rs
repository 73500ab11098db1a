//! # Traversal Limits
//!
//! Blinded trees and disclosure lists arrive from untrusted holders. Every
//! recursive walk checks nesting depth against [`Limits::max_depth`] and
//! every digest index checks its input length against
//! [`Limits::max_disclosures`], so a hostile payload fails with an error
//! instead of exhausting the stack.

use serde::{Deserialize, Serialize};

/// Default maximum nesting depth of claim trees and frames.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Default maximum number of disclosures accepted in one operation.
pub const DEFAULT_MAX_DISCLOSURES: usize = 4096;

/// Bounds applied to every traversal of untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum object/array nesting depth, counted from the root (depth 0).
    pub max_depth: usize,
    /// Maximum number of disclosures in one digest index.
    pub max_disclosures: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_disclosures: DEFAULT_MAX_DISCLOSURES,
        }
    }
}

impl Limits {
    /// Returns `true` if `depth` is within bounds.
    pub fn depth_ok(&self, depth: usize) -> bool {
        depth <= self.max_depth
    }
}
