//! # Digest Index
//!
//! Maps each digest to the decoded disclosure it addresses. Built fresh for
//! every unpack or path-index call from the disclosures presented in that
//! call; it has no persistence beyond a single operation.
//!
//! ## Collisions
//!
//! Two presented disclosures that hash to the same digest are not an error
//! here: the later one replaces the earlier one. Issuance rejects duplicate
//! digests, but verification accepts what conformant producers emit and
//! leaves disambiguation to the wire format.

use std::collections::HashMap;

use crate::disclosure::Disclosure;
use crate::error::IndexError;
use crate::hasher::Hasher;
use crate::limits::Limits;

/// digest → decoded disclosure.
#[derive(Debug, Clone, Default)]
pub struct DigestIndex {
    entries: HashMap<String, Disclosure>,
}

impl DigestIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode and hash every disclosure string under default [`Limits`].
    pub fn build<S: AsRef<str>>(disclosures: &[S], hasher: &dyn Hasher) -> Result<Self, IndexError> {
        Self::build_with_limits(disclosures, hasher, &Limits::default())
    }

    /// Decode and hash every disclosure string, in list order.
    ///
    /// # Errors
    ///
    /// Fails on the first disclosure that does not decode, on hasher
    /// failure, or if the list is longer than `limits.max_disclosures`.
    pub fn build_with_limits<S: AsRef<str>>(
        disclosures: &[S],
        hasher: &dyn Hasher,
        limits: &Limits,
    ) -> Result<Self, IndexError> {
        if disclosures.len() > limits.max_disclosures {
            return Err(IndexError::TooManyDisclosures {
                count: disclosures.len(),
                limit: limits.max_disclosures,
            });
        }

        let mut index = Self::new();
        for (position, encoded) in disclosures.iter().enumerate() {
            let disclosure = Disclosure::decode(encoded.as_ref())
                .map_err(|source| IndexError::Disclosure { position, source })?;
            let digest = disclosure.digest(hasher)?;
            index.insert(digest, disclosure);
        }

        tracing::debug!(
            alg = hasher.algorithm(),
            presented = disclosures.len(),
            indexed = index.len(),
            "built digest index"
        );
        Ok(index)
    }

    /// Insert under an explicit digest. An existing entry is replaced.
    pub fn insert(&mut self, digest: impl Into<String>, disclosure: Disclosure) {
        let digest = digest.into();
        if self.entries.contains_key(&digest) {
            tracing::trace!(%digest, "digest collision in presented disclosures; keeping the later one");
        }
        self.entries.insert(digest, disclosure);
    }

    pub fn get(&self, digest: &str) -> Option<&Disclosure> {
        self.entries.get(digest)
    }

    pub fn contains(&self, digest: &str) -> bool {
        self.entries.contains_key(digest)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(digest, disclosure)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Disclosure)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, Disclosure)> for DigestIndex {
    fn from_iter<T: IntoIterator<Item = (String, Disclosure)>>(iter: T) -> Self {
        let mut index = Self::new();
        for (digest, disclosure) in iter {
            index.insert(digest, disclosure);
        }
        index
    }
}
