//! # Salt Generation
//!
//! Every disclosure and every decoy digest draws a fresh salt. Production
//! code uses [`RandomSalt`]; tests pin the salt with [`FixedSalt`] or a
//! closure so that disclosure strings are reproducible.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of salts produced by [`RandomSalt::default`]. 22 alphanumeric
/// characters carry roughly 130 bits of entropy.
pub const DEFAULT_SALT_LENGTH: usize = 22;

/// Produces salts for disclosures and decoys.
pub trait SaltGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random alphanumeric salts from the thread-local CSPRNG.
#[derive(Debug, Clone, Copy)]
pub struct RandomSalt {
    length: usize,
}

impl RandomSalt {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for RandomSalt {
    fn default() -> Self {
        Self::new(DEFAULT_SALT_LENGTH)
    }
}

impl SaltGenerator for RandomSalt {
    fn generate(&self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect()
    }
}

/// Returns the same salt every time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSalt(pub String);

impl FixedSalt {
    pub fn new(salt: impl Into<String>) -> Self {
        Self(salt.into())
    }
}

impl SaltGenerator for FixedSalt {
    fn generate(&self) -> String {
        self.0.clone()
    }
}

impl<F> SaltGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn generate(&self) -> String {
        self()
    }
}
