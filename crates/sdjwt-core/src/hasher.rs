//! # Digest Hashing
//!
//! The hash function is injected into every engine. It maps a disclosure
//! transport string (or a decoy salt) to a digest string that appears in
//! `_sd` arrays and `{"...": digest}` markers.
//!
//! [`Sha2Hasher`] is the stock implementation: the SHA-2 digest of the UTF-8
//! bytes of the input, base64url-encoded without padding. Callers with other
//! needs (HSM-backed hashing, test doubles) implement [`Hasher`] directly.
//!
//! ## Design
//!
//! Hashing is synchronous. Every engine holds the hasher as `&dyn Hasher`,
//! so a caller cannot hand an engine "something that might not be a hash
//! function". Resolution of the `_sd_alg` identifier carried in a blinded
//! payload goes through [`HasherProvider`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::encoding::b64url_encode;
use crate::error::HashError;
use crate::reserved::{DEFAULT_HASH_ALG, SD_ALG};

/// A content-addressing function over strings.
pub trait Hasher: Send + Sync {
    /// The algorithm identifier written to `_sd_alg`.
    fn algorithm(&self) -> &str;

    /// Digest `input`.
    fn hash(&self, input: &str) -> Result<String, HashError>;
}

/// SHA-2 variants addressable by their `_sd_alg` identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// `sha-256`, the default.
    #[default]
    #[serde(rename = "sha-256")]
    Sha256,
    /// `sha-384`.
    #[serde(rename = "sha-384")]
    Sha384,
    /// `sha-512`.
    #[serde(rename = "sha-512")]
    Sha512,
}

impl HashAlgorithm {
    /// Returns the algorithm identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha-256",
            Self::Sha384 => "sha-384",
            Self::Sha512 => "sha-512",
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha-256" => Ok(Self::Sha256),
            "sha-384" => Ok(Self::Sha384),
            "sha-512" => Ok(Self::Sha512),
            _ => Err(HashError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// base64url(SHA-2(utf8(input))).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha2Hasher {
    alg: HashAlgorithm,
}

impl Sha2Hasher {
    pub fn new(alg: HashAlgorithm) -> Self {
        Self { alg }
    }

    pub fn algorithm_kind(&self) -> HashAlgorithm {
        self.alg
    }
}

impl Hasher for Sha2Hasher {
    fn algorithm(&self) -> &str {
        self.alg.as_str()
    }

    fn hash(&self, input: &str) -> Result<String, HashError> {
        let bytes = input.as_bytes();
        let digest = match self.alg {
            HashAlgorithm::Sha256 => b64url_encode(Sha256::digest(bytes)),
            HashAlgorithm::Sha384 => b64url_encode(Sha384::digest(bytes)),
            HashAlgorithm::Sha512 => b64url_encode(Sha512::digest(bytes)),
        };
        Ok(digest)
    }
}

/// Resolves an `_sd_alg` identifier to a hasher.
pub trait HasherProvider: Send + Sync {
    fn hasher_for(&self, alg: &str) -> Result<Box<dyn Hasher>, HashError>;

    /// Hasher for the `_sd_alg` of a blinded payload. An absent `_sd_alg`
    /// means `sha-256`; a non-string one is unsupported.
    fn hasher_for_payload(&self, payload: &Value) -> Result<Box<dyn Hasher>, HashError> {
        self.hasher_for(payload_hash_alg(payload)?)
    }
}

/// The `_sd_alg` named by `payload`, or [`DEFAULT_HASH_ALG`] when absent.
pub fn payload_hash_alg(payload: &Value) -> Result<&str, HashError> {
    match payload.get(SD_ALG) {
        None => Ok(DEFAULT_HASH_ALG),
        Some(Value::String(alg)) => Ok(alg.as_str()),
        Some(other) => Err(HashError::UnsupportedAlgorithm(other.to_string())),
    }
}

/// Resolves the SHA-2 family via [`Sha2Hasher`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHasherProvider;

impl HasherProvider for DefaultHasherProvider {
    fn hasher_for(&self, alg: &str) -> Result<Box<dyn Hasher>, HashError> {
        let alg: HashAlgorithm = alg.parse()?;
        Ok(Box::new(Sha2Hasher::new(alg)))
    }
}
