//! # Disclosure Codec
//!
//! A disclosure is a self-contained, individually revealable fragment of a
//! claim tree:
//!
//! - `[salt, value]`: an array element (no key),
//! - `[salt, key, value]`: an object property.
//!
//! The JSON array is serialized compactly and base64url-encoded (no padding)
//! to form the transport string.
//!
//! ## Security Invariant
//!
//! The encoded string is the single source of truth. [`Disclosure`] keeps
//! the exact string it was built from or decoded from, and digests are
//! computed over that string. The decoded key and value are projections of
//! it and are never re-serialized for hashing, since a producer's JSON
//! formatting (whitespace, escapes, key order) need not match ours.
//!
//! The key of a 3-element disclosure is kept as raw JSON. Whether it is a
//! usable claim name (a non-empty, non-reserved string) is decided by the
//! unpack engine, which reports each violation as a distinct error.

use serde_json::Value;

use crate::encoding::{b64url_decode, b64url_encode};
use crate::error::{DisclosureError, HashError};
use crate::hasher::Hasher;

/// A decoded disclosure together with its transport string.
#[derive(Debug, Clone, PartialEq)]
pub struct Disclosure {
    encoded: String,
    salt: String,
    key: Option<Value>,
    value: Value,
}

impl Disclosure {
    /// Build an array-element disclosure `[salt, value]`.
    pub fn array_element(salt: impl Into<String>, value: Value) -> Result<Self, DisclosureError> {
        let salt = salt.into();
        let encoded = encode_array(&[Value::String(salt.clone()), value.clone()])?;
        Ok(Self {
            encoded,
            salt,
            key: None,
            value,
        })
    }

    /// Build an object-property disclosure `[salt, key, value]`.
    pub fn object_property(
        salt: impl Into<String>,
        key: impl Into<String>,
        value: Value,
    ) -> Result<Self, DisclosureError> {
        let salt = salt.into();
        let key = Value::String(key.into());
        let encoded = encode_array(&[Value::String(salt.clone()), key.clone(), value.clone()])?;
        Ok(Self {
            encoded,
            salt,
            key: Some(key),
            value,
        })
    }

    /// Decode a transport string.
    ///
    /// # Errors
    ///
    /// Fails if the string is not base64url, not UTF-8 JSON, not an array,
    /// has a length other than 2 or 3, or has a non-string salt.
    pub fn decode(encoded: &str) -> Result<Self, DisclosureError> {
        let bytes = b64url_decode(encoded)?;
        let text = String::from_utf8(bytes)?;
        let parsed: Value = serde_json::from_str(&text)?;

        let Value::Array(mut items) = parsed else {
            return Err(DisclosureError::NotAnArray);
        };

        let (salt, key, value) = match items.len() {
            2 => {
                let value = items.pop().unwrap_or(Value::Null);
                let salt = items.pop().unwrap_or(Value::Null);
                (salt, None, value)
            }
            3 => {
                let value = items.pop().unwrap_or(Value::Null);
                let key = items.pop().unwrap_or(Value::Null);
                let salt = items.pop().unwrap_or(Value::Null);
                (salt, Some(key), value)
            }
            n => return Err(DisclosureError::InvalidLength(n)),
        };

        let Value::String(salt) = salt else {
            return Err(DisclosureError::SaltNotString);
        };

        Ok(Self {
            encoded: encoded.to_string(),
            salt,
            key,
            value,
        })
    }

    /// The base64url transport string.
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    /// The salt.
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// The claim name, if this is an object-property disclosure whose key
    /// is a string.
    pub fn key(&self) -> Option<&str> {
        self.key.as_ref().and_then(Value::as_str)
    }

    /// The raw key element: `None` for the 2-element form, otherwise the
    /// second array element exactly as decoded.
    pub fn raw_key(&self) -> Option<&Value> {
        self.key.as_ref()
    }

    /// Returns `true` for the 2-element `[salt, value]` form.
    pub fn is_array_element(&self) -> bool {
        self.key.is_none()
    }

    /// The disclosed value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Digest of the transport string under `hasher`.
    pub fn digest(&self, hasher: &dyn Hasher) -> Result<String, HashError> {
        hasher.hash(&self.encoded)
    }
}

impl std::fmt::Display for Disclosure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encoded)
    }
}

fn encode_array(parts: &[Value]) -> Result<String, DisclosureError> {
    let json = serde_json::to_string(parts)?;
    Ok(b64url_encode(json))
}
