//! JWS compact serialization helpers.
//!
//! Only the structure is handled here. Signature bytes are produced and
//! checked by the injected [`Signer`](crate::Signer) and
//! [`Verifier`](crate::Verifier).

use serde_json::{Map, Value};

use sdjwt_core::encoding::{b64url_decode, b64url_encode};

use crate::error::JwtError;

/// A JWT split into its decoded header and payload. The signature segment
/// is kept as transmitted.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedJwt {
    pub header: Map<String, Value>,
    pub payload: Map<String, Value>,
    pub signature: String,
}

impl DecodedJwt {
    /// `typ` header value, if present and a string.
    pub fn typ(&self) -> Option<&str> {
        self.header.get("typ").and_then(Value::as_str)
    }
}

/// Decode `header.payload.signature` without verifying anything.
pub fn decode_jwt(jwt: &str) -> Result<DecodedJwt, JwtError> {
    let segments: Vec<&str> = jwt.split('.').collect();
    let [header, payload, signature] = segments.as_slice() else {
        return Err(JwtError::SegmentCount(segments.len()));
    };
    Ok(DecodedJwt {
        header: decode_segment(header, "header")?,
        payload: decode_segment(payload, "payload")?,
        signature: (*signature).to_string(),
    })
}

fn decode_segment(segment: &str, name: &'static str) -> Result<Map<String, Value>, JwtError> {
    let bytes = b64url_decode(segment).map_err(|source| JwtError::Base64 {
        segment: name,
        source,
    })?;
    match serde_json::from_slice(&bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(JwtError::NotAnObject { segment: name }),
        Err(source) => Err(JwtError::Json {
            segment: name,
            source,
        }),
    }
}

/// `b64(header) "." b64(payload)`, the bytes a signer signs.
pub fn signing_input(header: &Map<String, Value>, payload: &Map<String, Value>) -> Result<String, JwtError> {
    let header = serde_json::to_vec(header).map_err(|source| JwtError::Json {
        segment: "header",
        source,
    })?;
    let payload = serde_json::to_vec(payload).map_err(|source| JwtError::Json {
        segment: "payload",
        source,
    })?;
    Ok(format!("{}.{}", b64url_encode(header), b64url_encode(payload)))
}

/// Append a raw signature to a signing input.
pub fn attach_signature(signing_input: &str, signature: &[u8]) -> String {
    format!("{signing_input}.{}", b64url_encode(signature))
}
