//! # Verification
//!
//! Order of checks:
//!
//! 1. Split the combined format.
//! 2. Issuer signature, through the injected [`Verifier`]. Nothing in the
//!    payload is trusted before this succeeds.
//! 3. Key binding, if a [`KeyBindingPolicy`] is set: `cnf.jwk` must exist,
//!    the key-binding JWT must be present with `typ: kb+jwt` and non-empty
//!    `aud` and `nonce`, and the optional [`KeyBindingVerifier`] must
//!    accept it against the holder key.
//! 4. Unpack the payload with the presented disclosures.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use sdjwt_core::{HasherProvider, Limits};
use sdjwt_verify::{unpack_payload, UnpackOptions};

use crate::compact::split;
use crate::error::{CallbackError, VerifyError};
use crate::jwt::decode_jwt;

/// `typ` header of a key-binding JWT.
pub const KB_JWT_TYP: &str = "kb+jwt";

/// Checks the issuer signature of a JWT.
#[async_trait]
pub trait Verifier: Send + Sync {
    /// `Ok(true)` only if `jwt` carries a valid issuer signature.
    async fn verify(&self, jwt: &str) -> Result<bool, CallbackError>;
}

/// Checks a key-binding JWT against the holder key bound in `cnf.jwk`.
#[async_trait]
pub trait KeyBindingVerifier: Send + Sync {
    async fn verify(&self, kb_jwt: &str, holder_jwk: &Value) -> Result<bool, CallbackError>;
}

/// What a verifier requires of the holder.
#[derive(Clone, Default)]
pub struct KeyBindingPolicy {
    /// Only require `cnf.jwk`; do not look at the key-binding JWT's shape.
    pub skip_structure_check: bool,
    /// Cryptographic check of the key-binding JWT.
    pub verifier: Option<Arc<dyn KeyBindingVerifier>>,
}

impl KeyBindingPolicy {
    pub fn with_verifier(mut self, verifier: impl KeyBindingVerifier + 'static) -> Self {
        self.verifier = Some(Arc::new(verifier));
        self
    }

    pub fn skip_structure_check(mut self) -> Self {
        self.skip_structure_check = true;
        self
    }
}

impl std::fmt::Debug for KeyBindingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyBindingPolicy")
            .field("skip_structure_check", &self.skip_structure_check)
            .field("verifier", &self.verifier.as_ref().map(|_| "<dyn KeyBindingVerifier>"))
            .finish()
    }
}

/// Knobs for [`verify`].
#[derive(Debug, Clone, Default)]
pub struct VerifyOptions {
    /// Key binding is enforced only when set.
    pub key_binding: Option<KeyBindingPolicy>,
    pub limits: Limits,
}

impl VerifyOptions {
    pub fn require_key_binding(mut self, policy: KeyBindingPolicy) -> Self {
        self.key_binding = Some(policy);
        self
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }
}

/// Verify a compact SD-JWT and return the revealed claims.
///
/// The returned object has `_sd_alg` removed and every presented
/// disclosure applied. Claims whose disclosures were withheld are absent.
pub async fn verify(
    compact: &str,
    verifier: &dyn Verifier,
    provider: &dyn HasherProvider,
    options: &VerifyOptions,
) -> Result<Value, VerifyError> {
    let parts = split(compact)?;

    match verifier.verify(&parts.jwt).await {
        Ok(true) => {}
        Ok(false) => return Err(VerifyError::InvalidSignature),
        Err(e) => {
            tracing::warn!(error = %e, "issuer signature verifier failed");
            return Err(VerifyError::InvalidSignature);
        }
    }

    let jwt = decode_jwt(&parts.jwt)?;
    let payload = Value::Object(jwt.payload);

    if let Some(policy) = &options.key_binding {
        check_key_binding(&payload, parts.key_binding_jwt.as_deref(), policy).await?;
    }

    let revealed = unpack_payload(
        &payload,
        &parts.disclosures,
        provider,
        &UnpackOptions {
            limits: options.limits,
        },
    )?;

    tracing::info!(
        disclosures = parts.disclosures.len(),
        key_binding = options.key_binding.is_some(),
        "verified SD-JWT"
    );
    Ok(revealed)
}

async fn check_key_binding(
    payload: &Value,
    kb_jwt: Option<&str>,
    policy: &KeyBindingPolicy,
) -> Result<(), VerifyError> {
    let holder_jwk = payload
        .get("cnf")
        .and_then(|cnf| cnf.get("jwk"))
        .filter(|jwk| !jwk.is_null())
        .ok_or(VerifyError::MissingHolderKey)?;

    if !policy.skip_structure_check {
        let kb_jwt = kb_jwt.ok_or(VerifyError::MissingKeyBindingJwt)?;
        let decoded = decode_jwt(kb_jwt)?;
        if decoded.typ() != Some(KB_JWT_TYP) {
            return Err(VerifyError::InvalidKeyBindingType(
                decoded.header.get("typ").map(|t| match t {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                }),
            ));
        }
        for claim in ["aud", "nonce"] {
            if !is_present(decoded.payload.get(claim)) {
                return Err(VerifyError::MissingKeyBindingClaim(claim));
            }
        }
    }

    if let Some(kb_verifier) = &policy.verifier {
        let kb_jwt = kb_jwt.ok_or(VerifyError::MissingKeyBindingJwt)?;
        match kb_verifier.verify(kb_jwt, holder_jwk).await {
            Ok(true) => {}
            Ok(false) => return Err(VerifyError::KeyBindingRejected),
            Err(e) => {
                tracing::warn!(error = %e, "key-binding verifier failed");
                return Err(VerifyError::KeyBindingRejected);
            }
        }
    }
    Ok(())
}

fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}
