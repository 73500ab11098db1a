//! # Issuance
//!
//! Blind a payload, stamp `_sd_alg` (and `cnf` when a holder key is bound),
//! sign through an injected [`Signer`], and emit the combined format with
//! every disclosure attached.

use async_trait::async_trait;
use serde_json::{Map, Value};

use sdjwt_core::reserved::SD_ALG;
use sdjwt_core::{HashAlgorithm, Sha2Hasher};
use sdjwt_pack::{pack, DisclosureFrame, PackOptions};

use crate::compact::combine;
use crate::error::{CallbackError, IssueError};
use crate::jwt::{attach_signature, signing_input};

/// `typ` header of an issuer-signed SD-JWT.
pub const SD_JWT_TYP: &str = "sd+jwt";

/// Produces a JWS signature over a signing input.
///
/// Key material never enters this crate; implementations wrap whatever key
/// store the caller uses.
#[async_trait]
pub trait Signer: Send + Sync {
    /// JWS `alg` header value, e.g. `EdDSA` or `ES256`.
    fn algorithm(&self) -> &str;

    /// Raw signature bytes over `signing_input`.
    async fn sign(&self, signing_input: &str) -> Result<Vec<u8>, CallbackError>;
}

/// Knobs for [`issue`].
#[derive(Debug, Clone, Default)]
pub struct IssueOptions {
    /// Digest algorithm, written to `_sd_alg`.
    pub hash_algorithm: HashAlgorithm,
    /// Holder public JWK, written to `cnf.jwk` for key binding.
    pub holder_key: Option<Value>,
    pub pack: PackOptions,
}

impl IssueOptions {
    pub fn with_hash_algorithm(mut self, alg: HashAlgorithm) -> Self {
        self.hash_algorithm = alg;
        self
    }

    pub fn with_holder_key(mut self, jwk: Value) -> Self {
        self.holder_key = Some(jwk);
        self
    }

    pub fn with_pack_options(mut self, pack: PackOptions) -> Self {
        self.pack = pack;
        self
    }
}

/// Issue a compact SD-JWT.
///
/// `header` fields override the defaults (`typ: sd+jwt`, `alg` from the
/// signer). The result ends in `~`: no key-binding JWT is attached at
/// issuance.
pub async fn issue(
    header: &Map<String, Value>,
    payload: &Value,
    frame: &DisclosureFrame,
    signer: &dyn Signer,
    options: &IssueOptions,
) -> Result<String, IssueError> {
    if !payload.is_object() {
        return Err(IssueError::InvalidPayload);
    }

    let hasher = Sha2Hasher::new(options.hash_algorithm);
    let packed = pack(payload, frame, &hasher, &options.pack)?;
    let Value::Object(mut claims) = packed.claims else {
        return Err(IssueError::InvalidPayload);
    };
    claims.insert(
        SD_ALG.to_string(),
        Value::String(options.hash_algorithm.as_str().to_string()),
    );
    if let Some(jwk) = &options.holder_key {
        let mut cnf = Map::new();
        cnf.insert("jwk".to_string(), jwk.clone());
        claims.insert("cnf".to_string(), Value::Object(cnf));
    }

    let mut full_header = Map::new();
    full_header.insert("typ".to_string(), Value::String(SD_JWT_TYP.to_string()));
    full_header.insert("alg".to_string(), Value::String(signer.algorithm().to_string()));
    full_header.extend(header.iter().map(|(k, v)| (k.clone(), v.clone())));

    let input = signing_input(&full_header, &claims)?;
    let signature = signer.sign(&input).await.map_err(IssueError::Signer)?;
    let jwt = attach_signature(&input, &signature);

    tracing::info!(
        alg = signer.algorithm(),
        sd_alg = options.hash_algorithm.as_str(),
        disclosures = packed.disclosures.len(),
        key_bound = options.holder_key.is_some(),
        "issued SD-JWT"
    );
    Ok(combine(&jwt, &packed.disclosures, None))
}
