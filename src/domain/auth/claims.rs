use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::error::{ClientError, ClientResult};

/// Claims carried by the platform's access tokens. Only `exp` is required;
/// the backend also mints `username` and `role` into the payload.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    pub exp: i64, // Expiration time, epoch seconds
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl TokenClaims {
    /// Decode the payload segment of a token without verifying the
    /// signature. The client never holds the signing key; expiry is the only
    /// claim it acts on.
    pub fn decode(token: &str) -> ClientResult<Self> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;

        decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation)
            .map(|data| data.claims)
            .map_err(|e| ClientError::Decode(format!("invalid token: {}", e)))
    }

    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.exp < now_secs
    }
}
