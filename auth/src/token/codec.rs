use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::claims::Expiring;
use super::errors::TokenError;

/// Issues and verifies signed, time-limited bearer tokens.
///
/// Tokens are HS256 JWTs. Every issued token carries `iat` and `exp`, and
/// verification rejects tokens without `exp`.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenCodec {
    /// Create a codec signing with the given secret.
    ///
    /// # Arguments
    /// * `secret` - HMAC secret, should be at least 32 bytes for HS256
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a token carrying `claims` that expires `ttl` from now.
    ///
    /// # Errors
    /// * `SigningFailed` - Claims could not be serialized or signed
    pub fn issue<T: Serialize>(&self, claims: T, ttl: Duration) -> Result<String, TokenError> {
        self.sign(&Expiring::new(claims, Utc::now(), ttl))
    }

    /// Sign an already assembled claim set as-is.
    ///
    /// # Errors
    /// * `SigningFailed` - Claims could not be serialized or signed
    pub fn sign<T: Serialize>(&self, claims: &T) -> Result<String, TokenError> {
        encode(&Header::new(self.algorithm), claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Verify a token's signature and expiry and return its application claims.
    ///
    /// # Errors
    /// * `Expired` - The `exp` claim is in the past
    /// * `Invalid` - Bad signature, malformed token, missing `exp` or claims
    ///   that do not match `T`
    pub fn verify<T: DeserializeOwned>(&self, token: &str) -> Result<T, TokenError> {
        let validation = Validation::new(self.algorithm);

        decode::<Expiring<T>>(token, &self.decoding_key, &validation)
            .map(|data| data.claims.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })
    }
}
