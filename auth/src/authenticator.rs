use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::TokenCodec;
use crate::token::TokenError;

/// Authentication coordinator combining password verification and token issuance.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
    token_ttl: Duration,
}

/// Result of successful authentication.
#[derive(Debug)]
pub struct AuthenticationResult {
    /// Signed bearer token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `secret` - Secret key for token signing
    /// * `token_ttl` - Lifetime of every issued token
    pub fn new(secret: &[u8], token_ttl: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_codec: TokenCodec::new(secret),
            token_ttl,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a token carrying `claims`.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `claims` - Application claims to put in the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is malformed
    /// * `TokenError` - Token signing failed
    pub fn authenticate<T: Serialize>(
        &self,
        password: &str,
        stored_hash: &str,
        claims: T,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_codec.issue(claims, self.token_ttl)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Validate a bearer token and decode its application claims.
    ///
    /// # Errors
    /// * `TokenError` - Token is expired, malformed or wrongly signed
    pub fn validate_token<T: DeserializeOwned>(&self, token: &str) -> Result<T, TokenError> {
        self.token_codec.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct RollClaims {
        rollno: i64,
    }

    fn authenticator() -> Authenticator {
        Authenticator::new(SECRET, Duration::from_secs(3600))
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = authenticator();
        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate("my_password", &hash, RollClaims { rollno: 9 })
            .expect("Authentication failed");

        let decoded: RollClaims = authenticator
            .validate_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(decoded.rollno, 9);
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = authenticator();
        let hash = authenticator.hash_password("my_password").unwrap();

        let result = authenticator.authenticate("wrong_password", &hash, RollClaims { rollno: 9 });
        assert!(matches!(result, Err(AuthenticationError::InvalidCredentials)));
    }

    #[test]
    fn test_authenticate_malformed_stored_hash() {
        let authenticator = authenticator();

        let result = authenticator.authenticate("p", "p", RollClaims { rollno: 9 });
        assert!(matches!(result, Err(AuthenticationError::PasswordError(_))));
    }

    #[test]
    fn test_token_from_other_secret_is_rejected() {
        let issuer = Authenticator::new(
            b"another_secret_key_at_least_32_bytes",
            Duration::from_secs(3600),
        );
        let hash = issuer.hash_password("p").unwrap();
        let result = issuer
            .authenticate("p", &hash, RollClaims { rollno: 9 })
            .unwrap();

        let outcome = authenticator().validate_token::<RollClaims>(&result.access_token);
        assert!(matches!(outcome, Err(TokenError::Invalid(_))));
    }
}
