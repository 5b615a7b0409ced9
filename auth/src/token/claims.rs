use std::time::Duration;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Application claims wrapped with the registered time claims.
///
/// The application payload is flattened into the token, so a payload of
/// `{ "rollno": 7 }` is encoded as `{ "rollno": 7, "iat": ..., "exp": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expiring<T> {
    #[serde(flatten)]
    pub claims: T,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl<T> Expiring<T> {
    /// Wrap claims so that they expire `ttl` after `issued_at`.
    pub fn new(claims: T, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        let iat = issued_at.timestamp();
        let exp = iat.saturating_add(i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX));

        Self { claims, iat, exp }
    }
}
