//! Authentication primitives for the subject records service.
//!
//! - Password hashing (Argon2id, fixed cost)
//! - Signed, time-limited bearer tokens (HS256 JWT)
//! - An `Authenticator` coordinating both for login flows
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use std::time::Duration;
//!
//! use auth::TokenCodec;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Claims {
//!     rollno: i64,
//! }
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let token = codec.issue(Claims { rollno: 1 }, Duration::from_secs(3600)).unwrap();
//! let claims: Claims = codec.verify(&token).unwrap();
//! assert_eq!(claims.rollno, 1);
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Expiring;
pub use token::TokenCodec;
pub use token::TokenError;
