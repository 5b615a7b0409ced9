use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Could not hash password: {0}")]
    HashingFailed(String),

    /// The stored value is not a PHC string, e.g. a record written without hashing.
    #[error("Stored password is not a valid hash: {0}")]
    MalformedHash(String),
}
