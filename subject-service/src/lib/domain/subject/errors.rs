use auth::PasswordError;
use auth::TokenError;
use thiserror::Error;

use crate::subject::models::RollNumber;

/// Login failures. Kept apart so each keeps its own user-visible message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Invalid rollno")]
    UnknownRollNumber,

    #[error("Invalid password")]
    WrongPassword,
}

/// Top-level error for all subject record operations
#[derive(Debug, Clone, Error)]
pub enum SubjectError {
    #[error("{0}")]
    Validation(String),

    #[error("Person not found")]
    NotFound(RollNumber),

    #[error("Roll number already registered")]
    RollNumberAlreadyExists(RollNumber),

    #[error(transparent)]
    InvalidCredentials(#[from] CredentialError),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for SubjectError {
    fn from(err: sqlx::Error) -> Self {
        SubjectError::DatabaseError(err.to_string())
    }
}
