use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

/// Subject record aggregate.
///
/// One record per student, keyed by roll number. `password_hash` holds
/// whatever the store was given: an Argon2 PHC string for registered
/// records, the raw payload value for records created directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    pub roll_number: RollNumber,
    pub name: String,
    pub password_hash: String,
    pub tamil: f64,
    pub english: f64,
    pub maths: f64,
}

/// Unique student identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RollNumber(pub i64);

impl RollNumber {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Parse a roll number from a URL path segment.
    ///
    /// Accepts integers and integral decimals (`"7"`, `" 7 "`, `"7.0"`).
    /// Anything else yields `None`, which callers treat as a roll number
    /// that matches no record.
    pub fn from_path(segment: &str) -> Option<Self> {
        let segment = segment.trim();

        if let Ok(value) = segment.parse::<i64>() {
            return Some(Self(value));
        }

        segment
            .parse::<f64>()
            .ok()
            .filter(|value| value.fract() == 0.0 && value.abs() < i64::MAX as f64)
            .map(|value| Self(value as i64))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for RollNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Application claims carried by bearer tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectClaims {
    pub rollno: i64,
}

impl SubjectClaims {
    /// Lifetime of every issued token.
    pub const LIFETIME: Duration = Duration::from_secs(60 * 60);

    pub fn for_subject(roll_number: RollNumber) -> Self {
        Self {
            rollno: roll_number.value(),
        }
    }

    pub fn roll_number(&self) -> RollNumber {
        RollNumber(self.rollno)
    }
}

/// Command to register a new subject record with a plaintext password.
#[derive(Debug, Clone)]
pub struct RegisterSubjectCommand {
    pub roll_number: RollNumber,
    pub name: String,
    pub password: String,
    pub tamil: f64,
    pub english: f64,
    pub maths: f64,
}

/// Command to update an existing record.
///
/// Only provided fields are written. A provided password is plaintext and is
/// hashed by the service before reaching the store.
#[derive(Debug, Clone, Default)]
pub struct UpdateSubjectCommand {
    pub name: Option<String>,
    pub password: Option<String>,
    pub tamil: Option<f64>,
    pub english: Option<f64>,
    pub maths: Option<f64>,
}

/// Field changes handed to the store, with the password already hashed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubjectChanges {
    pub name: Option<String>,
    pub password_hash: Option<String>,
    pub tamil: Option<f64>,
    pub english: Option<f64>,
    pub maths: Option<f64>,
}
