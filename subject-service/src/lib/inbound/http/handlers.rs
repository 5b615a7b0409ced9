use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::subject::errors::SubjectError;
use crate::subject::models::RollNumber;
use crate::subject::models::Subject;

pub mod create_subject;
pub mod delete_subject;
pub mod get_subject;
pub mod list_subjects;
pub mod login;
pub mod register;
pub mod update_subject;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Failures rendered as `{"message": ...}` or `{"error": ...}` bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 500 with `error`
    InternalServerError(String),
    /// 400 with `message`
    BadRequest(String),
    /// 400 with `error`
    InvalidPayload(String),
    /// 404 with `message`
    NotFound(String),
    /// 401 with `message`
    Unauthorized(String),
}

impl ApiError {
    pub fn person_not_found() -> Self {
        ApiError::NotFound("Person not found".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) | ApiError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::InternalServerError(error) | ApiError::InvalidPayload(error) => {
                ApiErrorData::Error { error }
            }
            ApiError::BadRequest(message)
            | ApiError::NotFound(message)
            | ApiError::Unauthorized(message) => ApiErrorData::Message { message },
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), ?body, "Request failed");
        }

        (status, Json(body)).into_response()
    }
}

impl From<SubjectError> for ApiError {
    fn from(err: SubjectError) -> Self {
        match err {
            SubjectError::Validation(_) => ApiError::InvalidPayload(err.to_string()),
            SubjectError::NotFound(_) => ApiError::NotFound(err.to_string()),
            SubjectError::RollNumberAlreadyExists(_) => ApiError::BadRequest(err.to_string()),
            SubjectError::InvalidCredentials(_) => ApiError::Unauthorized(err.to_string()),
            SubjectError::Password(_) | SubjectError::Token(_) | SubjectError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::from(SubjectError::Validation(rejection.body_text()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ApiErrorData {
    Message { message: String },
    Error { error: String },
}

/// Plain confirmation body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageData {
    pub message: String,
}

/// Wire representation of a subject record.
///
/// `password` carries the stored value, which is a hash for registered
/// records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectData {
    pub rollno: i64,
    pub name: String,
    pub password: String,
    pub tamil: f64,
    pub english: f64,
    pub maths: f64,
}

impl From<&Subject> for SubjectData {
    fn from(subject: &Subject) -> Self {
        Self {
            rollno: subject.roll_number.value(),
            name: subject.name.clone(),
            password: subject.password_hash.clone(),
            tamil: subject.tamil,
            english: subject.english,
            maths: subject.maths,
        }
    }
}

/// Parse the `:rollno` path segment.
///
/// A segment that is not a number can never match a stored record, so it
/// is reported as a missing person rather than a malformed request.
pub(crate) fn roll_number_from_path(segment: &str) -> Result<RollNumber, ApiError> {
    RollNumber::from_path(segment).ok_or_else(|| {
        tracing::debug!(segment, "Roll number in path is not numeric");
        ApiError::person_not_found()
    })
}
