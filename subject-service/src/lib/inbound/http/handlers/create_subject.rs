use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::SubjectData;
use crate::inbound::http::coerce;
use crate::inbound::http::router::AppState;
use crate::subject::models::RollNumber;
use crate::subject::models::Subject;
use crate::subject::ports::SubjectServicePort;

/// Insert a record as supplied. Any failure is reported as a 400.
pub async fn create_subject<S: SubjectServicePort>(
    State(state): State<AppState<S>>,
    payload: Result<Json<CreateSubjectRequest>, JsonRejection>,
) -> Result<ApiSuccess<SubjectData>, ApiError> {
    let Json(body) = payload?;

    state
        .subject_service
        .create_subject(body.into_subject())
        .await
        .map_err(|e| ApiError::InvalidPayload(e.to_string()))
        .map(|ref subject| ApiSuccess::new(StatusCode::CREATED, subject.into()))
}

/// HTTP request body for a full record (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateSubjectRequest {
    #[serde(deserialize_with = "coerce::roll_number")]
    rollno: i64,
    name: String,
    password: String,
    #[serde(deserialize_with = "coerce::score")]
    tamil: f64,
    #[serde(deserialize_with = "coerce::score")]
    english: f64,
    #[serde(deserialize_with = "coerce::score")]
    maths: f64,
}

impl CreateSubjectRequest {
    fn into_subject(self) -> Subject {
        Subject {
            roll_number: RollNumber::new(self.rollno),
            name: self.name,
            // Stored as given, this route does not hash.
            password_hash: self.password,
            tamil: self.tamil,
            english: self.english,
            maths: self.maths,
        }
    }
}
