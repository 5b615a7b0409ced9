use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use crate::inbound::http::coerce;
use crate::inbound::http::router::AppState;
use crate::subject::models::RegisterSubjectCommand;
use crate::subject::models::RollNumber;
use crate::subject::ports::SubjectServicePort;

pub async fn register<S: SubjectServicePort>(
    State(state): State<AppState<S>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let Json(body) = payload?;

    state
        .subject_service
        .register(body.into_command())
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::CREATED,
                MessageData {
                    message: "Registered successfully".to_string(),
                },
            )
        })
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegisterRequest {
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

impl RegisterRequest {
    fn into_command(self) -> RegisterSubjectCommand {
        RegisterSubjectCommand {
            roll_number: RollNumber::new(self.rollno),
            name: self.name,
            password: self.password,
            tamil: self.tamil,
            english: self.english,
            maths: self.maths,
        }
    }
}
