use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::roll_number_from_path;
use super::ApiError;
use super::ApiSuccess;
use super::SubjectData;
use crate::inbound::http::coerce;
use crate::inbound::http::middleware::AuthenticatedSubject;
use crate::inbound::http::router::AppState;
use crate::subject::models::UpdateSubjectCommand;
use crate::subject::ports::SubjectServicePort;

/// HTTP request body for updating a record (raw JSON).
///
/// A `rollno` in the body is ignored; records are never re-keyed.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSubjectRequest {
    pub name: Option<String>,
    pub password: Option<String>,
    #[serde(default, deserialize_with = "coerce::optional_score")]
    pub tamil: Option<f64>,
    #[serde(default, deserialize_with = "coerce::optional_score")]
    pub english: Option<f64>,
    #[serde(default, deserialize_with = "coerce::optional_score")]
    pub maths: Option<f64>,
}

impl From<UpdateSubjectRequest> for UpdateSubjectCommand {
    fn from(req: UpdateSubjectRequest) -> Self {
        Self {
            name: req.name,
            password: req.password,
            tamil: req.tamil,
            english: req.english,
            maths: req.maths,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateSubjectResponseData {
    pub message: String,
    #[serde(rename = "updatedPerson")]
    pub updated_person: SubjectData,
}

pub async fn update_subject<S: SubjectServicePort>(
    State(state): State<AppState<S>>,
    Extension(caller): Extension<AuthenticatedSubject>,
    Path(rollno): Path<String>,
    payload: Result<Json<UpdateSubjectRequest>, JsonRejection>,
) -> Result<ApiSuccess<UpdateSubjectResponseData>, ApiError> {
    let roll_number = roll_number_from_path(&rollno)?;
    let Json(req) = payload?;

    let subject = state
        .subject_service
        .update_subject(roll_number, req.into())
        .await?;

    tracing::info!(caller = %caller.roll_number, rollno = %roll_number, "Subject updated via API");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        UpdateSubjectResponseData {
            message: "Person updated successfully".to_string(),
            updated_person: (&subject).into(),
        },
    ))
}
