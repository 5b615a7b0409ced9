use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::roll_number_from_path;
use super::ApiError;
use super::ApiSuccess;
use super::SubjectData;
use crate::inbound::http::middleware::AuthenticatedSubject;
use crate::inbound::http::router::AppState;
use crate::subject::ports::SubjectServicePort;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteSubjectResponseData {
    pub message: String,
    #[serde(rename = "deletedPerson")]
    pub deleted_person: SubjectData,
}

pub async fn delete_subject<S: SubjectServicePort>(
    State(state): State<AppState<S>>,
    Extension(caller): Extension<AuthenticatedSubject>,
    Path(rollno): Path<String>,
) -> Result<ApiSuccess<DeleteSubjectResponseData>, ApiError> {
    let roll_number = roll_number_from_path(&rollno)?;

    let subject = state.subject_service.delete_subject(roll_number).await?;

    tracing::info!(caller = %caller.roll_number, rollno = %roll_number, "Subject deleted via API");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        DeleteSubjectResponseData {
            message: "Person deleted successfully".to_string(),
            deleted_person: (&subject).into(),
        },
    ))
}
