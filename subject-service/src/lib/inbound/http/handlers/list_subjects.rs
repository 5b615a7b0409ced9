use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::SubjectData;
use crate::inbound::http::middleware::AuthenticatedSubject;
use crate::inbound::http::router::AppState;
use crate::subject::ports::SubjectServicePort;

pub async fn list_subjects<S: SubjectServicePort>(
    State(state): State<AppState<S>>,
    Extension(caller): Extension<AuthenticatedSubject>,
) -> Result<ApiSuccess<Vec<SubjectData>>, ApiError> {
    let subjects = state.subject_service.list_subjects().await?;

    tracing::debug!(caller = %caller.roll_number, count = subjects.len(), "Listed subjects");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        subjects.iter().map(SubjectData::from).collect(),
    ))
}
