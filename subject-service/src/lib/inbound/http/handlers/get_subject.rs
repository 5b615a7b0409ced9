use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::roll_number_from_path;
use super::ApiError;
use super::ApiSuccess;
use super::SubjectData;
use crate::inbound::http::router::AppState;
use crate::subject::ports::SubjectServicePort;

pub async fn get_subject<S: SubjectServicePort>(
    State(state): State<AppState<S>>,
    Path(rollno): Path<String>,
) -> Result<ApiSuccess<SubjectData>, ApiError> {
    let roll_number = roll_number_from_path(&rollno)?;

    state
        .subject_service
        .get_subject(roll_number)
        .await
        .map_err(ApiError::from)
        .map(|ref subject| ApiSuccess::new(StatusCode::OK, subject.into()))
}
