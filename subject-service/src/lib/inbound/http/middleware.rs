use std::sync::Arc;

use auth::Authenticator;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use crate::inbound::http::handlers::ApiError;
use crate::subject::models::RollNumber;
use crate::subject::models::SubjectClaims;

/// Extension type holding the roll number proven by the bearer token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedSubject {
    pub roll_number: RollNumber,
}

/// Middleware that validates bearer tokens and records the caller in request extensions
pub async fn authenticate(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(&req)?;

    let claims: SubjectClaims = authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Bearer token rejected");
        ApiError::Unauthorized("Invalid or expired token".to_string())
    })?;

    req.extensions_mut().insert(AuthenticatedSubject {
        roll_number: claims.roll_number(),
    });

    Ok(next.run(req).await)
}

/// The token is the second space-separated part of `Authorization`,
/// whatever the first part says.
fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("Authorization header missing".to_string()))?;

    auth_header
        .to_str()
        .ok()
        .and_then(|value| value.split(' ').nth(1))
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("Token missing".to_string()))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use auth::Expiring;
    use auth::TokenCodec;
    use axum::body::Body;
    use axum::http::StatusCode;
    use axum::middleware;
    use axum::routing::get;
    use axum::Extension;
    use axum::Router;
    use tower::ServiceExt;

    use super::*;

    const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

    fn app() -> Router {
        let authenticator = Arc::new(Authenticator::new(SECRET, SubjectClaims::LIFETIME));

        Router::new()
            .route(
                "/whoami",
                get(|Extension(caller): Extension<AuthenticatedSubject>| async move {
                    caller.roll_number.to_string()
                }),
            )
            .route_layer(middleware::from_fn_with_state(authenticator, authenticate))
    }

    /// Send a request and return (status, body text).
    async fn send(authorization: Option<&str>) -> (StatusCode, String) {
        let mut builder = axum::http::Request::builder().uri("/whoami");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }

        let resp = app()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    fn token_for(rollno: i64) -> String {
        TokenCodec::new(SECRET)
            .issue(SubjectClaims { rollno }, Duration::from_secs(3600))
            .unwrap()
    }

    #[tokio::test]
    async fn test_missing_header() {
        let (status, body) = send(None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, r#"{"message":"Authorization header missing"}"#);
    }

    #[tokio::test]
    async fn test_missing_token() {
        for value in ["Bearer", "Bearer ", "Bearer  token-after-two-spaces"] {
            let (status, body) = send(Some(value)).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "header: {value:?}");
            assert_eq!(body, r#"{"message":"Token missing"}"#);
        }
    }

    #[tokio::test]
    async fn test_invalid_token() {
        let (status, body) = send(Some("Bearer not.a.jwt")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, r#"{"message":"Invalid or expired token"}"#);
    }

    #[tokio::test]
    async fn test_expired_token() {
        let now = unix_now();
        let stale = Expiring {
            claims: SubjectClaims { rollno: 3 },
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = TokenCodec::new(SECRET).sign(&stale).unwrap();

        let (status, body) = send(Some(&format!("Bearer {token}"))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, r#"{"message":"Invalid or expired token"}"#);
    }

    #[tokio::test]
    async fn test_valid_token_exposes_roll_number() {
        let (status, body) = send(Some(&format!("Bearer {}", token_for(42)))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "42");
    }

    fn unix_now() -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64
    }
}
