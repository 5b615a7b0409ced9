use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_subject::create_subject;
use super::handlers::delete_subject::delete_subject;
use super::handlers::get_subject::get_subject;
use super::handlers::list_subjects::list_subjects;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::update_subject::update_subject;
use super::middleware::authenticate as auth_middleware;
use crate::subject::ports::SubjectServicePort;

pub struct AppState<S: SubjectServicePort> {
    pub subject_service: Arc<S>,
}

impl<S: SubjectServicePort> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            subject_service: Arc::clone(&self.subject_service),
        }
    }
}

/// Build the HTTP application.
///
/// Protected method routers are wrapped in the auth gate one by one, so a
/// path can mix public and protected methods (`POST /person` is public,
/// `GET /person` is not).
pub fn create_router<S: SubjectServicePort>(
    subject_service: Arc<S>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState { subject_service };
    let auth_gate = middleware::from_fn_with_state(authenticator, auth_middleware);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route("/register", post(register::<S>))
        .route("/login", post(login::<S>))
        .route(
            "/person",
            post(create_subject::<S>).merge(get(list_subjects::<S>).route_layer(auth_gate.clone())),
        )
        .route(
            "/person/:rollno",
            get(get_subject::<S>)
                .put(update_subject::<S>)
                .delete(delete_subject::<S>)
                .route_layer(auth_gate),
        )
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
