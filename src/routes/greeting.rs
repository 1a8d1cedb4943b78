//! Greeting routes: static paths, a path capture and body echo.

use axum::{
    body::Bytes,
    extract::{
        rejection::{PathRejection, StringRejection},
        Path,
    },
    http::{header, HeaderMap, HeaderValue},
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use crate::http::response::AppError;
use crate::http::server::AppState;

pub const WELCOME: &str = "Welcome to the routing showcase";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome))
        .route("/hello", get(hello_world).post(hello_body))
        .route("/hello/{name}", get(hello_name))
        .route("/echo", post(echo))
}

async fn welcome() -> &'static str {
    WELCOME
}

async fn hello_world() -> &'static str {
    "Hello, world!"
}

async fn hello_name(name: Result<Path<String>, PathRejection>) -> Result<String, AppError> {
    let Path(name) = name?;
    Ok(format!("Hello, {}!", name))
}

async fn hello_body(body: Result<String, StringRejection>) -> Result<String, AppError> {
    let body = body?;
    let name = body.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest(
            "request body must contain a name".into(),
        ));
    }
    Ok(format!("Hello, {}!", name))
}

/// Returns the body unchanged under the request's content type.
async fn echo(headers: HeaderMap, body: Bytes) -> impl IntoResponse {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("application/octet-stream"));

    tracing::debug!(bytes = body.len(), content_type = ?content_type, "Echoing body");
    ([(header::CONTENT_TYPE, content_type)], body)
}
