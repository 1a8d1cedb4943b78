//! Plain-text entity route using the bracketed-name format.

use axum::{
    extract::rejection::StringRejection,
    http::{header, HeaderMap},
    routing::{get, post},
    Router,
};

use crate::entity::BracketedNames;
use crate::http::response::AppError;
use crate::http::server::AppState;

const TEXT_PLAIN: &str = "text/plain";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/text", post(greet_names))
        .route("/text/sample", get(sample))
}

/// True when the `Content-Type` is `text/plain`, parameters allowed.
fn is_text_plain(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case(TEXT_PLAIN))
        .unwrap_or(false)
}

async fn greet_names(
    headers: HeaderMap,
    body: Result<String, StringRejection>,
) -> Result<String, AppError> {
    if !is_text_plain(&headers) {
        return Err(AppError::UnsupportedMediaType {
            expected: TEXT_PLAIN,
        });
    }

    let names: BracketedNames = body?.parse()?;
    tracing::debug!(count = names.names().len(), "Decoded bracketed names");

    Ok(names
        .names()
        .iter()
        .map(|name| format!("Hello, {}!", name))
        .collect::<Vec<_>>()
        .join("\n"))
}

async fn sample() -> Result<String, AppError> {
    Ok(BracketedNames::new(["Ada", "Grace", "Linus"])?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn with_content_type(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_content_type_detection() {
        assert!(is_text_plain(&with_content_type("text/plain")));
        assert!(is_text_plain(&with_content_type("text/plain; charset=utf-8")));
        assert!(is_text_plain(&with_content_type("Text/Plain")));
        assert!(!is_text_plain(&with_content_type("application/json")));
        assert!(!is_text_plain(&HeaderMap::new()));
    }
}
