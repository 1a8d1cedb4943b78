//! Header and cookie inspection routes.
//!
//! Request metadata is reflected back: as a JSON map, as plain text, or by
//! copying `x-*` headers onto the response.

use std::collections::BTreeMap;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query,
    },
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::entity::SetCookieParams;
use crate::http::response::AppError;
use crate::http::server::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/headers", get(all_headers))
        .route("/headers/echo", get(echo_custom_headers))
        .route("/user-agent", get(user_agent))
        .route("/cookies", get(all_cookies))
        .route("/cookies/set", get(set_cookie))
        .route("/cookies/{name}", get(one_cookie))
}

/// Collect headers into a sorted map, joining repeated names with `", "`.
pub fn header_map(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut map: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        map.entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert_with(|| value.into_owned());
    }
    map
}

/// Parse every `Cookie` header into name/value pairs.
///
/// Pairs are `;`-separated; a pair without `=` has an empty value. Later
/// duplicates win.
pub fn parse_cookies(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|c| c.split(';'))
        .filter_map(|pair| {
            let mut parts = pair.trim().splitn(2, '=');
            let name = parts.next()?.trim();
            if name.is_empty() {
                return None;
            }
            let value = parts.next().unwrap_or("").trim();
            Some((name.to_string(), value.to_string()))
        })
        .collect()
}

async fn all_headers(headers: HeaderMap) -> Json<BTreeMap<String, String>> {
    Json(header_map(&headers))
}

async fn echo_custom_headers(headers: HeaderMap) -> impl IntoResponse {
    let mut reflected = HeaderMap::new();
    for (name, value) in &headers {
        if name.as_str().starts_with("x-") {
            reflected.append(name.clone(), value.clone());
        }
    }
    (StatusCode::NO_CONTENT, reflected)
}

async fn user_agent(headers: HeaderMap) -> Result<String, AppError> {
    let agent = headers
        .get(header::USER_AGENT)
        .ok_or_else(|| AppError::BadRequest("missing User-Agent header".into()))?;
    Ok(format!(
        "Your user agent: {}",
        String::from_utf8_lossy(agent.as_bytes())
    ))
}

async fn all_cookies(headers: HeaderMap) -> Json<BTreeMap<String, String>> {
    Json(parse_cookies(&headers))
}

async fn one_cookie(
    name: Result<Path<String>, PathRejection>,
    headers: HeaderMap,
) -> Result<String, AppError> {
    let Path(name) = name?;
    parse_cookies(&headers)
        .remove(&name)
        .ok_or_else(|| AppError::NotFound(format!("no cookie named '{}'", name)))
}

/// RFC 6265 `cookie-octet`: visible ASCII except `"`, `,`, `;` and `\`.
fn is_cookie_octet(b: u8) -> bool {
    matches!(b, b'!' | b'#'..=b'+' | b'-'..=b':' | b'<'..=b'[' | b']'..=b'~')
}

/// Build the `Set-Cookie` value for `name=value; Path=/`.
///
/// The value may not contain separators, whitespace or control characters,
/// so it cannot smuggle extra cookie attributes.
pub fn set_cookie_header(params: &SetCookieParams) -> Result<HeaderValue, AppError> {
    let SetCookieParams { name, value } = params;
    if name.is_empty() || name.contains(['=', ';', ',', ' ']) {
        return Err(AppError::BadRequest(format!(
            "invalid cookie name '{}'",
            name
        )));
    }
    if !value.bytes().all(is_cookie_octet) {
        return Err(AppError::BadRequest(format!(
            "invalid cookie value '{}'",
            value
        )));
    }

    HeaderValue::from_str(&format!("{}={}; Path=/", name, value))
        .map_err(|_| AppError::BadRequest("cookie is not a valid header value".into()))
}

async fn set_cookie(
    params: Result<Query<SetCookieParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let cookie = set_cookie_header(&params)?;

    tracing::debug!(name = %params.name, "Setting cookie");
    Ok((
        [(header::SET_COOKIE, cookie)],
        format!("Cookie '{}' set", params.name),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(*name, HeaderValue::from_static(*value));
        }
        map
    }

    #[test]
    fn test_parse_cookies() {
        let map = parse_cookies(&headers(&[("cookie", "session=abc; theme = dark ;flag")]));
        assert_eq!(map.get("session").map(String::as_str), Some("abc"));
        assert_eq!(map.get("theme").map(String::as_str), Some("dark"));
        assert_eq!(map.get("flag").map(String::as_str), Some(""));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_parse_cookies_across_headers() {
        let map = parse_cookies(&headers(&[("cookie", "a=1"), ("cookie", "b=2; a=3")]));
        assert_eq!(map.get("a").map(String::as_str), Some("3"));
        assert_eq!(map.get("b").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_parse_cookies_empty() {
        assert!(parse_cookies(&HeaderMap::new()).is_empty());
        assert!(parse_cookies(&headers(&[("cookie", " ; ;")])).is_empty());
    }

    fn cookie(name: &str, value: &str) -> Result<HeaderValue, AppError> {
        set_cookie_header(&SetCookieParams {
            name: name.into(),
            value: value.into(),
        })
    }

    #[test]
    fn test_set_cookie_header() {
        assert_eq!(cookie("flavour", "oat").unwrap(), "flavour=oat; Path=/");
        assert_eq!(cookie("empty", "").unwrap(), "empty=; Path=/");
        assert_eq!(cookie("token", "a-b_c.d~1").unwrap(), "token=a-b_c.d~1; Path=/");
    }

    #[test]
    fn test_set_cookie_rejects_attribute_injection() {
        let err = cookie("a", "x; Domain=evil.example; Max-Age=999999").unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().starts_with("invalid cookie value"));

        for value in ["a,b", "a b", "a\tb", "a\r\nSet-Cookie: x=1", "\"q\"", "caf\u{e9}"] {
            let err = cookie("a", value).unwrap_err();
            assert!(err.to_string().starts_with("invalid cookie value"), "{:?}", value);
        }
        for name in ["", "a=b", "a;b", "a b", "a,b"] {
            let err = cookie(name, "1").unwrap_err();
            assert!(err.to_string().starts_with("invalid cookie name"), "{:?}", name);
        }
    }

    #[test]
    fn test_set_cookie_rejects_control_characters_in_name() {
        let err = cookie("a\u{1}b", "1").unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "cookie is not a valid header value");
    }

    #[test]
    fn test_header_map_joins_repeats() {
        let map = header_map(&headers(&[("accept", "text/html"), ("accept", "*/*")]));
        assert_eq!(map["accept"], "text/html, */*");
    }
}
