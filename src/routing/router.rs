//! Route group composition and dispatch.
//!
//! # Responsibilities
//! - Hold the ordered list of route groups
//! - Merge them into one router
//! - Return an explicit 404 for requests no group claims

use axum::{
    extract::Request,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json, Router,
};

use crate::http::request::request_id_of;
use crate::http::response::ErrorBody;
use crate::http::server::AppState;
use crate::http::websocket;
use crate::routes::{greeting, headers, json, multipart, params, text};

/// A named, independently buildable set of routes.
#[derive(Clone, Copy)]
pub struct RouteGroup {
    pub name: &'static str,
    pub build: fn() -> Router<AppState>,
}

/// All route groups in dispatch order.
pub const ROUTE_GROUPS: [RouteGroup; 7] = [
    RouteGroup {
        name: "greeting",
        build: greeting::routes,
    },
    RouteGroup {
        name: "params",
        build: params::routes,
    },
    RouteGroup {
        name: "headers",
        build: headers::routes,
    },
    RouteGroup {
        name: "text",
        build: text::routes,
    },
    RouteGroup {
        name: "json",
        build: json::routes,
    },
    RouteGroup {
        name: "multipart",
        build: multipart::routes,
    },
    RouteGroup {
        name: "websocket",
        build: websocket::routes,
    },
];

/// Merge every route group into one router with a 404 fallback.
pub fn build_routes() -> Router<AppState> {
    ROUTE_GROUPS
        .iter()
        .fold(Router::new(), |router, group| {
            tracing::debug!(group = group.name, "Registering route group");
            router.merge((group.build)())
        })
        .fallback(no_route)
}

async fn no_route(request: Request) -> Response {
    let method = request.method();
    let path = request.uri().path();
    tracing::warn!(
        request_id = %request_id_of(&request),
        method = %method,
        path = %path,
        "No route matched"
    );

    let body = ErrorBody {
        error: format!("no route for {} {}", method, path),
        status: StatusCode::NOT_FOUND.as_u16(),
    };
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}
