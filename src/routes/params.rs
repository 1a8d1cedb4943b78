//! Typed decoding of path segments and query strings.
//!
//! Rejections from the `Path`/`Query` extractors are taken as `Result`s and
//! turned into [`AppError`] so every failure shares one error body.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query,
    },
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::entity::{Item, RangeParams, RangeSummary, SearchParams};
use crate::http::response::AppError;
use crate::http::server::AppState;

pub const MAX_SEARCH_LIMIT: u32 = 100;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/items/{id}", get(item))
        .route("/search", get(search))
        .route("/range", get(range))
}

async fn item(id: Result<Path<u64>, PathRejection>) -> Result<Json<Item>, AppError> {
    let Path(id) = id?;
    Ok(Json(Item {
        id,
        name: format!("item-{}", id),
    }))
}

#[derive(Debug, Serialize)]
struct SearchEcho {
    query: String,
    limit: u32,
    exact: bool,
}

async fn search(
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchEcho>, AppError> {
    let Query(params) = params?;

    if !(1..=MAX_SEARCH_LIMIT).contains(&params.limit) {
        return Err(AppError::BadRequest(format!(
            "limit must be between 1 and {}, got {}",
            MAX_SEARCH_LIMIT, params.limit
        )));
    }

    Ok(Json(SearchEcho {
        query: params.q,
        limit: params.limit,
        exact: params.exact,
    }))
}

async fn range(
    params: Result<Query<RangeParams>, QueryRejection>,
) -> Result<Json<RangeSummary>, AppError> {
    let Query(params) = params?;
    RangeSummary::of(params).map(Json).ok_or_else(|| {
        AppError::BadRequest(format!(
            "from ({}) must not be greater than to ({})",
            params.from, params.to
        ))
    })
}
