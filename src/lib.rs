//! HTTP routing showcase library.
//!
//! Each route group illustrates one HTTP feature: path matching, typed query
//! decoding, header/cookie inspection, text/JSON/multipart body decoding and a
//! WebSocket echo. All groups are merged into one Axum router.

pub mod config;
pub mod entity;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routes;
pub mod routing;

pub use config::schema::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
