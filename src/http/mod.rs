//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign request ID)
//!     → routing layer picks a route group handler
//!     → response.rs (errors rendered as JSON)
//!     → Send to client
//!
//! GET /ws with Upgrade: websocket
//!     → websocket.rs (echo session)
//! ```

pub mod request;
pub mod response;
pub mod server;
pub mod websocket;

pub use request::X_REQUEST_ID;
pub use response::{AppError, ErrorBody};
pub use server::{AppState, HttpServer};
