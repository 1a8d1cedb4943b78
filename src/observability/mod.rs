//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and middleware produce:
//!     → logging.rs (structured log events)
//!     → tower_http TraceLayer (one span per request)
//!
//! Consumers:
//!     → stdout
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every request span
//! - Client errors log at debug, unmatched routes at warn

pub mod logging;
