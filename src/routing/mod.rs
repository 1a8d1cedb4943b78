//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route groups (at startup, in order):
//!     greeting → params → headers → text → json → multipart → websocket
//!     → merged into one axum Router
//!     → fallback for unmatched paths (404)
//!
//! Incoming Request (method, path)
//!     → first matching route in the merged set
//!     → or 405 when the path matches but the method does not
//!     → or fallback
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Groups are stateless apart from the read-only config
//! - Static segments win over captures (`/cookies/set` before `/cookies/{name}`)

pub mod router;

pub use router::{build_routes, RouteGroup, ROUTE_GROUPS};
