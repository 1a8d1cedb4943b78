//! Route groups. Each module is an independent `Router<AppState>` fragment
//! illustrating one HTTP feature.

pub mod greeting;
pub mod headers;
pub mod json;
pub mod multipart;
pub mod params;
pub mod text;
