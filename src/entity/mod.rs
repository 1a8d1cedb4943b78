//! Entity types decoded from and encoded into request/response bodies.

pub mod bracketed;
pub mod types;

pub use bracketed::{BracketedNames, ParseError};
pub use types::{
    Greeting, Item, PartInfo, Person, RangeParams, RangeSummary, SearchParams, SetCookieParams,
    UploadSummary,
};
