//! Request and response bodies used by the JSON, query and multipart routes.

use serde::{Deserialize, Serialize};

/// A person as accepted and returned by the JSON route.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Reply to a decoded [`Person`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Greeting {
    pub message: String,
    pub adult: bool,
    pub person: Person,
}

impl From<Person> for Greeting {
    fn from(person: Person) -> Self {
        Self {
            message: format!("Hello, {}! You are {} years old.", person.name, person.age),
            adult: person.age >= 18,
            person,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
}

/// Query string of `/search`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchParams {
    pub q: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub exact: bool,
}

fn default_limit() -> u32 {
    10
}

/// Query string of `/range`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RangeParams {
    pub from: i64,
    pub to: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RangeSummary {
    pub from: i64,
    pub to: i64,
    pub count: u128,
    pub sum: i128,
}

impl RangeSummary {
    /// Summarize an inclusive range. Returns `None` when `from > to`.
    pub fn of(range: RangeParams) -> Option<Self> {
        if range.from > range.to {
            return None;
        }
        let (from, to) = (i128::from(range.from), i128::from(range.to));
        // 1 <= count <= 2^64
        let count = to - from + 1;
        Some(Self {
            from: range.from,
            to: range.to,
            count: count.unsigned_abs(),
            sum: (from + to) * count / 2,
        })
    }
}

/// Query string of `/cookies/set`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SetCookieParams {
    pub name: String,
    pub value: String,
}

/// One part of a multipart upload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PartInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UploadSummary {
    pub count: usize,
    pub parts: Vec<PartInfo>,
}

impl From<Vec<PartInfo>> for UploadSummary {
    fn from(parts: Vec<PartInfo>) -> Self {
        Self {
            count: parts.len(),
            parts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_from_person() {
        let greeting = Greeting::from(Person {
            name: "Ada".into(),
            age: 17,
            email: None,
        });
        assert_eq!(greeting.message, "Hello, Ada! You are 17 years old.");
        assert!(!greeting.adult);
    }

    #[test]
    fn test_range_summary() {
        let summary = RangeSummary::of(RangeParams { from: 1, to: 100 }).unwrap();
        assert_eq!(summary.count, 100);
        assert_eq!(summary.sum, 5050);

        let single = RangeSummary::of(RangeParams { from: -3, to: -3 }).unwrap();
        assert_eq!((single.count, single.sum), (1, -3));

        let symmetric = RangeSummary::of(RangeParams { from: -5, to: 5 }).unwrap();
        assert_eq!(symmetric.sum, 0);

        assert!(RangeSummary::of(RangeParams { from: 2, to: 1 }).is_none());
    }

    #[test]
    fn test_range_summary_extremes_do_not_overflow() {
        let full = RangeSummary::of(RangeParams {
            from: i64::MIN,
            to: i64::MAX,
        })
        .unwrap();
        assert_eq!(full.sum, -(1i128 << 63));
        assert_eq!(full.count, 1u128 << 64);

        let upper = RangeSummary::of(RangeParams {
            from: 0,
            to: i64::MAX,
        })
        .unwrap();
        assert_eq!(upper.count, 1u128 << 63);
    }

    #[test]
    fn test_range_summary_serializes_full_count() {
        let full = RangeSummary::of(RangeParams {
            from: i64::MIN,
            to: i64::MAX,
        })
        .unwrap();
        let text = serde_json::to_string(&full).unwrap();
        assert!(text.contains(r#""count":18446744073709551616"#), "{}", text);
        assert_eq!(serde_json::from_str::<RangeSummary>(&text).unwrap(), full);
    }

    #[test]
    fn test_search_params_defaults() {
        let params: SearchParams = serde_json::from_str(r#"{"q":"rust"}"#).unwrap();
        assert_eq!(params.limit, 10);
        assert!(!params.exact);
    }
}
