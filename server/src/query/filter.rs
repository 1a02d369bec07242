//! Equality and date-range filters.
//!
//! Query parameters are always text, while record fields are typed JSON
//! values. Matching follows one fixed coercion rule:
//!
//! | field value | matches when                                          |
//! |-------------|-------------------------------------------------------|
//! | string      | the parameter is the identical string                 |
//! | number      | the trimmed parameter parses to the same finite `f64` |
//! | boolean     | the parameter is exactly `true` or `false`            |
//! | anything else, or absent | never                                    |

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use super::path::FieldPath;

/// Record field the registrant date range is applied to.
pub const LAST_ACTIVITY_FIELD: &str = "lastactivity";

/// Compare a JSON value against query parameter text.
#[must_use]
pub fn matches_text(value: &Value, text: &str) -> bool {
    match value {
        Value::String(s) => s == text,
        Value::Number(n) => match (n.as_f64(), text.trim().parse::<f64>()) {
            (Some(field), Ok(param)) => param.is_finite() && field == param,
            _ => false,
        },
        Value::Bool(b) => text == if *b { "true" } else { "false" },
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

/// One `field=value` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqualityClause {
    pub path: FieldPath,
    pub value: String,
}

impl EqualityClause {
    #[must_use]
    pub fn new(key: &str, value: impl Into<String>) -> Self {
        Self {
            path: FieldPath::parse(key),
            value: value.into(),
        }
    }

    /// A record lacking the field never matches.
    #[must_use]
    pub fn matches(&self, record: &Value) -> bool {
        self.path
            .resolve(record)
            .is_some_and(|value| matches_text(value, &self.value))
    }
}

/// Keep the records that satisfy every clause, in their original order.
#[must_use]
pub fn apply_clauses<'a>(records: Vec<&'a Value>, clauses: &[EqualityClause]) -> Vec<&'a Value> {
    if clauses.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|record| clauses.iter().all(|clause| clause.matches(record)))
        .collect()
}

/// Inclusive `lastactivity` range with independently optional bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    /// Build a range from the raw `startDate` / `endDate` parameters.
    ///
    /// Returns `None` when neither parameter carries text, meaning no range
    /// was requested. A bound that does not parse constrains nothing, but
    /// the range itself still counts as requested.
    #[must_use]
    pub fn from_params(start: Option<&str>, end: Option<&str>) -> Option<Self> {
        let start = start.filter(|s| !s.is_empty());
        let end = end.filter(|s| !s.is_empty());
        if start.is_none() && end.is_none() {
            return None;
        }
        Some(Self {
            start: start.and_then(parse_date),
            end: end.and_then(parse_date),
        })
    }

    /// Whether a record's `lastactivity` lies inside the range.
    ///
    /// Records without a usable `lastactivity` are excluded. A value that is
    /// present but cannot be read as a point in time cannot be ordered
    /// against either bound, so the record is kept.
    #[must_use]
    pub fn contains(&self, record: &Value) -> bool {
        match Activity::of(record) {
            Activity::Missing => false,
            Activity::Unreadable => true,
            Activity::At(activity) => {
                self.start.is_none_or(|start| activity >= start)
                    && self.end.is_none_or(|end| activity <= end)
            }
        }
    }
}

/// How a record's `lastactivity` reads as a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Activity {
    /// Absent, `null`, `""`, `0`, or `false`.
    Missing,
    /// Present, but neither a known date format nor a representable epoch.
    Unreadable,
    At(DateTime<Utc>),
}

impl Activity {
    #[allow(clippy::float_cmp)]
    fn of(record: &Value) -> Self {
        let Some(value) = record.get(LAST_ACTIVITY_FIELD) else {
            return Self::Missing;
        };
        match value {
            Value::Null | Value::Bool(false) => Self::Missing,
            Value::String(s) if s.is_empty() => Self::Missing,
            Value::Number(n) if n.as_f64() == Some(0.0) => Self::Missing,
            Value::String(s) => parse_date(s).map_or(Self::Unreadable, Self::At),
            // Epoch milliseconds; fractions are truncated.
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().and_then(millis_from_f64))
                .and_then(DateTime::from_timestamp_millis)
                .map_or(Self::Unreadable, Self::At),
            Value::Bool(true) => DateTime::from_timestamp_millis(1).map_or(Self::Unreadable, Self::At),
            Value::Array(_) | Value::Object(_) => Self::Unreadable,
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn millis_from_f64(millis: f64) -> Option<i64> {
    // Out-of-range values saturate here and are then rejected by chrono.
    millis.is_finite().then(|| millis.trunc() as i64)
}

/// Parse the date formats accepted in datasets and query parameters.
///
/// RFC 3339, `YYYY-MM-DDTHH:MM[:SS[.f]]`, `YYYY-MM-DD HH:MM:SS[.f]`, and
/// `YYYY-MM-DD`. Timestamps without an offset, and bare dates, are taken
/// as UTC.
#[must_use]
pub fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
