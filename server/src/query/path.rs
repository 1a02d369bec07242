//! Dotted field paths over JSON records.

use std::fmt;

use serde_json::Value;

/// A field reference such as `status` or `analytics.views`.
///
/// A key is split on every `.`; a record field whose own name contains a dot
/// can therefore not be addressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Parse a query parameter key into a path.
    #[must_use]
    pub fn parse(key: &str) -> Self {
        Self {
            segments: key.split('.').map(str::to_owned).collect(),
        }
    }

    /// Resolve the path against a record.
    ///
    /// Objects are entered by member name and arrays by a canonical decimal
    /// index (`tags.0`). Returns `None` when any segment is missing, an index
    /// is out of range or not canonical, or a scalar is traversed. A present
    /// `null` leaf resolves to `Some(&Value::Null)`.
    #[must_use]
    pub fn resolve<'a>(&self, record: &'a Value) -> Option<&'a Value> {
        self.segments
            .iter()
            .try_fold(record, |value, segment| match value {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => items.get(array_index(segment)?),
                _ => None,
            })
    }
}

/// `"0"`, `"12"`; not `"01"`, `"+1"`, or `"-1"`.
fn array_index(segment: &str) -> Option<usize> {
    segment
        .parse::<usize>()
        .ok()
        .filter(|index| index.to_string() == segment)
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}
