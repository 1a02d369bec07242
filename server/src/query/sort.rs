//! Single-field stable sorting.

use std::cmp::Ordering;

use serde_json::Value;

use super::path::FieldPath;

/// Sort direction taken from `_order`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Only the exact text `desc` selects descending order.
    #[must_use]
    pub fn from_param(value: Option<&str>) -> Self {
        if value == Some("desc") {
            Self::Descending
        } else {
            Self::Ascending
        }
    }
}

/// `_sort` / `_order` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: FieldPath,
    pub order: SortOrder,
}

impl SortSpec {
    /// Returns `None` unless `_sort` names a field.
    #[must_use]
    pub fn from_params(sort: Option<&str>, order: Option<&str>) -> Option<Self> {
        let field = sort.filter(|s| !s.is_empty())?;
        Some(Self {
            field: FieldPath::parse(field),
            order: SortOrder::from_param(order),
        })
    }

    /// Stable in-place sort; equal keys keep their current relative order.
    pub fn apply(&self, records: &mut [&Value]) {
        records.sort_by(|a, b| {
            let ordering = compare_values(self.field.resolve(a), self.field.resolve(b));
            match self.order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
    }
}

/// Rank of a sort key's kind; keys of different kinds order by rank.
const fn kind_rank(value: Option<&Value>) -> u8 {
    match value {
        Some(Value::Number(_)) => 0,
        Some(Value::String(_)) => 1,
        Some(Value::Bool(_)) => 2,
        Some(Value::Null | Value::Array(_) | Value::Object(_)) | None => 3,
    }
}

/// Total order over optional JSON values.
///
/// Numbers, strings, and booleans compare natively within their kind. Null,
/// arrays, objects, and missing fields are all equal to each other and
/// sort after every scalar.
#[must_use]
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            match (x.as_f64(), y.as_f64()) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                _ => Ordering::Equal,
            }
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}
