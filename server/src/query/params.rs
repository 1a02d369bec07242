//! Extraction of a [`QueryParams`] from raw request parameters.

use crate::resource::Resource;

use super::filter::{DateRange, EqualityClause};
use super::sort::SortSpec;

/// Default page number when none is supplied.
pub const DEFAULT_PAGE_NUMBER: i64 = 0;
/// Default page size when none is supplied or the supplied one is unusable.
pub const DEFAULT_PAGE_SIZE: usize = 100;

pub const PAGE_NUMBER_KEY: &str = "pagenumber";
pub const PAGE_SIZE_KEY: &str = "pagesize";
pub const SORT_KEY: &str = "_sort";
pub const ORDER_KEY: &str = "_order";
pub const START_DATE_KEY: &str = "startDate";
pub const END_DATE_KEY: &str = "endDate";

/// Paging values supplied as request headers.
///
/// Only consulted for keys absent from the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagingHeaders {
    pub page_number: Option<String>,
    pub page_size: Option<String>,
}

/// Everything the processor needs to know about one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    /// May be negative; the bounds check rejects it later.
    pub page_number: i64,
    /// Always at least 1.
    pub page_size: usize,
    pub sort: Option<SortSpec>,
    pub date_range: Option<DateRange>,
    pub clauses: Vec<EqualityClause>,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
            sort: None,
            date_range: None,
            clauses: Vec::new(),
        }
    }
}

impl QueryParams {
    /// Build the query for `resource` from query string pairs in request order.
    ///
    /// For paging, sort, and date keys the first occurrence wins. Every
    /// occurrence of any other key becomes its own filter clause.
    #[must_use]
    pub fn parse(resource: Resource, pairs: &[(String, String)], headers: &PagingHeaders) -> Self {
        let first = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };

        let page_number = first(PAGE_NUMBER_KEY)
            .or(headers.page_number.as_deref())
            .and_then(parse_int_prefix)
            .unwrap_or(DEFAULT_PAGE_NUMBER);
        let page_size = first(PAGE_SIZE_KEY)
            .or(headers.page_size.as_deref())
            .and_then(parse_int_prefix)
            .and_then(|size| usize::try_from(size).ok())
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let sort = SortSpec::from_params(first(SORT_KEY), first(ORDER_KEY));
        let date_range = if resource.supports_date_range() {
            DateRange::from_params(first(START_DATE_KEY), first(END_DATE_KEY))
        } else {
            None
        };

        let clauses = pairs
            .iter()
            .filter(|(key, _)| !is_reserved(resource, key))
            .map(|(key, value)| EqualityClause::new(key, value.as_str()))
            .collect();

        Self {
            page_number,
            page_size,
            sort,
            date_range,
            clauses,
        }
    }
}

/// Keys that never become equality clauses for `resource`.
#[must_use]
pub fn is_reserved(resource: Resource, key: &str) -> bool {
    match key {
        PAGE_NUMBER_KEY | PAGE_SIZE_KEY | SORT_KEY | ORDER_KEY => true,
        START_DATE_KEY | END_DATE_KEY => resource.supports_date_range(),
        _ => false,
    }
}

/// Lenient integer parsing.
///
/// Leading and trailing whitespace is ignored and the longest `[+-]?[0-9]+`
/// prefix is used, so `"12abc"` is 12. Returns `None` when there is no
/// digit to read or the number overflows.
#[must_use]
pub fn parse_int_prefix(text: &str) -> Option<i64> {
    let text = text.trim();
    let (sign_len, negative) = match text.as_bytes().first() {
        Some(b'-') => (1, true),
        Some(b'+') => (1, false),
        _ => (0, false),
    };
    let digits_len = text[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    let magnitude: i64 = text[sign_len..sign_len + digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
