//! List-query resolution for the content collections.
//!
//! Maps the raw, untyped query parameters of a list request onto a
//! normalized [`ListQuery`] that a storage backend can execute: a
//! conjunctive filter, a single sort key with direction, and the page
//! window.  Malformed input never fails a request; it degrades to the
//! documented defaults.

use serde::{Deserialize, Serialize};

/// The content collection a list request targets; determines the
/// default page size and which filter/sort fields apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    Review,
    Video,
    Article,
}

/// Raw query parameters as received on the wire, prior to any
/// normalization.  Every field is optional and arrives as text.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub tag: Option<String>,
    #[serde(rename = "minRating")]
    pub min_rating: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// One equality/bound predicate; a filter is the conjunction of its
/// clauses.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterClause {
    Brand(String),
    Category(String),
    /// The record's tags collection must contain the value.
    Tag(String),
    /// `rating >= n`; reviews only.
    MinRating(f64),
}

/// Newtype for `Vec<FilterClause>`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListFilter(Vec<FilterClause>);

/// The resolved storage query: everything a backend needs to fetch one
/// page of a collection plus the matching count.
#[derive(Clone, Debug, PartialEq)]
pub struct ListQuery {
    pub filter: ListFilter,
    /// Column resolved from the client sort name; always from the
    /// per-kind allow-list, never verbatim client input.
    pub sort_column: &'static str,
    pub direction: SortDirection,
    pub page: i64,
    pub limit: i64,
    pub skip: i64,
}

/// Pagination metadata returned alongside one page of results.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Pagination {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub pages: i64,
}

mod impls;
