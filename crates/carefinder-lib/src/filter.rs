//! Filter construction from raw query input.
//!
//! [`FilterSpec::build`] normalizes the loosely-typed map feed query into a
//! bounded, nullable filter set. The builder never rejects input: malformed
//! numeric fields fall back to defaults and blank strings become absent
//! filters, so every request maps to a safe query.

use serde::Deserialize;

use crate::location::{parse_location, ParsedLocation};

/// Row cap applied when no usable `limit` is supplied.
pub const DEFAULT_LIMIT: i64 = 20;

/// Hard upper bound on the number of rows one request may return.
pub const MAX_LIMIT: i64 = 200;

/// Raw map feed query input as it arrives on the wire.
///
/// Every field is optional, and `limit` stays a string so malformed numeric
/// input can be recovered during normalization instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MapFeedQuery {
    /// Free-text search over organization names.
    pub q: Option<String>,
    /// Provider category filter.
    pub category: Option<String>,
    /// Free-form location: a postal code or "City, ST" text.
    pub location: Option<String>,
    /// Requested row count.
    pub limit: Option<String>,
}

/// Normalized, bounded filter set handed to the provider store.
///
/// `None` always means "filter not applied". Populated fields are trimmed and
/// non-empty, and each one is bound as a typed query parameter -- never
/// interpolated into SQL text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    /// Row cap, always within `1..=MAX_LIMIT`.
    pub limit: i64,
    /// Exact category match.
    pub category: Option<String>,
    /// `%text%` LIKE pattern over organization names.
    pub text_pattern: Option<String>,
    /// 5-digit postal code prefix.
    pub zip5: Option<String>,
    /// Practice city.
    pub city: Option<String>,
    /// Two-letter practice state.
    pub state: Option<String>,
}

impl FilterSpec {
    /// Build a bounded filter set from raw query input.
    ///
    /// A `limit` that fails to parse falls back to [`DEFAULT_LIMIT`]; any
    /// parsed value is clamped to `1..=MAX_LIMIT`. Both corrections are
    /// silent. The location string feeds either the ZIP filter or the
    /// city/state filters depending on how it classifies.
    pub fn build(raw: &MapFeedQuery) -> Self {
        let limit = raw
            .limit
            .as_deref()
            .and_then(|value| value.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_LIMIT)
            .clamp(1, MAX_LIMIT);

        let category = trimmed(raw.category.as_deref());
        let text_pattern = trimmed(raw.q.as_deref()).map(|text| format!("%{text}%"));

        let (zip5, city, state) = match parse_location(raw.location.as_deref()) {
            ParsedLocation::Zip { zip5 } => (Some(zip5), None, None),
            ParsedLocation::CityState { city, state } => (None, city, state),
            ParsedLocation::Empty => (None, None, None),
        };

        Self {
            limit,
            category,
            text_pattern,
            zip5,
            city,
            state,
        }
    }
}

fn trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
