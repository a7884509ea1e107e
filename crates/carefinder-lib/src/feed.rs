//! Map feed formatting.
//!
//! Shapes ordered provider rows into the feed-item contract consumed by the
//! external "custom map" renderer, and wraps them in the top-level response
//! envelope. The field names and fixed display metadata below are a
//! compatibility contract with that renderer and must not be altered.

use serde::Serialize;

use crate::store::ProviderRecord;

/// Title fallback for rows without an organization name.
pub const UNNAMED_FACILITY: &str = "Unnamed Facility";

/// Category fallback used in summaries and the item `type` field.
pub const DEFAULT_CATEGORY: &str = "Healthcare Facility";

/// Detail page URL prefix; the item rank is appended as the final segment.
pub const DETAIL_URL_BASE: &str = "https://directory.carefinder.health/providers";

/// Fixed pin icon shown for every provider.
pub const PIN_ICON_URL: &str = "https://directory.carefinder.health/assets/pin-provider.png";
pub const PIN_ICON_COLOR: &str = "#2a9d8f";
pub const PIN_ICON_WIDTH: u32 = 32;
pub const PIN_ICON_HEIGHT: u32 = 32;

/// Fixed thumbnail set shown for every provider.
pub const THUMBNAIL_URL: &str = "https://directory.carefinder.health/assets/facility-md.png";
pub const SMALL_THUMBNAIL_URL: &str = "https://directory.carefinder.health/assets/facility-sm.png";
pub const LARGE_THUMBNAIL_URL: &str = "https://directory.carefinder.health/assets/facility-lg.png";

/// One map pin in the externally mandated feed schema.
///
/// Every field is always serialized; the renderer treats a missing key as a
/// malformed item, not an absent value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    /// 1-based rank of the item within the response.
    pub id: usize,
    pub title: String,
    pub summary: String,
    pub address: String,
    /// Decimal string, unrounded.
    pub latitude: String,
    /// Decimal string, unrounded.
    pub longitude: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub subtype: String,
    pub pin_icon_url: String,
    pub pin_icon_color: String,
    pub pin_icon_width: u32,
    pub pin_icon_height: u32,
    pub url: String,
    pub thumbnail: String,
    pub small_thumbnail: String,
    pub large_thumbnail: String,
    /// HTML fragment; all record-derived text is escaped before embedding.
    pub content: String,
}

/// Top-level success envelope for the map feed.
#[derive(Debug, Clone, Serialize)]
pub struct FeedResponse {
    pub items: Vec<FeedItem>,
    /// Always null: the feed is a single capped page.
    pub next_page: Option<String>,
    /// Elapsed handling time as a decimal string of seconds.
    pub generated_in: String,
    pub stat: String,
}

impl FeedResponse {
    /// Wrap formatted items in the success envelope.
    pub fn ok(items: Vec<FeedItem>, generated_in: impl Into<String>) -> Self {
        Self {
            items,
            next_page: None,
            generated_in: generated_in.into(),
            stat: "ok".to_string(),
        }
    }
}

/// Top-level failure envelope, produced instead of [`FeedResponse`] when the
/// store fails. Carries no items.
#[derive(Debug, Clone, Serialize)]
pub struct FeedFailure {
    pub stat: String,
    pub message: String,
}

impl FeedFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            stat: "error".to_string(),
            message: message.into(),
        }
    }
}

/// Shape an ordered result sequence into feed items ranked `1..=N`.
pub fn format_feed(records: &[ProviderRecord]) -> Vec<FeedItem> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| format_item(record, index + 1))
        .collect()
}

/// Shape one provider row into a feed item.
///
/// `rank` is the row's 1-based position in the ordered result sequence; it
/// doubles as the item identifier and the detail URL key. Sparse rows never
/// fail: missing fields fall back to fixed text so every item is well formed.
/// The function is pure -- identical arguments yield identical output.
pub fn format_item(record: &ProviderRecord, rank: usize) -> FeedItem {
    let title = non_blank(record.organization_name.as_deref())
        .unwrap_or(UNNAMED_FACILITY)
        .to_string();
    let category = non_blank(record.category.as_deref()).unwrap_or(DEFAULT_CATEGORY);
    let city_st = join_city_state(
        record.practice_city.as_deref(),
        record.practice_state.as_deref(),
    );
    let summary = if city_st.is_empty() {
        category.to_string()
    } else {
        format!("{category} in {city_st}")
    };
    let address = non_blank(record.address.as_deref())
        .unwrap_or_default()
        .to_string();
    let subtype = non_blank(record.taxonomy_code.as_deref())
        .unwrap_or_default()
        .to_string();
    let url = format!("{DETAIL_URL_BASE}/{rank}");
    let content = render_content(&title, &summary, &address, &url);

    FeedItem {
        id: rank,
        title,
        summary,
        address,
        latitude: coordinate_string(record.latitude),
        longitude: coordinate_string(record.longitude),
        kind: category.to_string(),
        subtype,
        pin_icon_url: PIN_ICON_URL.to_string(),
        pin_icon_color: PIN_ICON_COLOR.to_string(),
        pin_icon_width: PIN_ICON_WIDTH,
        pin_icon_height: PIN_ICON_HEIGHT,
        url,
        thumbnail: THUMBNAIL_URL.to_string(),
        small_thumbnail: SMALL_THUMBNAIL_URL.to_string(),
        large_thumbnail: LARGE_THUMBNAIL_URL.to_string(),
        content,
    }
}

/// Escape text for embedding in the content fragment.
///
/// Record fields are operator-supplied data, not trusted markup; anything
/// landing inside `content` must go through here first.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn render_content(title: &str, summary: &str, address: &str, url: &str) -> String {
    let mut content = format!(
        "<div class=\"provider-pin\"><h3>{}</h3><p>{}</p>",
        escape_html(title),
        escape_html(summary),
    );
    if !address.is_empty() {
        content.push_str("<p>");
        content.push_str(&escape_html(address));
        content.push_str("</p>");
    }
    content.push_str("<a href=\"");
    content.push_str(url);
    content.push_str("\">View provider details</a></div>");
    content
}

/// Stringify a stored coordinate without rounding or reprojection.
fn coordinate_string(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn join_city_state(city: Option<&str>, state: Option<&str>) -> String {
    match (non_blank(city), non_blank(state)) {
        (Some(city), Some(state)) => format!("{city}, {state}"),
        (Some(city), None) => city.to_string(),
        (None, Some(state)) => state.to_string(),
        (None, None) => String::new(),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}
