//! Map feed handler.

use std::time::Instant;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, info};
use uuid::Uuid;

use carefinder_lib::{format_feed, FeedFailure, FeedResponse, FilterSpec, MapFeedQuery};

use crate::state::AppState;

/// `GET /map_feed` -- filtered provider lookup shaped for the map renderer.
///
/// Malformed input never fails the request: the filter builder recovers bad
/// limits and blank filters. Only a store failure produces the error
/// envelope, with HTTP 500 and no items.
pub async fn map_feed(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<MapFeedQuery>,
) -> Response {
    let request_id = request_id(&headers);
    let started = Instant::now();

    let filter = FilterSpec::build(&query);
    info!(request_id = %request_id, ?filter, "handling map feed request");

    match state.store().search(&filter).await {
        Ok(records) => {
            let items = format_feed(&records);
            let generated_in = format!("{:.4}", started.elapsed().as_secs_f64());
            info!(
                request_id = %request_id,
                items = items.len(),
                %generated_in,
                "map feed request served"
            );
            (StatusCode::OK, Json(FeedResponse::ok(items, generated_in))).into_response()
        }
        Err(e) => {
            error!(request_id = %request_id, error = %e, "provider search failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FeedFailure::new(format!("provider search failed: {e}"))),
            )
                .into_response()
        }
    }
}

/// Take the caller's `X-Request-ID` if present, otherwise mint a UUID v7
/// (time-sortable) for log correlation.
fn request_id(headers: &HeaderMap) -> String {
    headers
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::now_v7().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_prefers_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", "req-42".parse().unwrap());
        assert_eq!(request_id(&headers), "req-42");
    }

    #[test]
    fn test_request_id_generated_when_absent() {
        let headers = HeaderMap::new();
        let generated = request_id(&headers);
        assert!(!generated.is_empty());
        assert_ne!(generated, request_id(&headers));
    }
}
