//! Health check handler.

use axum::Json;
use serde::Serialize;

/// Health probe response body.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HealthStatus {
    /// True while the process can serve requests.
    pub ok: bool,
}

/// `GET /health` -- liveness probe.
///
/// Always returns 200 with `{"ok":true}`. It reports process liveness only
/// and does not touch the database; a broken store surfaces on `/map_feed`
/// instead.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { ok: true })
}
