use axum::Json;
use serde::Serialize;

pub const SERVICE_NAME: &str = "storycv-api";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub service: &'static str,
}

/// GET /health
/// Liveness only: the service holds no connections that could be down.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        service: SERVICE_NAME,
    })
}
