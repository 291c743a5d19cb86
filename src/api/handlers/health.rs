/*
 * Responsibility
 * - GET /health (疎通用、常に 200 {"status":"ok"})
 * - 他メソッドは routes 側の method_not_allowed_fallback で 405
 */
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
