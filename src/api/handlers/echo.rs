/*
 * Responsibility
 * - POST /echo
 * - 受け取った JSON をそのまま返す (不正/空の body は {} 扱い、LenientJson 側で吸収)
 */
use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::api::extractors::LenientJson;

pub async fn echo(LenientJson(payload): LenientJson) -> impl IntoResponse {
    (StatusCode::OK, Json(payload))
}
