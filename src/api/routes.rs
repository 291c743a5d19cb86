/*
 * Responsibility
 * - URL 構造を定義 (/health, /echo)
 * - 404 / 405 の fallback もここで決める
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{
    echo::echo,
    fallback::{method_not_allowed, not_found},
    health::health,
};

pub fn routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/echo", post(echo))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
}
