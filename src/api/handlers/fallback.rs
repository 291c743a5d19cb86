/*
 * Responsibility
 * - ルート不一致 (404) / メソッド不一致 (405) を AppError 経由で JSON error body にする
 */
use axum::http::{Method, Uri};

use crate::error::AppError;

pub async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(uri.path())
}

pub async fn method_not_allowed(method: Method) -> AppError {
    AppError::method_not_allowed(method)
}
