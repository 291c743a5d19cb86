/*
 * Responsibility
 * - request body を JSON として寛容に受け取る extractor
 * - body が空 / JSON として不正 → 空 object ({}) に置き換える (400 にしない)
 * - Content-Type は見ない
 * - body の読み込み自体の失敗 (サイズ上限超過など) は Bytes の rejection をそのまま返す
 */
use axum::{
    body::Bytes,
    extract::{FromRequest, Request, rejection::BytesRejection},
};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct LenientJson(pub Value);

impl LenientJson {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Self::empty();
        }

        match serde_json::from_slice::<Value>(bytes) {
            Ok(value) => Self(value),
            Err(err) => {
                tracing::debug!(error = %err, len = bytes.len(), "unparsable json body, using {{}}");
                Self::empty()
            }
        }
    }

    fn empty() -> Self {
        Self(Value::Object(Map::new()))
    }
}

impl<S> FromRequest<S> for LenientJson
where
    S: Send + Sync,
{
    type Rejection = BytesRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        Ok(Self::from_bytes(&bytes))
    }
}
