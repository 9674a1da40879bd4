use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// RPC request message decoded from a JSON body.
///
/// An empty body decodes as the message's default value, so a bare
/// `ListCategories` call needs no payload. Any other body must be a JSON
/// object; the content type is not checked.
pub struct RpcJson<T>(pub T);

impl<T, S> FromRequest<S> for RpcJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read request body: {}", e)))?;

        decode(&body).map(Self)
    }
}

fn decode<T>(body: &[u8]) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(body).map_err(|e| {
        let message = if e.is_syntax() || e.is_eof() {
            format!("Invalid JSON syntax: {}", e)
        } else {
            format!("Invalid JSON data: {}", e)
        };
        AppError::BadRequest(message)
    })
}
