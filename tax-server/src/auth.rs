use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use crate::error::ApiError;
use crate::routes::AppState;

pub const API_KEY_HEADER_NAME: &str = "X-Api-Key";

/// Static API-key gate for protected routes.
///
/// Requests must carry an `X-Api-Key` header equal to the configured key.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let provided = request
        .headers()
        .get(API_KEY_HEADER_NAME)
        .filter(|value| !value.is_empty())
        .ok_or(ApiError::MissingApiKey)?;

    if provided.as_bytes() != state.api_key.as_bytes() {
        debug!(path = %request.uri().path(), "rejected api key");
        return Err(ApiError::InvalidApiKey);
    }

    Ok(next.run(request).await)
}
