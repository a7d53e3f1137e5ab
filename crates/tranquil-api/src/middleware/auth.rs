use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use tranquil_storage::RecordStore;

use crate::error::ApiError;
use crate::state::AppState;

/// Bearer-token middleware.
///
/// Verifies the `Authorization: Bearer <token>` header against the identity
/// provider's signing secret. On success, inserts [`Clinician`] into request
/// extensions for handlers to use.
pub async fn require_auth<S: RecordStore>(
    State(state): State<AppState<S>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("missing bearer token".to_string()))?;

    let claims = state.verifier.verify(token).inspect_err(|e| {
        tracing::warn!(error = %e, "rejected access token");
    })?;

    req.extensions_mut().insert(Clinician {
        sub: claims.sub,
        email: claims.email,
    });

    Ok(next.run(req).await)
}

/// Authenticated clinician extracted from the access token.
#[derive(Clone, Debug)]
pub struct Clinician {
    pub sub: String,
    pub email: Option<String>,
}
