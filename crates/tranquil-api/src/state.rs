use std::sync::Arc;

use tranquil_auth::jwt::TokenVerifier;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState<S> {
    pub store: S,
    pub verifier: Arc<TokenVerifier>,
}

impl<S> AppState<S> {
    pub fn new(store: S, verifier: TokenVerifier) -> Self {
        Self {
            store,
            verifier: Arc::new(verifier),
        }
    }
}
