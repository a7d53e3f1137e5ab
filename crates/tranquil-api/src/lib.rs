//! tranquil-api
//!
//! HTTP surface for scoring and storing DASS-21 assessments. Runs on AWS
//! Lambda, or on a local TCP listener for development.

pub mod audit;
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use tranquil_storage::RecordStore;

use state::AppState;

/// Build the application router over any record store.
pub fn router<S: RecordStore>(state: AppState<S>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = Router::new()
        .route("/score", post(routes::score::score))
        .route(
            "/patients/{patient_id}/assessments",
            get(routes::assessments::list_assessments::<S>)
                .post(routes::assessments::create_assessment::<S>),
        )
        .route(
            "/patients/{patient_id}/assessments/{id}",
            get(routes::assessments::get_assessment::<S>)
                .delete(routes::assessments::delete_assessment::<S>),
        )
        .route(
            "/patients/{patient_id}/summary",
            get(routes::summary::patient_summary::<S>),
        )
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth::<S>,
        ));

    Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        // Instruments (no auth, public definitions)
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        .merge(protected)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
