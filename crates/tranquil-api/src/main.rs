use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use tranquil_api::config::{ApiConfig, StoreKind};
use tranquil_api::state::AppState;
use tranquil_auth::jwt::TokenVerifier;
use tranquil_storage::{MemoryStore, RecordStore, S3Store};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ApiConfig::from_env()?;
    tracing::info!(?config, "starting tranquil-api");

    let verifier = TokenVerifier::new(
        config.jwt_secret.as_bytes(),
        config.jwt_issuer.as_deref(),
        config.jwt_audience.as_deref(),
    );

    match config.store {
        StoreKind::S3 => {
            let client = tranquil_storage::client::build_client().await;
            let store = S3Store::new(client, config.bucket.clone());
            serve(config.local_addr, AppState::new(store, verifier)).await
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store; records are lost on exit");
            serve(config.local_addr, AppState::new(MemoryStore::new(), verifier)).await
        }
    }
}

async fn serve<S: RecordStore>(
    local_addr: Option<SocketAddr>,
    state: AppState<S>,
) -> eyre::Result<()> {
    let app = tranquil_api::router(state);

    match local_addr {
        Some(addr) => {
            let listener = tokio::net::TcpListener::bind(addr).await?;
            tracing::info!(%addr, "listening");
            axum::serve(listener, app).await?;
            Ok(())
        }
        None => lambda_http::run(app).await.map_err(|e| eyre::eyre!(e)),
    }
}
