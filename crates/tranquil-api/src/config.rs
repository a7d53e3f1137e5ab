//! Runtime configuration, read once from the environment at startup.

use std::env;
use std::fmt;
use std::net::SocketAddr;

/// Which [`RecordStore`](tranquil_storage::RecordStore) backs the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    S3,
    Memory,
}

#[derive(Clone)]
pub struct ApiConfig {
    pub bucket: String,
    pub store: StoreKind,
    pub jwt_secret: String,
    pub jwt_issuer: Option<String>,
    pub jwt_audience: Option<String>,
    /// Serve over TCP on this address instead of the Lambda runtime.
    pub local_addr: Option<SocketAddr>,
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source. Empty values count
    /// as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let store = match get("TRANQUIL_STORE").as_deref() {
            None | Some("s3") => StoreKind::S3,
            Some("memory") => StoreKind::Memory,
            Some(other) => {
                return Err(eyre::eyre!(
                    "TRANQUIL_STORE must be 's3' or 'memory', got '{other}'"
                ));
            }
        };

        let jwt_secret = get("TRANQUIL_JWT_SECRET")
            .ok_or_else(|| eyre::eyre!("TRANQUIL_JWT_SECRET is required"))?;

        let local_addr = get("TRANQUIL_LOCAL_ADDR")
            .map(|addr| {
                addr.parse::<SocketAddr>()
                    .map_err(|e| eyre::eyre!("invalid TRANQUIL_LOCAL_ADDR '{addr}': {e}"))
            })
            .transpose()?;

        Ok(Self {
            bucket: get("TRANQUIL_BUCKET").unwrap_or_else(|| "tranquil".to_string()),
            store,
            jwt_secret,
            jwt_issuer: get("TRANQUIL_JWT_ISSUER"),
            jwt_audience: get("TRANQUIL_JWT_AUDIENCE"),
            local_addr,
        })
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("bucket", &self.bucket)
            .field("store", &self.store)
            .field("jwt_secret", &"****")
            .field("jwt_issuer", &self.jwt_issuer)
            .field("jwt_audience", &self.jwt_audience)
            .field("local_addr", &self.local_addr)
            .finish()
    }
}
