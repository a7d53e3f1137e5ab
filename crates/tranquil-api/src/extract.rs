//! Request body extractors that report failures as JSON [`ApiError`]s.

use std::fmt;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use serde::de::{self, DeserializeOwned, MapAccess, Unexpected, Visitor};
use serde::{Deserialize, Deserializer};

use crate::error::ApiError;

/// [`axum::Json`] with rejections mapped into [`ApiError`], so malformed
/// bodies get the same `{"error": ...}` shape as every other failure.
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        match rejection.status() {
            StatusCode::UNPROCESSABLE_ENTITY => ApiError::Unprocessable(message),
            _ => ApiError::BadRequest(message),
        }
    }
}

/// Questionnaire answers exactly as they appear in the body, in document
/// order and with repeated keys kept.
///
/// Items and values are read as wide integers so that `-1` or `256` reach
/// [`collect_responses`](tranquil_instruments::collect_responses) and are
/// reported as invalid responses rather than as parse failures.
#[derive(Debug, Clone, Default)]
pub struct ResponseEntries(pub Vec<(i64, i64)>);

impl<'de> Deserialize<'de> for ResponseEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = ResponseEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping item numbers to response values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, i64>()? {
                    let item = key.trim().parse::<i64>().map_err(|_| {
                        de::Error::invalid_value(Unexpected::Str(&key), &"an item number")
                    })?;
                    entries.push((item, value));
                }
                Ok(ResponseEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}
