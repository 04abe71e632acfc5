//! REST API client for the storefront backend.
//!
//! # Architecture
//!
//! - Plain JSON over HTTP with `reqwest`; the backend is the source of truth
//! - Bearer-token authentication; the token lives in a [`SecretString`] and
//!   is attached to every request once set
//! - In-memory caching via `moka` for product and category reads (5 minute
//!   TTL), invalidated whenever a mutation could change listings
//!
//! # Example
//!
//! ```rust,ignore
//! use kommerce_client::{ApiClient, ClientConfig};
//!
//! let client = ApiClient::new(&ClientConfig::from_env()?);
//! let token = client.login("user@example.com", "hunter22").await?;
//! let products = client.search_products("mug").await?;
//! ```

pub(crate) mod cache;
pub mod types;

pub mod admin;
pub mod auth;
pub mod orders;
pub mod products;
pub mod users;

use std::sync::{Arc, RwLock};

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};

use cache::{CacheKey, CacheValue};

/// How long product and category reads stay cached.
const CACHE_TTL: std::time::Duration = std::time::Duration::from_secs(300);

/// Client for the storefront REST API.
///
/// Cheap to clone; all clones share the HTTP connection pool, the session
/// token, and the response cache.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: String,
    token: RwLock<Option<SecretString>>,
    cache: moka::future::Cache<CacheKey, CacheValue>,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        let cache = moka::future::Cache::builder()
            .max_capacity(1000)
            .time_to_live(CACHE_TTL)
            .build();

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: config.api_url.as_str().trim_end_matches('/').to_owned(),
                token: RwLock::new(None),
                cache,
            }),
        })
    }

    /// Attach a session token to subsequent requests.
    pub fn set_token(&self, token: SecretString) {
        if let Ok(mut slot) = self.inner.token.write() {
            *slot = Some(token);
        }
    }

    /// Drop the session token (logout, or after a 401).
    pub fn clear_token(&self) {
        if let Ok(mut slot) = self.inner.token.write() {
            *slot = None;
        }
    }

    /// Whether a session token is currently attached.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.inner
            .token
            .read()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }

    // =========================================================================
    // Request plumbing
    // =========================================================================

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.inner.token.read() {
            Ok(slot) => match slot.as_ref() {
                Some(token) => request.bearer_auth(token.expose_secret()),
                None => request,
            },
            Err(_) => request,
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<T> {
        let response = self.authorize(request).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(path.to_owned()));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(ApiError::RateLimited(retry_after));
        }

        let body = response.text().await?;

        if !status.is_success() {
            debug!(status = %status, path, "backend returned non-success status");
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: extract_error_message(&body)
                    .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_owned()),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(self.inner.client.get(self.url(path)), path)
            .await
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        self.execute(self.inner.client.get(self.url(path)).query(query), path)
            .await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.execute(self.inner.client.post(self.url(path)).json(body), path)
            .await
    }

    pub(crate) async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.execute(self.inner.client.put(self.url(path)).json(body), path)
            .await
    }

    pub(crate) async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(self.inner.client.put(self.url(path)), path)
            .await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(self.inner.client.delete(self.url(path)), path)
            .await
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        self.execute(self.inner.client.post(self.url(path)).multipart(form), path)
            .await
    }

    // =========================================================================
    // Cache plumbing
    // =========================================================================

    pub(crate) async fn cached(&self, key: CacheKey) -> Option<CacheValue> {
        self.inner.cache.get(&key).await
    }

    pub(crate) async fn remember(&self, key: CacheKey, value: CacheValue) {
        self.inner.cache.insert(key, value).await;
    }

    /// Drop all cached reads. Called after any mutation that could change
    /// listings (seller or admin product writes).
    pub(crate) fn invalidate_cache(&self) {
        self.inner.cache.invalidate_all();
    }
}

/// Pull a human-readable message out of an error body.
///
/// The backend wraps errors as `{"error": ...}` or `{"message": ...}`.
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "message"]
        .iter()
        .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
        .map(ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_message() {
        assert_eq!(
            extract_error_message(r#"{"error":"out of stock"}"#).as_deref(),
            Some("out of stock")
        );
        assert_eq!(
            extract_error_message(r#"{"message":"bad request"}"#).as_deref(),
            Some("bad request")
        );
        assert_eq!(extract_error_message("<html>oops</html>"), None);
        assert_eq!(extract_error_message(r#"{"status":500}"#), None);
    }
}
