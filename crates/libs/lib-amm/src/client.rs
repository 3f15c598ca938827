//! # AMM HTTP Client
//!
//! [`AmmClient`] owns one `reqwest` connection pool and the generic JSON
//! exchange every operation is built on.

use std::sync::Arc;
use std::time::Instant;

use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{AmmError, Result};

/// Client for a remote AMM service.
///
/// Cloning is cheap and clones share the connection pool. Calls on one client
/// may run concurrently; they share no state beyond the pool. Dropping the last
/// clone closes its pooled connections.
#[derive(Clone, Debug)]
pub struct AmmClient {
    http: Client,
    config: Arc<ClientConfig>,
}

impl AmmClient {
    /// Create a client with default timeouts.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(base_url)?)
    }

    /// Create a client from a validated config.
    ///
    /// Redirects are not followed, so a 3xx answer surfaces as a protocol error.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .connect_timeout(config.connect_timeout())
            .redirect(Policy::none());

        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| AmmError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// POST `payload` as JSON to `path` and decode a 2xx body into `T`.
    ///
    /// - transport failures (connect, timeout, body read) → [`AmmError::Transport`]
    /// - status outside `200..300` → [`AmmError::Protocol`] with the raw body
    /// - 2xx body that is not UTF-8 JSON decoding into `T` → [`AmmError::Decoding`]
    ///
    /// The request is sent once and never retried.
    #[instrument(skip_all, fields(path = %path))]
    pub async fn post_json<P, T>(&self, path: &str, payload: &P) -> Result<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        let body = serde_json::to_vec(payload).map_err(|source| AmmError::Encoding {
            path: path.to_string(),
            source,
        })?;

        debug!(url = %url, bytes = body.len(), "Sending AMM request");
        let start = Instant::now();

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "AMM request failed");
                AmmError::transport(path, e)
            })?;

        let status = response.status().as_u16();
        let raw = response.bytes().await.map_err(|e| {
            error!(error = %e, status, "Failed to read AMM response body");
            AmmError::transport(path, e)
        })?;

        let duration = start.elapsed();

        if !is_success_status(status) {
            warn!(
                status,
                duration_ms = duration.as_millis(),
                "AMM request rejected"
            );
            return Err(AmmError::protocol(path, status, raw.to_vec()));
        }

        debug!(status, duration_ms = duration.as_millis(), "AMM response received");

        // from_slice rejects invalid UTF-8 instead of substituting U+FFFD.
        serde_json::from_slice::<T>(&raw).map_err(|e| {
            error!(error = %e, "AMM response parse error");
            AmmError::decoding(path, &raw, e)
        })
    }

    /// [`post_json`](Self::post_json) that stops as soon as `cancel` fires.
    ///
    /// Cancellation, before or during the exchange, yields a transport error
    /// for which [`AmmError::is_cancelled`] is true.
    pub async fn post_json_cancellable<P, T>(
        &self,
        path: &str,
        payload: &P,
        cancel: &CancellationToken,
    ) -> Result<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        if cancel.is_cancelled() {
            return Err(AmmError::cancelled(path));
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                warn!(path, "AMM request cancelled");
                Err(AmmError::cancelled(path))
            }
            result = self.post_json(path, payload) => result,
        }
    }
}

fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}
