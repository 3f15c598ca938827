//! # Blocking Client
//!
//! Synchronous facade over [`AmmClient`] for callers that do not run an async
//! runtime. Each call blocks the current thread for exactly one exchange.
//!
//! The client owns a current-thread Tokio runtime. Do not create, call or drop
//! it from inside another async runtime; Tokio panics on nested `block_on`.
//!
//! ```rust,no_run
//! use lib_amm::BlockingAmmClient;
//!
//! let client = BlockingAmmClient::new("http://localhost:8080")?;
//! let quote = client.fetch_quote("MINA", "cUSD", 10.0)?;
//! println!("{} -> {}", quote.amount_in, quote.amount_out);
//! # Ok::<(), lib_amm::AmmError>(())
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::dto::{QuoteResponse, SwapResponse};
use tokio::runtime::{Builder, Runtime};

use crate::client::AmmClient;
use crate::config::ClientConfig;
use crate::error::{AmmError, Result};

/// Blocking AMM client.
pub struct BlockingAmmClient {
    inner: AmmClient,
    runtime: Runtime,
}

impl BlockingAmmClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(base_url)?)
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| AmmError::Config(format!("Failed to start runtime: {}", e)))?;

        let inner = {
            let _guard = runtime.enter();
            AmmClient::with_config(config)?
        };

        Ok(Self { inner, runtime })
    }

    /// The async client this facade drives.
    pub fn inner(&self) -> &AmmClient {
        &self.inner
    }

    pub fn fetch_quote(&self, from_asset: &str, to_asset: &str, amount: f64) -> Result<QuoteResponse> {
        self.runtime
            .block_on(self.inner.fetch_quote(from_asset, to_asset, amount))
    }

    pub fn submit_swap(
        &self,
        from_asset: &str,
        to_asset: &str,
        amount: f64,
        wallet_address: &str,
    ) -> Result<SwapResponse> {
        self.runtime
            .block_on(self.inner.submit_swap(from_asset, to_asset, amount, wallet_address))
    }

    pub fn post_json<P, T>(&self, path: &str, payload: &P) -> Result<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.runtime.block_on(self.inner.post_json(path, payload))
    }
}

impl std::fmt::Debug for BlockingAmmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockingAmmClient")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}
