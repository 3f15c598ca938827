//! # AMM Client Library
//!
//! HTTP client for requesting price quotes and submitting swaps against a
//! remote Automated Market Maker service.
//!
//! ## Module Structure
//!
//! ```text
//! src/
//! ├── config.rs   - ClientConfig, builder, environment loading
//! ├── error.rs    - AmmError and its transport/protocol/decoding split
//! ├── client.rs   - AmmClient and the generic post_json exchange
//! ├── quote.rs    - POST /quote
//! ├── swap.rs     - POST /swap
//! └── blocking.rs - BlockingAmmClient for callers without a runtime
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lib_amm::AmmClient;
//!
//! # async fn run() -> lib_amm::Result<()> {
//! let client = AmmClient::new("http://localhost:8080")?;
//!
//! let quote = client.fetch_quote("MINA", "cUSD", 10.0).await?;
//! println!("{} {} -> {} {}", quote.amount_in, quote.from_asset, quote.amount_out, quote.to_asset);
//!
//! let swap = client.submit_swap("MINA", "cUSD", 10.0, "B62q...").await?;
//! println!("tx {} is {}", swap.transaction_id, swap.status);
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Every call either returns the typed response or an [`AmmError`]. Callers
//! tell failures apart with [`AmmError::kind`]:
//!
//! - [`ErrorKind::Transport`] - the exchange never completed (connect failure,
//!   timeout, cancellation)
//! - [`ErrorKind::Protocol`] - the service answered outside `200..300`
//! - [`ErrorKind::Decoding`] - a success body that is not the expected JSON
//!
//! Nothing is retried. A swap that failed with a transport error may or may not
//! have reached the service; deciding whether to resubmit is up to the caller.

pub mod blocking;
pub mod client;
pub mod config;
pub mod error;
pub mod quote;
pub mod swap;

pub use blocking::BlockingAmmClient;
pub use client::AmmClient;
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_CONNECT_TIMEOUT};
pub use error::{AmmError, ErrorKind, Result, TransportFault};

// Re-export wire types so callers need only this crate
pub use shared::dto::{QuoteRequest, QuoteResponse, SwapRequest, SwapResponse};
pub use tokio_util::sync::CancellationToken;
