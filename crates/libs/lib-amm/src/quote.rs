//! # Quote API
//!
//! `POST /quote`: ask the service what a conversion would yield.

use shared::dto::{QuoteRequest, QuoteResponse};
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

use crate::client::AmmClient;
use crate::error::Result;

pub const QUOTE_PATH: &str = "/quote";

impl AmmClient {
    /// Get a quote for converting `amount` of `from_asset` into `to_asset`.
    ///
    /// Inputs are sent as-is; the service is responsible for validating them.
    pub async fn fetch_quote(
        &self,
        from_asset: &str,
        to_asset: &str,
        amount: f64,
    ) -> Result<QuoteResponse> {
        self.fetch_quote_with(&QuoteRequest::new(from_asset, to_asset, amount))
            .await
    }

    #[instrument(skip_all, fields(
        from_asset = %request.from_asset,
        to_asset = %request.to_asset,
        amount = request.amount
    ))]
    pub async fn fetch_quote_with(&self, request: &QuoteRequest) -> Result<QuoteResponse> {
        let quote: QuoteResponse = self.post_json(QUOTE_PATH, request).await?;

        debug!(
            amount_in = quote.amount_in,
            amount_out = quote.amount_out,
            fee = quote.fee,
            "AMM quote received"
        );

        Ok(quote)
    }

    /// [`fetch_quote_with`](Self::fetch_quote_with) that aborts when `cancel` fires.
    pub async fn fetch_quote_cancellable(
        &self,
        request: &QuoteRequest,
        cancel: &CancellationToken,
    ) -> Result<QuoteResponse> {
        self.post_json_cancellable(QUOTE_PATH, request, cancel).await
    }
}
