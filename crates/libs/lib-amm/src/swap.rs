//! # Swap API
//!
//! `POST /swap`: submit a state-changing asset conversion.
//!
//! A swap may move funds on the remote side, so it is sent exactly once. If a
//! call fails with a transport error the swap may still have been accepted;
//! any resubmission is the caller's decision.

use shared::dto::{SwapRequest, SwapResponse};
use shared::truncate_address;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};

use crate::client::AmmClient;
use crate::error::Result;

pub const SWAP_PATH: &str = "/swap";

impl AmmClient {
    /// Submit a swap of `amount` `from_asset` into `to_asset` for `wallet_address`.
    pub async fn submit_swap(
        &self,
        from_asset: &str,
        to_asset: &str,
        amount: f64,
        wallet_address: &str,
    ) -> Result<SwapResponse> {
        self.submit_swap_with(&SwapRequest::new(from_asset, to_asset, amount, wallet_address))
            .await
    }

    #[instrument(skip_all, fields(
        from_asset = %request.from_asset,
        to_asset = %request.to_asset,
        amount = request.amount,
        wallet = %truncate_address(&request.wallet_address)
    ))]
    pub async fn submit_swap_with(&self, request: &SwapRequest) -> Result<SwapResponse> {
        info!("Submitting swap");

        let swap: SwapResponse = self.post_json(SWAP_PATH, request).await?;

        info!(
            transaction_id = %swap.transaction_id,
            status = %swap.status,
            "Swap accepted"
        );

        Ok(swap)
    }

    /// [`submit_swap_with`](Self::submit_swap_with) that aborts when `cancel` fires.
    ///
    /// A swap cancelled mid-flight may already have reached the service.
    pub async fn submit_swap_cancellable(
        &self,
        request: &SwapRequest,
        cancel: &CancellationToken,
    ) -> Result<SwapResponse> {
        self.post_json_cancellable(SWAP_PATH, request, cancel).await
    }
}
