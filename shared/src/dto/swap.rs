use serde::{Deserialize, Serialize};

/// Body of `POST /swap`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    pub from_asset: String,
    pub to_asset: String,
    pub amount: f64,
    /// Address of the wallet submitting the swap.
    pub wallet_address: String,
}

impl SwapRequest {
    pub fn new(
        from_asset: impl Into<String>,
        to_asset: impl Into<String>,
        amount: f64,
        wallet_address: impl Into<String>,
    ) -> Self {
        Self {
            from_asset: from_asset.into(),
            to_asset: to_asset.into(),
            amount,
            wallet_address: wallet_address.into(),
        }
    }
}

/// Result of `POST /swap`.
///
/// `status` is a server-defined label ("submitted", "pending", "failed", ...)
/// and is passed through as-is. `submitted_at` is the literal ISO-8601 string
/// sent by the service; it is never parsed or re-encoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapResponse {
    pub transaction_id: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_swap_request_wire_keys() {
        let request = SwapRequest::new("MINA", "cUSD", 10.0, "B62qabc");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "fromAsset": "MINA",
                "toAsset": "cUSD",
                "amount": 10.0,
                "walletAddress": "B62qabc"
            })
        );
    }

    #[test]
    fn test_swap_response_parses_example() {
        let body = r#"{"transactionId":"abc123","status":"submitted","submittedAt":"2024-01-01T00:00:00Z","message":"Swap created"}"#;
        let swap: SwapResponse = serde_json::from_str(body).unwrap();

        assert_eq!(swap.transaction_id, "abc123");
        assert_eq!(swap.status, "submitted");
        assert_eq!(swap.submitted_at.as_deref(), Some("2024-01-01T00:00:00Z"));
        assert_eq!(swap.message.as_deref(), Some("Swap created"));
    }

    #[test]
    fn test_swap_response_keeps_timestamp_literal() {
        let body = r#"{"transactionId":"t","status":"pending","submittedAt":"2024-01-01T02:00:00+02:00"}"#;
        let swap: SwapResponse = serde_json::from_str(body).unwrap();
        assert_eq!(swap.submitted_at.as_deref(), Some("2024-01-01T02:00:00+02:00"));

        let value = serde_json::to_value(&swap).unwrap();
        assert_eq!(value["submittedAt"], "2024-01-01T02:00:00+02:00");
    }

    #[test]
    fn test_swap_response_accepts_unknown_status() {
        let body = r#"{"transactionId":"t","status":"queued-for-batch"}"#;
        let swap: SwapResponse = serde_json::from_str(body).unwrap();

        assert_eq!(swap.status, "queued-for-batch");
        assert!(swap.submitted_at.is_none());
        assert!(swap.message.is_none());
    }

    #[test]
    fn test_swap_response_missing_transaction_id_is_error() {
        let body = r#"{"status":"submitted"}"#;
        assert!(serde_json::from_str::<SwapResponse>(body).is_err());
    }
}
