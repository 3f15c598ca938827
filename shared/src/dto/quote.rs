use serde::{Deserialize, Serialize};

/// Body of `POST /quote`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub from_asset: String,
    pub to_asset: String,
    /// Input amount, in `from_asset` units.
    pub amount: f64,
}

impl QuoteRequest {
    pub fn new(from_asset: impl Into<String>, to_asset: impl Into<String>, amount: f64) -> Self {
        Self {
            from_asset: from_asset.into(),
            to_asset: to_asset.into(),
            amount,
        }
    }
}

/// Non-binding price estimate returned by `POST /quote`.
///
/// Every field is required. A body missing any of them fails to deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub from_asset: String,
    pub to_asset: String,
    pub amount_in: f64,
    pub amount_out: f64,
    /// Charged fee, same unit as `amount_in`.
    pub fee: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_quote_request_wire_keys() {
        let request = QuoteRequest::new("MINA", "cUSD", 10.0);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value, json!({"fromAsset": "MINA", "toAsset": "cUSD", "amount": 10.0}));
    }

    #[test]
    fn test_quote_response_parses_example() {
        let body = r#"{"fromAsset":"MINA","toAsset":"cUSD","amountIn":10.0,"amountOut":9.5,"fee":0.05}"#;
        let quote: QuoteResponse = serde_json::from_str(body).unwrap();

        assert_eq!(
            quote,
            QuoteResponse {
                from_asset: "MINA".to_string(),
                to_asset: "cUSD".to_string(),
                amount_in: 10.0,
                amount_out: 9.5,
                fee: 0.05,
            }
        );
    }

    #[test]
    fn test_quote_response_ignores_unknown_fields() {
        let body = r#"{"fromAsset":"MINA","toAsset":"cUSD","amountIn":1,"amountOut":2,"fee":0,"route":["pool-1"],"priceImpact":0.3}"#;
        let quote: QuoteResponse = serde_json::from_str(body).unwrap();

        assert_eq!(quote.amount_in, 1.0);
        assert_eq!(quote.amount_out, 2.0);
        assert_eq!(quote.fee, 0.0);
    }

    #[test]
    fn test_quote_response_missing_field_is_error() {
        let body = r#"{"fromAsset":"MINA","toAsset":"cUSD","amountIn":10.0,"amountOut":9.5}"#;
        let err = serde_json::from_str::<QuoteResponse>(body).unwrap_err();

        assert!(err.to_string().contains("fee"));
    }

    #[test]
    fn test_quote_response_rejects_string_amount() {
        let body = r#"{"fromAsset":"MINA","toAsset":"cUSD","amountIn":"10","amountOut":9.5,"fee":0.05}"#;
        assert!(serde_json::from_str::<QuoteResponse>(body).is_err());
    }
}
