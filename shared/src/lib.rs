//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the AMM client and the remote
//! AMM service. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for the AMM HTTP API
//!   - **[`dto::quote`]**: Quote request and response
//!   - **[`dto::swap`]**: Swap request and response
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! The AMM service speaks camelCase JSON:
//! - Rust fields are snake_case and renamed with `#[serde(rename_all = "camelCase")]`
//! - Unknown fields in responses are ignored
//! - Missing required fields are a deserialization error, never a silent zero
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::quote::{QuoteRequest, QuoteResponse};
//!
//! let request = QuoteRequest::new("MINA", "cUSD", 10.0);
//! let body = serde_json::to_string(&request).unwrap();
//! assert!(body.contains("\"fromAsset\":\"MINA\""));
//!
//! let quote: QuoteResponse = serde_json::from_str(
//!     r#"{"fromAsset":"MINA","toAsset":"cUSD","amountIn":10.0,"amountOut":9.5,"fee":0.05}"#,
//! ).unwrap();
//! assert_eq!(quote.amount_out, 9.5);
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
