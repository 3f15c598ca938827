//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the AMM service over HTTP.
//!
//! ## Module Organization
//!
//! - [`quote`] - Price quote request and response
//! - [`swap`] - Swap submission request and response
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase on the wire (`#[serde(rename_all = "camelCase")]`)
//! - **Optional fields**: `Option<T>`, omitted when `None`
//! - **Unknown fields**: ignored on deserialization
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /quote
//! Content-Type: application/json
//!
//! {"fromAsset":"MINA","toAsset":"cUSD","amount":10.0}
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {"fromAsset":"MINA","toAsset":"cUSD","amountIn":10.0,"amountOut":9.5,"fee":0.05}
//! ```

pub mod quote;
pub mod swap;

pub use quote::*;
pub use swap::*;
