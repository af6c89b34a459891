//! # P2PB2B Client
//!
//! An async Rust client library for the P2PB2B exchange REST API.
//!
//! ## Features
//!
//! - Account balances, order history and deals
//! - Placing, cancelling and listing open orders
//! - Public symbols and products listings
//! - Request signing with `X-TXC-PAYLOAD` / `X-TXC-SIGNATURE` headers
//! - Strong typing for all request/response types
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use p2pb2b_api_client::rest::P2bClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = P2bClient::public();
//!     let products = client.get_products().await?;
//!     println!("Products: {:?}", products.result);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::P2bError;
pub use rest::P2bClient;
pub use types::common::{ApiMessage, ApiResponse, OrderType, Side};

/// Result type alias using P2bError
pub type Result<T> = std::result::Result<T, P2bError>;
