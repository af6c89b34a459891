//! P2PB2B REST API client.
//!
//! - [`account`] - balances, order history and deals
//! - [`orders`] - placing, cancelling and listing open orders
//! - [`public`] - market symbols and products
//!
//! ```rust,no_run
//! use p2pb2b_api_client::rest::P2bClient;
//! use p2pb2b_api_client::rest::account::CurrencyBalanceRequest;
//!
//! # async fn run() -> Result<(), p2pb2b_api_client::P2bError> {
//! let client = P2bClient::new("key", "secret")?;
//! let eth = client
//!     .get_currency_balance(&CurrencyBalanceRequest::new("ETH"))
//!     .await?;
//! println!("{:?}", eth.result.get("ETH"));
//! # Ok(())
//! # }
//! ```

pub mod account;
mod client;
mod endpoints;
pub mod orders;
pub mod public;
pub mod transport;

pub use client::{P2bClient, P2bClientBuilder};
pub use endpoints::*;
pub use transport::HttpResponse;
