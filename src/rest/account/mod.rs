//! Account endpoints (authentication required).
//!
//! These endpoints sign their requests when credentials are configured on
//! the client.

mod types;

pub use types::*;

use crate::error::P2bError;
use crate::rest::P2bClient;
use crate::rest::endpoints::private;

impl P2bClient {
    /// Get all account balances.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use p2pb2b_api_client::rest::P2bClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = P2bClient::new("key", "secret")?;
    ///
    ///     let balances = client.get_balances().await?;
    ///     for (currency, balance) in balances.result {
    ///         println!("{}: {} ({} frozen)", currency, balance.available, balance.freeze);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_balances(&self) -> Result<BalancesResponse, P2bError> {
        self.private_post(private::BALANCES, &BalancesRequest::default())
            .await
    }

    /// Get the balance of a single currency.
    pub async fn get_currency_balance(
        &self,
        request: &CurrencyBalanceRequest,
    ) -> Result<BalancesResponse, P2bError> {
        self.private_post(private::BALANCE, request).await
    }

    /// Get the executed orders history, grouped by market.
    pub async fn get_order_history(
        &self,
        request: &OrderHistoryRequest,
    ) -> Result<OrderHistoryResponse, P2bError> {
        self.private_post(private::ORDER_HISTORY, request).await
    }

    /// Get the deals (fills) of one order.
    pub async fn get_order_deals(
        &self,
        request: &OrderDealsRequest,
    ) -> Result<OrderDealsResponse, P2bError> {
        self.private_post(private::ORDER_DEALS, request).await
    }
}
