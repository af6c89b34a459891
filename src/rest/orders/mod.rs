//! Order endpoints (authentication required).

mod types;

pub use types::*;

use crate::error::P2bError;
use crate::rest::P2bClient;
use crate::rest::endpoints::private;

impl P2bClient {
    /// Place a limit order.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use p2pb2b_api_client::rest::P2bClient;
    /// use p2pb2b_api_client::rest::orders::CreateOrderRequest;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = P2bClient::new("key", "secret")?;
    ///
    ///     let request = CreateOrderRequest::buy("ETH_BTC", 0.001, 0.02);
    ///     let response = client.create_order(&request).await?;
    ///     println!("Order ID: {}", response.result.order_id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn create_order(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<CreateOrderResponse, P2bError> {
        self.private_post(private::ORDER_NEW, request).await
    }

    /// Cancel an order.
    pub async fn cancel_order(
        &self,
        request: &CancelOrderRequest,
    ) -> Result<CancelOrderResponse, P2bError> {
        self.private_post(private::ORDER_CANCEL, request).await
    }

    /// Get unexecuted (open) orders on a market.
    pub async fn get_unexecuted_orders(
        &self,
        request: &UnexecutedOrdersRequest,
    ) -> Result<UnexecutedOrdersResponse, P2bError> {
        self.private_post(private::ORDERS, request).await
    }
}
