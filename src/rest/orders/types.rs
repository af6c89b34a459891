//! Types for order endpoints.

use serde::{Deserialize, Serialize};

use crate::types::serde_helpers::float_string;
use crate::types::{ApiResponse, OrderType, Side};

/// Request parameters for placing a limit order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// Market name, e.g. `"ETH_BTC"`.
    pub market: String,
    /// Order side.
    pub side: Side,
    /// Order amount in the base currency.
    #[serde(with = "float_string")]
    pub amount: f64,
    /// Limit price in the quote currency.
    #[serde(with = "float_string")]
    pub price: f64,
}

impl CreateOrderRequest {
    /// Create a limit order request.
    pub fn new(market: impl Into<String>, side: Side, amount: f64, price: f64) -> Self {
        Self {
            market: market.into(),
            side,
            amount,
            price,
        }
    }

    /// Create a limit buy order request.
    pub fn buy(market: impl Into<String>, amount: f64, price: f64) -> Self {
        Self::new(market, Side::Buy, amount, price)
    }

    /// Create a limit sell order request.
    pub fn sell(market: impl Into<String>, amount: f64, price: f64) -> Self {
        Self::new(market, Side::Sell, amount, price)
    }
}

/// Request parameters for cancelling an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderRequest {
    /// Market the order lives on.
    pub market: String,
    /// Order ID.
    pub order_id: u64,
}

impl CancelOrderRequest {
    /// Create a cancel request.
    pub fn new(market: impl Into<String>, order_id: u64) -> Self {
        Self {
            market: market.into(),
            order_id,
        }
    }
}

/// An order as returned by create and cancel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order ID.
    pub order_id: u64,
    /// Market name.
    pub market: String,
    /// Order side.
    pub side: Side,
    /// Order type.
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Creation time (Unix seconds with fraction).
    pub timestamp: f64,
    /// Limit price.
    #[serde(with = "float_string")]
    pub price: f64,
    /// Ordered amount.
    #[serde(with = "float_string")]
    pub amount: f64,
    /// Amount not yet filled.
    #[serde(with = "float_string")]
    pub left: f64,
    /// Taker fee rate.
    #[serde(with = "float_string")]
    pub taker_fee: f64,
    /// Maker fee rate.
    #[serde(with = "float_string")]
    pub maker_fee: f64,
    /// Fee paid so far.
    #[serde(with = "float_string")]
    pub deal_fee: f64,
    /// Filled amount in the base currency.
    #[serde(with = "float_string")]
    pub deal_stock: f64,
    /// Filled amount in the quote currency.
    #[serde(with = "float_string")]
    pub deal_money: f64,
}

/// Response of the create order endpoint.
pub type CreateOrderResponse = ApiResponse<Order>;

/// Response of the cancel order endpoint.
pub type CancelOrderResponse = ApiResponse<Order>;

/// Request parameters for unexecuted (open) orders on a market.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnexecutedOrdersRequest {
    /// Market name.
    pub market: String,
    /// Number of records to skip.
    pub offset: u32,
    /// Maximum number of records.
    pub limit: u32,
}

impl UnexecutedOrdersRequest {
    /// Create a paged request for `market`.
    pub fn new(market: impl Into<String>, offset: u32, limit: u32) -> Self {
        Self {
            market: market.into(),
            offset,
            limit,
        }
    }
}

/// An open order. Same shape as [`Order`] but keyed by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnexecutedOrder {
    /// Order ID.
    pub id: u64,
    /// Market name.
    pub market: String,
    /// Order side.
    pub side: Side,
    /// Order type.
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Creation time (Unix seconds with fraction).
    pub timestamp: f64,
    /// Limit price.
    #[serde(with = "float_string")]
    pub price: f64,
    /// Ordered amount.
    #[serde(with = "float_string")]
    pub amount: f64,
    /// Amount not yet filled.
    #[serde(with = "float_string")]
    pub left: f64,
    /// Taker fee rate.
    #[serde(with = "float_string")]
    pub taker_fee: f64,
    /// Maker fee rate.
    #[serde(with = "float_string")]
    pub maker_fee: f64,
    /// Fee paid so far.
    #[serde(with = "float_string")]
    pub deal_fee: f64,
    /// Filled amount in the base currency.
    #[serde(with = "float_string")]
    pub deal_stock: f64,
    /// Filled amount in the quote currency.
    #[serde(with = "float_string")]
    pub deal_money: f64,
}

/// Paged list of open orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnexecutedOrdersPage {
    /// Maximum number of records.
    pub limit: u32,
    /// Number of records skipped.
    pub offset: u32,
    /// Total number of open orders on the market.
    pub total: u32,
    /// The orders.
    pub result: Vec<UnexecutedOrder>,
}

/// Response of the unexecuted orders endpoint.
pub type UnexecutedOrdersResponse = ApiResponse<UnexecutedOrdersPage>;
