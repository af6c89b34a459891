//! Types for account endpoints.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::serde_helpers::float_string;
use crate::types::{ApiResponse, OrderType, Side};

/// Request parameters for all account balances (no fields beyond the envelope).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BalancesRequest {}

/// Request parameters for the balance of a single currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyBalanceRequest {
    /// Currency ticker, e.g. `"ETH"`.
    pub currency: String,
}

impl CurrencyBalanceRequest {
    /// Create a request for `currency`.
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }
}

/// Balance of one currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// Amount free to trade or withdraw.
    #[serde(with = "float_string")]
    pub available: f64,
    /// Amount locked in open orders.
    #[serde(with = "float_string")]
    pub freeze: f64,
}

/// Response of the balances and currency balance endpoints, keyed by currency.
pub type BalancesResponse = ApiResponse<HashMap<String, Balance>>;

/// Request parameters for executed orders history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderHistoryRequest {
    /// Number of records to skip.
    pub offset: u32,
    /// Maximum number of records.
    pub limit: u32,
}

impl OrderHistoryRequest {
    /// Create a paged request.
    pub fn new(offset: u32, limit: u32) -> Self {
        Self { offset, limit }
    }
}

/// An executed order from the history endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutedOrder {
    /// Order ID.
    pub id: u64,
    /// Market name, e.g. `"ETH_BTC"`.
    pub market: String,
    /// Display name of the market.
    pub market_name: String,
    /// Order side.
    pub side: Side,
    /// Order type.
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Order origin, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Ordered amount.
    #[serde(with = "float_string")]
    pub amount: f64,
    /// Limit price.
    #[serde(with = "float_string")]
    pub price: f64,
    /// Taker fee rate.
    #[serde(with = "float_string")]
    pub taker_fee: f64,
    /// Maker fee rate.
    #[serde(with = "float_string")]
    pub maker_fee: f64,
    /// Fee paid.
    #[serde(with = "float_string")]
    pub deal_fee: f64,
    /// Filled amount in the base currency.
    #[serde(with = "float_string")]
    pub deal_stock: f64,
    /// Filled amount in the quote currency.
    #[serde(with = "float_string")]
    pub deal_money: f64,
    /// Creation time (Unix seconds with fraction).
    pub ctime: f64,
    /// Finish time (Unix seconds with fraction).
    pub ftime: f64,
}

/// Response of the order history endpoint, keyed by market.
pub type OrderHistoryResponse = ApiResponse<HashMap<String, Vec<ExecutedOrder>>>;

/// Request parameters for the deals of one order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDealsRequest {
    /// Order ID.
    pub order_id: u64,
    /// Number of records to skip.
    pub offset: u32,
    /// Maximum number of records.
    pub limit: u32,
}

impl OrderDealsRequest {
    /// Create a paged request for `order_id`.
    pub fn new(order_id: u64, offset: u32, limit: u32) -> Self {
        Self {
            order_id,
            offset,
            limit,
        }
    }
}

/// One fill of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    /// Deal ID.
    pub id: u64,
    /// Execution time (Unix seconds with fraction).
    pub time: f64,
    /// Fee paid.
    #[serde(with = "float_string")]
    pub fee: f64,
    /// Execution price.
    #[serde(with = "float_string")]
    pub price: f64,
    /// Executed amount.
    #[serde(with = "float_string")]
    pub amount: f64,
    /// Executed value in the quote currency.
    #[serde(with = "float_string")]
    pub deal: f64,
    /// ID of the counter order.
    pub deal_order_id: u64,
    /// 1 for maker, 2 for taker.
    pub role: u8,
}

/// Paged list of deals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealsPage {
    /// Number of records skipped.
    pub offset: u32,
    /// Maximum number of records.
    pub limit: u32,
    /// The deals.
    pub records: Vec<Deal>,
}

/// Response of the order deals endpoint.
pub type OrderDealsResponse = ApiResponse<DealsPage>;
