//! Types for public REST API endpoints.

use serde::{Deserialize, Serialize};

use crate::types::ApiResponse;

/// Response of the symbols endpoint.
pub type SymbolsResponse = ApiResponse<Vec<String>>;

/// A tradable product (market) with its two currencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Market name, e.g. `"ETH_BTC"`.
    pub id: String,
    /// Base currency.
    pub from_symbol: String,
    /// Quote currency.
    pub to_symbol: String,
}

/// Response of the products endpoint.
pub type ProductsResponse = ApiResponse<Vec<Product>>;
