//! P2PB2B REST API endpoint constants.

/// Base URL for the P2PB2B REST API.
pub const P2PB2B_BASE_URL: &str = "https://api.p2pb2b.io";

/// Public endpoints (no authentication required).
pub mod public {
    /// List market symbols.
    pub const SYMBOLS: &str = "/public/symbols";
    /// List products.
    pub const PRODUCTS: &str = "/public/products";
}

/// Private endpoints (authentication required).
pub mod private {
    // Account endpoints
    /// Get all account balances.
    pub const BALANCES: &str = "/api/v1/account/balances";
    /// Get the balance of one currency.
    pub const BALANCE: &str = "/api/v1/account/balance";
    /// Get executed orders history.
    pub const ORDER_HISTORY: &str = "/api/v1/account/order_history";
    /// Get the deals of one order.
    pub const ORDER_DEALS: &str = "/api/v1/account/order";

    // Trading endpoints
    /// Create a limit order.
    pub const ORDER_NEW: &str = "/api/v1/order/new";
    /// Cancel an order.
    pub const ORDER_CANCEL: &str = "/api/v1/order/cancel";
    /// Get unexecuted orders.
    pub const ORDERS: &str = "/api/v1/orders";
}
