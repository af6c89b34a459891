//! Public REST API endpoints (no authentication required).

mod types;

pub use types::*;

use crate::error::P2bError;
use crate::rest::P2bClient;
use crate::rest::endpoints::public;

impl P2bClient {
    /// List all market symbols.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use p2pb2b_api_client::rest::P2bClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = P2bClient::public();
    ///     let symbols = client.get_symbols().await?;
    ///     println!("{} markets", symbols.result.len());
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_symbols(&self) -> Result<SymbolsResponse, P2bError> {
        self.public_get(public::SYMBOLS).await
    }

    /// List all products with their base and quote currencies.
    pub async fn get_products(&self) -> Result<ProductsResponse, P2bError> {
        self.public_get(public::PRODUCTS).await
    }
}
