//! Example: Read-only authenticated account endpoints.
//!
//! Reads `P2BP2B_API_KEY` and `P2BP2B_API_SECRET` from the environment (or a
//! `.env` file) and exits with status 1 if either is missing.
//!
//! Run with: cargo run --example account

use std::process;
use std::sync::Arc;
use std::time::Duration;

use p2pb2b_api_client::auth::{API_KEY_ENV, API_SECRET_ENV, EnvCredentials};
use p2pb2b_api_client::rest::P2bClient;
use p2pb2b_api_client::rest::account::{
    CurrencyBalanceRequest, OrderDealsRequest, OrderHistoryRequest,
};
use p2pb2b_api_client::rest::orders::UnexecutedOrdersRequest;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let credentials = match EnvCredentials::from_env() {
        Ok(creds) => Arc::new(creds),
        Err(_) => {
            eprintln!("please provide env vars {API_KEY_ENV} and {API_SECRET_ENV}");
            process::exit(1);
        }
    };

    let client = P2bClient::builder()
        .credentials(credentials)
        .user_agent("p2pb2b-api-client-examples/account")
        .build();

    println!("=== Balances ===");
    match client.get_balances().await {
        Ok(res) => println!("res: {:?}", res),
        Err(e) => println!("error posting account balances, {e}"),
    }
    tokio::time::sleep(Duration::from_secs(1)).await;

    println!("\n=== Currency Balance ===");
    match client
        .get_currency_balance(&CurrencyBalanceRequest::new("ETH"))
        .await
    {
        Ok(res) => println!("res: {:?}", res),
        Err(e) => println!("error posting currency balance for ETH, {e}"),
    }
    tokio::time::sleep(Duration::from_secs(1)).await;

    println!("\n=== Order History ===");
    match client
        .get_order_history(&OrderHistoryRequest::new(0, 100))
        .await
    {
        Ok(res) => println!("res: {:?}", res),
        Err(e) => println!("error querying executed orders, {e}"),
    }
    tokio::time::sleep(Duration::from_secs(1)).await;

    println!("\n=== Unexecuted Orders ===");
    match client
        .get_unexecuted_orders(&UnexecutedOrdersRequest::new("ETH_BTC", 0, 100))
        .await
    {
        Ok(res) => println!("res: {:?}", res),
        Err(e) => println!("error querying unexecuted orders, {e}"),
    }
    tokio::time::sleep(Duration::from_secs(1)).await;

    println!("\n=== Order Deals ===");
    match client
        .get_order_deals(&OrderDealsRequest::new(12345, 0, 100))
        .await
    {
        Ok(res) => println!("res: {:?}", res),
        Err(e) => println!("error querying deals, {e}"),
    }
}
