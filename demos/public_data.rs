//! Example: Fetching public market data from P2PB2B.
//!
//! Run with: cargo run --example public_data

use p2pb2b_api_client::rest::P2bClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // Create a client for public endpoints (no credentials needed)
    let client = P2bClient::public();

    println!("=== Symbols ===");
    let symbols = client.get_symbols().await?;
    println!("{} symbols, first: {:?}", symbols.result.len(), symbols.result.first());

    println!("\n=== Products ===");
    let products = client.get_products().await?;
    for product in products.result.iter().take(5) {
        println!("{}: {} / {}", product.id, product.from_symbol, product.to_symbol);
    }
    if let Some(current_time) = products.current_time {
        println!("Server time: {}", current_time);
    }

    Ok(())
}
