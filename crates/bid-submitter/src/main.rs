//! Bid Submitter
//!
//! Registers one bid with the BidsFlow API. Without arguments an example
//! customer and project are submitted.

use anyhow::{Context, Result};
use bid_submitter::{BidClient, Config};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const EXAMPLE_CUSTOMER: &str = "Global Industries Ltd";
const EXAMPLE_PROJECT: &str = "AI Infrastructure Modernization 2026";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bid_submitter=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (customer, project) = match args.as_slice() {
        [] => (EXAMPLE_CUSTOMER, EXAMPLE_PROJECT),
        [customer, project] => (customer.as_str(), project.as_str()),
        _ => anyhow::bail!("Usage: bid-submitter [CUSTOMER PROJECT]"),
    };

    let config = Config::from_env().context("Failed to load configuration")?;
    info!("BidsFlow API: {}", config.api_url);

    let client = BidClient::new(&config).context("Failed to build HTTP client")?;

    match client.submit_or_report(customer, project).await {
        Some(bid) => {
            let id = bid.get("id").and_then(|id| id.as_str()).unwrap_or("<missing>");
            println!("Created Bid ID: {}", id);
        }
        None => println!("Bid for {} / {} was not created", customer, project),
    }

    Ok(())
}
