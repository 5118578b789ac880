//! Configuration management for the Bid Submitter
//!
//! Loads the API endpoint and business defaults from environment variables,
//! falling back to the staging deployment and the standard intake values.

use anyhow::{Context, Result};
use bidsflow_common::BidDefaults;
use std::env;
use std::time::Duration;

/// Bids endpoint of the BidsFlow staging deployment
pub const DEFAULT_API_URL: &str =
    "https://bidsflow-staging-661116307651.us-central1.run.app/api/bids";

/// Submitter configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Full URL of the `/api/bids` collection
    pub api_url: String,

    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,

    /// Values applied to every new bid
    pub defaults: BidDefaults,
}

impl Config {
    /// Configuration for `api_url` with the standard intake defaults
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            timeout: None,
            defaults: BidDefaults::default(),
        }
    }

    /// Same configuration with a request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::new(
            var("BIDSFLOW_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        );

        if let Some(secs) = var("BIDSFLOW_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .context("Invalid BIDSFLOW_TIMEOUT_SECS")?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        if let Some(jbc_name) = var("BIDSFLOW_JBC_NAME") {
            config.defaults.jbc_name = jbc_name;
        }

        if let Some(currency) = var("BIDSFLOW_CURRENCY") {
            config.defaults.currency = currency;
        }

        if let Some(region) = var("BIDSFLOW_REGION") {
            config.defaults.region = region.parse().context("Invalid BIDSFLOW_REGION")?;
        }

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_url.trim().is_empty() {
            anyhow::bail!("BIDSFLOW_API_URL must not be empty");
        }

        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            anyhow::bail!("BIDSFLOW_API_URL must be an http(s) URL: {}", self.api_url);
        }

        if self.timeout == Some(Duration::ZERO) {
            anyhow::bail!("BIDSFLOW_TIMEOUT_SECS must be greater than 0");
        }

        Ok(())
    }
}
