//! Client for the BidsFlow bids API

use crate::config::Config;
use crate::error::{Result, SubmissionError};
use crate::models::{DuplicateCheck, DuplicateCheckRequest, RemoteBid};
use bidsflow_common::{BidDefaults, BidRecord};
use reqwest::header::CONTENT_TYPE;
use reqwest::{StatusCode, Url};
use tracing::{debug, error, info, warn};

/// Registers intake bids with a BidsFlow deployment
pub struct BidClient {
    api_url: String,
    defaults: BidDefaults,
    client: reqwest::Client,
}

impl BidClient {
    /// Create a new client from configuration
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            api_url: config.api_url.trim_end_matches('/').to_string(),
            defaults: config.defaults.clone(),
            client: builder.build()?,
        })
    }

    /// Endpoint bids are posted to
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// URL of `segment` directly below the bids collection.
    ///
    /// The segment is percent-encoded, so a `/` inside it cannot reach
    /// another route.
    fn resource_url(&self, segment: &str) -> Result<Url> {
        let mut url = Url::parse(&self.api_url)
            .map_err(|e| SubmissionError::InvalidUrl(format!("{}: {}", self.api_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| SubmissionError::InvalidUrl(self.api_url.clone()))?
            .pop_if_empty()
            .push(segment);

        Ok(url)
    }

    /// Defaults applied to every bid built by this client
    pub fn defaults(&self) -> &BidDefaults {
        &self.defaults
    }

    /// Build a fresh intake record and post it.
    ///
    /// Returns the stored bid as echoed by the API on `201 Created`.
    pub async fn submit(&self, customer_name: &str, project_name: &str) -> Result<RemoteBid> {
        let bid = BidRecord::new(customer_name, project_name, &self.defaults);
        self.submit_record(&bid).await
    }

    /// Post an already built record
    pub async fn submit_record(&self, bid: &BidRecord) -> Result<RemoteBid> {
        let body = serde_json::to_vec(bid)?;

        info!("Sending POST request to {}", self.api_url);
        info!("Payload preview:\n{}", serde_json::to_string_pretty(bid)?);

        let response = self
            .client
            .post(&self.api_url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::CREATED {
            let body = response.text().await?;
            warn!(status = status.as_u16(), "Bid {} was rejected: {}", bid.id, body);
            return Err(SubmissionError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let created: RemoteBid = response.json().await?;
        info!("Bid {} created successfully", bid.id);

        Ok(created)
    }

    /// Submit a bid, logging the failure instead of returning it.
    ///
    /// `None` means the bid was not created; nothing is retried.
    pub async fn submit_or_report(
        &self,
        customer_name: &str,
        project_name: &str,
    ) -> Option<RemoteBid> {
        match self.submit(customer_name, project_name).await {
            Ok(bid) => Some(bid),
            // Already logged with its status and body
            Err(SubmissionError::HttpStatus { .. }) => None,
            Err(e) => {
                error!("Failed to create bid: {}", e);
                None
            }
        }
    }

    /// Ask the API whether a similar bid already exists for this customer
    pub async fn check_duplicate(
        &self,
        customer_name: &str,
        project_name: &str,
    ) -> Result<DuplicateCheck> {
        let url = self.resource_url("check-duplicate")?;

        debug!("Checking for duplicate bids: {}", url);

        let response = self
            .client
            .post(url)
            .json(&DuplicateCheckRequest {
                customer_name,
                project_name,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::HttpStatus {
                status: status.as_u16(),
                body: response.text().await?,
            });
        }

        Ok(response.json().await?)
    }

    /// Fetch a stored bid by id
    pub async fn get_bid(&self, id: &str) -> Result<Option<RemoteBid>> {
        if matches!(id, "" | "." | "..") {
            return Err(SubmissionError::InvalidBidId(id.to_string()));
        }

        let url = self.resource_url(id)?;

        debug!("Fetching bid: {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            return Err(SubmissionError::HttpStatus {
                status: status.as_u16(),
                body: response.text().await?,
            });
        }

        Ok(Some(response.json().await?))
    }
}
