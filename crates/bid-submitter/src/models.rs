//! Response models for the BidsFlow API

use bidsflow_common::BidStatus;
use serde::{Deserialize, Serialize};

/// Bid as stored and echoed back by the API.
///
/// The remote service owns this shape, so it is kept untyped.
pub type RemoteBid = serde_json::Value;

/// Body of a duplicate check request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DuplicateCheckRequest<'a> {
    pub customer_name: &'a str,
    pub project_name: &'a str,
}

/// Result of checking a customer/project pair against existing bids
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateCheck {
    pub is_duplicate: bool,

    /// Similar bids, best match first
    #[serde(default)]
    pub candidates: Vec<DuplicateCandidate>,
}

/// Existing bid that resembles the one being checked
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateCandidate {
    pub id: String,
    pub customer_name: String,
    pub project_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BidStatus>,

    /// Project name similarity in `0.0..=1.0`
    pub similarity: f64,
}
