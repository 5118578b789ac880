//! Business defaults applied to newly registered bids

use crate::bid::{BidStage, BidStatus, Channel, Region, RiskLevel};
use serde::{Deserialize, Serialize};

/// Values filled into every intake record besides the caller's names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BidDefaults {
    pub status: BidStatus,
    pub stage: BidStage,
    pub risk_level: RiskLevel,
    pub estimated_value: u64,

    /// ISO currency code; the API accepts PKR, USD and EUR
    pub currency: String,

    pub bid_security: String,
    pub required_solutions: Vec<String>,
    pub summary_requirements: String,
    pub scope_of_work: String,

    /// Name recorded as the originator of the bid
    pub jbc_name: String,

    pub channel: Channel,
    pub region: Region,

    /// Contract duration in years, kept as text by the API
    pub contract_duration: String,
}

impl Default for BidDefaults {
    fn default() -> Self {
        Self {
            status: BidStatus::Active,
            stage: BidStage::Intake,
            risk_level: RiskLevel::Low,
            estimated_value: 0,
            currency: "PKR".to_string(),
            bid_security: "To be determined".to_string(),
            required_solutions: vec!["Cloud & IT".to_string()],
            summary_requirements: "RFP Opportunity pushed from Second Brain agent.".to_string(),
            scope_of_work: "Initial intake stage.".to_string(),
            jbc_name: "Second Brain Agent".to_string(),
            channel: Channel::Enterprise,
            region: Region::North,
            contract_duration: "1".to_string(),
        }
    }
}
