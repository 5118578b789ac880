//! Bid record model shared with the BidsFlow API
//!
//! Field names and enum strings match the JSON schema the BidsFlow
//! service stores, so a serialized [`BidRecord`] can be posted as-is.

use crate::defaults::BidDefaults;
use crate::error::{Error, Result};
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Prefix of every generated bid identifier
pub const BID_ID_PREFIX: &str = "bid-";

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $err:ident {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in workflow order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire representation used by the BidsFlow API
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(Error::$err(other.to_string())),
                }
            }
        }
    };
}

string_enum! {
    /// Commercial outcome of a bid
    BidStatus, InvalidStatus {
        Active => "Active",
        Submitted => "Submitted",
        Won => "Won",
        Lost => "Lost",
        NoBid => "No Bid",
    }
}

string_enum! {
    /// Workflow stage a bid is currently in
    BidStage, InvalidStage {
        Intake => "Intake",
        Qualification => "Qualification",
        Solutioning => "Solutioning",
        Pricing => "Pricing",
        Compliance => "Compliance",
        FinalReview => "Final Review",
    }
}

string_enum! {
    RiskLevel, InvalidRiskLevel {
        Low => "Low",
        Medium => "Medium",
        High => "High",
    }
}

string_enum! {
    /// Sales channel the opportunity came through
    Channel, InvalidChannel {
        B2G => "B2G",
        Enterprise => "Enterprise",
    }
}

string_enum! {
    Region, InvalidRegion {
        North => "North",
        South => "South",
        Central => "Central",
    }
}

/// One entry of a bid's stage history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageTransition {
    pub stage: BidStage,

    /// Moment the bid entered `stage`, serialized as RFC 3339 with a `Z` suffix
    pub timestamp: DateTime<Utc>,
}

/// Intake record posted to the BidsFlow API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidRecord {
    pub id: String,
    pub customer_name: String,
    pub project_name: String,

    /// Local calendar date the bid was registered (`YYYY-MM-DD`)
    pub received_date: NaiveDate,

    /// Placeholder deadline, equal to `received_date` until someone updates it
    pub deadline: NaiveDate,

    pub status: BidStatus,
    pub current_stage: BidStage,
    pub risk_level: RiskLevel,
    /// Whole currency units; serialized as a JSON integer
    pub estimated_value: u64,
    pub currency: String,
    pub bid_security: String,
    pub required_solutions: Vec<String>,
    pub summary_requirements: String,
    pub scope_of_work: String,
    pub jbc_name: String,
    pub channel: Channel,
    pub region: Region,
    pub contract_duration: String,
    pub days_in_stages: BTreeMap<BidStage, u32>,
    pub stage_history: Vec<StageTransition>,
}

impl BidRecord {
    /// Build a fresh intake record for the given customer and project.
    ///
    /// Names are taken verbatim; validation is left to the remote service.
    pub fn new(
        customer_name: impl Into<String>,
        project_name: impl Into<String>,
        defaults: &BidDefaults,
    ) -> Self {
        Self::at(customer_name, project_name, defaults, Local::now())
    }

    /// Build a record as if created at `now`
    pub fn at(
        customer_name: impl Into<String>,
        project_name: impl Into<String>,
        defaults: &BidDefaults,
        now: DateTime<Local>,
    ) -> Self {
        let today = now.date_naive();
        let stage = defaults.stage;

        Self {
            id: generate_bid_id(),
            customer_name: customer_name.into(),
            project_name: project_name.into(),
            received_date: today,
            deadline: today,
            status: defaults.status,
            current_stage: stage,
            risk_level: defaults.risk_level,
            estimated_value: defaults.estimated_value,
            currency: defaults.currency.clone(),
            bid_security: defaults.bid_security.clone(),
            required_solutions: defaults.required_solutions.clone(),
            summary_requirements: defaults.summary_requirements.clone(),
            scope_of_work: defaults.scope_of_work.clone(),
            jbc_name: defaults.jbc_name.clone(),
            channel: defaults.channel,
            region: defaults.region,
            contract_duration: defaults.contract_duration.clone(),
            days_in_stages: BTreeMap::from([(stage, 1)]),
            stage_history: vec![StageTransition {
                stage,
                timestamp: now.with_timezone(&Utc),
            }],
        }
    }

    /// Serialize to the JSON body expected by the API
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Generate a new `bid-<uuid>` identifier
pub fn generate_bid_id() -> String {
    format!("{}{}", BID_ID_PREFIX, Uuid::new_v4())
}
