pub mod bid;
pub mod defaults;
pub mod error;

pub use bid::{BidRecord, BidStage, BidStatus, Channel, Region, RiskLevel, StageTransition};
pub use defaults::BidDefaults;
pub use error::{Error, Result};
