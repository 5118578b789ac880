//! Bid Submitter
//!
//! Registers new RFP opportunities with the BidsFlow bid-tracking API.
//! Each submission builds an intake [`BidRecord`](bidsflow_common::BidRecord)
//! from a customer and project name plus the configured defaults, and posts
//! it once. A `201 Created` answer is the only success; there is no retry.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::BidClient;
pub use config::Config;
pub use error::{Result, SubmissionError};
pub use models::{DuplicateCandidate, DuplicateCheck, RemoteBid};
