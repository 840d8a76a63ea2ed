//! # Zbank Advisory
//!
//! Travel advisory feed integration:
//! - fetch + tolerant decode of the public advisories JSON feed
//! - GEC/FIPS -> ISO-2 translation for the feed's category codes
//! - advisory-level score policy for callers that weigh advisories in

pub mod client;
pub mod error;
pub mod gec;
pub mod models;
pub mod policy;

pub use client::{find_advisory, find_advisory_for, AdvisoryClient, DEFAULT_FEED_URL};
pub use error::{AdvisoryError, AdvisoryResult};
pub use gec::{gec_to_iso2, map_gec_to_iso2, split_category_codes};
pub use models::{advisory_level_from_title, AdvisoryPost};
pub use policy::{advisory_nationality_delta, advisory_residence_delta};
