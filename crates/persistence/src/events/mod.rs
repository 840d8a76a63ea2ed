//! Onboarding event log module
//!
//! Append-only JSONL yazma ve okuma - compliance incelemeleri için.

pub mod replay;
pub mod store;

pub use replay::{AuditSummary, EventFilter, EventReader};
pub use store::EventStore;
