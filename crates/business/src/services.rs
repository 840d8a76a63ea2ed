//! Service context and result types
//!
//! Defines the shared context for business operations plus the result
//! structs the services hand back to their callers.

use serde::Serialize;
use sqlx::SqlitePool;
use std::sync::Arc;
use zbank_core::{Customer, RiskFlag};
use zbank_persistence::{Database, EventStore};
use zbank_scoring::{AgeScore, GeoRiskResult};

/// Context for business operations - contains database access
pub struct ServiceContext {
    pool: SqlitePool,
    events: Arc<EventStore>,
}

impl ServiceContext {
    /// Create new service context from database
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.pool().clone(),
            events: Arc::new(EventStore::new(db.events().base_path()).expect("EventStore")),
        }
    }

    /// Create from pool and event store directly
    pub fn from_parts(pool: SqlitePool, events: Arc<EventStore>) -> Self {
        Self { pool, events }
    }

    /// Get database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get event store
    pub fn events(&self) -> &EventStore {
        &self.events
    }

    /// Generate next event ID
    pub fn next_event_id(&self) -> String {
        self.events.next_event_id()
    }
}

/// Result of an identity registration
#[derive(Debug, Clone)]
pub struct RegistrationResult {
    /// The customer record (existing or freshly created)
    pub customer: Customer,
    /// False when the national id was already registered
    pub created: bool,
    /// Event written for a fresh registration
    pub event_id: Option<String>,
}

impl RegistrationResult {
    pub fn customer_id(&self) -> &str {
        &self.customer.id
    }
}

/// Combined risk assessment for one applicant.
///
/// The two scorer outputs are embedded as-is; `total` is their additive
/// combination and nothing else.
#[derive(Debug, Clone, Serialize)]
pub struct OnboardingAssessment {
    pub customer_id: String,
    pub age: AgeScore,
    pub geo: GeoRiskResult,
    /// age.delta + geo.total
    pub total: i32,
    /// Mirrors the age scorer's hard-stop signal
    pub hard_stop: bool,
    pub flags: Vec<RiskFlag>,
}

impl OnboardingAssessment {
    /// True if any flag or the hard-stop signal is present
    pub fn needs_review(&self) -> bool {
        self.hard_stop || !self.flags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use zbank_scoring::{AgeScorer, GeoRiskScorer};

    #[test]
    fn test_registration_result() {
        let result = RegistrationResult {
            customer: Customer::new("ZB-950-48291", "12345678950"),
            created: true,
            event_id: Some("EVT_000001".to_string()),
        };
        assert_eq!(result.customer_id(), "ZB-950-48291");
    }

    #[test]
    fn test_assessment_needs_review() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let age = AgeScorer::score(NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(), today);
        let geo = GeoRiskScorer::new(|_: &str| None::<String>).score("TR", "TR", None);

        let clean = OnboardingAssessment {
            customer_id: "ZB-950-48291".to_string(),
            total: age.delta + geo.total,
            age,
            geo: geo.clone(),
            hard_stop: false,
            flags: vec![],
        };
        assert!(!clean.needs_review());

        let flagged = OnboardingAssessment {
            flags: vec![RiskFlag::GeoMismatch],
            ..clean
        };
        assert!(flagged.needs_review());
    }
}
