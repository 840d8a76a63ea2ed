//! Business layer errors
//!
//! Uses anyhow for error aggregation with custom error types.

use thiserror::Error;

/// Business operation errors
#[derive(Debug, Error)]
pub enum BusinessError {
    // === Identity errors ===
    #[error("Invalid national id: {0}")]
    InvalidNationalId(String),

    #[error("Customer already registered with national id: {0}")]
    AlreadyRegistered(String),

    // === Not found errors ===
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    #[error("KYC profile not found for customer: {0}")]
    ProfileNotFound(String),

    // === Policy errors ===
    #[error("Onboarding blocked by policy: {reason}")]
    HardStop { reason: String },

    // === Wrapped errors ===
    #[error("Validation error: {0}")]
    Core(#[from] zbank_core::CoreError),

    #[error("Persistence error: {0}")]
    Persistence(#[from] zbank_persistence::PersistenceError),
}

/// Result type alias for business operations
pub type BusinessResult<T> = anyhow::Result<T>;

impl BusinessError {
    /// Create a hard-stop error
    pub fn hard_stop(reason: &str) -> Self {
        Self::HardStop {
            reason: reason.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            BusinessError::CustomerNotFound(_) | BusinessError::ProfileNotFound(_)
        )
    }
}
