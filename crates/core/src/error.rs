//! # Error Module
//!
//! Domain hataları - thiserror ile tanımlanır.
//! Risk skorlama fonksiyonlarının hata türü yoktur; her girdi bir sonuç
//! üretir. Buradaki hatalar kimlik ve form doğrulamasına aittir.

use thiserror::Error;

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    // === Identity errors ===
    #[error("Invalid national id: {0}")]
    InvalidNationalId(String),

    #[error("Invalid customer number: {0}")]
    InvalidCustomerNumber(String),

    // === Profile errors ===
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    #[error("Applicant below minimum onboarding age (age: {age})")]
    Underage { age: u32 },

    #[error("KVKK consent has not been given")]
    ConsentMissing,

    // === Customer errors ===
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    #[error("Customer already exists: {0}")]
    CustomerAlreadyExists(String),

    // === Validation errors ===
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// CoreError için Result alias'ı
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Kimlik hatası mı
    pub fn is_identity_error(&self) -> bool {
        matches!(
            self,
            CoreError::InvalidNationalId(_) | CoreError::InvalidCustomerNumber(_)
        )
    }

    /// Form doğrulama hatası mı
    pub fn is_profile_error(&self) -> bool {
        matches!(
            self,
            CoreError::MissingField(_)
                | CoreError::InvalidEmail(_)
                | CoreError::InvalidPhone(_)
                | CoreError::Underage { .. }
                | CoreError::ConsentMissing
        )
    }

    /// Not found hatası mı
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::CustomerNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::InvalidNationalId("12345".to_string());
        assert_eq!(err.to_string(), "Invalid national id: 12345");

        let err = CoreError::Underage { age: 16 };
        assert!(err.to_string().contains("16"));
    }

    #[test]
    fn test_error_checks() {
        assert!(CoreError::InvalidNationalId("x".to_string()).is_identity_error());
        assert!(CoreError::ConsentMissing.is_profile_error());
        assert!(CoreError::CustomerNotFound("ZB".to_string()).is_not_found());
        assert!(!CoreError::ConsentMissing.is_identity_error());
    }
}
