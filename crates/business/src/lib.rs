//! # Zbank Business
//!
//! Business logic layer - the onboarding flow over the document store:
//! identity registration, KYC profile save, risk evaluation.

pub mod error;
pub mod identity;
pub mod kyc;
pub mod risk;
pub mod services;

pub use error::{BusinessError, BusinessResult};
pub use identity::IdentityService;
pub use kyc::ProfileService;
pub use risk::RiskService;
pub use services::{OnboardingAssessment, RegistrationResult, ServiceContext};
