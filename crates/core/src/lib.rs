//! # Zbank Core
//!
//! Domain types for the Zbank onboarding flow:
//! - Customer: müşteri kaydı + müşteri numarası üretimi
//! - KycProfile: kişisel bilgi formu + doğrulama kuralları
//! - OnboardingEvent: audit trail olayları
//! - national_id: TCKN doğrulama
//! - CountryResolver: ülke adı / uyruk / ISO-3 -> ISO-2 çözümleme

pub mod country;
pub mod customer;
pub mod error;
pub mod event;
pub mod national_id;
pub mod profile;

pub use country::CountryResolver;
pub use customer::{Customer, CustomerNumber};
pub use error::{CoreError, CoreResult};
pub use event::{OnboardingEvent, OnboardingEventType, RiskFlag};
pub use national_id::{filter_national_id_input, is_valid_tckn};
pub use profile::{Gender, KycProfile, KVKK_VERSION, MIN_ONBOARDING_AGE};
