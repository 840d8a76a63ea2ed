//! # Customer Module
//!
//! Müşteri dokümanı ve müşteri numarası üretimi.

use crate::event::RiskFlag;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Müşteri kaydı. `id` müşteri numarasıdır (örn. ZB-950-48291).
///
/// Risk alanları ilk kayıtta boştur; risk değerlendirmesi sonrası doldurulur.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Müşteri numarası
    pub id: String,
    /// T.C. Kimlik Numarası
    pub national_id: String,
    /// Kayıt zamanı
    pub created_at: DateTime<Utc>,
    /// Birleşik risk skoru (yaş + coğrafya)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<i32>,
    /// Risk bayrakları
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub risk_flags: Vec<RiskFlag>,
}

impl Customer {
    /// Yeni müşteri (risk alanları boş)
    pub fn new(id: &str, national_id: &str) -> Self {
        Self {
            id: id.to_string(),
            national_id: national_id.to_string(),
            created_at: Utc::now(),
            risk_score: None,
            risk_flags: Vec::new(),
        }
    }

    /// Risk sonucu işlenmiş kopya
    pub fn with_risk(mut self, score: i32, flags: Vec<RiskFlag>) -> Self {
        self.risk_score = Some(score);
        self.risk_flags = flags;
        self
    }

    /// Risk değerlendirmesi yapılmış mı
    pub fn is_scored(&self) -> bool {
        self.risk_score.is_some()
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (TCKN: {})", self.id, self.national_id)
    }
}

/// Müşteri numarası üretici.
pub struct CustomerNumber;

impl CustomerNumber {
    pub const PREFIX: &'static str = "ZB";

    /// İnsan okunur müşteri numarası: `ZB-<TCKN son 3>-<5 rastgele hane>`.
    ///
    /// Düşük çakışma olasılığı hedeflenir; çakışma kontrolü ve yeniden üretim
    /// çağıranın sorumluluğundadır.
    pub fn generate(national_id: &str) -> String {
        let len = national_id.len();
        let suffix = &national_id[len.saturating_sub(3)..];
        let random: u32 = rand::thread_rng().gen_range(0..100_000);
        format!("{}-{}-{:05}", Self::PREFIX, suffix, random)
    }

    /// `ZB-DDD-DDDDD` biçim kontrolü
    pub fn is_well_formed(id: &str) -> bool {
        let parts: Vec<&str> = id.split('-').collect();
        if parts.len() != 3 || parts[0] != Self::PREFIX {
            return false;
        }
        parts[1].len() == 3
            && parts[1].bytes().all(|b| b.is_ascii_digit())
            && parts[2].len() == 5
            && parts[2].bytes().all(|b| b.is_ascii_digit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_creation() {
        let customer = Customer::new("ZB-950-48291", "12345678950");
        assert_eq!(customer.id, "ZB-950-48291");
        assert!(!customer.is_scored());
        assert!(customer.risk_flags.is_empty());
    }

    #[test]
    fn test_customer_with_risk() {
        let customer = Customer::new("ZB-950-48291", "12345678950")
            .with_risk(-13, vec![RiskFlag::GeoMismatch]);
        assert!(customer.is_scored());
        assert_eq!(customer.risk_score, Some(-13));
        assert_eq!(customer.risk_flags, vec![RiskFlag::GeoMismatch]);
    }

    #[test]
    fn test_generate_shape() {
        let id = CustomerNumber::generate("12345678950");
        assert!(CustomerNumber::is_well_formed(&id), "bad id: {}", id);
        assert!(id.starts_with("ZB-950-"));
    }

    #[test]
    fn test_well_formed_rejects() {
        assert!(!CustomerNumber::is_well_formed("ZB-95-48291"));
        assert!(!CustomerNumber::is_well_formed("XX-950-48291"));
        assert!(!CustomerNumber::is_well_formed("ZB-950-4829"));
        assert!(!CustomerNumber::is_well_formed("ZB-950"));
        assert!(!CustomerNumber::is_well_formed("ZB-abc-48291"));
    }

    #[test]
    fn test_customer_display() {
        let customer = Customer::new("ZB-950-48291", "12345678950");
        assert_eq!(format!("{}", customer), "ZB-950-48291 (TCKN: 12345678950)");
    }
}
