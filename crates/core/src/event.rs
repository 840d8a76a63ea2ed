//! # Event Module
//!
//! Onboarding akışının audit olayları ve risk bayrakları.
//! Olaylar JSONL dosyalarına yazılır; compliance incelemeleri buradan okur.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Onboarding olay türleri.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingEventType {
    /// TCKN doğrulandı, müşteri numarası üretildi
    CustomerRegistered,
    /// KYC profili kaydedildi/güncellendi
    ProfileSaved,
    /// Risk skoru hesaplandı ve müşteriye işlendi
    RiskEvaluated,
    /// Seyahat uyarısı sorgulandı
    AdvisoryChecked,
}

impl OnboardingEventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OnboardingEventType::CustomerRegistered => "customer_registered",
            OnboardingEventType::ProfileSaved => "profile_saved",
            OnboardingEventType::RiskEvaluated => "risk_evaluated",
            OnboardingEventType::AdvisoryChecked => "advisory_checked",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "customer_registered" => Some(OnboardingEventType::CustomerRegistered),
            "profile_saved" => Some(OnboardingEventType::ProfileSaved),
            "risk_evaluated" => Some(OnboardingEventType::RiskEvaluated),
            "advisory_checked" => Some(OnboardingEventType::AdvisoryChecked),
            _ => None,
        }
    }
}

impl fmt::Display for OnboardingEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Risk bayrakları - müşteri kaydına ve olaylara iliştirilir.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFlag {
    /// Uyruk en yüksek risk seviyesinde
    HighRiskNationality,
    /// İkamet ülkesi en yüksek risk seviyesinde
    HighRiskResidence,
    /// Uyruk ≠ ikamet
    GeoMismatch,
    /// Mismatch gerekçesinde riskli anahtar kelime
    SuspiciousJustification,
    /// Formda sabıka beyanı
    CriminalRecordDeclared,
    /// Yaş politikası hard-stop sinyali
    Underage,
}

impl RiskFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskFlag::HighRiskNationality => "high_risk_nationality",
            RiskFlag::HighRiskResidence => "high_risk_residence",
            RiskFlag::GeoMismatch => "geo_mismatch",
            RiskFlag::SuspiciousJustification => "suspicious_justification",
            RiskFlag::CriminalRecordDeclared => "criminal_record_declared",
            RiskFlag::Underage => "underage",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "high_risk_nationality" => Some(RiskFlag::HighRiskNationality),
            "high_risk_residence" => Some(RiskFlag::HighRiskResidence),
            "geo_mismatch" => Some(RiskFlag::GeoMismatch),
            "suspicious_justification" => Some(RiskFlag::SuspiciousJustification),
            "criminal_record_declared" => Some(RiskFlag::CriminalRecordDeclared),
            "underage" => Some(RiskFlag::Underage),
            _ => None,
        }
    }
}

impl fmt::Display for RiskFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Audit olayı. Append-only; bir kez yazıldıktan sonra değişmez.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingEvent {
    /// Olay ID (EVT_000123)
    pub event_id: String,
    /// Olay türü
    pub event_type: OnboardingEventType,
    /// Olay zamanı
    pub timestamp: DateTime<Utc>,
    /// İşlemi yapan (operatör ID veya "self")
    pub actor_id: String,
    /// İlgili müşteri numarası
    pub customer_id: String,
    /// Serbest açıklama
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Risk değerlendirme olaylarında skor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<i32>,
    /// Risk değerlendirme olaylarında bayraklar
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub risk_flags: Vec<RiskFlag>,
}

impl OnboardingEvent {
    /// Temel kurucu
    pub fn new(
        event_id: &str,
        event_type: OnboardingEventType,
        actor_id: &str,
        customer_id: &str,
    ) -> Self {
        Self {
            event_id: event_id.to_string(),
            event_type,
            timestamp: Utc::now(),
            actor_id: actor_id.to_string(),
            customer_id: customer_id.to_string(),
            details: None,
            risk_score: None,
            risk_flags: Vec::new(),
        }
    }

    pub fn customer_registered(event_id: &str, actor_id: &str, customer_id: &str) -> Self {
        Self::new(
            event_id,
            OnboardingEventType::CustomerRegistered,
            actor_id,
            customer_id,
        )
    }

    pub fn profile_saved(event_id: &str, actor_id: &str, customer_id: &str) -> Self {
        Self::new(
            event_id,
            OnboardingEventType::ProfileSaved,
            actor_id,
            customer_id,
        )
    }

    pub fn risk_evaluated(
        event_id: &str,
        actor_id: &str,
        customer_id: &str,
        score: i32,
        flags: Vec<RiskFlag>,
    ) -> Self {
        let mut event = Self::new(
            event_id,
            OnboardingEventType::RiskEvaluated,
            actor_id,
            customer_id,
        );
        event.risk_score = Some(score);
        event.risk_flags = flags;
        event
    }

    pub fn advisory_checked(
        event_id: &str,
        actor_id: &str,
        customer_id: &str,
        details: &str,
    ) -> Self {
        Self::new(
            event_id,
            OnboardingEventType::AdvisoryChecked,
            actor_id,
            customer_id,
        )
        .with_details(details)
    }

    /// Açıklama ekle
    pub fn with_details(mut self, details: &str) -> Self {
        self.details = Some(details.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_roundtrip() {
        assert_eq!(OnboardingEventType::RiskEvaluated.as_str(), "risk_evaluated");
        assert_eq!(
            OnboardingEventType::parse("PROFILE_SAVED"),
            Some(OnboardingEventType::ProfileSaved)
        );
        assert_eq!(OnboardingEventType::parse("unknown"), None);
    }

    #[test]
    fn test_risk_flag_roundtrip() {
        for flag in [
            RiskFlag::HighRiskNationality,
            RiskFlag::HighRiskResidence,
            RiskFlag::GeoMismatch,
            RiskFlag::SuspiciousJustification,
            RiskFlag::CriminalRecordDeclared,
            RiskFlag::Underage,
        ] {
            assert_eq!(RiskFlag::parse(flag.as_str()), Some(flag));
        }
    }

    #[test]
    fn test_risk_evaluated_event() {
        let event = OnboardingEvent::risk_evaluated(
            "EVT_000042",
            "OPR_001",
            "ZB-950-48291",
            -13,
            vec![RiskFlag::GeoMismatch],
        );
        assert_eq!(event.event_type, OnboardingEventType::RiskEvaluated);
        assert_eq!(event.risk_score, Some(-13));
        assert_eq!(event.risk_flags, vec![RiskFlag::GeoMismatch]);
    }

    #[test]
    fn test_event_json_skips_empty_fields() {
        let event =
            OnboardingEvent::customer_registered("EVT_000001", "self", "ZB-950-48291");
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("customer_registered"));
        assert!(!json.contains("risk_score"));
        assert!(!json.contains("risk_flags"));
        assert!(!json.contains("details"));
    }
}
