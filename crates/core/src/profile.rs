//! # KYC Profile Module
//!
//! Kişisel bilgi formunun alan modeli ve doğrulama kuralları.
//! Form katmanı bu tipi doldurur; kaydetmeden önce `validate` çağrılır.

use crate::error::{CoreError, CoreResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use zbank_scoring::AgeScorer;

/// Onboarding için alt yaş sınırı
pub const MIN_ONBOARDING_AGE: u32 = 18;

/// Geçerli KVKK aydınlatma metni sürümü
pub const KVKK_VERSION: &str = "v1.0";

/// Cinsiyet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// DB için code string
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// String'den parse (İngilizce code veya Türkçe form etiketi)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "male" | "erkek" => Some(Gender::Male),
            "female" | "kadın" | "kadin" => Some(Gender::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// KYC profili - müşteri başına bir doküman.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KycProfile {
    /// Müşteri numarası (Customer.id ile eş)
    pub customer_id: String,
    /// T.C. Kimlik Numarası
    pub national_id: String,

    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub phone: String,
    pub email: String,
    pub address: String,

    /// Uyruk (ülke adı, uyruk veya ISO-2)
    pub nationality: String,
    /// Şu an yaşadığı ülke
    pub residence_country: String,
    /// Uyruk ≠ ikamet gerekçesi (formdan, serbest metin)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_justification: Option<String>,

    pub gender: Gender,
    pub has_criminal_record: bool,

    pub kvkk_accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kvkk_accepted_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kvkk_version: Option<String>,
}

impl KycProfile {
    /// Ad + soyad
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// Doğum gününü dikkate alarak yaş (tam yıl)
    pub fn age(&self, today: NaiveDate) -> u32 {
        AgeScorer::age_years(self.birth_date, today)
    }

    /// Çok basit e-posta kontrolü
    pub fn is_email_like(&self) -> bool {
        self.email.contains('@') && self.email.contains('.')
    }

    /// Çok basit telefon kontrolü: en az 10 rakam
    pub fn is_phone_like(&self) -> bool {
        self.phone.chars().filter(|c| c.is_ascii_digit()).count() >= 10
    }

    /// KVKK onayını işle
    pub fn accept_kvkk(&mut self, at: DateTime<Utc>) {
        self.kvkk_accepted = true;
        self.kvkk_accepted_at = Some(at);
        self.kvkk_version = Some(KVKK_VERSION.to_string());
    }

    /// Kaydetmeden önce form doğrulaması.
    ///
    /// Zorunlu alanlar dolu, telefon/e-posta biçimsel olarak geçerli,
    /// başvuran reşit ve KVKK onayı alınmış olmalı.
    pub fn validate(&self, today: NaiveDate) -> CoreResult<()> {
        let required = [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("phone", &self.phone),
            ("email", &self.email),
            ("address", &self.address),
            ("nationality", &self.nationality),
            ("residence_country", &self.residence_country),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CoreError::MissingField(field.to_string()));
            }
        }

        if !self.is_phone_like() {
            return Err(CoreError::InvalidPhone(self.phone.clone()));
        }
        if !self.is_email_like() {
            return Err(CoreError::InvalidEmail(self.email.clone()));
        }

        let age = self.age(today);
        if age < MIN_ONBOARDING_AGE {
            return Err(CoreError::Underage { age });
        }

        if !self.kvkk_accepted {
            return Err(CoreError::ConsentMissing);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> KycProfile {
        KycProfile {
            customer_id: "ZB-950-48291".to_string(),
            national_id: "12345678950".to_string(),
            first_name: "Ayşe".to_string(),
            last_name: "Yılmaz".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            phone: "+90 532 000 11 22".to_string(),
            email: "ayse@example.com".to_string(),
            address: "Kadıköy, İstanbul".to_string(),
            nationality: "Turkish".to_string(),
            residence_country: "Turkey".to_string(),
            geo_justification: None,
            gender: Gender::Female,
            has_criminal_record: false,
            kvkk_accepted: true,
            kvkk_accepted_at: None,
            kvkk_version: Some(KVKK_VERSION.to_string()),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!(Gender::parse("male"), Some(Gender::Male));
        assert_eq!(Gender::parse("Erkek"), Some(Gender::Male));
        assert_eq!(Gender::parse("KADIN"), Some(Gender::Female));
        assert_eq!(Gender::parse("other"), None);
    }

    #[test]
    fn test_valid_profile() {
        assert!(sample_profile().validate(today()).is_ok());
    }

    #[test]
    fn test_full_name_trims() {
        let mut p = sample_profile();
        p.first_name = " Ayşe ".to_string();
        assert_eq!(p.full_name(), "Ayşe  Yılmaz");
    }

    #[test]
    fn test_missing_field() {
        let mut p = sample_profile();
        p.address = "   ".to_string();
        let err = p.validate(today()).unwrap_err();
        assert!(matches!(err, CoreError::MissingField(ref f) if f == "address"));
    }

    #[test]
    fn test_phone_needs_ten_digits() {
        let mut p = sample_profile();
        p.phone = "532 123".to_string();
        assert!(matches!(
            p.validate(today()).unwrap_err(),
            CoreError::InvalidPhone(_)
        ));
    }

    #[test]
    fn test_email_shape() {
        let mut p = sample_profile();
        p.email = "ayse-at-example".to_string();
        assert!(matches!(
            p.validate(today()).unwrap_err(),
            CoreError::InvalidEmail(_)
        ));
    }

    #[test]
    fn test_underage_rejected() {
        let mut p = sample_profile();
        p.birth_date = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
        assert!(matches!(
            p.validate(today()).unwrap_err(),
            CoreError::Underage { age: 16 }
        ));
    }

    #[test]
    fn test_kvkk_required() {
        let mut p = sample_profile();
        p.kvkk_accepted = false;
        assert!(matches!(
            p.validate(today()).unwrap_err(),
            CoreError::ConsentMissing
        ));
    }

    #[test]
    fn test_accept_kvkk_stamps_version() {
        let mut p = sample_profile();
        p.kvkk_accepted = false;
        p.kvkk_version = None;
        p.accept_kvkk(Utc::now());
        assert!(p.kvkk_accepted);
        assert!(p.kvkk_accepted_at.is_some());
        assert_eq!(p.kvkk_version.as_deref(), Some(KVKK_VERSION));
    }
}
