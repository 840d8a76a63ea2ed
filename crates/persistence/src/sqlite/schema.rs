//! Database schema definitions
//!
//! Row types for sqlx mapping. Schema is created by `init_database` in
//! `repos.rs`.

use crate::error::{PersistenceError, PersistenceResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use zbank_core::{Customer, Gender, KycProfile, RiskFlag};

/// Row type for the `customers` table
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct CustomerRow {
    pub id: String,
    pub national_id: String,
    pub created_at: DateTime<Utc>,
    pub risk_score: Option<i32>,
    /// JSON array of flag codes, e.g. `["geo_mismatch"]`
    pub risk_flags: Option<String>,
}

impl CustomerRow {
    /// Convert to the domain type; unknown flag codes are rejected
    pub fn into_customer(self) -> PersistenceResult<Customer> {
        let risk_flags = match self.risk_flags.as_deref() {
            None | Some("") => Vec::new(),
            Some(json) => {
                let codes: Vec<String> = serde_json::from_str(json)?;
                let mut flags = Vec::with_capacity(codes.len());
                for code in codes {
                    let flag = RiskFlag::parse(&code)
                        .ok_or_else(|| PersistenceError::invalid_enum("risk_flags", &code))?;
                    flags.push(flag);
                }
                flags
            }
        };

        Ok(Customer {
            id: self.id,
            national_id: self.national_id,
            created_at: self.created_at,
            risk_score: self.risk_score,
            risk_flags,
        })
    }
}

impl From<&Customer> for CustomerRow {
    fn from(customer: &Customer) -> Self {
        let risk_flags = if customer.risk_flags.is_empty() {
            None
        } else {
            let codes: Vec<&str> = customer.risk_flags.iter().map(|f| f.as_str()).collect();
            // Serializing a Vec<&str> cannot fail
            Some(serde_json::to_string(&codes).unwrap_or_default())
        };

        Self {
            id: customer.id.clone(),
            national_id: customer.national_id.clone(),
            created_at: customer.created_at,
            risk_score: customer.risk_score,
            risk_flags,
        }
    }
}

/// Row type for the `kyc_profiles` table
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct KycProfileRow {
    pub customer_id: String,
    pub national_id: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub nationality: String,
    pub residence_country: String,
    pub geo_justification: Option<String>,
    pub gender: String,
    pub has_criminal_record: bool,
    pub kvkk_accepted: bool,
    pub kvkk_accepted_at: Option<DateTime<Utc>>,
    pub kvkk_version: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl KycProfileRow {
    /// Convert to the domain type; unknown gender codes are rejected
    pub fn into_profile(self) -> PersistenceResult<KycProfile> {
        let gender = Gender::parse(&self.gender)
            .ok_or_else(|| PersistenceError::invalid_enum("gender", &self.gender))?;

        Ok(KycProfile {
            customer_id: self.customer_id,
            national_id: self.national_id,
            first_name: self.first_name,
            last_name: self.last_name,
            birth_date: self.birth_date,
            phone: self.phone,
            email: self.email,
            address: self.address,
            nationality: self.nationality,
            residence_country: self.residence_country,
            geo_justification: self.geo_justification,
            gender,
            has_criminal_record: self.has_criminal_record,
            kvkk_accepted: self.kvkk_accepted,
            kvkk_accepted_at: self.kvkk_accepted_at,
            kvkk_version: self.kvkk_version,
        })
    }
}

impl From<&KycProfile> for KycProfileRow {
    fn from(profile: &KycProfile) -> Self {
        Self {
            customer_id: profile.customer_id.clone(),
            national_id: profile.national_id.clone(),
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            birth_date: profile.birth_date,
            phone: profile.phone.clone(),
            email: profile.email.clone(),
            address: profile.address.clone(),
            nationality: profile.nationality.clone(),
            residence_country: profile.residence_country.clone(),
            geo_justification: profile.geo_justification.clone(),
            gender: profile.gender.as_str().to_string(),
            has_criminal_record: profile.has_criminal_record,
            kvkk_accepted: profile.kvkk_accepted,
            kvkk_accepted_at: profile.kvkk_accepted_at,
            kvkk_version: profile.kvkk_version.clone(),
            updated_at: Utc::now(),
        }
    }
}
