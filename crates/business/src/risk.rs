//! Risk evaluation
//!
//! RiskService runs the two pure scorers over the saved profile, combines
//! their outputs additively, derives risk flags, and writes the result back
//! onto the customer document.

use crate::error::{BusinessError, BusinessResult};
use crate::services::{OnboardingAssessment, ServiceContext};
use anyhow::Context;
use chrono::NaiveDate;
use tracing::info;
use zbank_core::{CountryResolver, KycProfile, OnboardingEvent, RiskFlag};
use zbank_persistence::{CustomerRepo, KycProfileRepo};
use zbank_scoring::{AgeScore, AgeScorer, GeoRiskResult, GeoRiskScorer};

/// Risk Service - scores an applicant and persists the outcome
pub struct RiskService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RiskService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Evaluate a customer's risk as of `today`.
    ///
    /// Scoring itself never fails; this only errors when the customer or
    /// profile is missing or the store rejects the write-back.
    pub async fn evaluate(
        &self,
        actor_id: &str,
        customer_id: &str,
        today: NaiveDate,
    ) -> BusinessResult<OnboardingAssessment> {
        let pool = self.ctx.pool();

        CustomerRepo::get_by_id(pool, customer_id)
            .await
            .map_err(|_| BusinessError::CustomerNotFound(customer_id.to_string()))?;

        let profile = KycProfileRepo::fetch(pool, customer_id)
            .await
            .context("Failed to fetch KYC profile")?
            .ok_or_else(|| BusinessError::ProfileNotFound(customer_id.to_string()))?;

        let assessment = Self::assess(customer_id, &profile, today);

        CustomerRepo::set_risk(pool, customer_id, assessment.total, &assessment.flags)
            .await
            .context("Failed to persist risk result")?;

        let event_id = self.ctx.next_event_id();
        let event = OnboardingEvent::risk_evaluated(
            &event_id,
            actor_id,
            customer_id,
            assessment.total,
            assessment.flags.clone(),
        );
        self.ctx.events().append(&event)?;

        info!(
            customer_id = %customer_id,
            total = assessment.total,
            color = %assessment.geo.color,
            "risk evaluated"
        );

        Ok(assessment)
    }

    /// Pure assessment over a profile - no store access.
    pub fn assess(customer_id: &str, profile: &KycProfile, today: NaiveDate) -> OnboardingAssessment {
        let age = AgeScorer::score(profile.birth_date, today);

        let scorer = GeoRiskScorer::new(CountryResolver::iso2);
        let geo = scorer.score(
            &profile.nationality,
            &profile.residence_country,
            profile.geo_justification.as_deref(),
        );

        let total = age.delta + geo.total;
        let flags = Self::derive_flags(&age, &geo, profile);

        OnboardingAssessment {
            customer_id: customer_id.to_string(),
            total,
            hard_stop: age.hard_stop,
            age,
            geo,
            flags,
        }
    }

    fn derive_flags(age: &AgeScore, geo: &GeoRiskResult, profile: &KycProfile) -> Vec<RiskFlag> {
        let mut flags = Vec::new();

        if geo.nationality_level == Some(4) {
            flags.push(RiskFlag::HighRiskNationality);
        }
        if geo.residence_level == Some(4) {
            flags.push(RiskFlag::HighRiskResidence);
        }

        // Third factor in the breakdown is the mismatch delta
        let mismatch = geo.deltas.get(2).map(|d| d.delta).unwrap_or(0);
        if mismatch != 0 {
            flags.push(RiskFlag::GeoMismatch);
        }
        if mismatch == -10 {
            flags.push(RiskFlag::SuspiciousJustification);
        }

        if profile.has_criminal_record {
            flags.push(RiskFlag::CriminalRecordDeclared);
        }
        if age.hard_stop {
            flags.push(RiskFlag::Underage);
        }

        flags
    }
}
