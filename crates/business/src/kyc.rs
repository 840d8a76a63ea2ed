//! KYC profile operations
//!
//! ProfileService validates the form-level rules and upserts the profile
//! document for a registered customer.

use crate::error::{BusinessError, BusinessResult};
use crate::services::ServiceContext;
use anyhow::Context;
use chrono::NaiveDate;
use tracing::info;
use zbank_core::{KycProfile, OnboardingEvent};
use zbank_persistence::{CustomerRepo, KycProfileRepo};

/// Profile Service - KYC form save/fetch
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Validate and persist a KYC profile, then append a `profile_saved`
    /// event. The customer must already be registered.
    pub async fn save(
        &self,
        actor_id: &str,
        profile: &KycProfile,
        today: NaiveDate,
    ) -> BusinessResult<()> {
        // Form-level rules first
        profile.validate(today).map_err(BusinessError::Core)?;

        let pool = self.ctx.pool();

        // Profile belongs to a registered customer
        CustomerRepo::get_by_id(pool, &profile.customer_id)
            .await
            .map_err(|_| BusinessError::CustomerNotFound(profile.customer_id.clone()))?;

        KycProfileRepo::upsert(pool, profile)
            .await
            .context("Failed to save KYC profile")?;

        let event_id = self.ctx.next_event_id();
        let event = OnboardingEvent::profile_saved(&event_id, actor_id, &profile.customer_id);
        self.ctx.events().append(&event)?;

        info!(customer_id = %profile.customer_id, "KYC profile saved");
        Ok(())
    }

    /// Fetch the profile for a customer, if one was saved
    pub async fn fetch(&self, customer_id: &str) -> BusinessResult<Option<KycProfile>> {
        let profile = KycProfileRepo::fetch(self.ctx.pool(), customer_id)
            .await
            .context("Failed to fetch KYC profile")?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::IdentityService;
    use std::sync::Arc;
    use tempfile::tempdir;
    use zbank_core::{CoreError, Gender};
    use zbank_persistence::{init_database, EventStore};

    async fn test_ctx(events_dir: &std::path::Path) -> ServiceContext {
        let pool = init_database("sqlite::memory:").await.unwrap();
        let events = Arc::new(EventStore::new(events_dir).unwrap());
        ServiceContext::from_parts(pool, events)
    }

    fn sample_profile(customer_id: &str) -> KycProfile {
        KycProfile {
            customer_id: customer_id.to_string(),
            national_id: "12345678950".to_string(),
            first_name: "Ayşe".to_string(),
            last_name: "Yılmaz".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            phone: "+90 532 000 11 22".to_string(),
            email: "ayse@example.com".to_string(),
            address: "Kadıköy, İstanbul".to_string(),
            nationality: "Turkish".to_string(),
            residence_country: "Germany".to_string(),
            geo_justification: Some("Eğitim için".to_string()),
            gender: Gender::Female,
            has_criminal_record: false,
            kvkk_accepted: true,
            kvkk_accepted_at: None,
            kvkk_version: Some("v1.0".to_string()),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()
    }

    #[tokio::test]
    async fn test_save_and_fetch_profile() {
        let dir = tempdir().unwrap();
        let ctx = test_ctx(dir.path()).await;

        let registration = IdentityService::new(&ctx)
            .register("self", "12345678950")
            .await
            .unwrap();

        let service = ProfileService::new(&ctx);
        let profile = sample_profile(registration.customer_id());
        service.save("self", &profile, today()).await.unwrap();

        let fetched = service
            .fetch(registration.customer_id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.full_name(), "Ayşe Yılmaz");
    }

    #[tokio::test]
    async fn test_save_rejects_invalid_profile() {
        let dir = tempdir().unwrap();
        let ctx = test_ctx(dir.path()).await;

        let registration = IdentityService::new(&ctx)
            .register("self", "12345678950")
            .await
            .unwrap();

        let mut profile = sample_profile(registration.customer_id());
        profile.kvkk_accepted = false;

        let err = ProfileService::new(&ctx)
            .save("self", &profile, today())
            .await
            .unwrap_err();
        let err = err.downcast::<BusinessError>().unwrap();
        assert!(matches!(
            err,
            BusinessError::Core(CoreError::ConsentMissing)
        ));
    }

    #[tokio::test]
    async fn test_save_requires_registered_customer() {
        let dir = tempdir().unwrap();
        let ctx = test_ctx(dir.path()).await;

        let profile = sample_profile("ZB-000-00000");
        let err = ProfileService::new(&ctx)
            .save("self", &profile, today())
            .await
            .unwrap_err();
        let err = err.downcast::<BusinessError>().unwrap();
        assert!(matches!(err, BusinessError::CustomerNotFound(_)));
    }
}
