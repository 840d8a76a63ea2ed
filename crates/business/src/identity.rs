//! Identity registration - TCKN intake
//!
//! IdentityService validates the national id, reuses an existing customer
//! record when one is registered for the same TCKN, and otherwise creates a
//! fresh customer number (retrying on collision).

use crate::error::{BusinessError, BusinessResult};
use crate::services::{RegistrationResult, ServiceContext};
use anyhow::Context;
use tracing::info;
use zbank_core::{
    filter_national_id_input, is_valid_tckn, Customer, CustomerNumber, OnboardingEvent,
};
use zbank_persistence::CustomerRepo;

/// Identity Service - handles TCKN submission
pub struct IdentityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> IdentityService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a national id.
    ///
    /// Raw form input is accepted; it is digit-filtered before validation.
    /// Returns the existing customer when the TCKN is already registered
    /// (`created = false`), otherwise inserts a new customer document and
    /// appends a `customer_registered` event.
    pub async fn register(&self, actor_id: &str, tckn_input: &str) -> BusinessResult<RegistrationResult> {
        let tckn = filter_national_id_input(tckn_input);
        if !is_valid_tckn(&tckn) {
            return Err(BusinessError::InvalidNationalId(tckn).into());
        }

        let pool = self.ctx.pool();

        // 1) Same TCKN registered before?
        if let Some(existing) = CustomerRepo::find_by_national_id(pool, &tckn)
            .await
            .context("Failed to look up national id")?
        {
            info!(customer_id = %existing.id, "national id already registered");
            return Ok(RegistrationResult {
                customer: existing,
                created: false,
                event_id: None,
            });
        }

        // 2) Generate a fresh customer number, retry on collision
        let mut customer_id = CustomerNumber::generate(&tckn);
        while CustomerRepo::exists(pool, &customer_id)
            .await
            .context("Failed to check customer number collision")?
        {
            customer_id = CustomerNumber::generate(&tckn);
        }

        // 3) Create the record
        let customer = Customer::new(&customer_id, &tckn);
        CustomerRepo::insert(pool, &customer)
            .await
            .context("Failed to insert customer")?;

        // 4) Append event
        let event_id = self.ctx.next_event_id();
        let event = OnboardingEvent::customer_registered(&event_id, actor_id, &customer_id);
        self.ctx.events().append(&event)?;

        info!(customer_id = %customer_id, "customer registered");

        Ok(RegistrationResult {
            customer,
            created: true,
            event_id: Some(event_id),
        })
    }
}
