//! # Example 01: Customer Onboarding
//!
//! This example demonstrates the full onboarding workflow:
//! 1. Register a national id and get a customer number
//! 2. Save the KYC profile
//! 3. Evaluate risk and inspect the persisted result
//!
//! Run with: `cargo run -p zbank-demos --example 01_onboarding`

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use zbank_business::{IdentityService, ProfileService, RiskService, ServiceContext};
use zbank_core::{Gender, KycProfile};
use zbank_persistence::{init_database, CustomerRepo, EventReader, EventStore};

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== Example 01: Customer Onboarding ===\n");

    // =========================================================================
    // Part 1: Set up a throwaway database + event log
    // =========================================================================

    let events_dir = tempfile::tempdir()?;
    let pool = init_database("sqlite::memory:").await?;
    let events = Arc::new(EventStore::new(events_dir.path())?);
    let ctx = ServiceContext::from_parts(pool, events);

    // =========================================================================
    // Part 2: Identity intake
    // =========================================================================

    println!("🪪 Registering national id...\n");

    let registration = IdentityService::new(&ctx)
        .register("self", "123 456 789 50")
        .await?;
    let customer_id = registration.customer_id().to_string();

    println!("   Customer number: {}", customer_id);
    println!("   Fresh registration: {}\n", registration.created);

    // =========================================================================
    // Part 3: KYC profile
    // =========================================================================

    println!("📋 Saving KYC profile...\n");

    let mut profile = KycProfile {
        customer_id: customer_id.clone(),
        national_id: registration.customer.national_id.clone(),
        first_name: "Ayşe".to_string(),
        last_name: "Yılmaz".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1990, 4, 12).expect("valid date"),
        phone: "+90 532 000 11 22".to_string(),
        email: "ayse@example.com".to_string(),
        address: "Kadıköy, İstanbul".to_string(),
        nationality: "Turkish".to_string(),
        residence_country: "Germany".to_string(),
        geo_justification: Some("Eğitim için taşındım".to_string()),
        gender: Gender::Female,
        has_criminal_record: false,
        kvkk_accepted: false,
        kvkk_accepted_at: None,
        kvkk_version: None,
    };
    profile.accept_kvkk(Utc::now());

    let today = Utc::now().date_naive();
    ProfileService::new(&ctx).save("self", &profile, today).await?;
    println!("   Saved profile for {}\n", profile.full_name());

    // =========================================================================
    // Part 4: Risk evaluation
    // =========================================================================

    println!("🧮 Evaluating risk...\n");

    let assessment = RiskService::new(&ctx)
        .evaluate("OPR_001", &customer_id, today)
        .await?;

    println!(
        "   Age {} ({}): {:+}",
        assessment.age.age_years,
        assessment.age.label(),
        assessment.age.delta
    );
    for delta in &assessment.geo.deltas {
        println!("   {}: {:+}", delta.title, delta.delta);
    }
    println!("   Geo total: {:+} ({})", assessment.geo.total, assessment.geo.color);
    println!("   Overall:   {:+}\n", assessment.total);

    // =========================================================================
    // Part 5: Persisted outcome + audit trail
    // =========================================================================

    let customer = CustomerRepo::get_by_id(ctx.pool(), &customer_id).await?;
    println!("💾 Stored on customer: score={:?}", customer.risk_score);

    let events = EventReader::new(events_dir.path()).read_all()?;
    println!("🧾 Audit trail ({} events):", events.len());
    for event in &events {
        println!("   {}  {}", event.event_id, event.event_type);
    }

    Ok(())
}
