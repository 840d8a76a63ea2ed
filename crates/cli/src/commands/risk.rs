//! Risk evaluation command

use anyhow::Result;
use chrono::Utc;
use std::path::Path;
use zbank_business::RiskService;

/// Evaluate and print a customer's risk breakdown
pub async fn score(
    db_path: &Path,
    events_dir: &Path,
    actor: &str,
    customer_id: &str,
) -> Result<()> {
    let ctx = super::service_context(db_path, events_dir).await?;
    let today = Utc::now().date_naive();

    let assessment = RiskService::new(&ctx)
        .evaluate(actor, customer_id, today)
        .await?;

    println!("🧮 Risk Assessment: {}", customer_id);
    println!(
        "   Age {} ({}): {:+}",
        assessment.age.age_years,
        assessment.age.label(),
        assessment.age.delta
    );
    for delta in &assessment.geo.deltas {
        println!("   {}: {:+}", delta.title, delta.delta);
    }
    println!();
    println!(
        "   Geo total: {:+} ({})",
        assessment.geo.total, assessment.geo.color
    );
    println!("   Overall:   {:+}", assessment.total);

    if assessment.hard_stop {
        println!("   ⛔ HARD STOP - onboarding must be rejected");
    }
    if !assessment.flags.is_empty() {
        let flags: Vec<&str> = assessment.flags.iter().map(|f| f.as_str()).collect();
        println!("   Flags: {}", flags.join(", "));
    }

    Ok(())
}
