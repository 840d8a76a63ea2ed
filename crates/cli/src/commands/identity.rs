//! Identity registration command

use anyhow::Result;
use std::path::Path;
use zbank_business::IdentityService;

/// Register a TCKN and print the resulting customer number
pub async fn register(
    db_path: &Path,
    events_dir: &Path,
    actor: &str,
    tckn: &str,
) -> Result<()> {
    let ctx = super::service_context(db_path, events_dir).await?;
    let result = IdentityService::new(&ctx).register(actor, tckn).await?;

    if result.created {
        println!("✅ Customer registered");
    } else {
        println!("ℹ️  National id already registered");
    }
    println!("   Customer number: {}", result.customer_id());
    println!("   Created at:      {}", result.customer.created_at.format("%Y-%m-%d %H:%M:%S UTC"));

    Ok(())
}
