//! Travel advisory command

use anyhow::Result;
use std::path::Path;
use zbank_advisory::{
    advisory_nationality_delta, advisory_residence_delta, find_advisory_for, AdvisoryClient,
};
use zbank_core::OnboardingEvent;
use zbank_persistence::CustomerRepo;

/// Fetch the advisory feed and show the advisory for one country
pub async fn lookup(
    db_path: &Path,
    events_dir: &Path,
    actor: &str,
    country: &str,
    customer: Option<&str>,
    feed_url: Option<&str>,
) -> Result<()> {
    let client = match feed_url {
        Some(url) => AdvisoryClient::with_feed_url(url),
        None => AdvisoryClient::new(),
    };

    println!("🌍 Fetching travel advisories...");
    let posts = client.fetch_all().await?;
    println!("   {} advisories in feed", posts.len());

    match find_advisory_for(country, &posts) {
        Some(post) => {
            println!();
            println!("   {}", post.title);
            if let Some(level) = post.level() {
                println!("   Advisory level: {}", level);
                println!(
                    "   Score policy: residence {:+}, nationality {:+}",
                    advisory_residence_delta(Some(level)),
                    advisory_nationality_delta(Some(level))
                );
            }
            if let Some(published) = post.published {
                println!("   Published: {}", published.format("%Y-%m-%d"));
            }
            if !post.link.is_empty() {
                println!("   {}", post.link);
            }
        }
        None => {
            println!("   No advisory found for '{}'", country);
        }
    }

    // Optionally record the check on a customer's audit trail
    if let Some(customer_id) = customer {
        let ctx = super::service_context(db_path, events_dir).await?;
        CustomerRepo::get_by_id(ctx.pool(), customer_id).await?;

        let event_id = ctx.next_event_id();
        let details = format!("advisory lookup: {}", country);
        let event = OnboardingEvent::advisory_checked(&event_id, actor, customer_id, &details);
        ctx.events().append(&event)?;
        println!("   Logged as {} for {}", event_id, customer_id);
    }

    Ok(())
}
