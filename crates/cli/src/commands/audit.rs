//! Audit command - onboarding event log inspection

use anyhow::Result;
use chrono::Utc;
use std::path::Path;
use zbank_persistence::{AuditSummary, EventFilter, EventReader};

use crate::EventTypeArg;

/// List and summarize events from the JSONL log
pub async fn run_audit(
    events_dir: &Path,
    from: Option<String>,
    to: Option<String>,
    event_type: Option<EventTypeArg>,
    customer: Option<String>,
    flagged: bool,
) -> Result<()> {
    // Build filter
    let mut filter = EventFilter::new();
    if let Some(customer_id) = &customer {
        filter = filter.customer(customer_id);
    }
    if let Some(arg) = event_type {
        filter = filter.event_types(vec![arg.to_core_type()]);
    }
    if flagged {
        filter = filter.flagged_only();
    }

    // Read events based on date range
    let reader = EventReader::new(events_dir);
    let events = match (&from, &to) {
        (Some(from_date), Some(to_date)) => reader.read_range(from_date, to_date)?,
        (Some(from_date), None) => {
            let today = Utc::now().format("%Y-%m-%d").to_string();
            reader.read_range(from_date, &today)?
        }
        _ => reader.read_all()?,
    };

    let events = filter.apply(events);

    println!("🔍 Onboarding Audit");
    println!("   Events directory: {:?}", events_dir);
    if let Some(from) = &from {
        println!("   From: {}", from);
    }
    if let Some(to) = &to {
        println!("   To: {}", to);
    }
    if let Some(customer) = &customer {
        println!("   Customer: {}", customer);
    }
    println!();

    if events.is_empty() {
        println!("No events found matching criteria.");
        return Ok(());
    }

    for event in &events {
        let mut line = format!(
            "   {}  {}  {}  {}",
            event.event_id,
            event.timestamp.format("%Y-%m-%d %H:%M:%S"),
            event.event_type,
            event.customer_id
        );
        if let Some(score) = event.risk_score {
            line.push_str(&format!("  score={:+}", score));
        }
        if !event.risk_flags.is_empty() {
            let flags: Vec<&str> = event.risk_flags.iter().map(|f| f.as_str()).collect();
            line.push_str(&format!("  [{}]", flags.join(",")));
        }
        println!("{}", line);
    }

    println!();
    let summary = AuditSummary::generate(&events);
    println!("{}", summary.summary());

    Ok(())
}
