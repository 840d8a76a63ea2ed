//! # Example 02: Risk Scoring Scenarios
//!
//! Walks the pure scorers over a matrix of applicants - no database, just
//! the scoring functions.
//!
//! Run with: `cargo run -p zbank-demos --example 02_risk_scenarios`

use chrono::NaiveDate;
use zbank_core::CountryResolver;
use zbank_scoring::{AgeScorer, GeoRiskScorer};

fn main() {
    println!("=== Example 02: Risk Scoring Scenarios ===\n");

    let today = NaiveDate::from_ymd_opt(2026, 8, 5).expect("valid date");

    // =========================================================================
    // Part 1: Age brackets
    // =========================================================================

    println!("🎂 Age brackets:\n");

    let birthdays = [
        ("student", NaiveDate::from_ymd_opt(2006, 3, 1).expect("valid date")),
        ("mid-career", NaiveDate::from_ymd_opt(1985, 7, 20).expect("valid date")),
        ("retired", NaiveDate::from_ymd_opt(1955, 1, 2).expect("valid date")),
    ];

    for (label, birth_date) in birthdays {
        let score = AgeScorer::score(birth_date, today);
        println!(
            "   {:<12} age {:>2}  bracket {:<6} delta {:+}",
            label,
            score.age_years,
            score.label(),
            score.delta
        );
    }
    println!();

    // =========================================================================
    // Part 2: Geo risk matrix
    // =========================================================================

    println!("🌍 Geo risk:\n");

    let scorer = GeoRiskScorer::new(CountryResolver::iso2);

    let cases = [
        ("Turkish", "Turkey", None),
        ("Turkish", "Germany", Some("Eğitim için")),
        ("Syrian", "Germany", Some("İş için taşındım")),
        ("Syrian", "Germany", Some("sabıka kaydım var")),
        ("German", "Netherlands", None),
    ];

    for (nationality, residence, justification) in cases {
        let result = scorer.score(nationality, residence, justification);
        println!(
            "   {:>8} living in {:<12} total {:+} color {}",
            nationality, residence, result.total, result.color
        );
        for delta in &result.deltas {
            println!("      {}: {:+}", delta.title, delta.delta);
        }
        println!();
    }
}
