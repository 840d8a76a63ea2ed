//! KYC profile commands

use anyhow::Result;
use chrono::Utc;
use std::path::Path;
use zbank_business::ProfileService;
use zbank_core::{CountryResolver, KycProfile};
use zbank_scoring::GeoRiskScorer;

use crate::KycAction;

/// Handle kyc subcommands
pub async fn handle(
    db_path: &Path,
    events_dir: &Path,
    actor: &str,
    action: KycAction,
) -> Result<()> {
    let ctx = super::service_context(db_path, events_dir).await?;
    let service = ProfileService::new(&ctx);

    match action {
        KycAction::Save {
            customer_id,
            first_name,
            last_name,
            birth_date,
            phone,
            email,
            address,
            nationality,
            residence,
            justification,
            gender,
            criminal_record,
            accept_kvkk,
        } => {
            let mut profile = KycProfile {
                customer_id: customer_id.clone(),
                national_id: String::new(),
                first_name,
                last_name,
                birth_date,
                phone,
                email,
                address,
                nationality,
                residence_country: residence,
                geo_justification: justification,
                gender: gender.to_core_type(),
                has_criminal_record: criminal_record,
                kvkk_accepted: false,
                kvkk_accepted_at: None,
                kvkk_version: None,
            };
            if accept_kvkk {
                profile.accept_kvkk(Utc::now());
            }

            // The profile document carries the TCKN of the registered customer
            let customer =
                zbank_persistence::CustomerRepo::get_by_id(ctx.pool(), &customer_id).await?;
            profile.national_id = customer.national_id;

            let today = Utc::now().date_naive();
            service.save(actor, &profile, today).await?;

            println!("✅ KYC profile saved for {}", customer_id);

            // Live mismatch preview, same classifier the scorer uses
            let scorer = GeoRiskScorer::new(CountryResolver::iso2);
            let mismatch = scorer.mismatch_delta(
                &profile.nationality,
                &profile.residence_country,
                profile.geo_justification.as_deref(),
            );
            if mismatch != 0 {
                println!("   Uyruk ≠ İkamet, mismatch delta: {:+}", mismatch);
            }
        }

        KycAction::Show { customer_id } => {
            match service.fetch(&customer_id).await? {
                Some(profile) => {
                    println!("📋 KYC Profile: {}", customer_id);
                    println!("   Name:        {}", profile.full_name());
                    println!("   Birth date:  {}", profile.birth_date);
                    println!("   Phone:       {}", profile.phone);
                    println!("   Email:       {}", profile.email);
                    println!("   Address:     {}", profile.address);
                    println!("   Nationality: {}", profile.nationality);
                    println!("   Residence:   {}", profile.residence_country);
                    if let Some(justification) = &profile.geo_justification {
                        println!("   Justification: {}", justification);
                    }
                    println!("   Gender:      {}", profile.gender);
                    println!("   Criminal record declared: {}", profile.has_criminal_record);
                    println!(
                        "   KVKK: {} (version {})",
                        if profile.kvkk_accepted { "accepted" } else { "missing" },
                        profile.kvkk_version.as_deref().unwrap_or("-")
                    );
                }
                None => {
                    println!("❌ No KYC profile found for {}", customer_id);
                }
            }
        }
    }

    Ok(())
}
