//! Zbank CLI - Onboarding operations from command line
//!
//! Usage:
//! ```bash
//! zbank init
//! zbank register 12345678950
//! zbank kyc save ZB-950-48291 --first-name Ayşe --last-name Yılmaz \
//!     --birth-date 1990-04-12 --phone "+905320001122" --email ayse@example.com \
//!     --address "Kadıköy, İstanbul" --nationality Turkish --residence Germany \
//!     --justification "Eğitim için" --gender female --accept-kvkk
//! zbank score ZB-950-48291
//! zbank advisory Turkey
//! zbank audit --from 2026-08-01 --type risk-evaluated
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod commands;
mod db;

use commands::{advisory, audit, identity, kyc, risk};

/// Zbank - customer onboarding (KYC) backend with SQLite + event log
#[derive(Parser)]
#[command(name = "zbank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Database file path
    #[arg(long, default_value = "data/zbank.db", global = true)]
    pub db: PathBuf,

    /// Events directory path
    #[arg(long, default_value = "data/events", global = true)]
    pub events_dir: PathBuf,

    /// Actor recorded in audit events (operator id or "self")
    #[arg(long, default_value = "self", global = true)]
    pub actor: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a national id (TCKN) and get a customer number
    Register {
        /// T.C. Kimlik Numarası (11 digits; spacing is tolerated)
        tckn: String,
    },

    /// KYC profile management
    Kyc {
        #[command(subcommand)]
        action: KycAction,
    },

    /// Evaluate risk for a registered customer with a saved profile
    Score {
        /// Customer number (e.g. ZB-950-48291)
        customer_id: String,
    },

    /// Look up the travel advisory for a country
    Advisory {
        /// Country name, nationality or ISO code
        country: String,
        /// Log the check against a customer's audit trail
        #[arg(long)]
        customer: Option<String>,
        /// Override the advisory feed URL
        #[arg(long)]
        feed_url: Option<String>,
    },

    /// Inspect the onboarding event log
    Audit {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Filter by event type
        #[arg(long, value_name = "TYPE")]
        r#type: Option<EventTypeArg>,
        /// Filter by customer number
        #[arg(long)]
        customer: Option<String>,
        /// Only events carrying risk flags
        #[arg(long)]
        flagged: bool,
    },

    /// Initialize database with schema
    Init {
        /// Force re-initialization (drops existing data)
        #[arg(long)]
        force: bool,
    },

    /// Show database status
    Status,
}

#[derive(Subcommand)]
pub enum KycAction {
    /// Save (create or update) a customer's KYC profile
    Save {
        /// Customer number
        customer_id: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth_date: chrono::NaiveDate,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        address: String,
        /// Nationality (name, demonym or ISO code)
        #[arg(long)]
        nationality: String,
        /// Residence country
        #[arg(long)]
        residence: String,
        /// Justification when nationality and residence differ
        #[arg(long)]
        justification: Option<String>,
        #[arg(long, default_value = "male")]
        gender: GenderArg,
        /// Declared criminal record
        #[arg(long)]
        criminal_record: bool,
        /// Accept the current KVKK consent text
        #[arg(long)]
        accept_kvkk: bool,
    },
    /// Show a saved profile
    Show {
        /// Customer number
        customer_id: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum GenderArg {
    Male,
    Female,
}

impl GenderArg {
    pub fn to_core_type(self) -> zbank_core::Gender {
        match self {
            GenderArg::Male => zbank_core::Gender::Male,
            GenderArg::Female => zbank_core::Gender::Female,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum EventTypeArg {
    CustomerRegistered,
    ProfileSaved,
    RiskEvaluated,
    AdvisoryChecked,
}

impl EventTypeArg {
    pub fn to_core_type(self) -> zbank_core::OnboardingEventType {
        match self {
            EventTypeArg::CustomerRegistered => {
                zbank_core::OnboardingEventType::CustomerRegistered
            }
            EventTypeArg::ProfileSaved => zbank_core::OnboardingEventType::ProfileSaved,
            EventTypeArg::RiskEvaluated => zbank_core::OnboardingEventType::RiskEvaluated,
            EventTypeArg::AdvisoryChecked => zbank_core::OnboardingEventType::AdvisoryChecked,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // Ensure data directories exist
    if let Some(parent) = cli.db.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    std::fs::create_dir_all(&cli.events_dir).ok();

    match cli.command {
        Commands::Init { force } => {
            db::init_database(&cli.db, force).await?;
            println!("✅ Database initialized at {:?}", cli.db);
        }

        Commands::Status => {
            db::show_status(&cli.db).await?;
        }

        Commands::Register { tckn } => {
            identity::register(&cli.db, &cli.events_dir, &cli.actor, &tckn).await?;
        }

        Commands::Kyc { action } => {
            kyc::handle(&cli.db, &cli.events_dir, &cli.actor, action).await?;
        }

        Commands::Score { customer_id } => {
            risk::score(&cli.db, &cli.events_dir, &cli.actor, &customer_id).await?;
        }

        Commands::Advisory {
            country,
            customer,
            feed_url,
        } => {
            advisory::lookup(
                &cli.db,
                &cli.events_dir,
                &cli.actor,
                &country,
                customer.as_deref(),
                feed_url.as_deref(),
            )
            .await?;
        }

        Commands::Audit {
            from,
            to,
            r#type,
            customer,
            flagged,
        } => {
            audit::run_audit(&cli.events_dir, from, to, r#type, customer, flagged).await?;
        }
    }

    Ok(())
}
