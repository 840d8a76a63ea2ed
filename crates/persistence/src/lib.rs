//! # Zbank Persistence
//!
//! Persistence layer for the onboarding flow - SQLite + JSONL event log.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Database                               │
//! │  ┌─────────────┐    ┌─────────────┐    ┌─────────────────┐ │
//! │  │   SQLite    │    │    JSONL    │    │     Repos       │ │
//! │  │ (documents) │    │  (events)   │    │   (queries)     │ │
//! │  └─────────────┘    └─────────────┘    └─────────────────┘ │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use zbank_persistence::{CustomerRepo, Database};
//!
//! // Initialize database
//! let db = Database::init_with_schema("sqlite:zbank.db?mode=rwc", "data/events").await?;
//!
//! // Query via repos
//! let customer = CustomerRepo::find_by_national_id(db.pool(), "12345678950").await?;
//!
//! // Append events
//! db.events().append(&event)?;
//! ```

pub mod error;
pub mod events;
pub mod sqlite;

pub use error::{PersistenceError, PersistenceResult};
pub use events::{AuditSummary, EventFilter, EventReader, EventStore};
pub use sqlite::{create_pool, init_database, run_schema, CustomerRepo, KycProfileRepo};
pub use sqlite::{CustomerRow, KycProfileRow};

use sqlx::SqlitePool;
use std::path::Path;

/// Database facade - unified access to SQLite + Events
pub struct Database {
    pool: SqlitePool,
    event_store: EventStore,
}

impl Database {
    /// Open an existing database
    ///
    /// # Arguments
    /// * `db_url` - SQLite database URL (e.g., "sqlite:zbank.db?mode=rwc")
    /// * `events_path` - Path to the JSONL events directory
    pub async fn new<Q: AsRef<Path>>(db_url: &str, events_path: Q) -> PersistenceResult<Self> {
        let pool = sqlite::create_pool(db_url).await?;
        let event_store = EventStore::new(events_path)?;

        Ok(Self { pool, event_store })
    }

    /// Open and create schema if missing
    pub async fn init_with_schema<Q: AsRef<Path>>(
        db_url: &str,
        events_path: Q,
    ) -> PersistenceResult<Self> {
        let pool = sqlite::init_database(db_url).await?;
        let event_store = EventStore::new(events_path)?;

        Ok(Self { pool, event_store })
    }

    /// Get SQLite connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get event store
    pub fn events(&self) -> &EventStore {
        &self.event_store
    }

    /// Event reader for replaying/auditing
    pub fn event_reader(&self) -> EventReader {
        EventReader::new(self.event_store.base_path())
    }
}
