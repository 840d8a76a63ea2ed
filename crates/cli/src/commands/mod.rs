//! CLI command handlers

pub mod advisory;
pub mod audit;
pub mod identity;
pub mod kyc;
pub mod risk;

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use zbank_business::ServiceContext;
use zbank_persistence::EventStore;

/// Open the pool + event store pair used by every handler
pub(crate) async fn service_context(db_path: &Path, events_dir: &Path) -> Result<ServiceContext> {
    let pool = crate::db::connect(db_path).await?;
    let events = Arc::new(EventStore::new(events_dir)?);
    Ok(ServiceContext::from_parts(pool, events))
}
