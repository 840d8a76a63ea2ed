//! SQLite persistence module
//!
//! Repository pattern for SQLite document access.

pub mod repos;
pub mod schema;

pub use repos::{create_pool, init_database, run_schema, CustomerRepo, KycProfileRepo};
pub use schema::{CustomerRow, KycProfileRow};
