//! Database initialization and status

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use std::path::Path;
use zbank_persistence::run_schema;

/// Initialize the database with schema
pub async fn init_database(db_path: &Path, force: bool) -> Result<()> {
    if force && db_path.exists() {
        std::fs::remove_file(db_path).context("Failed to remove existing database")?;
        println!("🗑️  Removed existing database");
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());
    let pool = zbank_persistence::create_pool(&db_url)
        .await
        .context("Failed to connect to database")?;

    println!("📦 Creating schema...");
    run_schema(&pool).await.context("Failed to create schema")?;

    pool.close().await;
    Ok(())
}

/// Show database status
pub async fn show_status(db_path: &Path) -> Result<()> {
    if !db_path.exists() {
        println!("❌ Database not found at {:?}", db_path);
        println!("   Run 'zbank init' to create the database");
        return Ok(());
    }

    let pool = connect(db_path).await?;

    println!("📊 Database Status");
    println!("   Path: {:?}", db_path);
    println!();

    let customer_count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM customers")
        .fetch_one(&pool)
        .await
        .unwrap_or((0,));

    let profile_count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM kyc_profiles")
        .fetch_one(&pool)
        .await
        .unwrap_or((0,));

    let scored_count: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM customers WHERE risk_score IS NOT NULL")
            .fetch_one(&pool)
            .await
            .unwrap_or((0,));

    println!("   Customers:     {}", customer_count.0);
    println!("   KYC profiles:  {}", profile_count.0);
    println!("   Risk scored:   {}", scored_count.0);

    pool.close().await;
    Ok(())
}

/// Connect to database pool
pub async fn connect(db_path: &Path) -> Result<SqlitePool> {
    let db_url = format!("sqlite:{}", db_path.display());
    SqlitePool::connect(&db_url)
        .await
        .context("Failed to connect to database. Run 'zbank init' first.")
}
