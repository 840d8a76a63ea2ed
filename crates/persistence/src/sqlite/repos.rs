//! Repository implementations for SQLite
//!
//! Document-style CRUD for customers and KYC profiles.

use crate::error::{PersistenceError, PersistenceResult};
use crate::sqlite::schema::{CustomerRow, KycProfileRow};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use zbank_core::{Customer, KycProfile, RiskFlag};

/// Create a connection pool
///
/// A single connection: SQLite in-memory databases live per connection, and
/// the onboarding workload is sequential anyway.
pub async fn create_pool(db_url: &str) -> PersistenceResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(db_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Create pool and initialize schema
pub async fn init_database(db_url: &str) -> PersistenceResult<SqlitePool> {
    let pool = create_pool(db_url).await?;
    run_schema(&pool).await?;
    Ok(pool)
}

/// Create tables if they do not exist
pub async fn run_schema(pool: &SqlitePool) -> PersistenceResult<()> {
    sqlx::query(
        r#"
        -- Customer documents; id is the generated customer number
        CREATE TABLE IF NOT EXISTS customers (
            id TEXT PRIMARY KEY,
            national_id TEXT NOT NULL UNIQUE,
            created_at DATETIME NOT NULL,
            risk_score INTEGER,
            risk_flags TEXT
        );

        -- One KYC profile per customer
        CREATE TABLE IF NOT EXISTS kyc_profiles (
            customer_id TEXT PRIMARY KEY,
            national_id TEXT NOT NULL,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            birth_date DATE NOT NULL,
            phone TEXT NOT NULL,
            email TEXT NOT NULL,
            address TEXT NOT NULL,
            nationality TEXT NOT NULL,
            residence_country TEXT NOT NULL,
            geo_justification TEXT,
            gender TEXT NOT NULL,
            has_criminal_record INTEGER NOT NULL DEFAULT 0,
            kvkk_accepted INTEGER NOT NULL DEFAULT 0,
            kvkk_accepted_at DATETIME,
            kvkk_version TEXT,
            updated_at DATETIME NOT NULL,
            FOREIGN KEY (customer_id) REFERENCES customers(id)
        );

        CREATE INDEX IF NOT EXISTS idx_customers_national_id
            ON customers(national_id);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

// ============================================================================
// Customer Repository
// ============================================================================

/// Repository for the customers table
pub struct CustomerRepo;

impl CustomerRepo {
    /// Get customer by customer number
    pub async fn get_by_id(pool: &SqlitePool, id: &str) -> PersistenceResult<Customer> {
        sqlx::query_as::<_, CustomerRow>("SELECT * FROM customers WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| PersistenceError::not_found("Customer", id))?
            .into_customer()
    }

    /// Find customer by national id (TCKN), if registered
    pub async fn find_by_national_id(
        pool: &SqlitePool,
        national_id: &str,
    ) -> PersistenceResult<Option<Customer>> {
        let row =
            sqlx::query_as::<_, CustomerRow>("SELECT * FROM customers WHERE national_id = ?")
                .bind(national_id)
                .fetch_optional(pool)
                .await?;
        row.map(CustomerRow::into_customer).transpose()
    }

    /// True if a customer number is already taken
    pub async fn exists(pool: &SqlitePool, id: &str) -> PersistenceResult<bool> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM customers WHERE id = ?")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(count.0 > 0)
    }

    /// Insert a new customer; duplicate id or national id surfaces as
    /// AlreadyExists
    pub async fn insert(pool: &SqlitePool, customer: &Customer) -> PersistenceResult<()> {
        let row = CustomerRow::from(customer);
        sqlx::query(
            "INSERT INTO customers (id, national_id, created_at, risk_score, risk_flags)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&row.id)
        .bind(&row.national_id)
        .bind(row.created_at)
        .bind(row.risk_score)
        .bind(&row.risk_flags)
        .execute(pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                PersistenceError::already_exists("Customer", &customer.national_id)
            }
            _ => PersistenceError::from(e),
        })?;
        Ok(())
    }

    /// Write risk evaluation results onto the customer document
    pub async fn set_risk(
        pool: &SqlitePool,
        id: &str,
        score: i32,
        flags: &[RiskFlag],
    ) -> PersistenceResult<()> {
        let codes: Vec<&str> = flags.iter().map(|f| f.as_str()).collect();
        let flags_json = if codes.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&codes)?)
        };

        let result = sqlx::query("UPDATE customers SET risk_score = ?, risk_flags = ? WHERE id = ?")
            .bind(score)
            .bind(flags_json)
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::not_found("Customer", id));
        }
        Ok(())
    }

    /// All customers, oldest first
    pub async fn get_all(pool: &SqlitePool) -> PersistenceResult<Vec<Customer>> {
        let rows =
            sqlx::query_as::<_, CustomerRow>("SELECT * FROM customers ORDER BY created_at")
                .fetch_all(pool)
                .await?;
        rows.into_iter().map(CustomerRow::into_customer).collect()
    }
}

// ============================================================================
// KYC Profile Repository
// ============================================================================

/// Repository for the kyc_profiles table
pub struct KycProfileRepo;

impl KycProfileRepo {
    /// Create or update (merge) the profile document
    pub async fn upsert(pool: &SqlitePool, profile: &KycProfile) -> PersistenceResult<()> {
        let row = KycProfileRow::from(profile);
        sqlx::query(
            r#"
            INSERT INTO kyc_profiles (
                customer_id, national_id, first_name, last_name, birth_date,
                phone, email, address, nationality, residence_country,
                geo_justification, gender, has_criminal_record,
                kvkk_accepted, kvkk_accepted_at, kvkk_version, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(customer_id) DO UPDATE SET
                national_id = excluded.national_id,
                first_name = excluded.first_name,
                last_name = excluded.last_name,
                birth_date = excluded.birth_date,
                phone = excluded.phone,
                email = excluded.email,
                address = excluded.address,
                nationality = excluded.nationality,
                residence_country = excluded.residence_country,
                geo_justification = excluded.geo_justification,
                gender = excluded.gender,
                has_criminal_record = excluded.has_criminal_record,
                kvkk_accepted = excluded.kvkk_accepted,
                kvkk_accepted_at = excluded.kvkk_accepted_at,
                kvkk_version = excluded.kvkk_version,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&row.customer_id)
        .bind(&row.national_id)
        .bind(&row.first_name)
        .bind(&row.last_name)
        .bind(row.birth_date)
        .bind(&row.phone)
        .bind(&row.email)
        .bind(&row.address)
        .bind(&row.nationality)
        .bind(&row.residence_country)
        .bind(&row.geo_justification)
        .bind(&row.gender)
        .bind(row.has_criminal_record)
        .bind(row.kvkk_accepted)
        .bind(row.kvkk_accepted_at)
        .bind(&row.kvkk_version)
        .bind(row.updated_at)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Fetch a profile by customer number
    pub async fn fetch(
        pool: &SqlitePool,
        customer_id: &str,
    ) -> PersistenceResult<Option<KycProfile>> {
        let row = sqlx::query_as::<_, KycProfileRow>(
            "SELECT * FROM kyc_profiles WHERE customer_id = ?",
        )
        .bind(customer_id)
        .fetch_optional(pool)
        .await?;
        row.map(KycProfileRow::into_profile).transpose()
    }

    /// All profiles, most recently updated first
    pub async fn list(pool: &SqlitePool) -> PersistenceResult<Vec<KycProfile>> {
        let rows = sqlx::query_as::<_, KycProfileRow>(
            "SELECT * FROM kyc_profiles ORDER BY updated_at DESC",
        )
        .fetch_all(pool)
        .await?;
        rows.into_iter().map(KycProfileRow::into_profile).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use zbank_core::Gender;

    async fn test_pool() -> SqlitePool {
        init_database("sqlite::memory:").await.unwrap()
    }

    fn sample_profile(customer_id: &str) -> KycProfile {
        KycProfile {
            customer_id: customer_id.to_string(),
            national_id: "12345678950".to_string(),
            first_name: "Ayşe".to_string(),
            last_name: "Yılmaz".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            phone: "+90 532 000 11 22".to_string(),
            email: "ayse@example.com".to_string(),
            address: "Kadıköy, İstanbul".to_string(),
            nationality: "Turkish".to_string(),
            residence_country: "Germany".to_string(),
            geo_justification: Some("Eğitim için".to_string()),
            gender: Gender::Female,
            has_criminal_record: false,
            kvkk_accepted: true,
            kvkk_accepted_at: None,
            kvkk_version: Some("v1.0".to_string()),
        }
    }

    #[tokio::test]
    async fn test_customer_insert_and_lookup() {
        let pool = test_pool().await;
        let customer = Customer::new("ZB-950-48291", "12345678950");

        CustomerRepo::insert(&pool, &customer).await.unwrap();

        let by_id = CustomerRepo::get_by_id(&pool, "ZB-950-48291").await.unwrap();
        assert_eq!(by_id.national_id, "12345678950");
        assert_eq!(by_id.risk_score, None);

        let by_tckn = CustomerRepo::find_by_national_id(&pool, "12345678950")
            .await
            .unwrap();
        assert_eq!(by_tckn.unwrap().id, "ZB-950-48291");

        assert!(CustomerRepo::exists(&pool, "ZB-950-48291").await.unwrap());
        assert!(!CustomerRepo::exists(&pool, "ZB-000-00000").await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_national_id_rejected() {
        let pool = test_pool().await;
        CustomerRepo::insert(&pool, &Customer::new("ZB-950-11111", "12345678950"))
            .await
            .unwrap();

        let err = CustomerRepo::insert(&pool, &Customer::new("ZB-950-22222", "12345678950"))
            .await
            .unwrap_err();
        assert!(err.is_already_exists());
    }

    #[tokio::test]
    async fn test_set_risk() {
        let pool = test_pool().await;
        CustomerRepo::insert(&pool, &Customer::new("ZB-950-48291", "12345678950"))
            .await
            .unwrap();

        CustomerRepo::set_risk(
            &pool,
            "ZB-950-48291",
            -13,
            &[RiskFlag::GeoMismatch, RiskFlag::HighRiskNationality],
        )
        .await
        .unwrap();

        let customer = CustomerRepo::get_by_id(&pool, "ZB-950-48291").await.unwrap();
        assert_eq!(customer.risk_score, Some(-13));
        assert_eq!(customer.risk_flags.len(), 2);

        let err = CustomerRepo::set_risk(&pool, "ZB-000-00000", 0, &[])
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_profile_upsert_and_fetch() {
        let pool = test_pool().await;
        CustomerRepo::insert(&pool, &Customer::new("ZB-950-48291", "12345678950"))
            .await
            .unwrap();

        let mut profile = sample_profile("ZB-950-48291");
        KycProfileRepo::upsert(&pool, &profile).await.unwrap();

        let fetched = KycProfileRepo::fetch(&pool, "ZB-950-48291")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.first_name, "Ayşe");
        assert_eq!(fetched.gender, Gender::Female);
        assert_eq!(fetched.residence_country, "Germany");

        // Upsert merges: second write updates in place
        profile.phone = "+90 532 999 88 77".to_string();
        KycProfileRepo::upsert(&pool, &profile).await.unwrap();

        let updated = KycProfileRepo::fetch(&pool, "ZB-950-48291")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.phone, "+90 532 999 88 77");

        assert_eq!(KycProfileRepo::list(&pool).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_missing_profile() {
        let pool = test_pool().await;
        let missing = KycProfileRepo::fetch(&pool, "ZB-000-00000").await.unwrap();
        assert!(missing.is_none());
    }
}
