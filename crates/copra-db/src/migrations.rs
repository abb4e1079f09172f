//! # Database Migrations
//!
//! Versioned schema migrations for the Copra POS store.
//!
//! ## How Migrations Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Migration Process                                  │
//! │                                                                         │
//! │  Store initialization                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Read PRAGMA user_version                                              │
//! │       │                                                                 │
//! │       ├── version 0 → apply step 1 (initial schema)                    │
//! │       ├── version 1 → apply step 2 (receipt field expansion)           │
//! │       └── version 2 → nothing pending                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Each step runs in its own transaction and bumps user_version          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Adding New Migrations
//!
//! 1. Bump [`SCHEMA_VERSION`]
//! 2. Add a step function and register it in [`run_migrations`]
//! 3. **NEVER** modify existing steps - always add new ones
//! 4. Keep per-record rewrites in pure functions so they stay testable
//!    without the engine (see [`backfill_receipt_fields`])

use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::{debug, info};

use crate::error::{DbError, DbResult};

/// The schema version this build of the access layer expects.
///
/// Version history:
/// - 1: operators, settings, receipts (original column set)
/// - 2: receipts gain `address`, `deduction_weight`, `transport_fee`
pub const SCHEMA_VERSION: i64 = 2;

/// Runs all pending migrations, oldest first.
///
/// ## Safety
/// - Idempotent: a store already at [`SCHEMA_VERSION`] is left untouched
/// - Transactional: each step commits together with its version bump
/// - A store from a NEWER build is refused rather than mangled
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    let current = schema_version(pool).await?;

    if current > SCHEMA_VERSION {
        return Err(DbError::MigrationFailed(format!(
            "store is at schema version {} but this build supports up to {}",
            current, SCHEMA_VERSION
        )));
    }

    if current == SCHEMA_VERSION {
        debug!(version = current, "schema already current");
        return Ok(());
    }

    for version in (current + 1)..=SCHEMA_VERSION {
        let mut tx = pool.begin().await?;

        match version {
            1 => apply_initial_schema(&mut tx).await?,
            2 => apply_receipt_field_expansion(&mut tx).await?,
            _ => {
                return Err(DbError::MigrationFailed(format!(
                    "no migration step registered for version {}",
                    version
                )))
            }
        }

        // PRAGMA arguments cannot be bound; version comes from the loop
        // bound above, never from input.
        sqlx::query(&format!("PRAGMA user_version = {}", version))
            .execute(&mut *tx)
            .await?;

        tx.commit()
            .await
            .map_err(|e| DbError::MigrationFailed(e.to_string()))?;

        info!(version, "schema migration applied");
    }

    Ok(())
}

/// Returns the store's current schema version.
pub async fn schema_version(pool: &SqlitePool) -> DbResult<i64> {
    let version: i64 = sqlx::query_scalar("PRAGMA user_version")
        .fetch_one(pool)
        .await?;
    Ok(version)
}

// =============================================================================
// Step 1: Initial Schema
// =============================================================================

/// Creates the three record collections.
async fn apply_initial_schema(tx: &mut Transaction<'_, Sqlite>) -> DbResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE operators (
            id            TEXT PRIMARY KEY,
            username      TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            created_at    TEXT NOT NULL
        )
        "#,
    )
    .execute(&mut **tx)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE settings (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )
        "#,
    )
    .execute(&mut **tx)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE receipts (
            id             TEXT PRIMARY KEY,
            receipt_number TEXT NOT NULL UNIQUE,
            customer_name  TEXT NOT NULL,
            unit_price     REAL NOT NULL,
            gross_weight   REAL NOT NULL,
            total          REAL NOT NULL,
            created_at     TEXT NOT NULL
        )
        "#,
    )
    .execute(&mut **tx)
    .await?;

    sqlx::query("CREATE INDEX idx_receipts_created_at ON receipts(created_at)")
        .execute(&mut **tx)
        .await?;

    Ok(())
}

// =============================================================================
// Step 2: Receipt Field Expansion
// =============================================================================

/// A receipt row as read mid-upgrade, before the new fields are filled.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct LegacyReceiptRow {
    pub id: String,
    pub address: Option<String>,
    pub deduction_weight: Option<f64>,
    pub transport_fee: Option<f64>,
}

/// The filled-in values for one upgraded receipt row.
#[derive(Debug, Clone, PartialEq)]
pub struct BackfilledReceiptFields {
    pub address: String,
    pub deduction_weight: f64,
    pub transport_fee: f64,
}

/// Fills the fields introduced in schema version 2 with safe defaults:
/// text fields become empty strings, numeric fields become zero.
///
/// Pure function over a single row; the upgrade pass in
/// [`run_migrations`] applies it to every stored receipt.
pub fn backfill_receipt_fields(row: &LegacyReceiptRow) -> BackfilledReceiptFields {
    BackfilledReceiptFields {
        address: row.address.clone().unwrap_or_default(),
        deduction_weight: row.deduction_weight.unwrap_or(0.0),
        transport_fee: row.transport_fee.unwrap_or(0.0),
    }
}

/// Adds the deduction/fee/address columns to receipts and backfills
/// existing rows so older records remain readable by newer code.
async fn apply_receipt_field_expansion(tx: &mut Transaction<'_, Sqlite>) -> DbResult<()> {
    sqlx::query("ALTER TABLE receipts ADD COLUMN address TEXT")
        .execute(&mut **tx)
        .await?;
    sqlx::query("ALTER TABLE receipts ADD COLUMN deduction_weight REAL")
        .execute(&mut **tx)
        .await?;
    sqlx::query("ALTER TABLE receipts ADD COLUMN transport_fee REAL")
        .execute(&mut **tx)
        .await?;

    let rows: Vec<LegacyReceiptRow> = sqlx::query_as(
        "SELECT id, address, deduction_weight, transport_fee FROM receipts",
    )
    .fetch_all(&mut **tx)
    .await?;

    let row_count = rows.len();

    for row in rows {
        let filled = backfill_receipt_fields(&row);
        sqlx::query(
            r#"
            UPDATE receipts
            SET address = ?1, deduction_weight = ?2, transport_fee = ?3
            WHERE id = ?4
            "#,
        )
        .bind(&filled.address)
        .bind(filled.deduction_weight)
        .bind(filled.transport_fee)
        .bind(&row.id)
        .execute(&mut **tx)
        .await?;
    }

    if row_count > 0 {
        info!(rows = row_count, "backfilled receipt rows for schema v2");
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;
    use std::str::FromStr;

    async fn memory_pool() -> SqlitePool {
        let options = sqlx::sqlite::SqliteConnectOptions::from_str("sqlite::memory:").unwrap();
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .unwrap()
    }

    #[test]
    fn test_backfill_fills_missing_fields() {
        let row = LegacyReceiptRow {
            id: "r1".to_string(),
            address: None,
            deduction_weight: None,
            transport_fee: None,
        };

        let filled = backfill_receipt_fields(&row);
        assert_eq!(filled.address, "");
        assert_eq!(filled.deduction_weight, 0.0);
        assert_eq!(filled.transport_fee, 0.0);
    }

    #[test]
    fn test_backfill_preserves_present_fields() {
        let row = LegacyReceiptRow {
            id: "r1".to_string(),
            address: Some("Barangay 4".to_string()),
            deduction_weight: Some(12.5),
            transport_fee: Some(100.0),
        };

        let filled = backfill_receipt_fields(&row);
        assert_eq!(filled.address, "Barangay 4");
        assert_eq!(filled.deduction_weight, 12.5);
        assert_eq!(filled.transport_fee, 100.0);
    }

    #[tokio::test]
    async fn test_fresh_store_reaches_current_version() {
        let pool = memory_pool().await;

        run_migrations(&pool).await.unwrap();
        assert_eq!(schema_version(&pool).await.unwrap(), SCHEMA_VERSION);

        // Running again is a no-op.
        run_migrations(&pool).await.unwrap();
        assert_eq!(schema_version(&pool).await.unwrap(), SCHEMA_VERSION);
    }

    #[tokio::test]
    async fn test_v1_store_upgrades_with_backfill() {
        let pool = memory_pool().await;

        // Build a version-1 store by hand.
        {
            let mut tx = pool.begin().await.unwrap();
            apply_initial_schema(&mut tx).await.unwrap();
            sqlx::query("PRAGMA user_version = 1")
                .execute(&mut *tx)
                .await
                .unwrap();
            tx.commit().await.unwrap();
        }

        // A record written before the deduction/fee/address columns existed.
        sqlx::query(
            r#"
            INSERT INTO receipts
                (id, receipt_number, customer_name, unit_price, gross_weight, total, created_at)
            VALUES
                ('r1', 'RCT-0001', 'Juan Cruz', 8.5, 1000.0, 8500.0, '2025-01-01 00:00:00')
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();

        run_migrations(&pool).await.unwrap();
        assert_eq!(schema_version(&pool).await.unwrap(), SCHEMA_VERSION);

        let (address, deduction, fee): (String, f64, f64) = sqlx::query_as(
            "SELECT address, deduction_weight, transport_fee FROM receipts WHERE id = 'r1'",
        )
        .fetch_one(&pool)
        .await
        .unwrap();

        assert_eq!(address, "");
        assert_eq!(deduction, 0.0);
        assert_eq!(fee, 0.0);
    }

    #[tokio::test]
    async fn test_newer_store_is_refused() {
        let pool = memory_pool().await;

        sqlx::query("PRAGMA user_version = 99")
            .execute(&pool)
            .await
            .unwrap();

        let err = run_migrations(&pool).await.unwrap_err();
        assert!(matches!(err, DbError::MigrationFailed(_)));
    }
}
