//! # First-Run Seeding
//!
//! Inserts the default records an empty store needs to be usable: the fixed
//! operator set and a `"0"` row for every recognized settings key.
//!
//! Seeding runs inside store initialization (after migrations) and again
//! after a full reset. It only touches collections that are empty, so a
//! store that already holds data passes through untouched.

use chrono::Utc;
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::info;
use uuid::Uuid;

use copra_core::{DEFAULT_OPERATORS, DEFAULT_SETTING_VALUE, SETTING_KEYS};

use crate::error::{DbError, DbResult};
use crate::repository::operator::hash_password;

/// Seeds default records into an empty store, in one transaction.
///
/// A partial failure rolls the whole seeding step back; the caller treats
/// that as a failed initialization so a later call can retry cleanly.
pub(crate) async fn seed_defaults(pool: &SqlitePool) -> DbResult<()> {
    let mut tx = pool.begin().await?;
    seed_defaults_tx(&mut tx).await?;
    tx.commit()
        .await
        .map_err(|e| DbError::TransactionFailed(e.to_string()))?;
    Ok(())
}

/// Seeding body, shared with [`crate::store::Store::reset_all`] so the
/// reset's deletes and reseeding commit together.
pub(crate) async fn seed_defaults_tx(tx: &mut Transaction<'_, Sqlite>) -> DbResult<()> {
    let operator_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM operators")
        .fetch_one(&mut **tx)
        .await?;

    if operator_count == 0 {
        for (username, password) in DEFAULT_OPERATORS.iter().copied() {
            let hash = hash_password(password)?;
            sqlx::query(
                r#"
                INSERT INTO operators (id, username, password_hash, created_at)
                VALUES (?1, ?2, ?3, ?4)
                "#,
            )
            .bind(Uuid::new_v4().to_string())
            .bind(username)
            .bind(hash)
            .bind(Utc::now())
            .execute(&mut **tx)
            .await?;
        }
        info!(count = DEFAULT_OPERATORS.len(), "seeded default operators");
    }

    let setting_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM settings")
        .fetch_one(&mut **tx)
        .await?;

    if setting_count == 0 {
        for key in SETTING_KEYS.iter().copied() {
            sqlx::query("INSERT INTO settings (key, value) VALUES (?1, ?2)")
                .bind(key)
                .bind(DEFAULT_SETTING_VALUE)
                .execute(&mut **tx)
                .await?;
        }
        info!(count = SETTING_KEYS.len(), "seeded default settings");
    }

    Ok(())
}
