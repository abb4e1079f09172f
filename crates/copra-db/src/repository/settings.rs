//! # Settings Repository
//!
//! The small key-value table of operational defaults (unit price, transport
//! fee). Reads self-heal: a missing key falls back to the hardcoded default
//! instead of erroring, so a half-seeded or hand-edited store still serves
//! a usable transaction form.

use sqlx::SqlitePool;
use tracing::debug;

use copra_core::{Defaults, DEFAULT_SETTING_VALUE, SETTING_TRANSPORT_FEE, SETTING_UNIT_PRICE};

use crate::error::{DbError, DbResult};

/// Repository for the settings key-value table.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    pool: SqlitePool,
}

impl SettingsRepository {
    /// Creates a new SettingsRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SettingsRepository { pool }
    }

    /// Returns the stored value for a key, if any.
    pub async fn get(&self, key: &str) -> DbResult<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM settings WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        Ok(value)
    }

    /// Returns the current operational defaults.
    ///
    /// Missing keys fall back to [`DEFAULT_SETTING_VALUE`].
    pub async fn get_defaults(&self) -> DbResult<Defaults> {
        Ok(Defaults {
            unit_price: self.value_or_default(SETTING_UNIT_PRICE).await?,
            transport_fee: self.value_or_default(SETTING_TRANSPORT_FEE).await?,
        })
    }

    /// Upserts both defaults in a single transaction.
    ///
    /// Atomic with respect to each other: a concurrent reader sees either
    /// both old values or both new ones, never a mix.
    pub async fn save_defaults(&self, unit_price: &str, transport_fee: &str) -> DbResult<()> {
        let mut tx = self.pool.begin().await?;

        for (key, value) in [
            (SETTING_UNIT_PRICE, unit_price),
            (SETTING_TRANSPORT_FEE, transport_fee),
        ] {
            sqlx::query(
                r#"
                INSERT INTO settings (key, value)
                VALUES (?1, ?2)
                ON CONFLICT(key) DO UPDATE SET value = excluded.value
                "#,
            )
            .bind(key)
            .bind(value)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        debug!(unit_price, transport_fee, "defaults saved");
        Ok(())
    }

    async fn value_or_default(&self, key: &str) -> DbResult<String> {
        Ok(self
            .get(key)
            .await?
            .unwrap_or_else(|| DEFAULT_SETTING_VALUE.to_string()))
    }
}
