//! # Receipt Repository
//!
//! The append-only receipt ledger and its sequential numbering.
//!
//! ## Numbering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Number Assignment                          │
//! │                                                                         │
//! │  next_receipt_number()                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  candidate = count(receipts) + 1 → "RCT-0003"                          │
//! │       │                                                                 │
//! │       ├── already stored? probe upward: RCT-0004, RCT-0005, ...        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  first free number is returned                                          │
//! │                                                                         │
//! │  Pure function of store state: repeated calls without an intervening   │
//! │  save return the same candidate. The check-then-decide gap between     │
//! │  next_receipt_number and save is NOT closed here - the device runs a   │
//! │  single operator, and the UNIQUE column plus the conflict guard turn   │
//! │  a lost race into an ignored re-save instead of a duplicate row.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, info};
use uuid::Uuid;

use copra_core::settlement::format_receipt_number;
use copra_core::{Receipt, ReceiptDraft};

use crate::error::DbResult;

/// Repository for the receipt ledger.
#[derive(Debug, Clone)]
pub struct ReceiptRepository {
    pool: SqlitePool,
}

impl ReceiptRepository {
    /// Creates a new ReceiptRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReceiptRepository { pool }
    }

    /// Returns the number of stored receipts.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM receipts")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Checks whether a receipt number is already stored.
    pub async fn exists(&self, receipt_number: &str) -> DbResult<bool> {
        let found: Option<i64> =
            sqlx::query_scalar("SELECT 1 FROM receipts WHERE receipt_number = ?1")
                .bind(receipt_number)
                .fetch_optional(&self.pool)
                .await?;
        Ok(found.is_some())
    }

    /// Derives the next free receipt number.
    ///
    /// Candidate is `count + 1`; numbers skipped or consumed out of order
    /// in the past are probed past, so the result has never been used.
    pub async fn next_receipt_number(&self) -> DbResult<String> {
        let count = self.count().await?;
        let mut seq = (count + 1).max(1) as u64;

        loop {
            let candidate = format_receipt_number(seq);
            if !self.exists(&candidate).await? {
                debug!(candidate = %candidate, "receipt number candidate");
                return Ok(candidate);
            }
            seq += 1;
        }
    }

    /// Stores a finalized receipt.
    ///
    /// Silent idempotent no-op when the receipt number already exists
    /// (re-save guard); otherwise inserts an immutable row with a
    /// store-assigned ID and creation timestamp.
    pub async fn save(&self, draft: &ReceiptDraft) -> DbResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO receipts (
                id, receipt_number, customer_name, address,
                unit_price, gross_weight, deduction_weight, transport_fee,
                total, created_at
            ) VALUES (
                ?1, ?2, ?3, ?4,
                ?5, ?6, ?7, ?8,
                ?9, ?10
            )
            ON CONFLICT(receipt_number) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&draft.receipt_number)
        .bind(&draft.customer_name)
        .bind(&draft.address)
        .bind(draft.unit_price)
        .bind(draft.gross_weight)
        .bind(draft.deduction_weight)
        .bind(draft.transport_fee)
        .bind(draft.total)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            debug!(
                receipt_number = %draft.receipt_number,
                "receipt number already stored, ignoring"
            );
        } else {
            info!(
                receipt_number = %draft.receipt_number,
                total = draft.total,
                "receipt stored"
            );
        }

        Ok(())
    }

    /// Returns all receipts, most recent first.
    pub async fn list(&self) -> DbResult<Vec<Receipt>> {
        let receipts: Vec<Receipt> = sqlx::query_as(
            r#"
            SELECT
                id, receipt_number, customer_name, address,
                unit_price, gross_weight, deduction_weight, transport_fee,
                total, created_at
            FROM receipts
            ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(receipts)
    }

    /// Fetches a single receipt by its number, e.g. for re-printing.
    pub async fn get_by_number(&self, receipt_number: &str) -> DbResult<Option<Receipt>> {
        let receipt: Option<Receipt> = sqlx::query_as(
            r#"
            SELECT
                id, receipt_number, customer_name, address,
                unit_price, gross_weight, deduction_weight, transport_fee,
                total, created_at
            FROM receipts
            WHERE receipt_number = ?1
            "#,
        )
        .bind(receipt_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(receipt)
    }
}
