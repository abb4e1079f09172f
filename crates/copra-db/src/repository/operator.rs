//! # Operator Repository
//!
//! Credential storage and verification.
//!
//! ## Credentials at Rest
//! Passwords are stored as salted argon2 hashes (PHC string format) and
//! verified with the hash's own constant-time comparison. The clear text
//! never touches the database, and `login` does not reveal whether the
//! username or the password was wrong.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use copra_core::Operator;

use crate::error::{DbError, DbResult};

/// Repository for operator credential operations.
#[derive(Debug, Clone)]
pub struct OperatorRepository {
    pool: SqlitePool,
}

impl OperatorRepository {
    /// Creates a new OperatorRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OperatorRepository { pool }
    }

    /// Verifies a username/password pair.
    ///
    /// ## Returns
    /// * `Ok(true)` - username exists and the password matches its hash
    /// * `Ok(false)` - unknown username OR wrong password (indistinguishable)
    pub async fn login(&self, username: &str, password: &str) -> DbResult<bool> {
        debug!(username, "login attempt");

        let stored_hash: Option<String> =
            sqlx::query_scalar("SELECT password_hash FROM operators WHERE username = ?1")
                .bind(username)
                .fetch_optional(&self.pool)
                .await?;

        Ok(match stored_hash {
            Some(hash) => verify_password(password, &hash),
            None => false,
        })
    }

    /// Registers a new operator.
    ///
    /// Silent no-op when the username already exists; callers that need to
    /// know must perform a separate lookup.
    pub async fn register(&self, username: &str, password: &str) -> DbResult<()> {
        let existing: Option<i64> =
            sqlx::query_scalar("SELECT 1 FROM operators WHERE username = ?1")
                .bind(username)
                .fetch_optional(&self.pool)
                .await?;

        if existing.is_some() {
            debug!(username, "username already registered, ignoring");
            return Ok(());
        }

        let hash = hash_password(password)?;

        // ON CONFLICT keeps the no-op guarantee if a concurrent register
        // slipped in between the check and this insert.
        sqlx::query(
            r#"
            INSERT INTO operators (id, username, password_hash, created_at)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(username) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(username)
        .bind(hash)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        debug!(username, "operator registered");
        Ok(())
    }

    /// Returns all operator records, oldest first.
    ///
    /// For administrative/debug display.
    pub async fn list(&self) -> DbResult<Vec<Operator>> {
        let operators: Vec<Operator> = sqlx::query_as(
            r#"
            SELECT id, username, password_hash, created_at
            FROM operators
            ORDER BY created_at, username
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(operators)
    }
}

// =============================================================================
// Hashing Helpers
// =============================================================================

/// Hashes a password for storage.
pub fn hash_password(password: &str) -> DbResult<String> {
    use argon2::{
        password_hash::{rand_core::OsRng, SaltString},
        Argon2, PasswordHasher,
    };

    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| DbError::CredentialHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verifies a password against a stored hash.
///
/// A malformed stored hash verifies as `false` rather than erroring; an
/// operator with a corrupt record simply cannot log in.
pub fn verify_password(password: &str, hash: &str) -> bool {
    use argon2::{Argon2, PasswordHash, PasswordVerifier};

    let parsed_hash = match PasswordHash::new(hash) {
        Ok(h) => h,
        Err(_) => return false,
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

// =============================================================================
// Unit Tests
// =============================================================================
