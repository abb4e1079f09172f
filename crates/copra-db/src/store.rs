//! # Store Handle & Lifecycle
//!
//! The `Store` is the single entry point coordinating lazy initialization of
//! the underlying SQLite database and exposing the three record collections
//! through uniform async operations.
//!
//! ## Lifecycle State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Initialization                                 │
//! │                                                                         │
//! │              initialize()                                               │
//! │  Uninitialized ──────────► Initializing ──────────► Ready(pool)        │
//! │       ▲                        │                                        │
//! │       │      open/migrate/seed │ failed                                 │
//! │       └────────────────────────┘                                        │
//! │                                                                         │
//! │  • Ready           → initialize() returns immediately                  │
//! │  • Initializing    → concurrent callers poll (50 ms) up to the         │
//! │                      configured wait budget, then fail with Timeout    │
//! │  • Any failure     → state reverts to Uninitialized so a later call    │
//! │                      can retry from scratch                            │
//! │                                                                         │
//! │  Every public operation passes through ensure_ready(): up to 3         │
//! │  initialization attempts with a fixed 200 ms backoff, after which      │
//! │  the operation fails with StorageUnavailable.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! The handle is explicitly constructed and passed by reference (or cloned,
//! it is cheap) from the application root. There is no global singleton;
//! tests construct an in-memory store per case.

use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use copra_core::{Defaults, Operator, Receipt, ReceiptDraft};

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::operator::OperatorRepository;
use crate::repository::receipt::ReceiptRepository;
use crate::repository::settings::SettingsRepository;
use crate::seed;

/// Interval between polls while another caller is initializing.
const INIT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Number of initialization attempts before an operation gives up.
const INIT_RETRY_ATTEMPTS: u32 = 3;

/// Fixed backoff between initialization attempts.
const INIT_RETRY_BACKOFF: Duration = Duration::from_millis(200);

// =============================================================================
// Configuration
// =============================================================================

/// Store configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = StoreConfig::new("/path/to/copra.db")
///     .max_connections(5);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// Maximum number of connections in the pool.
    /// Default: 5 (plenty for a single-station app)
    pub max_connections: u32,

    /// Minimum number of connections to keep alive.
    /// Default: 1
    pub min_connections: u32,

    /// Connection acquire timeout.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Idle timeout before closing a connection. `None` keeps connections
    /// alive indefinitely (required for in-memory stores, where dropping
    /// the last connection drops the data).
    pub idle_timeout: Option<Duration>,

    /// How long a caller waits for a concurrent in-flight initialization
    /// before failing with `Timeout`.
    /// Default: 5 seconds
    pub init_wait: Duration,
}

impl StoreConfig {
    /// Creates a new store configuration with the given database path.
    ///
    /// The file (and its parent directory) will be created if missing.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            database_path: path.into(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Some(Duration::from_secs(600)),
            init_wait: Duration::from_secs(5),
        }
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the connection acquire timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Creates an in-memory store configuration (for testing).
    ///
    /// Pinned to a single connection: every pooled connection to
    /// `:memory:` would otherwise see its own private database.
    pub fn in_memory() -> Self {
        StoreConfig {
            database_path: PathBuf::from(":memory:"),
            max_connections: 1,
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            idle_timeout: None,
            init_wait: Duration::from_secs(5),
        }
    }

    /// Returns the per-platform default location of the store file.
    ///
    /// - **Linux**: `~/.local/share/copra-pos/copra.db`
    /// - **macOS**: `~/Library/Application Support/ph.copra.copra-pos/copra.db`
    /// - **Windows**: `%APPDATA%\copra\copra-pos\data\copra.db`
    pub fn default_database_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("ph", "copra", "copra-pos")
            .map(|dirs| dirs.data_dir().join("copra.db"))
    }

    fn is_in_memory(&self) -> bool {
        self.database_path.as_os_str() == ":memory:"
    }
}

// =============================================================================
// Store
// =============================================================================

/// Current position in the lifecycle state machine.
enum InitState {
    Uninitialized,
    Initializing,
    Ready(SqlitePool),
}

struct StoreInner {
    config: StoreConfig,
    state: Mutex<InitState>,
}

/// Main store handle providing repository access.
///
/// Cloning is cheap (an `Arc` bump); all clones share the same lifecycle
/// state and pool.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

impl Store {
    /// Creates a new store handle. No I/O happens here; the database is
    /// opened lazily by the first operation (or an explicit
    /// [`initialize`](Store::initialize)).
    pub fn new(config: StoreConfig) -> Self {
        Store {
            inner: Arc::new(StoreInner {
                config,
                state: Mutex::new(InitState::Uninitialized),
            }),
        }
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Initializes the store: opens the pool, runs migrations, seeds
    /// default records.
    ///
    /// Idempotent. If another caller's initialization is in flight, this
    /// call waits for it (bounded poll) instead of starting a second one;
    /// exceeding the wait budget fails with [`DbError::Timeout`]. Any
    /// failure reverts the state so a later call can retry.
    pub async fn initialize(&self) -> DbResult<()> {
        let started = Instant::now();

        // Either observe Ready, claim the Initializing slot, or wait out
        // a concurrent initializer.
        loop {
            {
                let mut state = self.inner.state.lock().await;
                match &*state {
                    InitState::Ready(_) => return Ok(()),
                    InitState::Uninitialized => {
                        *state = InitState::Initializing;
                        break;
                    }
                    InitState::Initializing => {}
                }
            }

            if started.elapsed() >= self.inner.config.init_wait {
                return Err(DbError::Timeout {
                    waited_ms: started.elapsed().as_millis() as u64,
                });
            }

            tokio::time::sleep(INIT_POLL_INTERVAL).await;
        }

        // We own the Initializing slot now.
        match open_and_prepare(&self.inner.config).await {
            Ok(pool) => {
                *self.inner.state.lock().await = InitState::Ready(pool);
                info!(
                    path = %self.inner.config.database_path.display(),
                    "store initialized"
                );
                Ok(())
            }
            Err(err) => {
                *self.inner.state.lock().await = InitState::Uninitialized;
                warn!(error = %err, "store initialization failed");
                Err(err)
            }
        }
    }

    /// Closes the store and returns the state machine to `Uninitialized`.
    ///
    /// A later operation re-initializes transparently; for file-backed
    /// stores the data persists across close/reopen.
    pub async fn close(&self) {
        let mut state = self.inner.state.lock().await;
        if let InitState::Ready(pool) = &*state {
            pool.close().await;
            info!("store closed");
        }
        *state = InitState::Uninitialized;
    }

    /// Checks if the store is ready and responsive.
    pub async fn health_check(&self) -> bool {
        match self.current_pool().await {
            Some(pool) => sqlx::query("SELECT 1").execute(&pool).await.is_ok(),
            None => false,
        }
    }

    /// Returns the store's schema version (0 when not yet initialized).
    pub async fn schema_version(&self) -> DbResult<i64> {
        let pool = self.ensure_ready().await?;
        migrations::schema_version(&pool).await
    }

    // -------------------------------------------------------------------------
    // Repositories
    // -------------------------------------------------------------------------

    /// Returns the operator repository, initializing the store if needed.
    pub async fn operators(&self) -> DbResult<OperatorRepository> {
        Ok(OperatorRepository::new(self.ensure_ready().await?))
    }

    /// Returns the settings repository, initializing the store if needed.
    pub async fn settings(&self) -> DbResult<SettingsRepository> {
        Ok(SettingsRepository::new(self.ensure_ready().await?))
    }

    /// Returns the receipt repository, initializing the store if needed.
    pub async fn receipts(&self) -> DbResult<ReceiptRepository> {
        Ok(ReceiptRepository::new(self.ensure_ready().await?))
    }

    // -------------------------------------------------------------------------
    // Facade Operations
    // -------------------------------------------------------------------------
    // Thin delegations so callers interact with one handle. Each triggers
    // lazy initialization on a cold store.

    /// Verifies a username/password pair. See [`OperatorRepository::login`].
    pub async fn login(&self, username: &str, password: &str) -> DbResult<bool> {
        self.operators().await?.login(username, password).await
    }

    /// Registers a new operator. See [`OperatorRepository::register`].
    pub async fn register(&self, username: &str, password: &str) -> DbResult<()> {
        self.operators().await?.register(username, password).await
    }

    /// Returns all operator records.
    pub async fn list_operators(&self) -> DbResult<Vec<Operator>> {
        self.operators().await?.list().await
    }

    /// Returns the current operational defaults.
    pub async fn get_defaults(&self) -> DbResult<Defaults> {
        self.settings().await?.get_defaults().await
    }

    /// Saves both operational defaults atomically.
    pub async fn save_defaults(&self, unit_price: &str, transport_fee: &str) -> DbResult<()> {
        self.settings()
            .await?
            .save_defaults(unit_price, transport_fee)
            .await
    }

    /// Derives the next free receipt number.
    pub async fn next_receipt_number(&self) -> DbResult<String> {
        self.receipts().await?.next_receipt_number().await
    }

    /// Stores a finalized receipt. See [`ReceiptRepository::save`].
    pub async fn save_receipt(&self, draft: &ReceiptDraft) -> DbResult<()> {
        self.receipts().await?.save(draft).await
    }

    /// Returns all receipts, most recent first.
    pub async fn list_receipts(&self) -> DbResult<Vec<Receipt>> {
        self.receipts().await?.list().await
    }

    /// Deletes every operator, setting, and receipt, then re-runs seeding.
    ///
    /// One transaction: either the store is fully reset and reseeded, or
    /// nothing changed. Not reversible - callers confirm intent first.
    pub async fn reset_all(&self) -> DbResult<()> {
        let pool = self.ensure_ready().await?;
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM receipts").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM settings").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM operators").execute(&mut *tx).await?;

        seed::seed_defaults_tx(&mut tx).await?;

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        info!("store reset to seeded defaults");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    async fn current_pool(&self) -> Option<SqlitePool> {
        match &*self.inner.state.lock().await {
            InitState::Ready(pool) => Some(pool.clone()),
            _ => None,
        }
    }

    /// Lazy initialization gate used by every operation.
    ///
    /// Retries failed initializations with a fixed backoff; a bounded-wait
    /// timeout on a concurrent initializer is surfaced as-is rather than
    /// compounding the wait.
    async fn ensure_ready(&self) -> DbResult<SqlitePool> {
        if let Some(pool) = self.current_pool().await {
            return Ok(pool);
        }

        let mut last_error = String::new();

        for attempt in 1..=INIT_RETRY_ATTEMPTS {
            match self.initialize().await {
                Ok(()) => {
                    if let Some(pool) = self.current_pool().await {
                        return Ok(pool);
                    }
                    // Closed between initialize and here; treat as a
                    // failed attempt and go around again.
                    last_error = "store closed during initialization".to_string();
                }
                Err(err @ DbError::Timeout { .. }) => return Err(err),
                Err(err) => {
                    debug!(attempt, error = %err, "initialization attempt failed");
                    last_error = err.to_string();
                }
            }

            if attempt < INIT_RETRY_ATTEMPTS {
                tokio::time::sleep(INIT_RETRY_BACKOFF).await;
            }
        }

        Err(DbError::StorageUnavailable {
            attempts: INIT_RETRY_ATTEMPTS,
            last_error,
        })
    }
}

/// Opens the pool, runs migrations, and seeds default records.
///
/// Runs outside the state lock; the caller holds the `Initializing` slot.
async fn open_and_prepare(config: &StoreConfig) -> DbResult<SqlitePool> {
    let connect_options = if config.is_in_memory() {
        SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
    } else {
        if let Some(parent) = config.database_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;
            }
        }

        let connect_url = format!("sqlite://{}?mode=rwc", config.database_path.display());
        SqliteConnectOptions::from_str(&connect_url)
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
            // WAL mode: readers don't block the writer and vice versa
            .journal_mode(SqliteJournalMode::Wal)
    };

    let connect_options = connect_options
        // NORMAL synchronous: safe from corruption, may lose the last
        // transaction on power loss
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(true)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.connect_timeout)
        .idle_timeout(config.idle_timeout)
        .connect_with(connect_options)
        .await
        .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

    debug!(
        max_connections = config.max_connections,
        "store pool created"
    );

    migrations::run_migrations(&pool).await?;
    seed::seed_defaults(&pool).await?;

    Ok(pool)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use copra_core::settlement::{format_amount, settlement_total};
    use copra_core::DEFAULT_OPERATORS;

    fn draft(receipt_number: &str) -> ReceiptDraft {
        let (gross, deduction, price, fee) = (1000.0, 50.0, 8.5, 100.0);
        ReceiptDraft {
            receipt_number: receipt_number.to_string(),
            customer_name: "Juan Cruz".to_string(),
            address: "Barangay 4".to_string(),
            unit_price: price,
            gross_weight: gross,
            deduction_weight: deduction,
            transport_fee: fee,
            total: settlement_total(gross, deduction, price, fee),
        }
    }

    #[tokio::test]
    async fn test_initialize_idempotent() {
        let store = Store::new(StoreConfig::in_memory());

        store.initialize().await.unwrap();
        store.initialize().await.unwrap();

        assert!(store.health_check().await);
        assert_eq!(
            store.schema_version().await.unwrap(),
            crate::migrations::SCHEMA_VERSION
        );
    }

    #[tokio::test]
    async fn test_concurrent_initialize_single_winner() {
        let store = Store::new(StoreConfig::in_memory());

        let (a, b) = tokio::join!(store.initialize(), store.initialize());
        a.unwrap();
        b.unwrap();

        // Seeding ran exactly once despite two racing initializers.
        let operators = store.list_operators().await.unwrap();
        assert_eq!(operators.len(), DEFAULT_OPERATORS.len());
    }

    #[tokio::test]
    async fn test_lazy_init_via_operation() {
        let store = Store::new(StoreConfig::in_memory());

        // No explicit initialize(); the operation triggers it.
        assert!(store.login("admin", "admin123").await.unwrap());
    }

    #[tokio::test]
    async fn test_login_rejects_bad_credentials() {
        let store = Store::new(StoreConfig::in_memory());

        assert!(store.login("admin", "admin123").await.unwrap());
        assert!(!store.login("admin", "wrong").await.unwrap());
        assert!(!store.login("nobody", "admin123").await.unwrap());
    }

    #[tokio::test]
    async fn test_passwords_stored_hashed() {
        let store = Store::new(StoreConfig::in_memory());
        store.initialize().await.unwrap();

        for operator in store.list_operators().await.unwrap() {
            assert!(operator.password_hash.starts_with("$argon2"));
        }
    }

    #[tokio::test]
    async fn test_register_is_idempotent() {
        let store = Store::new(StoreConfig::in_memory());

        store.register("weigher", "scale123").await.unwrap();
        store.register("weigher", "other456").await.unwrap();

        let operators = store.list_operators().await.unwrap();
        let matching: Vec<_> = operators
            .iter()
            .filter(|o| o.username == "weigher")
            .collect();
        assert_eq!(matching.len(), 1);

        // The second call did not overwrite the password either.
        assert!(store.login("weigher", "scale123").await.unwrap());
        assert!(!store.login("weigher", "other456").await.unwrap());
    }

    #[tokio::test]
    async fn test_defaults_round_trip_and_last_write_wins() {
        let store = Store::new(StoreConfig::in_memory());

        // Seeded values first.
        let seeded = store.get_defaults().await.unwrap();
        assert_eq!(seeded.unit_price, "0");
        assert_eq!(seeded.transport_fee, "0");

        store.save_defaults("8.50", "50").await.unwrap();
        let defaults = store.get_defaults().await.unwrap();
        assert_eq!(defaults.unit_price, "8.50");
        assert_eq!(defaults.transport_fee, "50");

        store.save_defaults("9.25", "75").await.unwrap();
        let defaults = store.get_defaults().await.unwrap();
        assert_eq!(defaults.unit_price, "9.25");
        assert_eq!(defaults.transport_fee, "75");
    }

    #[tokio::test]
    async fn test_defaults_self_heal_when_rows_missing() {
        let store = Store::new(StoreConfig::in_memory());
        store.save_defaults("8.50", "50").await.unwrap();

        let pool = store.ensure_ready().await.unwrap();
        sqlx::query("DELETE FROM settings")
            .execute(&pool)
            .await
            .unwrap();

        let defaults = store.get_defaults().await.unwrap();
        assert_eq!(defaults.unit_price, "0");
        assert_eq!(defaults.transport_fee, "0");
    }

    #[tokio::test]
    async fn test_receipt_numbering_stable_until_save() {
        let store = Store::new(StoreConfig::in_memory());

        assert_eq!(store.next_receipt_number().await.unwrap(), "RCT-0001");
        assert_eq!(store.next_receipt_number().await.unwrap(), "RCT-0001");

        store.save_receipt(&draft("RCT-0001")).await.unwrap();

        assert_eq!(store.next_receipt_number().await.unwrap(), "RCT-0002");
    }

    #[tokio::test]
    async fn test_receipt_numbering_probes_past_gaps() {
        let store = Store::new(StoreConfig::in_memory());

        // Numbers consumed out of order: count=2 makes RCT-0003 the
        // candidate, which is taken, so probing lands on RCT-0004.
        store.save_receipt(&draft("RCT-0001")).await.unwrap();
        store.save_receipt(&draft("RCT-0003")).await.unwrap();

        assert_eq!(store.next_receipt_number().await.unwrap(), "RCT-0004");
    }

    #[tokio::test]
    async fn test_duplicate_receipt_save_is_noop() {
        let store = Store::new(StoreConfig::in_memory());

        let first = draft("RCT-0001");
        store.save_receipt(&first).await.unwrap();

        let mut resave = draft("RCT-0001");
        resave.customer_name = "Somebody Else".to_string();
        store.save_receipt(&resave).await.unwrap();

        let receipts = store.list_receipts().await.unwrap();
        assert_eq!(receipts.len(), 1);
        assert_eq!(receipts[0].customer_name, "Juan Cruz");
    }

    #[tokio::test]
    async fn test_receipts_listed_most_recent_first() {
        let store = Store::new(StoreConfig::in_memory());

        store.save_receipt(&draft("RCT-0001")).await.unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;
        store.save_receipt(&draft("RCT-0002")).await.unwrap();

        let receipts = store.list_receipts().await.unwrap();
        assert_eq!(receipts.len(), 2);
        assert_eq!(receipts[0].receipt_number, "RCT-0002");
        assert_eq!(receipts[1].receipt_number, "RCT-0001");
    }

    #[tokio::test]
    async fn test_stored_total_matches_settlement_formula() {
        let store = Store::new(StoreConfig::in_memory());

        store.save_receipt(&draft("RCT-0001")).await.unwrap();

        let receipts = store.list_receipts().await.unwrap();
        let stored = &receipts[0];
        let expected = settlement_total(
            stored.gross_weight,
            stored.deduction_weight,
            stored.unit_price,
            stored.transport_fee,
        );

        assert!((stored.total - expected).abs() < 1e-9);
        assert_eq!(format_amount(stored.total), "8175.00");
    }

    #[tokio::test]
    async fn test_reset_all_restores_seeded_state() {
        let store = Store::new(StoreConfig::in_memory());

        store.register("weigher", "scale123").await.unwrap();
        store.save_defaults("8.50", "50").await.unwrap();
        store.save_receipt(&draft("RCT-0001")).await.unwrap();

        store.reset_all().await.unwrap();

        let operators = store.list_operators().await.unwrap();
        assert_eq!(operators.len(), DEFAULT_OPERATORS.len());
        let usernames: Vec<_> = operators.iter().map(|o| o.username.as_str()).collect();
        for (username, _) in DEFAULT_OPERATORS.iter().copied() {
            assert!(usernames.contains(&username));
        }

        let defaults = store.get_defaults().await.unwrap();
        assert_eq!(defaults.unit_price, "0");
        assert_eq!(defaults.transport_fee, "0");

        assert!(store.list_receipts().await.unwrap().is_empty());
        assert_eq!(store.next_receipt_number().await.unwrap(), "RCT-0001");

        assert!(store.login("admin", "admin123").await.unwrap());
    }

    #[tokio::test]
    async fn test_unusable_path_surfaces_storage_unavailable() {
        // Parent of the store path is a regular file, so directory
        // creation fails on every attempt.
        let blocker = tempfile::NamedTempFile::new().unwrap();
        let bad_path = blocker.path().join("nested").join("copra.db");

        let store = Store::new(
            StoreConfig::new(bad_path).connect_timeout(Duration::from_secs(1)),
        );

        let err = store.login("admin", "admin123").await.unwrap_err();
        assert!(matches!(err, DbError::StorageUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_stuck_initializer_times_out() {
        let mut config = StoreConfig::in_memory();
        config.init_wait = Duration::from_millis(200);
        let store = Store::new(config);

        // Simulate another caller's initialization that never finishes.
        *store.inner.state.lock().await = InitState::Initializing;

        let err = store.initialize().await.unwrap_err();
        assert!(matches!(err, DbError::Timeout { .. }));
    }

    #[tokio::test]
    async fn test_file_backed_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("copra.db");

        {
            let store = Store::new(StoreConfig::new(&path));
            store.save_receipt(&draft("RCT-0001")).await.unwrap();
            store.close().await;
        }

        let reopened = Store::new(StoreConfig::new(&path));
        let receipts = reopened.list_receipts().await.unwrap();
        assert_eq!(receipts.len(), 1);
        assert_eq!(receipts[0].receipt_number, "RCT-0001");

        // Seeding did not run again on the non-empty store.
        let operators = reopened.list_operators().await.unwrap();
        assert_eq!(operators.len(), DEFAULT_OPERATORS.len());
    }

    #[tokio::test]
    async fn test_close_then_reuse_reinitializes() {
        let store = Store::new(StoreConfig::in_memory());
        store.initialize().await.unwrap();
        store.close().await;

        assert!(!store.health_check().await);

        // Next operation transparently re-initializes (fresh in-memory DB).
        assert!(store.login("admin", "admin123").await.unwrap());
    }
}
