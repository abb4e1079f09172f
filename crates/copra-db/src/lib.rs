//! # copra-db: Access Layer for Copra POS
//!
//! This crate is the single entry point for everything persisted by the
//! application: operator credentials, operational defaults, and the receipt
//! ledger. It wraps SQLite via sqlx and owns initialization, schema
//! migration, and first-run seeding.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Copra POS Data Flow                              │
//! │                                                                         │
//! │  UI Shell (login form, transaction form, settings form)                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     copra-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │     Store     │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │  (store.rs)   │    │ (operator.rs) │    │  + Seeding   │  │   │
//! │  │   │               │    │ (settings.rs) │    │              │  │   │
//! │  │   │ lazy init     │◄───│ (receipt.rs)  │    │ user_version │  │   │
//! │  │   │ state machine │    │               │    │ steps        │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   <platform data dir>/copra-pos/copra.db                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Store handle, lifecycle state machine, lazy initialization
//! - [`migrations`] - Versioned schema migrations and the backfill pass
//! - [`seed`] - First-run default records
//! - [`error`] - Access layer error types
//! - [`repository`] - Repository implementations (operator, settings, receipt)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use copra_db::{Store, StoreConfig};
//!
//! // Construct the handle; nothing is opened yet.
//! let store = Store::new(StoreConfig::new("path/to/copra.db"));
//!
//! // Any operation initializes the store on first use.
//! if store.login("admin", "admin123").await? {
//!     let defaults = store.get_defaults().await?;
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod repository;
pub mod seed;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use store::{Store, StoreConfig};

// Repository re-exports for convenience
pub use repository::operator::OperatorRepository;
pub use repository::receipt::ReceiptRepository;
pub use repository::settings::SettingsRepository;
