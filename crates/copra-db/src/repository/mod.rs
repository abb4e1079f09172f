//! # Repository Module
//!
//! Repository implementations for the three record collections.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  Store facade                                                          │
//! │       │                                                                 │
//! │       │  store.receipts().await?.next_receipt_number()                  │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  ReceiptRepository                                                     │
//! │  ├── next_receipt_number(&self)                                        │
//! │  ├── save(&self, draft)                                                │
//! │  └── list(&self)                                                       │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  A repository handed out by the Store is always backed by a Ready      │
//! │  pool - lazy initialization happens before construction.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`operator::OperatorRepository`] - login, registration, listing
//! - [`settings::SettingsRepository`] - operational defaults
//! - [`receipt::ReceiptRepository`] - receipt ledger and numbering

pub mod operator;
pub mod receipt;
pub mod settings;
