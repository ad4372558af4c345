//! cadastro-client library crate.
//!
//! The client half of Cadastro: everything between the web view and the REST
//! `users` resource.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! Web view (JSON over the command bridge)
//!         ↕
//! [cadastro-client]
//!   ├── application/      CustomerStore: the shared state the views read,
//!   │                     the CRUD intents they dispatch, and the one-shot
//!   │                     success notification queue
//!   └── infrastructure/
//!         ├── api/        CustomerApi implementations: reqwest HTTP client
//!         │               and an in-memory recording mock for tests
//!         ├── ui_bridge/  Commands + DTOs serving the create form, the
//!         │               customer list, and the edit dialog
//!         └── storage/    TOML configuration persistence
//! ```
//!
//! # Layer rules
//!
//! - `application` depends on `cadastro-core` only; the REST backend is an
//!   injected [`application::customer_store::CustomerApi`] trait object.
//! - `infrastructure` depends on the application layer plus `reqwest`,
//!   `toml`, and the file system.
//!
//! Data flow: views read derived state through `ui_bridge` commands and
//! dispatch intents (submit, delete, update) into the store; the store
//! validates, calls the API, and on success mutates the authoritative list,
//! which every subsequent state snapshot reflects.

/// Application layer: the shared customer store and its notification queue.
pub mod application;

/// Infrastructure layer: HTTP API client, UI command bridge, and config storage.
pub mod infrastructure;
