//! Infrastructure layer: everything that touches the outside world.
//!
//! - **`api`** – `CustomerApi` implementations: the reqwest HTTP client that
//!   talks to the real backend, and the in-memory mock that tests drive.
//! - **`ui_bridge`** – the command surface the web view invokes, with its
//!   serializable DTOs and per-field form validation.
//! - **`storage`** – TOML configuration persistence.

pub mod api;
pub mod storage;
pub mod ui_bridge;
