//! Domain entities for Cadastro.
//!
//! This module contains pure data types with no infrastructure dependencies.
//! Code in outer layers (the store, the HTTP client, the UI bridge) depends
//! on these types; they depend on nothing but `serde`.

/// Customer entity and the shapes the views submit.
///
/// See [`customer::Customer`] for the main type.
pub mod customer;
