//! # cadastro-core
//!
//! Shared library for Cadastro containing the customer domain entities and
//! the pure validation/formatting rules.
//!
//! This crate is used by the client application and by its tests.  It has
//! zero dependencies on the network, the file system, or any async runtime.
//!
//! # Architecture overview (for beginners)
//!
//! Cadastro is a small customer-registration application: a create form, a
//! customer list, and an inline edit dialog, all backed by a REST `users`
//! resource.  This crate is the innermost layer.  It defines:
//!
//! - **`domain`** – The `Customer` entity as it exists on the server, plus
//!   the draft/update shapes the views submit.
//!
//! - **`validation`** – The pure rules applied before anything touches the
//!   network: the Brazilian mobile phone mask and length rule, the email
//!   syntax check, the letters-only name rule, and the best-effort
//!   duplicate-email scan over the loaded list.

// Rust will look for each module in a subdirectory with the same name
// (e.g., src/domain/mod.rs).
pub mod domain;
pub mod validation;

// Re-export the most-used items at the crate root so callers can write
// `cadastro_core::Customer` instead of `cadastro_core::domain::customer::Customer`.
pub use domain::customer::{Customer, CustomerDraft, CustomerUpdate};
pub use validation::email::{email_exists, is_valid_email};
pub use validation::is_valid_name;
pub use validation::phone::{format_phone_number, is_valid_phone, phone_digits};
