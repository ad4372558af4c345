//! Application layer: the shared state store the views sit on top of.
//!
//! # What lives here?
//!
//! - **`customer_store`** – `CustomerStore`, the single owner of the
//!   authoritative in-memory customer list and the transient UI state
//!   (phone input buffer, error flags, in-flight flags).  It performs the
//!   submit-time validation the views cannot (duplicate email against the
//!   loaded list) and drives the injected `CustomerApi`.
//!
//! - **`notifications`** – the typed one-shot success events (`created`,
//!   `deleted`, `updated`) and the queue that delivers each of them to a
//!   consuming view exactly once.

pub mod customer_store;
pub mod notifications;
