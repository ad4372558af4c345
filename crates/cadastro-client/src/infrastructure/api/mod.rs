//! `CustomerApi` implementations.
//!
//! The trait itself lives in the application layer next to the store; this
//! module provides the two concrete adapters:
//!
//! - [`http::HttpCustomerApi`] – the real thing, reqwest against the
//!   configured base URL.
//! - [`mock::MockCustomerApi`] – an in-memory backend that records every
//!   call so tests can assert exactly which requests a flow issued.

pub mod http;
pub mod mock;

pub use http::HttpCustomerApi;
pub use mock::MockCustomerApi;
