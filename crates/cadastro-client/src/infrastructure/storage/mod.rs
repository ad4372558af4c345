//! Storage infrastructure: configuration file persistence.
//!
//! The `config` sub-module handles:
//!
//! - Reading the TOML configuration file from the platform-appropriate
//!   directory.
//! - Providing sensible defaults when the file does not exist yet (first
//!   run against a local json-server needs no file at all).
//! - Writing changes back to disk.
//!
//! Keeping file-format concerns here means nothing else in the application
//! knows or cares that the settings live in TOML.

pub mod config;
