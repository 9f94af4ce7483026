//! # KCDB Infrastructure
//!
//! Infrastructure implementations of the core ports.
//!
//! This crate contains:
//! - The reqwest-backed HTTP transport
//! - Schema mapping from JSON responses to domain types
//! - The domain facades (Chemistry and Biology, General Physics, Ionizing
//!   Radiation)
//! - Configuration loading from environment variables and files
//!
//! ## Architecture
//! - Implements traits defined in `kcdb-core`
//! - Depends on `kcdb-domain` and `kcdb-core`
//! - Contains all "impure" code (network and file I/O)

pub mod config;
pub mod errors;
pub mod facades;
pub mod http;
pub mod schema;

// Re-export commonly used items
pub use errors::InfraError;
pub use facades::*;
pub use http::*;
