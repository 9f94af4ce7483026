//! # KCDB Domain
//!
//! Domain types and models for the KCDB client.
//!
//! This crate contains:
//! - Reference data entities (countries, analytes, branches, ...)
//! - Search criteria builders and typed search results
//! - Error types and Result definitions
//! - Client configuration
//! - Client-side filtering of reference data
//!
//! ## Architecture
//! - No dependencies on other KCDB crates
//! - No I/O; only external dependencies for serialization and matching
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::filter::{filter, filter_pattern, find};
