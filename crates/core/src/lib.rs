//! # KCDB Core
//!
//! Ports and pure orchestration - no infrastructure dependencies.
//!
//! This crate contains:
//! - The transport port implemented by the HTTP adapter
//! - The paged-search port implemented by every domain facade
//! - Pagination helpers built on that port
//!
//! ## Architecture Principles
//! - Only depends on `kcdb-domain`
//! - No HTTP or file-system code
//! - All external dependencies via traits

pub mod pagination;
pub mod transport_ports;

// Re-export specific items to avoid ambiguity
pub use pagination::{collect_all, pages, PagedSearch};
pub use transport_ports::{HttpMethod, QueryParams, QueryValue, Transport};
