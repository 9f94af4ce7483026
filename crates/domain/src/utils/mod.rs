//! Utility modules

pub mod filter;
