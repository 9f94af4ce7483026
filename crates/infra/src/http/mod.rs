//! HTTP transport for the KCDB REST API

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
