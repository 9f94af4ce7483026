//! Client constants
//!
//! Centralized location for the values shared by every facade.

/// Base URL of the KCDB REST API.
pub const BASE_URL: &str = "https://www.bipm.org/api/kcdb";

/// Maximum number of elements the server returns in a single page.
pub const MAX_PAGE_SIZE: u32 = 10_000;

pub const DEFAULT_PAGE_SIZE: u32 = 100;
pub const DEFAULT_TIMEOUT_SECS: f64 = 30.0;

pub const USER_AGENT: &str = concat!("kcdb-client/", env!("CARGO_PKG_VERSION"));

// Domain identifiers
pub const CHEMISTRY_BIOLOGY_CODE: &str = "CHEM-BIO";
pub const CHEMISTRY_BIOLOGY_NAME: &str = "Chemistry and Biology";
pub const GENERAL_PHYSICS_CODE: &str = "PHYSICS";
pub const GENERAL_PHYSICS_NAME: &str = "General physics";
pub const IONIZING_RADIATION_CODE: &str = "RADIATION";
pub const IONIZING_RADIATION_NAME: &str = "Ionizing radiation";

// Default metrology areas used by searches
pub const CHEMISTRY_BIOLOGY_AREA: &str = "QM";
pub const IONIZING_RADIATION_AREA: &str = "RI";
