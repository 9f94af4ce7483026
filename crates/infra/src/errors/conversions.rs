//! Conversions from external infrastructure errors into domain errors.

use kcdb_domain::KcdbError;
use reqwest::Error as HttpError;
use url::ParseError as UrlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub KcdbError);

impl From<InfraError> for KcdbError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<KcdbError> for InfraError {
    fn from(value: KcdbError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoKcdbError {
    fn into_kcdb(self) -> KcdbError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → KcdbError */
/* -------------------------------------------------------------------------- */

impl IntoKcdbError for HttpError {
    fn into_kcdb(self) -> KcdbError {
        if self.is_timeout() {
            return KcdbError::Connectivity("No reply from KCDB server".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return KcdbError::Connectivity(format!("Cannot connect to KCDB server: {self}"));
        }

        if self.is_builder() {
            return KcdbError::Usage(format!("Cannot build request: {self}"));
        }

        KcdbError::Connectivity(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_kcdb())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → KcdbError */
/* -------------------------------------------------------------------------- */

impl IntoKcdbError for UrlError {
    fn into_kcdb(self) -> KcdbError {
        KcdbError::Config(format!("invalid KCDB URL: {self}"))
    }
}

impl From<UrlError> for InfraError {
    fn from(value: UrlError) -> Self {
        InfraError(value.into_kcdb())
    }
}

/* -------------------------------------------------------------------------- */
/* config file errors → KcdbError */
/* -------------------------------------------------------------------------- */

impl IntoKcdbError for toml::de::Error {
    fn into_kcdb(self) -> KcdbError {
        KcdbError::Config(format!("Invalid TOML format: {self}"))
    }
}

impl From<toml::de::Error> for InfraError {
    fn from(value: toml::de::Error) -> Self {
        InfraError(value.into_kcdb())
    }
}

impl IntoKcdbError for serde_json::Error {
    fn into_kcdb(self) -> KcdbError {
        KcdbError::Config(format!("Invalid JSON format: {self}"))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(value.into_kcdb())
    }
}

impl IntoKcdbError for std::io::Error {
    fn into_kcdb(self) -> KcdbError {
        KcdbError::Config(format!("Failed to read config file: {self}"))
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_kcdb())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
