//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `KCDB_BASE_URL` is unset, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. With no file anywhere, uses the built-in defaults
//!
//! ## Environment Variables
//! - `KCDB_BASE_URL`: API base URL (required for environment loading)
//! - `KCDB_TIMEOUT_SECS`: Request timeout; `none` or a negative value disables it
//! - `KCDB_USER_AGENT`: User-Agent header
//! - `KCDB_MAX_PAGE_SIZE`: Largest page size a search may request
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./kcdb.json` or `./kcdb.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. The same names in the parent and grandparent directories
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use kcdb_domain::{ClientConfig, KcdbError, Result};
use url::Url;

use crate::errors::InfraError;

const CONFIG_NAMES: [&str; 4] = ["kcdb.json", "kcdb.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If `KCDB_BASE_URL`
/// is missing, falls back to a config file, and finally to defaults.
///
/// # Errors
/// Returns `KcdbError::Config` if a source was found but holds invalid
/// values.
pub fn load() -> Result<ClientConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) if std::env::var_os("KCDB_BASE_URL").is_some() => Err(e),
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            match probe_config_paths() {
                Some(path) => load_from_file(Some(path)),
                None => {
                    tracing::debug!("No config file found, using defaults");
                    Ok(ClientConfig::default())
                }
            }
        }
    }
}

/// Load configuration from environment variables
///
/// `KCDB_BASE_URL` must be present; the other variables override the
/// defaults when set.
///
/// # Errors
/// Returns `KcdbError::Config` if the base URL is missing or any variable
/// has an invalid value.
pub fn load_from_env() -> Result<ClientConfig> {
    let mut config = ClientConfig { base_url: env_var("KCDB_BASE_URL")?, ..Default::default() };

    if let Ok(raw) = std::env::var("KCDB_TIMEOUT_SECS") {
        config.timeout_secs = parse_timeout(&raw)?;
    }
    if let Ok(agent) = std::env::var("KCDB_USER_AGENT") {
        config.user_agent = agent;
    }
    if let Ok(raw) = std::env::var("KCDB_MAX_PAGE_SIZE") {
        config.max_page_size = raw.trim().parse::<u32>().map_err(|e| {
            KcdbError::Config(format!("Invalid max page size {raw:?}: {e}"))
        })?;
    }

    finish(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `KcdbError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(KcdbError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            KcdbError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path).map_err(InfraError::from)?;

    finish(parse_config(&contents, &config_path)?)
}

/// Parse configuration from string content, by file extension.
fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => Ok(toml::from_str(contents).map_err(InfraError::from)?),
        "json" => Ok(serde_json::from_str(contents).map_err(InfraError::from)?),
        _ => Err(KcdbError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.extend([exe_dir.to_path_buf(), exe_dir.join("..")]);
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Validate a freshly loaded configuration.
fn finish(config: ClientConfig) -> Result<ClientConfig> {
    config.validate()?;
    Url::parse(&config.base_url).map_err(InfraError::from)?;
    Ok(config)
}

fn parse_timeout(raw: &str) -> Result<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("none") || trimmed.is_empty() {
        return Ok(None);
    }
    let secs = trimmed
        .parse::<f64>()
        .map_err(|e| KcdbError::Config(format!("Invalid timeout {raw:?}: {e}")))?;
    Ok((secs >= 0.0).then_some(secs))
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| KcdbError::Config(format!("Missing required environment variable: {key}")))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const VARS: [&str; 4] =
        ["KCDB_BASE_URL", "KCDB_TIMEOUT_SECS", "KCDB_USER_AGENT", "KCDB_MAX_PAGE_SIZE"];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn timeout_parsing() {
        assert_eq!(parse_timeout("12.5").unwrap(), Some(12.5));
        assert_eq!(parse_timeout("none").unwrap(), None);
        assert_eq!(parse_timeout("-1").unwrap(), None);
        assert!(parse_timeout("soon").is_err());
    }

    #[test]
    fn env_overrides_defaults() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("KCDB_BASE_URL", "http://localhost:8080/api/kcdb");
        std::env::set_var("KCDB_TIMEOUT_SECS", "none");
        std::env::set_var("KCDB_MAX_PAGE_SIZE", "500");

        let config = load_from_env().unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/api/kcdb");
        assert_eq!(config.timeout(), None);
        assert_eq!(config.max_page_size, 500);
        assert!(config.user_agent.starts_with("kcdb-client/"));

        clear_env();
    }

    #[test]
    fn env_requires_base_url() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, KcdbError::Config(_)));
    }

    #[test]
    fn env_rejects_out_of_range_page_size() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("KCDB_BASE_URL", "https://www.bipm.org/api/kcdb");
        std::env::set_var("KCDB_MAX_PAGE_SIZE", "20000");

        let err = load_from_env().unwrap_err();
        assert!(err.to_string().contains("max_page_size"));

        clear_env();
    }

    #[test]
    fn env_rejects_unrepresentable_timeout() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("KCDB_BASE_URL", "https://www.bipm.org/api/kcdb");
        std::env::set_var("KCDB_TIMEOUT_SECS", "1e300");

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, KcdbError::Config(_)));
        assert!(err.to_string().contains("timeout_secs"));

        clear_env();
    }

    #[test]
    fn parse_config_by_extension() {
        let json = parse_config(r#"{ "max_page_size": 250 }"#, Path::new("kcdb.json")).unwrap();
        assert_eq!(json.max_page_size, 250);

        let toml = parse_config("timeout_secs = 5.0\n", Path::new("kcdb.toml")).unwrap();
        assert_eq!(toml.timeout_secs, Some(5.0));

        assert!(parse_config("x: 1", Path::new("kcdb.yaml")).is_err());
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = load_from_file(Some(PathBuf::from("/nonexistent/kcdb.json"))).unwrap_err();
        assert!(matches!(err, KcdbError::Config(_)));
    }
}
