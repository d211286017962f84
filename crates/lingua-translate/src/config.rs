use std::{env, fs, path::Path, time::Duration};

use serde::Deserialize;

use crate::error::TranslateError;

/// Default per-request timeout. Keeps a stalled service from pinning the
/// panel in the pending state forever.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// RON file consulted when no environment configuration is present.
pub const CONFIG_FILE: &str = "lingua.ron";

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Connection details for the external translation collaborator.
///
/// The service is opaque to this application: endpoint, the two credential
/// header names and their values are all injected here, never written into
/// code. Loaded from `LINGUA_*` environment variables or from a
/// [`CONFIG_FILE`] in the working directory, environment taking precedence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    pub endpoint: String,
    pub key_header: String,
    pub api_key: String,
    pub host_header: String,
    pub api_host: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ServiceConfig {
    /// Read the configuration from `LINGUA_*` environment variables.
    ///
    /// All five connection values are required; `LINGUA_TIMEOUT_SECS` is
    /// optional and falls back to [`DEFAULT_TIMEOUT_SECS`].
    pub fn from_env() -> Result<Self, TranslateError> {
        let required = |name: &str| {
            env::var(name)
                .ok()
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| {
                    TranslateError::Config(format!("environment variable {name} is not set"))
                })
        };

        let timeout_secs = match env::var("LINGUA_TIMEOUT_SECS") {
            Ok(raw) => raw.trim().parse().map_err(|_| {
                TranslateError::Config(format!("LINGUA_TIMEOUT_SECS is not a number: {raw}"))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            endpoint: required("LINGUA_ENDPOINT")?,
            key_header: required("LINGUA_KEY_HEADER")?,
            api_key: required("LINGUA_API_KEY")?,
            host_header: required("LINGUA_HOST_HEADER")?,
            api_host: required("LINGUA_API_HOST")?,
            timeout_secs,
        })
    }

    /// Parse the configuration from a RON file.
    pub fn from_ron_file(path: &Path) -> Result<Self, TranslateError> {
        let raw = fs::read_to_string(path)
            .map_err(|err| TranslateError::Config(format!("cannot read {}: {err}", path.display())))?;
        ron::from_str(&raw)
            .map_err(|err| TranslateError::Config(format!("cannot parse {}: {err}", path.display())))
    }

    /// Environment first, then [`CONFIG_FILE`] beside the working directory.
    pub fn load() -> Result<Self, TranslateError> {
        if env::var("LINGUA_ENDPOINT").is_ok() {
            return Self::from_env();
        }

        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            return Self::from_ron_file(path);
        }

        Err(TranslateError::Config(format!(
            "no LINGUA_* environment variables and no {CONFIG_FILE} file found"
        )))
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn ron_file_round_trips_and_defaults_the_timeout() {
        let path = env::temp_dir().join(format!("lingua-config-{}.ron", std::process::id()));
        {
            let mut file = fs::File::create(&path).expect("temp file");
            write!(
                file,
                r#"(
                    endpoint: "https://translate.example/v2",
                    key_header: "x-api-key",
                    api_key: "secret",
                    host_header: "x-api-host",
                    api_host: "translate.example",
                )"#
            )
            .expect("write config");
        }

        let config = ServiceConfig::from_ron_file(&path).expect("parse config");
        fs::remove_file(&path).ok();

        assert_eq!(config.endpoint, "https://translate.example/v2");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let missing = Path::new("/nonexistent/lingua.ron");
        assert!(matches!(
            ServiceConfig::from_ron_file(missing),
            Err(TranslateError::Config(_))
        ));
    }
}
