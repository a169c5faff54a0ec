use crate::error::{QdrantError, QdrantResult};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for a [`QdrantClient`](crate::QdrantClient).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the server, e.g. `http://localhost:6333`.
    pub url: String,
    /// Sent as the `api-key` header on every request.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Log request and response bodies at `info` level.
    #[serde(default)]
    pub log_requests: bool,
    /// Turn non-2xx responses into [`QdrantError::Api`].
    #[serde(default)]
    pub raise_on_error: bool,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_requests: false,
            raise_on_error: false,
        }
    }
}

/// Load client settings from `qdrant.*` in the working directory, an optional
/// explicit file, and `QDRANT__*` environment variables (later sources win).
pub fn load_config(path: Option<&Path>) -> QdrantResult<ClientConfig> {
    let mut builder = Config::builder().add_source(File::with_name("qdrant").required(false));

    if let Some(path) = path {
        builder = builder.add_source(File::from(path).required(true));
    }

    builder = builder.add_source(Environment::with_prefix("QDRANT").separator("__"));

    let config = builder
        .build()
        .map_err(|err| QdrantError::Config(err.to_string()))?;

    let parsed: ClientConfig = config
        .try_deserialize()
        .map_err(|err| QdrantError::Config(err.to_string()))?;

    if parsed.url.trim().is_empty() {
        return Err(QdrantError::Config("url must not be empty".to_string()));
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("client.toml");
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(
            file,
            "url = \"http://qdrant.internal:6333\"\napi_key = \"secret\"\nraise_on_error = true"
        )
        .expect("write config");

        let config = load_config(Some(&path)).expect("load config");
        assert_eq!(config.url, "http://qdrant.internal:6333");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(!config.log_requests);
        assert!(config.raise_on_error);
    }

    #[test]
    fn test_load_config_missing_explicit_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.toml");
        let err = load_config(Some(&path)).expect_err("missing file must fail");
        assert!(matches!(err, QdrantError::Config(_)));
    }

    #[test]
    fn test_new_uses_defaults() {
        let config = ClientConfig::new("http://localhost:6333");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.api_key, None);
        assert!(!config.raise_on_error);
    }
}
