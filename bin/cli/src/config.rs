//! Host configuration.
//!
//! Loaded via the `config` crate from an optional `data-form.toml` in the
//! working directory, overridden by `DATA_FORM_*` environment variables.

use data_form_integration::{Credentials, DEFAULT_BASE_URL, HttpBackendConfig};
use data_form_widget::RecordLayout;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Base name of the optional configuration file.
pub const CONFIG_FILE: &str = "data-form";

/// Configuration supplied by the host to one widget.
#[derive(Debug, Deserialize)]
pub struct CliConfig {
    /// Backend base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Integration display name, e.g. `HubSpot`.
    pub integration: String,

    /// Credentials obtained by the external auth flow.
    pub credentials: Credentials,

    /// Which record fields are shown.
    #[serde(default)]
    pub layout: RecordLayout,

    /// Request timeout in seconds. Unset keeps the transport default.
    #[serde(default)]
    pub request_timeout_seconds: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl CliConfig {
    /// Loads configuration from the optional file and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(
                config::Environment::with_prefix("DATA_FORM")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// Loads configuration from a single file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or required
    /// configuration is missing or invalid.
    pub fn from_file(path: &Path) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from(path))
            .build()?
            .try_deserialize()
    }

    /// Returns the HTTP backend configuration.
    #[must_use]
    pub fn backend_config(&self) -> HttpBackendConfig {
        let config = HttpBackendConfig::new(self.base_url.clone());
        match self.request_timeout_seconds {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn defaults_fill_optional_fields() {
        let file = write_config(
            r#"
            integration = "HubSpot"
            credentials = "pat-na1-abc"
            "#,
        );

        let config = CliConfig::from_file(file.path()).expect("load config");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.integration, "HubSpot");
        assert_eq!(config.credentials.expose(), "pat-na1-abc");
        assert_eq!(config.layout, RecordLayout::Compact);
        assert!(config.backend_config().timeout.is_none());
    }

    #[test]
    fn explicit_values_are_used() {
        let file = write_config(
            r#"
            base_url = "http://backend.internal:9000"
            integration = "Notion"
            credentials = '{"access_token": "x"}'
            layout = "detailed"
            request_timeout_seconds = 30
            "#,
        );

        let config = CliConfig::from_file(file.path()).expect("load config");
        let backend = config.backend_config();

        assert_eq!(backend.base_url, "http://backend.internal:9000");
        assert_eq!(backend.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.layout, RecordLayout::Detailed);
        assert_eq!(config.credentials.expose(), r#"{"access_token": "x"}"#);
    }

    #[test]
    fn missing_credentials_is_an_error() {
        let file = write_config(r#"integration = "Airtable""#);
        assert!(CliConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn environment_variables_are_read() {
        const VARS: [(&str, &str); 4] = [
            ("DATA_FORM_INTEGRATION", "HubSpot"),
            ("DATA_FORM_CREDENTIALS", "pat-from-env"),
            ("DATA_FORM_LAYOUT", "detailed"),
            ("DATA_FORM_REQUEST_TIMEOUT_SECONDS", "30"),
        ];
        // Only this test touches DATA_FORM_* variables.
        for (name, value) in VARS {
            unsafe { std::env::set_var(name, value) };
        }

        let loaded = CliConfig::from_env();

        for (name, _) in VARS {
            unsafe { std::env::remove_var(name) };
        }
        let config = loaded.expect("load config from env");
        assert_eq!(config.integration, "HubSpot");
        assert_eq!(config.credentials.expose(), "pat-from-env");
        assert_eq!(config.layout, RecordLayout::Detailed);
        assert_eq!(config.request_timeout_seconds, Some(30));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(
            config.backend_config().timeout,
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn debug_output_hides_credentials() {
        let file = write_config(
            r#"
            integration = "HubSpot"
            credentials = "very-secret"
            "#,
        );
        let config = CliConfig::from_file(file.path()).expect("load config");
        assert!(!format!("{config:?}").contains("very-secret"));
    }
}
