use std::env;
use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_PORT: u16 = 8081;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
}

/// Relay settings, read once from the process environment at startup.
#[derive(Clone)]
pub struct RelayConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub port: u16,
    pub frontend_dir: String,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let frontend_dir = non_empty("FRONTEND_DIR").unwrap_or_else(|| {
            match lookup("CARGO_MANIFEST_DIR") {
                Some(manifest_dir) => format!("{}/../frontend/dist", manifest_dir),
                None => "/usr/src/app/frontend/dist".to_string(),
            }
        });

        Ok(Self {
            api_key: non_empty("OPENAI_API_KEY"),
            model: non_empty("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            endpoint: non_empty("OPENAI_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            port,
            frontend_dir,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = RelayConfig::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.bind_address(), "0.0.0.0:8081");
        assert_eq!(config.frontend_dir, "/usr/src/app/frontend/dist");
    }

    #[test]
    fn empty_credential_counts_as_missing() {
        let config = RelayConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "  ")])).unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn overrides_are_read() {
        let config = RelayConfig::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", "gpt-4o"),
            ("OPENAI_URL", "http://localhost:9000/v1/chat/completions"),
            ("PORT", "9090"),
            ("CARGO_MANIFEST_DIR", "/src/backend"),
        ]))
        .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.endpoint, "http://localhost:9000/v1/chat/completions");
        assert_eq!(config.port, 9090);
        assert_eq!(config.frontend_dir, "/src/backend/../frontend/dist");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let result = RelayConfig::from_lookup(lookup_from(&[("PORT", "eighty")]));
        assert!(matches!(result, Err(ConfigError::InvalidPort(raw)) if raw == "eighty"));
    }
}
