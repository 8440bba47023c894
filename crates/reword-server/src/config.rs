//! Server configuration: environment variables with CLI overrides.

use reword_core::errors::{Result, RewordError};

/// Configuration for the reword server.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host to bind (default `"127.0.0.1"`).
    pub host: String,
    /// Port to bind (default `8787`).
    pub port: u16,
    /// Produce the long length class for every plan tier.
    pub unlock_all_lengths: bool,
    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8787,
            unlock_all_lengths: false,
            max_body_bytes: 256 * 1024,
            request_timeout_secs: 10,
        }
    }
}

impl ServerConfig {
    /// Load configuration from `REWORD_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(host) = lookup("REWORD_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("REWORD_PORT") {
            config.port = port
                .parse()
                .map_err(|_| RewordError::Config(format!("invalid REWORD_PORT: {port}")))?;
        }
        if let Some(flag) = lookup("REWORD_UNLOCK_ALL_LENGTHS") {
            config.unlock_all_lengths = parse_bool(&flag)
                .ok_or_else(|| {
                    RewordError::Config(format!("invalid REWORD_UNLOCK_ALL_LENGTHS: {flag}"))
                })?;
        }
        Ok(config)
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        move |key| map.get(key).map(|v| (*v).to_owned())
    }

    #[test]
    fn defaults_without_env() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8787);
        assert!(!config.unlock_all_lengths);
    }

    #[test]
    fn env_overrides_apply() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("REWORD_HOST", "0.0.0.0"),
            ("REWORD_PORT", "9000"),
            ("REWORD_UNLOCK_ALL_LENGTHS", "true"),
        ]))
        .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert!(config.unlock_all_lengths);
    }

    #[test]
    fn invalid_port_is_a_config_error() {
        let err = ServerConfig::from_lookup(lookup(&[("REWORD_PORT", "not-a-port")]))
            .unwrap_err();
        assert!(err.to_string().contains("REWORD_PORT"));
    }

    #[test]
    fn invalid_flag_is_a_config_error() {
        let err =
            ServerConfig::from_lookup(lookup(&[("REWORD_UNLOCK_ALL_LENGTHS", "maybe")]))
                .unwrap_err();
        assert!(err.to_string().contains("REWORD_UNLOCK_ALL_LENGTHS"));
    }

    #[test]
    fn bool_parsing_accepts_common_spellings() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("on"), None);
    }
}
