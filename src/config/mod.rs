use crate::numeric::CurrencyFormat;
use crate::slots::Limits;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_ERROR_DISPLAY_MS: u64 = 4000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid limits: minimum {min} is above maximum {max}")]
    InvalidLimits { min: usize, max: usize },
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub limits: Limits,

    #[serde(default)]
    pub currency: CurrencyFormat,

    // How long an error banner stays up before hiding itself
    #[serde(default = "default_error_display_ms")]
    pub error_display_ms: u64,

    #[serde(default)]
    pub color: bool,
}

fn default_error_display_ms() -> u64 {
    DEFAULT_ERROR_DISPLAY_MS
}

impl Default for Config {
    fn default() -> Self {
        Self::empty()
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.check()?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self {
            limits: Limits::default(),
            currency: CurrencyFormat::default(),
            error_display_ms: DEFAULT_ERROR_DISPLAY_MS,
            color: false,
        }
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.limits.min_products > self.limits.max_products {
            return Err(ConfigError::InvalidLimits {
                min: self.limits.min_products,
                max: self.limits.max_products,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_defaults() {
        let config = Config::load_from_str("").unwrap();
        assert_eq!(config, Config::empty());
        assert_eq!(config.limits.min_products, 2);
        assert_eq!(config.limits.max_products, 5);
        assert_eq!(config.error_display_ms, 4000);
        assert_eq!(config.currency.symbol, "$");
    }

    #[test]
    fn test_partial_config() {
        let config = Config::load_from_str(
            r#"
error_display_ms = 2500
color = true

[limits]
max_products = 4

[currency]
symbol = "MX$"
"#,
        )
        .unwrap();

        assert_eq!(config.error_display_ms, 2500);
        assert!(config.color);
        assert_eq!(config.limits.min_products, 2);
        assert_eq!(config.limits.max_products, 4);
        assert_eq!(config.currency.symbol, "MX$");
        assert_eq!(config.currency.decimals, 2);
    }

    #[test]
    fn test_rejects_inverted_limits() {
        let err = Config::load_from_str("[limits]\nmin_products = 4\nmax_products = 3\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLimits { min: 4, max: 3 }));
    }

    #[test]
    fn test_rejects_bad_toml() {
        assert!(matches!(
            Config::load_from_str("limits = 3"),
            Err(ConfigError::Parse(_))
        ));
    }
}
