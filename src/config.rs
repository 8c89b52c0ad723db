//! Explicit configuration for the StormGlass provider client.

use std::time::Duration;

use crate::error::{ForecastError, Result};

pub const DEFAULT_API_URL: &str = "https://api.stormglass.io/v2";
pub const DEFAULT_SOURCE: &str = "noaa";

/// Decides which designated-source readings count as usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadingPolicy {
    /// Zero and NaN readings are treated as missing, so a calm-sea `0.0`
    /// drops the whole hour.
    #[default]
    Truthy,
    /// Any numeric reading is accepted.
    Present,
}

impl ReadingPolicy {
    pub fn accepts(self, value: f64) -> bool {
        match self {
            ReadingPolicy::Truthy => value != 0.0 && !value.is_nan(),
            ReadingPolicy::Present => true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StormGlassConfig {
    /// Base URL without trailing `/weather/point`.
    pub api_url: String,
    /// Sent verbatim in the `Authorization` header.
    pub api_token: String,
    /// Designated source read from every channel.
    pub source: String,
    pub reading_policy: ReadingPolicy,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl StormGlassConfig {
    pub fn new(api_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_token: api_token.into(),
            source: DEFAULT_SOURCE.to_string(),
            reading_policy: ReadingPolicy::default(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }

    /// Loads the config from the process environment, reading a `.env` file
    /// first if one exists.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    ///
    /// | Variable                          | Required | Default                          |
    /// |-----------------------------------|----------|----------------------------------|
    /// | `STORMGLASS_API_URL`              | no       | `https://api.stormglass.io/v2`   |
    /// | `STORMGLASS_API_TOKEN`            | yes      |                                  |
    /// | `STORMGLASS_SOURCE`               | no       | `noaa`                           |
    /// | `STORMGLASS_ACCEPT_ZERO_READINGS` | no       | `false`                          |
    pub fn from_vars<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = get("STORMGLASS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_token = get("STORMGLASS_API_TOKEN")
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                ForecastError::Configuration("STORMGLASS_API_TOKEN must be set".to_string())
            })?;

        let mut config = Self::new(api_url, api_token);

        if let Some(source) = get("STORMGLASS_SOURCE").filter(|s| !s.is_empty()) {
            config.source = source;
        }

        if let Some(flag) = get("STORMGLASS_ACCEPT_ZERO_READINGS") {
            let accept = flag.parse::<bool>().map_err(|_| {
                ForecastError::Configuration(format!(
                    "STORMGLASS_ACCEPT_ZERO_READINGS must be 'true' or 'false', got '{flag}'"
                ))
            })?;
            if accept {
                config.reading_policy = ReadingPolicy::Present;
            }
        }

        Ok(config)
    }
}
