use async_trait::async_trait;
use reqwest::{Method, Request, Url};
use tracing::debug;

use super::types::{Channel, ForecastResponse, normalize_points};
use crate::config::StormGlassConfig;
use crate::error::{ForecastError, Result};
use crate::fetch::{ApiKey, BasicClient, HttpClient};
use crate::services::{NormalizedPoint, PointSource};

/// Point-forecast client for the StormGlass marine API.
///
/// Issues exactly one `GET {api_url}/weather/point` per call, no retries, no
/// caching.
pub struct StormGlass<C> {
    config: StormGlassConfig,
    client: ApiKey<C>,
}

impl StormGlass<BasicClient> {
    /// Builds a client over a plain `reqwest` transport using the configured
    /// timeouts.
    pub fn from_config(config: StormGlassConfig) -> Result<Self> {
        let transport = BasicClient::new(config.timeout, config.connect_timeout)
            .map_err(|e| ForecastError::Configuration(e.to_string()))?;
        Self::with_client(config, transport)
    }
}

impl<C: HttpClient> StormGlass<C> {
    /// Wraps `transport` so every request carries the configured token in
    /// `Authorization`.
    pub fn with_client(config: StormGlassConfig, transport: C) -> Result<Self> {
        let client = ApiKey::authorization(transport, &config.api_token)?;
        Ok(Self { config, client })
    }

    fn point_url(&self, lat: f64, lng: f64) -> Result<Url> {
        let base = self.config.api_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/weather/point"))
            .map_err(|e| ForecastError::ProviderRequest(format!("invalid url '{base}': {e}")))?;

        url.query_pairs_mut()
            .append_pair("lat", &lat.to_string())
            .append_pair("lng", &lng.to_string())
            .append_pair("params", &Channel::params())
            .append_pair("source", &self.config.source);

        Ok(url)
    }
}

/// Re-serializes an error body as compact JSON, quoting it when it is not
/// JSON at all.
fn serialize_error_body(text: String) -> String {
    serde_json::from_str::<serde_json::Value>(&text)
        .unwrap_or(serde_json::Value::String(text))
        .to_string()
}

#[async_trait]
impl<C: HttpClient> PointSource for StormGlass<C> {
    #[tracing::instrument(skip(self), fields(source = %self.config.source))]
    async fn fetch_points(&self, lat: f64, lng: f64) -> Result<Vec<NormalizedPoint>> {
        let url = self.point_url(lat, lng)?;
        let response = self.client.execute(Request::new(Method::GET, url)).await?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!(error = %e, %status, "Failed to read provider error body");
                    String::new()
                }
            };
            return Err(ForecastError::ProviderResponse {
                status: status.as_u16(),
                body: serialize_error_body(body),
            });
        }

        let body = response.bytes().await?;
        let parsed: ForecastResponse = serde_json::from_slice(&body)
            .map_err(|e| ForecastError::ProviderRequest(format!("invalid response body: {e}")))?;

        let points = normalize_points(&parsed, &self.config.source, self.config.reading_policy);
        debug!(points = points.len(), "Provider points normalized");

        Ok(points)
    }
}
