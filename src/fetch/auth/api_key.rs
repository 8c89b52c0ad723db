use crate::error::{ForecastError, Result};
use crate::fetch::client::HttpClient;
use async_trait::async_trait;
use reqwest::header::{HeaderName, HeaderValue};

/// An [`HttpClient`] wrapper that injects an API key as an HTTP header.
///
/// StormGlass expects the raw token in `Authorization`, without a `Bearer`
/// prefix. The value is marked sensitive so it never shows up in debug output.
pub struct ApiKey<C> {
    inner: C,
    header_name: HeaderName,
    key: HeaderValue,
}

impl<C> ApiKey<C> {
    pub fn new(inner: C, header_name: &str, key: &str) -> Result<Self> {
        let header_name = HeaderName::from_bytes(header_name.as_bytes()).map_err(|e| {
            ForecastError::Configuration(format!("invalid header name '{header_name}': {e}"))
        })?;
        let mut key = HeaderValue::from_str(key).map_err(|e| {
            ForecastError::Configuration(format!("invalid value for header '{header_name}': {e}"))
        })?;
        key.set_sensitive(true);

        Ok(Self {
            inner,
            header_name,
            key,
        })
    }

    /// Uses the `Authorization` header.
    pub fn authorization(inner: C, key: &str) -> Result<Self> {
        Self::new(inner, "Authorization", key)
    }
}

#[async_trait]
impl<C: HttpClient> HttpClient for ApiKey<C> {
    async fn execute(&self, mut req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        req.headers_mut()
            .insert(self.header_name.clone(), self.key.clone());
        self.inner.execute(req).await
    }
}
