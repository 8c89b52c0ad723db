//! Trait and types for a marine-conditions point provider.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One hourly sample with exactly one reading per channel, taken from the
/// designated source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPoint {
    pub time: String,
    pub wave_height: f64,
    pub wave_direction: f64,
    pub swell_direction: f64,
    pub swell_height: f64,
    pub swell_period: f64,
    pub wind_direction: f64,
    pub wind_speed: f64,
}

/// Abstraction over a point-forecast provider (e.g., StormGlass).
#[async_trait]
pub trait PointSource: Send + Sync {
    /// Returns the validated hourly points for the given coordinates.
    ///
    /// An empty list is a valid answer. Transport failures surface as
    /// [`ProviderRequest`](crate::ForecastError::ProviderRequest), error
    /// replies as [`ProviderResponse`](crate::ForecastError::ProviderResponse).
    async fn fetch_points(&self, lat: f64, lng: f64) -> Result<Vec<NormalizedPoint>>;
}
