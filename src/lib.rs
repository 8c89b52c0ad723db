//! Marine-conditions forecasting pipeline.
//!
//! Fetches hourly wave, swell and wind readings per location from StormGlass,
//! rates every hour with an injected [`ScorerFactory`], and returns the
//! points grouped by timestamp, best rating first.
//!
//! ```no_run
//! use marine_forecast::{Forecast, StormGlass, StormGlassConfig};
//! use marine_forecast::infra::locations::JsonLocationStore;
//! use marine_forecast::services::{Location, NormalizedPoint};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let provider = StormGlass::from_config(StormGlassConfig::from_env()?)?;
//! let forecast = Forecast::new(provider, |_: &Location| {
//!     |point: &NormalizedPoint| point.wave_height
//! });
//!
//! let store = JsonLocationStore::load("locations.json").await?;
//! let buckets = forecast.process_forecast_for_owner(&store, "owner-1").await?;
//! println!("{}", serde_json::to_string_pretty(&buckets)?);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod forecast;
pub mod infra;
pub mod logging;
pub mod services;

pub use config::{ReadingPolicy, StormGlassConfig};
pub use error::{ForecastError, Result};
pub use forecast::{EnrichedPoint, Forecast, RatingScorer, ScorerFactory, TimeBucket};
pub use infra::stormglass::StormGlass;
