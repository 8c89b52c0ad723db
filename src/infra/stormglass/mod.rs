//! StormGlass marine-data provider.

mod client;
pub mod types;

pub use client::StormGlass;
pub use types::{Channel, ForecastResponse, RawProviderPoint, normalize_points};
