//! StormGlass wire format and its normalization into [`NormalizedPoint`]s.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use crate::config::ReadingPolicy;
use crate::services::NormalizedPoint;

/// The seven measured channels requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    SwellDirection,
    SwellHeight,
    SwellPeriod,
    WaveDirection,
    WaveHeight,
    WindDirection,
    WindSpeed,
}

impl Channel {
    pub const ALL: [Channel; 7] = [
        Channel::SwellDirection,
        Channel::SwellHeight,
        Channel::SwellPeriod,
        Channel::WaveDirection,
        Channel::WaveHeight,
        Channel::WindDirection,
        Channel::WindSpeed,
    ];

    pub fn as_param(self) -> &'static str {
        match self {
            Channel::SwellDirection => "swellDirection",
            Channel::SwellHeight => "swellHeight",
            Channel::SwellPeriod => "swellPeriod",
            Channel::WaveDirection => "waveDirection",
            Channel::WaveHeight => "waveHeight",
            Channel::WindDirection => "windDirection",
            Channel::WindSpeed => "windSpeed",
        }
    }

    /// Value of the `params` query parameter.
    pub fn params() -> String {
        Self::ALL.map(Channel::as_param).join(",")
    }
}

/// Readings for one channel keyed by source name (`noaa`, `sg`, `icon`, ...).
///
/// Values stay untyped so a malformed reading from a source we never read
/// cannot fail the whole response.
pub type SourceReadings = HashMap<String, serde_json::Value>;

/// One hour as returned by the provider. Every field may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProviderPoint {
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub swell_direction: Option<SourceReadings>,
    #[serde(default)]
    pub swell_height: Option<SourceReadings>,
    #[serde(default)]
    pub swell_period: Option<SourceReadings>,
    #[serde(default)]
    pub wave_direction: Option<SourceReadings>,
    #[serde(default)]
    pub wave_height: Option<SourceReadings>,
    #[serde(default)]
    pub wind_direction: Option<SourceReadings>,
    #[serde(default)]
    pub wind_speed: Option<SourceReadings>,
}

impl RawProviderPoint {
    fn channel(&self, channel: Channel) -> Option<&SourceReadings> {
        match channel {
            Channel::SwellDirection => self.swell_direction.as_ref(),
            Channel::SwellHeight => self.swell_height.as_ref(),
            Channel::SwellPeriod => self.swell_period.as_ref(),
            Channel::WaveDirection => self.wave_direction.as_ref(),
            Channel::WaveHeight => self.wave_height.as_ref(),
            Channel::WindDirection => self.wind_direction.as_ref(),
            Channel::WindSpeed => self.wind_speed.as_ref(),
        }
    }

    /// The `source` reading for `channel`, if present and numeric.
    pub fn reading(&self, channel: Channel, source: &str) -> Option<f64> {
        self.channel(channel)?.get(source)?.as_f64()
    }

    /// Converts into a [`NormalizedPoint`], or `None` if the timestamp is
    /// empty or any channel lacks an acceptable `source` reading.
    pub fn normalize(&self, source: &str, policy: ReadingPolicy) -> Option<NormalizedPoint> {
        let pick = |channel| {
            self.reading(channel, source)
                .filter(|value| policy.accepts(*value))
        };

        Some(NormalizedPoint {
            time: self.time.clone().filter(|t| !t.is_empty())?,
            wave_height: pick(Channel::WaveHeight)?,
            wave_direction: pick(Channel::WaveDirection)?,
            swell_direction: pick(Channel::SwellDirection)?,
            swell_height: pick(Channel::SwellHeight)?,
            swell_period: pick(Channel::SwellPeriod)?,
            wind_direction: pick(Channel::WindDirection)?,
            wind_speed: pick(Channel::WindSpeed)?,
        })
    }
}

/// Body of a successful `/weather/point` call. Extra top-level keys such as
/// `meta` are ignored.
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub hours: Vec<RawProviderPoint>,
}

/// Keeps the hours that pass validation, in provider order.
pub fn normalize_points(
    response: &ForecastResponse,
    source: &str,
    policy: ReadingPolicy,
) -> Vec<NormalizedPoint> {
    let points: Vec<NormalizedPoint> = response
        .hours
        .iter()
        .filter_map(|raw| raw.normalize(source, policy))
        .collect();

    let dropped = response.hours.len() - points.len();
    if dropped > 0 {
        debug!(
            received = response.hours.len(),
            dropped, source, "Dropped hours with missing readings"
        );
    }

    points
}
