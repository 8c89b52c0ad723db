//! Data types produced by the aggregation pipeline.

use serde::Serialize;

use crate::services::{Location, NormalizedPoint, Position};

/// A [`NormalizedPoint`] tagged with its location and rating.
///
/// The measurement is kept whole in `point` and flattened on
/// serialization, so location data can never overwrite a reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedPoint {
    pub lat: f64,
    pub lng: f64,
    pub name: String,
    pub position: Position,
    pub rating: f64,
    #[serde(flatten)]
    pub point: NormalizedPoint,
}

impl EnrichedPoint {
    pub fn new(location: &Location, point: NormalizedPoint, rating: f64) -> Self {
        Self {
            lat: location.lat,
            lng: location.lng,
            name: location.name.clone(),
            position: location.position,
            rating,
            point,
        }
    }

    pub fn time(&self) -> &str {
        &self.point.time
    }
}

/// All enriched points sharing one timestamp, best rating first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeBucket {
    pub time: String,
    pub forecast: Vec<EnrichedPoint>,
}
