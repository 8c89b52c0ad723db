use tracing::{debug, error, info};

use crate::error::{ForecastError, Result};
use crate::forecast::aggregate::{group_by_time, rank_by_rating};
use crate::forecast::rating::{RatingScorer, ScorerFactory};
use crate::forecast::types::{EnrichedPoint, TimeBucket};
use crate::services::{Location, LocationStore, PointSource};

/// Builds the rated, time-grouped forecast for a set of locations.
///
/// Holds no state between calls. Locations are fetched one after another,
/// and a failure on any of them fails the whole run without partial output.
pub struct Forecast<P, F> {
    points: P,
    scorers: F,
}

impl<P: PointSource, F: ScorerFactory> Forecast<P, F> {
    pub fn new(points: P, scorers: F) -> Self {
        Self { points, scorers }
    }

    /// Returns one [`TimeBucket`] per distinct timestamp, in first-seen
    /// order, each sorted by rating descending.
    ///
    /// # Errors
    ///
    /// Any provider or scorer failure is reported as
    /// [`ForecastError::ForecastProcessing`] carrying the original message.
    #[tracing::instrument(skip_all, fields(locations = locations.len()))]
    pub async fn process_forecast_for_locations(
        &self,
        locations: &[Location],
    ) -> Result<Vec<TimeBucket>> {
        match self.calculate_rating(locations).await {
            Ok(enriched) => {
                let mut buckets = group_by_time(enriched);
                rank_by_rating(&mut buckets);
                Ok(buckets)
            }
            Err(e) => {
                error!(error = %e, "Forecast processing failed");
                Err(ForecastError::ForecastProcessing(format!("{e:#}")))
            }
        }
    }

    /// Looks up the owner's locations in `store`, then runs
    /// [`process_forecast_for_locations`](Self::process_forecast_for_locations).
    #[tracing::instrument(skip(self, store))]
    pub async fn process_forecast_for_owner<S: LocationStore>(
        &self,
        store: &S,
        owner_id: &str,
    ) -> Result<Vec<TimeBucket>> {
        let locations = store
            .find_locations_for_owner(owner_id)
            .await
            .map_err(|e| {
                error!(error = %e, "Location lookup failed");
                ForecastError::ForecastProcessing(format!("{e:#}"))
            })?;

        self.process_forecast_for_locations(&locations).await
    }

    async fn calculate_rating(&self, locations: &[Location]) -> anyhow::Result<Vec<EnrichedPoint>> {
        info!("Preparing the forecast for {} locations", locations.len());

        let mut enriched = Vec::new();
        for location in locations {
            let scorer = self.scorers.scorer_for(location)?;
            let points = self.points.fetch_points(location.lat, location.lng).await?;
            debug!(location = %location.name, points = points.len(), "Points fetched");

            let rated = points
                .into_iter()
                .map(|point| {
                    let rating = scorer.rate_for_point(&point)?;
                    Ok(EnrichedPoint::new(location, point, rating))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            enriched.extend(rated);
        }

        Ok(enriched)
    }
}
