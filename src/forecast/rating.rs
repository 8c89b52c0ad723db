//! Pluggable suitability scoring.
//!
//! The scoring formula lives outside this crate. A [`ScorerFactory`] builds a
//! [`RatingScorer`] for each location, and the scorer rates that location's
//! points. Either step may fail, which aborts the forecast run. Infallible
//! closures work for both:
//!
//! ```
//! use marine_forecast::services::{Location, NormalizedPoint};
//! use marine_forecast::forecast::ScorerFactory;
//!
//! let factory = |location: &Location| {
//!     let facing_east = location.position == marine_forecast::services::Position::E;
//!     move |point: &NormalizedPoint| if facing_east { point.wave_height } else { 1.0 }
//! };
//! # fn assert_factory(_: &impl ScorerFactory) {}
//! # assert_factory(&factory);
//! ```

use anyhow::Result;

use crate::services::{Location, NormalizedPoint};

pub trait RatingScorer {
    /// Higher is better.
    fn rate_for_point(&self, point: &NormalizedPoint) -> Result<f64>;
}

pub trait ScorerFactory: Send + Sync {
    type Scorer: RatingScorer;

    fn scorer_for(&self, location: &Location) -> Result<Self::Scorer>;
}

impl<F> RatingScorer for F
where
    F: Fn(&NormalizedPoint) -> f64,
{
    fn rate_for_point(&self, point: &NormalizedPoint) -> Result<f64> {
        Ok(self(point))
    }
}

impl<F, S> ScorerFactory for F
where
    F: Fn(&Location) -> S + Send + Sync,
    S: RatingScorer,
{
    type Scorer = S;

    fn scorer_for(&self, location: &Location) -> Result<S> {
        Ok(self(location))
    }
}
