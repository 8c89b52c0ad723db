//! Forecast aggregation.
//!
//! This module enriches provider points with location metadata and a
//! suitability rating, groups them by timestamp, and ranks every group by
//! rating.

pub mod aggregate;
pub mod processor;
pub mod rating;
pub mod types;

pub use processor::Forecast;
pub use rating::{RatingScorer, ScorerFactory};
pub use types::{EnrichedPoint, TimeBucket};
