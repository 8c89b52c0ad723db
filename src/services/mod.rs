//! Capability traits the forecast pipeline consumes.

pub mod location_store;
pub mod point_source;

pub use location_store::{Location, LocationStore, Position};
pub use point_source::{NormalizedPoint, PointSource};
