//! Concrete implementations of the [`services`](crate::services) traits.

pub mod locations;
pub mod stormglass;
