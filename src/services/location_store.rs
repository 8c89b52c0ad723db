//! Location records and the read-only store they come from.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Which way a location faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    N,
    E,
    S,
    W,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    #[serde(alias = "lon")]
    pub lng: f64,
    pub name: String,
    pub position: Position,
}

/// Resolves the locations registered by an owner.
#[async_trait::async_trait]
pub trait LocationStore: Send + Sync {
    async fn find_locations_for_owner(&self, owner_id: &str) -> Result<Vec<Location>>;
}
