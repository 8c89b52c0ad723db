use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::services::{Location, LocationStore};

/// Read-only location store backed by a JSON file.
///
/// The file maps owner ids to their locations:
/// ```json
/// {
///   "owner-1": [
///     { "lat": -33.792726, "lng": 151.289824, "name": "Manly", "position": "E" }
///   ]
/// }
/// ```
pub struct JsonLocationStore {
    entries: HashMap<String, Vec<Location>>,
}

impl JsonLocationStore {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read locations from '{}'", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("invalid locations file '{}'", path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let entries: HashMap<String, Vec<Location>> = serde_json::from_str(content)?;
        Ok(Self { entries })
    }
}

#[async_trait::async_trait]
impl LocationStore for JsonLocationStore {
    async fn find_locations_for_owner(&self, owner_id: &str) -> Result<Vec<Location>> {
        Ok(self.entries.get(owner_id).cloned().unwrap_or_default())
    }
}
