use serde::Deserialize;

use crate::config::{ConfigError, PlanetParams};

/// Declarative description of a whole system, loaded from JSON pushed by
/// the host. Omitted planet fields take the defaults of `PlanetParams`.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemManifest {
    pub planets: Vec<PlanetEntry>,
}

/// One named body within a manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanetEntry {
    pub name: String,
    #[serde(flatten)]
    pub params: PlanetParams,
}

impl SystemManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
