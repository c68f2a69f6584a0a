use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::worldgen::TerrainConfig;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// How far `ground` scans downward for a Solid voxel.
    pub ground_search_depth: u32,
    /// Nodes a single path search may expand before giving up. `0` disables the cap.
    pub path_step_budget: usize,
    /// Whether a new world starts with physics on.
    pub physics_enabled: bool,
    pub terrain: TerrainConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            ground_search_depth: 100,
            path_step_budget: 65_536,
            physics_enabled: false,
            terrain: TerrainConfig::default(),
        }
    }
}

impl WorldConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: WorldConfig = toml::from_str(src)?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}
