use fastnoise_lite::{FastNoiseLite, NoiseType};
use serde::Deserialize;

use voxa_blocks::VoxelKind;

use crate::world::World;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    pub frequency: f32,
    pub base_height: i32,
    pub amplitude: f32,
    pub surface_rgb: [u8; 3],
    pub soil_rgb: [u8; 3],
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            frequency: 0.03,
            base_height: 8,
            amplitude: 6.0,
            surface_rgb: [96, 168, 72],
            soil_rgb: [121, 85, 58],
        }
    }
}

/// Fills a `(2·radius)²` column footprint centred on the origin with a noise
/// height-field. Returns the number of voxels written.
pub fn generate_terrain(world: &mut World, radius: i32, seed: i32, cfg: &TerrainConfig) -> usize {
    let mut noise = FastNoiseLite::with_seed(seed);
    noise.set_noise_type(Some(NoiseType::OpenSimplex2));
    noise.set_frequency(Some(cfg.frequency));

    let mut written = 0;
    for z in -radius..radius {
        for x in -radius..radius {
            let n = noise.get_noise_2d(x as f32, z as f32);
            let top = cfg.base_height + (n * cfg.amplitude).round() as i32;
            for y in 0..=top.max(0) {
                let [r, g, b] = if y == top { cfg.surface_rgb } else { cfg.soil_rgb };
                world.set(x, y, z, VoxelKind::Solid, r, g, b);
                written += 1;
            }
        }
    }
    log::debug!("terrain radius={radius} seed={seed} voxels={written}");
    written
}
