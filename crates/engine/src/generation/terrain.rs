//! Neighbor-aware terrain selection.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::coords::HexCoord;
use crate::terrain::TerrainType;

/// Multiplier spreading nearby coordinates across distinct seeds.
const POSITION_STRIDE: i64 = 10_000;

/// Selects terrain for a coordinate from its base weights and the pull of
/// whatever neighbors have already materialized.
///
/// `generate` is a pure function of `(world_seed, coord, neighbors)`: the
/// RNG is constructed fresh from the position seed on every call and never
/// escapes it.
pub struct TerrainGenerator {
    world_seed: i64,
}

impl TerrainGenerator {
    pub fn new(world_seed: i64) -> Self {
        Self { world_seed }
    }

    fn position_seed(&self, coord: HexCoord) -> u64 {
        self.world_seed
            .wrapping_add((coord.q as i64).wrapping_mul(POSITION_STRIDE))
            .wrapping_add(coord.r as i64) as u64
    }

    /// Pick a terrain for `coord`. `neighbors` holds the terrain of every
    /// already-materialized adjacent hex; repeats count (three Forest
    /// neighbors apply the Forest affinity three times). An empty slice
    /// falls back to pure base weights, which are never all zero.
    pub fn generate(&self, coord: HexCoord, neighbors: &[TerrainType]) -> TerrainType {
        let mut rng = ChaCha8Rng::seed_from_u64(self.position_seed(coord));

        let mut weights = [0.0f64; TerrainType::ALL.len()];
        for (slot, terrain) in weights.iter_mut().zip(TerrainType::ALL) {
            *slot = terrain.base_weight() as f64;
        }
        for &neighbor in neighbors {
            for (slot, candidate) in weights.iter_mut().zip(TerrainType::ALL) {
                *slot *= TerrainType::affinity(neighbor, candidate);
            }
        }

        let total: f64 = weights.iter().sum();
        let roll = rng.gen_range(0.0..1.0) * total;

        let mut cumulative = 0.0;
        for (weight, terrain) in weights.iter().zip(TerrainType::ALL) {
            cumulative += weight;
            if roll <= cumulative {
                return terrain;
            }
        }
        // Float accumulation can leave the roll a hair past the last bucket.
        TerrainType::Plains
    }
}
