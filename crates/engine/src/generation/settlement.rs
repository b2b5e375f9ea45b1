//! Settlement placement, typing, detail rolling, and naming.

use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::coords::HexCoord;
use crate::generation::tables;
use crate::settlement::{SettlementData, SettlementType};
use crate::terrain::TerrainType;

// Prime strides keep nearby coordinates on distinct streams, and keep the
// settlement streams uncorrelated with the terrain generator's.
const STRIDE_Q: i64 = 7919;
const STRIDE_R: i64 = 7907;
// Salt offsets separate the independent sub-decisions; without them the
// naming and detail rolls would replay the placement stream.
const NAME_SALT: i64 = 123;
const DETAIL_SALT: i64 = 456;

/// Decides whether a hex holds a settlement and, if so, everything about
/// it except the final (world-unique) name: the generator returns a raw
/// name and the `World` disambiguates collisions.
///
/// Pure function of `(world_seed, coord, terrain, neighbors)`; every
/// sub-decision opens a fresh RNG from its own derived seed.
pub struct SettlementGenerator {
    world_seed: i64,
}

impl SettlementGenerator {
    pub fn new(world_seed: i64) -> Self {
        Self { world_seed }
    }

    fn base_seed(&self, coord: HexCoord) -> i64 {
        self.world_seed
            .wrapping_add((coord.q as i64).wrapping_mul(STRIDE_Q))
            .wrapping_add((coord.r as i64).wrapping_mul(STRIDE_R))
    }

    /// Generate the settlement for `coord`, or `None` for an empty hex.
    pub fn generate(
        &self,
        coord: HexCoord,
        terrain: TerrainType,
        neighbors: &[TerrainType],
    ) -> Option<SettlementData> {
        if !self.should_place(coord, terrain, neighbors) {
            return None;
        }
        let kind = self.roll_kind(coord, terrain);
        let mut settlement = self.roll_details(coord, kind);
        settlement.name = self.roll_name(coord, kind, terrain);
        Some(settlement)
    }

    /// Placement decision: per-terrain base chance, boosted by water access
    /// and suppressed for isolated mountain or waterless desert hexes.
    fn should_place(&self, coord: HexCoord, terrain: TerrainType, neighbors: &[TerrainType]) -> bool {
        let mut rng = ChaCha8Rng::seed_from_u64(self.base_seed(coord) as u64);

        let mut chance = tables::settlement_chance(terrain);
        let water_nearby = neighbors.contains(&TerrainType::Water);
        if water_nearby {
            chance *= 1.5;
        }
        if terrain == TerrainType::Mountains && !neighbors.contains(&TerrainType::Plains) {
            chance *= 0.5;
        }
        if terrain == TerrainType::Desert && !water_nearby {
            chance *= 0.3;
        }

        rng.gen_range(0.0..1.0) < chance
    }

    /// Weighted kind selection over the per-terrain table.
    fn roll_kind(&self, coord: HexCoord, terrain: TerrainType) -> SettlementType {
        let mut rng = ChaCha8Rng::seed_from_u64(self.base_seed(coord) as u64);

        let weights = tables::type_weights(terrain);
        let total: u32 = weights.iter().map(|(_, w)| w).sum();
        let roll = rng.gen_range(0.0..1.0) * total as f64;

        let mut cumulative = 0.0;
        for &(kind, weight) in weights {
            cumulative += weight as f64;
            if roll <= cumulative {
                return kind;
            }
        }
        SettlementType::Hamlet
    }

    /// Population, prosperity, features, and trade goods for a kind.
    fn roll_details(&self, coord: HexCoord, kind: SettlementType) -> SettlementData {
        let seed = self.base_seed(coord).wrapping_add(DETAIL_SALT) as u64;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let (min_pop, max_pop) = kind.population_range();
        let population = if max_pop > 0 {
            rng.gen_range(min_pop..=max_pop)
        } else {
            0 // ruins
        };

        // Bell-shaped prosperity: middling settlements are the norm.
        let prosperity_level = {
            let roll = rng.gen_range(0.0..1.0) * 100.0;
            let mut cumulative = 0.0;
            let mut level = 3;
            for &(candidate, weight) in &[(1u8, 10.0), (2, 20.0), (3, 40.0), (4, 20.0), (5, 10.0)] {
                cumulative += weight;
                if roll <= cumulative {
                    level = candidate;
                    break;
                }
            }
            level
        };

        let special_features = match kind {
            SettlementType::Town | SettlementType::City => {
                sample(&mut rng, &["market_square", "inn", "blacksmith", "temple"], 2, 4)
            }
            SettlementType::Village => {
                sample(&mut rng, &["inn", "blacksmith", "temple", "mill"], 1, 2)
            }
            SettlementType::Monastery => {
                vec!["library".into(), "herb_garden".into(), "scriptorium".into()]
            }
            SettlementType::RuinsVillage | SettlementType::RuinsKeep | SettlementType::RuinsTower => {
                sample(
                    &mut rng,
                    &["collapsed_buildings", "overgrown_roads", "hidden_cellars", "ancient_well"],
                    1,
                    3,
                )
            }
            // AncientRuins deliberately rolls nothing: their character comes
            // from the name and description, not a feature list.
            _ => Vec::new(),
        };

        let trade_goods = match kind {
            SettlementType::LoggingCamp => vec!["timber".into(), "furs".into()],
            SettlementType::MiningCamp => {
                sample(&mut rng, &["iron_ore", "coal", "stone", "gems"], 1, 1)
            }
            SettlementType::Village | SettlementType::Town | SettlementType::City => {
                sample(&mut rng, &["grain", "livestock", "pottery", "cloth", "tools"], 1, 3)
            }
            _ => Vec::new(),
        };

        SettlementData {
            settlement_type: kind,
            name: String::new(), // caller names it
            population,
            prosperity_level,
            special_features,
            notable_npcs: Vec::new(),
            trade_goods,
            defenses: Vec::new(),
        }
    }

    /// Raw name: terrain prefix + (40% of the time) a kind suffix, else a
    /// terrain suffix, concatenated without a separator.
    fn roll_name(&self, coord: HexCoord, kind: SettlementType, terrain: TerrainType) -> String {
        let seed = self.base_seed(coord).wrapping_add(NAME_SALT) as u64;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let prefixes = tables::terrain_prefixes(terrain);
        let terrain_suffixes = tables::terrain_suffixes(terrain);

        // The style roll happens before the lookup so the stream shape is
        // identical for every kind.
        let use_kind_suffix = rng.gen_range(0.0..1.0) < 0.4;
        let suffixes = match tables::settlement_suffixes(kind) {
            Some(kind_suffixes) if use_kind_suffix => kind_suffixes,
            _ => terrain_suffixes,
        };

        let prefix = prefixes[rng.gen_range(0..prefixes.len())];
        let suffix = suffixes[rng.gen_range(0..suffixes.len())];
        format!("{prefix}{suffix}")
    }
}

/// Sample `min..=max` distinct entries from a fixed menu. The count is
/// rolled first, then the entries, matching the generation order the
/// detail stream commits to.
fn sample(rng: &mut ChaCha8Rng, menu: &[&str], min: usize, max: usize) -> Vec<String> {
    let count = if min == max { min } else { rng.gen_range(min..=max) };
    menu.choose_multiple(rng, count)
        .map(|s| (*s).to_string())
        .collect()
}
