//! The world store: lazy, memoized materialization of an unbounded grid.
//!
//! This is the spatial substrate -- one `World` owns every hex record, the
//! generators, the edit overlay store, and the settlement indices. All
//! operations are synchronous and take `&mut self`: generation is
//! order-dependent by contract (neighbor terrains feed the weighting, and
//! name disambiguation depends on which settlements already exist), so the
//! store is single-threaded by design rather than by accident.

pub mod hex;

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::coords::HexCoord;
use crate::edit::{EditBackend, EditOverlayStore, HexEditData, MemoryBackend};
use crate::generation::{SettlementGenerator, TerrainGenerator};
use crate::settlement::SettlementType;
use crate::terrain::TerrainType;

pub use hex::{DiscoveryData, Hex, TerrainData};

/// On-demand aggregate over everything materialized so far. Recomputed per
/// call; nothing here is incrementally cached.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldStatistics {
    pub hex_count: usize,
    /// Counts in `TerrainType::ALL` order (zero entries included).
    pub terrain_counts: Vec<(TerrainType, usize)>,
    /// Counts in `SettlementType::ALL` order, zero entries omitted.
    pub settlement_counts: Vec<(SettlementType, usize)>,
    pub total_population: u64,
    /// Up to three largest settlements by population; ties keep the order
    /// the settlements were first encountered in.
    pub top_settlements: Vec<(String, u32, HexCoord)>,
    pub edited_hexes: usize,
}

/// The entire generated world for one seed.
///
/// Hexes are stored in an insertion-ordered map: iteration order IS the
/// materialization order, which the statistics tie-break, settlement name
/// disambiguation, and stable save output all rely on.
pub struct World {
    seed: i64,
    campaign_name: String,
    hexes: IndexMap<HexCoord, Hex>,
    terrain_gen: TerrainGenerator,
    settlement_gen: SettlementGenerator,
    edits: EditOverlayStore,
    /// Disambiguated settlement name -> coordinate, in naming order.
    settlement_names: IndexMap<String, HexCoord>,
    settlements_by_type: HashMap<SettlementType, Vec<HexCoord>>,
}

impl World {
    /// A fresh world with an in-memory edit backend.
    pub fn new(seed: i64) -> Self {
        Self::with_edit_backend(seed, Box::new(MemoryBackend::new()))
    }

    /// A fresh world whose edit overlays live in the given backend.
    pub fn with_edit_backend(seed: i64, backend: Box<dyn EditBackend>) -> Self {
        tracing::info!(seed, "creating world");
        Self {
            seed,
            campaign_name: "default".into(),
            hexes: IndexMap::new(),
            terrain_gen: TerrainGenerator::new(seed),
            settlement_gen: SettlementGenerator::new(seed),
            edits: EditOverlayStore::new(seed, backend),
            settlement_names: IndexMap::new(),
            settlements_by_type: HashMap::new(),
        }
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    pub fn campaign_name(&self) -> &str {
        &self.campaign_name
    }

    pub fn set_campaign_name(&mut self, name: impl Into<String>) {
        self.campaign_name = name.into();
    }

    pub fn hex_count(&self) -> usize {
        self.hexes.len()
    }

    /// Read a hex if it has been materialized. Never generates.
    pub fn get(&self, coord: HexCoord) -> Option<&Hex> {
        self.hexes.get(&coord)
    }

    pub fn contains(&self, coord: HexCoord) -> bool {
        self.hexes.contains_key(&coord)
    }

    /// Iterate materialized hexes in materialization order.
    pub fn iter(&self) -> impl Iterator<Item = &Hex> {
        self.hexes.values()
    }

    /// Get the hex at `coord`, generating it on first access.
    ///
    /// Generation consults only the neighbors that already exist (absent
    /// neighbors contribute nothing, they are not some default terrain).
    /// Repeat calls never regenerate; they only re-apply the (possibly
    /// updated) edit overlay, which is idempotent.
    pub fn get_or_generate(&mut self, coord: HexCoord) -> &Hex {
        if !self.hexes.contains_key(&coord) {
            self.generate_hex(coord);
        }
        if let Some(edit) = self.edits.load(coord.q, coord.r).cloned() {
            if let Some(hex) = self.hexes.get_mut(&coord) {
                edit.apply_to(hex);
            }
        }
        &self.hexes[&coord]
    }

    fn generate_hex(&mut self, coord: HexCoord) {
        let mut neighbor_terrains = Vec::with_capacity(6);
        for neighbor in coord.neighbors() {
            if let Some(hex) = self.hexes.get(&neighbor) {
                neighbor_terrains.push(hex.terrain());
            }
        }

        let terrain = self.terrain_gen.generate(coord, &neighbor_terrains);
        let mut hex = Hex::new(coord, terrain);

        if let Some(mut settlement) = self.settlement_gen.generate(coord, terrain, &neighbor_terrains) {
            settlement.name = self.disambiguate_name(settlement.name);
            self.settlement_names.insert(settlement.name.clone(), coord);
            self.settlements_by_type
                .entry(settlement.settlement_type)
                .or_default()
                .push(coord);
            tracing::debug!(
                %coord,
                name = settlement.name.as_str(),
                kind = settlement.settlement_type.display_name(),
                population = settlement.population,
                "settlement generated"
            );
            hex.settlement_data = Some(settlement);
        }

        self.hexes.insert(coord, hex);
    }

    /// Make a raw generated name world-unique by appending " 2", " 3", ...
    /// until it no longer collides. Depends on naming order: the same
    /// world visited in the same order produces the same names.
    fn disambiguate_name(&self, raw: String) -> String {
        if !self.settlement_names.contains_key(&raw) {
            return raw;
        }
        let mut n = 2u32;
        loop {
            let candidate = format!("{raw} {n}");
            if !self.settlement_names.contains_key(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    /// All hexes within `radius` of `center`, materializing as needed.
    /// Iterates the axial bounding square and filters by cube distance.
    pub fn hexes_in_range(&mut self, center: HexCoord, radius: i32) -> Vec<&Hex> {
        let mut coords = Vec::new();
        for q in (center.q - radius)..=(center.q + radius) {
            for r in (center.r - radius)..=(center.r + radius) {
                let coord = HexCoord::new(q, r);
                if coord.distance(center) <= radius {
                    coords.push(coord);
                }
            }
        }
        for &coord in &coords {
            self.get_or_generate(coord);
        }
        coords.iter().map(|c| &self.hexes[c]).collect()
    }

    /// Expanding-radius search for the settlement nearest to `from`,
    /// stopping at the first radius that contains one (ties broken by
    /// minimum distance, then encounter order). `from` itself is excluded.
    ///
    /// Materializes as it searches, hence the explicit cap.
    pub fn find_nearest_settlement(
        &mut self,
        from: HexCoord,
        max_radius: i32,
    ) -> Option<(HexCoord, i32)> {
        for radius in 1..=max_radius {
            let best = self
                .hexes_in_range(from, radius)
                .iter()
                .filter(|h| h.settlement_data.is_some() && h.coord != from)
                .map(|h| (h.coord, h.coord.distance(from)))
                .min_by_key(|&(_, d)| d);
            if best.is_some() {
                return best;
            }
        }
        None
    }

    /// Coordinates holding a settlement of `kind`, in generation order.
    pub fn settlements_of_type(&self, kind: SettlementType) -> &[HexCoord] {
        self.settlements_by_type
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Where the settlement with this (disambiguated) name lives.
    pub fn find_settlement(&self, name: &str) -> Option<HexCoord> {
        self.settlement_names.get(name).copied()
    }

    /// Mark a hex explored to at least `level`, materializing it first.
    pub fn explore(&mut self, coord: HexCoord, level: u8) -> &Hex {
        self.get_or_generate(coord);
        if let Some(hex) = self.hexes.get_mut(&coord) {
            hex.explore(level);
        }
        &self.hexes[&coord]
    }

    /// Persist a user edit through the overlay store and refresh the
    /// materialized hex. Saving an edit with no overrides deletes any
    /// stored record instead.
    pub fn save_hex_edit(&mut self, edit: HexEditData) -> bool {
        let coord = HexCoord::new(edit.q, edit.r);
        if !self.edits.save(edit) {
            return false;
        }
        if let Some(edit) = self.edits.load(coord.q, coord.r).cloned() {
            if let Some(hex) = self.hexes.get_mut(&coord) {
                edit.apply_to(hex);
            }
        }
        true
    }

    /// Read a stored edit, if any.
    pub fn hex_edit(&mut self, coord: HexCoord) -> Option<HexEditData> {
        self.edits.load(coord.q, coord.r).cloned()
    }

    /// Insert a hex decoded from a save document. The hex will never be
    /// regenerated (it is already materialized); its settlement, if any,
    /// is registered in the indices under its stored name.
    pub fn insert_loaded_hex(&mut self, hex: Hex) {
        if let Some(settlement) = &hex.settlement_data {
            self.settlement_names.insert(settlement.name.clone(), hex.coord);
            self.settlements_by_type
                .entry(settlement.settlement_type)
                .or_default()
                .push(hex.coord);
        }
        self.hexes.insert(hex.coord, hex);
    }

    /// Aggregate statistics over everything materialized so far.
    pub fn statistics(&self) -> WorldStatistics {
        let mut terrain_counts: Vec<(TerrainType, usize)> =
            TerrainType::ALL.iter().map(|&t| (t, 0)).collect();
        let mut settlement_tally: HashMap<SettlementType, usize> = HashMap::new();
        let mut total_population: u64 = 0;
        let mut settlements: Vec<(String, u32, HexCoord)> = Vec::new();

        for hex in self.hexes.values() {
            let idx = TerrainType::ALL
                .iter()
                .position(|&t| t == hex.terrain())
                .expect("terrain enum is closed");
            terrain_counts[idx].1 += 1;

            if let Some(settlement) = &hex.settlement_data {
                *settlement_tally.entry(settlement.settlement_type).or_default() += 1;
                total_population += settlement.population as u64;
                settlements.push((settlement.name.clone(), settlement.population, hex.coord));
            }
        }

        let settlement_counts = SettlementType::ALL
            .iter()
            .filter_map(|&kind| settlement_tally.get(&kind).map(|&n| (kind, n)))
            .collect();

        // Stable sort: equal populations keep encounter order.
        settlements.sort_by(|a, b| b.1.cmp(&a.1));
        settlements.truncate(3);

        WorldStatistics {
            hex_count: self.hexes.len(),
            terrain_counts,
            settlement_counts,
            total_population,
            top_settlements: settlements,
            edited_hexes: self.edits.edited_coords().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_or_generate_is_memoized() {
        let mut world = World::new(42);
        let coord = HexCoord::new(0, 0);
        let first = world.get_or_generate(coord).clone();
        // Materialize the whole neighborhood, then re-read: the original
        // record must be untouched by its neighbors appearing.
        for n in coord.neighbors() {
            world.get_or_generate(n);
        }
        let second = world.get_or_generate(coord).clone();
        assert_eq!(first.terrain(), second.terrain());
        assert_eq!(first.settlement_data, second.settlement_data);
        assert_eq!(world.hex_count(), 7);
    }

    #[test]
    fn seed_42_origin_is_stable() {
        let a = World::new(42).get_or_generate(HexCoord::new(0, 0)).terrain();
        let b = World::new(42).get_or_generate(HexCoord::new(0, 0)).terrain();
        assert_eq!(a, b);
    }

    #[test]
    fn range_query_matches_distance_filter() {
        let mut world = World::new(1);
        let center = HexCoord::new(2, -1);
        let hexes = world.hexes_in_range(center, 3);
        // 1 + 3·r·(r+1) hexes in radius r.
        assert_eq!(hexes.len(), 37);
        for hex in hexes {
            assert!(hex.coord.distance(center) <= 3);
        }
    }

    #[test]
    fn settlement_names_are_unique() {
        let mut world = World::new(777);
        world.hexes_in_range(HexCoord::new(0, 0), 12);

        let names: Vec<&str> = world
            .iter()
            .filter_map(|h| h.settlement_data.as_ref())
            .map(|s| s.name.as_str())
            .collect();
        assert!(!names.is_empty(), "no settlements in a 469-hex region");

        let mut unique: Vec<&str> = names.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), names.len(), "duplicate settlement names");

        // Every name is registered and points back at a settlement hex.
        for name in names {
            let coord = world.find_settlement(name).expect("name indexed");
            assert!(world.get(coord).unwrap().settlement_data.is_some());
        }
    }

    #[test]
    fn statistics_count_everything_once() {
        let mut world = World::new(4242);
        world.hexes_in_range(HexCoord::new(0, 0), 8);
        let stats = world.statistics();

        assert_eq!(stats.hex_count, world.hex_count());
        let terrain_total: usize = stats.terrain_counts.iter().map(|(_, n)| n).sum();
        assert_eq!(terrain_total, stats.hex_count);

        let settlement_total: usize = stats.settlement_counts.iter().map(|(_, n)| n).sum();
        let actual = world.iter().filter(|h| h.settlement_data.is_some()).count();
        assert_eq!(settlement_total, actual);
        assert!(stats.top_settlements.len() <= 3);
        if stats.top_settlements.len() == 3 {
            assert!(stats.top_settlements[0].1 >= stats.top_settlements[2].1);
        }
    }

    #[test]
    fn nearest_settlement_is_actually_nearest() {
        let mut world = World::new(31337);
        let from = HexCoord::new(0, 0);
        let Some((found, dist)) = world.find_nearest_settlement(from, 15) else {
            panic!("no settlement within radius 15");
        };
        assert_eq!(found.distance(from), dist);
        assert!(dist >= 1);
        // Nothing strictly closer has a settlement.
        for hex in world.hexes_in_range(from, dist - 1) {
            if hex.coord != from {
                assert!(hex.settlement_data.is_none());
            }
        }
    }

    #[test]
    fn explore_marks_and_persists() {
        let mut world = World::new(5);
        let coord = HexCoord::new(3, 3);
        world.explore(coord, 1);
        let hex = world.get(coord).unwrap();
        assert!(hex.discovery_data.explored);
        assert_eq!(hex.discovery_data.exploration_level, 1);
    }

    #[test]
    fn edit_overlay_applies_and_reapplies() {
        let mut world = World::new(88);
        let coord = HexCoord::new(4, -4);
        world.get_or_generate(coord);

        let mut edit = HexEditData::new(coord.q, coord.r);
        edit.override_terrain = true;
        edit.terrain_type = Some("Water".into());
        assert!(world.save_hex_edit(edit));
        assert_eq!(world.get(coord).unwrap().terrain(), TerrainType::Water);

        // Re-reading keeps the override in place (idempotent re-application).
        assert_eq!(world.get_or_generate(coord).terrain(), TerrainType::Water);
        assert_eq!(world.statistics().edited_hexes, 1);

        // Clearing the edit removes the stored record.
        assert!(world.save_hex_edit(HexEditData::new(coord.q, coord.r)));
        assert_eq!(world.statistics().edited_hexes, 0);
    }

    #[test]
    fn pending_edit_applies_on_first_materialization() {
        let mut world = World::new(909);
        let coord = HexCoord::new(6, 1);

        let mut edit = HexEditData::new(coord.q, coord.r);
        edit.override_terrain = true;
        edit.terrain_type = Some("Desert".into());
        assert!(world.save_hex_edit(edit));
        assert!(!world.contains(coord));

        assert_eq!(world.get_or_generate(coord).terrain(), TerrainType::Desert);
    }
}
