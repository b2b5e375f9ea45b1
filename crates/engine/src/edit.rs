//! User edit overlays: sparse per-hex overrides layered on top of
//! generated content.
//!
//! An overlay never alters the generators or their inputs -- it is applied
//! after (re)reading a hex, touching only the fields its flags mark as
//! overridden. Application is idempotent, so re-applying on every access
//! is safe.

use std::collections::HashMap;

use crate::settlement::SettlementType;
use crate::terrain::TerrainType;
use crate::world::Hex;

/// One coordinate's worth of user overrides. Everything is optional; a
/// record where [`HexEditData::has_overrides`] is false is considered
/// empty and must not be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HexEditData {
    pub q: i32,
    pub r: i32,

    pub custom_name: String,
    pub description: String,
    pub notes: String,

    pub override_terrain: bool,
    pub override_settlement: bool,

    /// Replacement terrain name, honored only when `override_terrain`.
    pub terrain_type: Option<String>,

    /// Settlement replacements, honored only when `override_settlement`.
    pub settlement_name: Option<String>,
    pub settlement_type: Option<String>,
    pub settlement_population: Option<u32>,

    pub explored: Option<bool>,
    pub exploration_level: Option<u8>,

    /// Media references, carried for the editor UI; the engine never reads them.
    pub image_files: Vec<String>,
    pub audio_file: Option<String>,

    /// Stamped by the overlay store on save (epoch seconds).
    pub last_edited: Option<u64>,
    pub version: u32,
}

impl HexEditData {
    pub fn new(q: i32, r: i32) -> Self {
        Self {
            q,
            r,
            version: 1,
            ..Self::default()
        }
    }

    /// Does this record carry anything worth keeping?
    pub fn has_overrides(&self) -> bool {
        !self.custom_name.is_empty()
            || !self.description.is_empty()
            || !self.notes.is_empty()
            || self.override_terrain
            || self.override_settlement
            || self.explored.is_some()
    }

    /// Overwrite exactly the fields this record marks as overridden.
    ///
    /// Invalid replacement names are ignored field-by-field; the generated
    /// value stands. Settlement overrides modify an existing settlement
    /// only -- they never conjure one onto an empty hex.
    pub fn apply_to(&self, hex: &mut Hex) {
        if self.override_terrain {
            match self.terrain_type.as_deref().and_then(TerrainType::from_name) {
                Some(terrain) => hex.terrain_data.primary = terrain,
                None => tracing::warn!(
                    q = self.q,
                    r = self.r,
                    terrain = self.terrain_type.as_deref().unwrap_or(""),
                    "ignoring terrain override with unknown terrain name"
                ),
            }
        }

        if self.override_settlement {
            match hex.settlement_data.as_mut() {
                Some(settlement) => {
                    if let Some(name) = &self.settlement_name {
                        settlement.name = name.clone();
                    }
                    if let Some(kind_name) = &self.settlement_type {
                        match SettlementType::from_name(kind_name) {
                            Some(kind) => settlement.settlement_type = kind,
                            None => tracing::warn!(
                                q = self.q,
                                r = self.r,
                                kind = kind_name.as_str(),
                                "ignoring settlement override with unknown kind name"
                            ),
                        }
                    }
                    if let Some(population) = self.settlement_population {
                        settlement.population = population;
                    }
                }
                None => tracing::debug!(
                    q = self.q,
                    r = self.r,
                    "settlement override on a hex with no settlement; skipped"
                ),
            }
        }

        if let Some(explored) = self.explored {
            hex.discovery_data.explored = explored;
        }
        if let Some(level) = self.exploration_level {
            hex.discovery_data.exploration_level = level;
        }
    }
}

/// Storage contract for persisted overlays, keyed by `(seed, q, r)`.
/// Seeds must be isolated: switching worlds must never surface another
/// seed's edits. The medium (files, database, memory) is the
/// implementor's business.
pub trait EditBackend {
    fn load(&self, seed: i64, q: i32, r: i32) -> Option<HexEditData>;
    fn save(&mut self, seed: i64, edit: &HexEditData) -> bool;
    fn delete(&mut self, seed: i64, q: i32, r: i32) -> bool;
    fn exists(&self, seed: i64, q: i32, r: i32) -> bool;
    fn list_all(&self, seed: i64) -> Vec<(i32, i32)>;
}

/// In-memory backend: the default for fresh worlds and the workhorse for
/// tests. Keyed by seed like any other backend.
#[derive(Default)]
pub struct MemoryBackend {
    edits: HashMap<(i64, i32, i32), HexEditData>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EditBackend for MemoryBackend {
    fn load(&self, seed: i64, q: i32, r: i32) -> Option<HexEditData> {
        self.edits.get(&(seed, q, r)).cloned()
    }

    fn save(&mut self, seed: i64, edit: &HexEditData) -> bool {
        self.edits.insert((seed, edit.q, edit.r), edit.clone());
        true
    }

    fn delete(&mut self, seed: i64, q: i32, r: i32) -> bool {
        self.edits.remove(&(seed, q, r));
        true
    }

    fn exists(&self, seed: i64, q: i32, r: i32) -> bool {
        self.edits.contains_key(&(seed, q, r))
    }

    fn list_all(&self, seed: i64) -> Vec<(i32, i32)> {
        let mut coords: Vec<_> = self
            .edits
            .keys()
            .filter(|(s, _, _)| *s == seed)
            .map(|(_, q, r)| (*q, *r))
            .collect();
        coords.sort_unstable();
        coords
    }
}

/// The overlay store one `World` owns: a backend plus a memory cache of
/// successful loads. Enforces the empty-record rule: saving a record with
/// no overrides deletes any persisted copy instead.
pub struct EditOverlayStore {
    seed: i64,
    backend: Box<dyn EditBackend>,
    cache: HashMap<(i32, i32), HexEditData>,
}

impl EditOverlayStore {
    pub fn new(seed: i64, backend: Box<dyn EditBackend>) -> Self {
        Self {
            seed,
            backend,
            cache: HashMap::new(),
        }
    }

    /// Cache-first load. A backend miss (including a decode failure the
    /// backend swallowed) is simply "no edit data".
    pub fn load(&mut self, q: i32, r: i32) -> Option<&HexEditData> {
        if !self.cache.contains_key(&(q, r)) {
            let edit = self.backend.load(self.seed, q, r)?;
            self.cache.insert((q, r), edit);
        }
        self.cache.get(&(q, r))
    }

    /// Persist an edit, or delete the stored record when the edit has no
    /// overrides left. Returns false only on a backend failure.
    pub fn save(&mut self, mut edit: HexEditData) -> bool {
        let key = (edit.q, edit.r);
        if !edit.has_overrides() {
            let ok = self.backend.delete(self.seed, key.0, key.1);
            if ok {
                self.cache.remove(&key);
            }
            return ok;
        }

        edit.last_edited = Some(crate::now_epoch());
        if self.backend.save(self.seed, &edit) {
            self.cache.insert(key, edit);
            true
        } else {
            false
        }
    }

    pub fn exists(&self, q: i32, r: i32) -> bool {
        self.cache.contains_key(&(q, r)) || self.backend.exists(self.seed, q, r)
    }

    /// Coordinates of every persisted edit for this world's seed.
    pub fn edited_coords(&self) -> Vec<(i32, i32)> {
        self.backend.list_all(self.seed)
    }

    /// Drop cached records (used when the backing files changed underneath us).
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
