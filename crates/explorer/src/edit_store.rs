//! On-disk edit overlays: one JSON file per edited hex.
//!
//! Files live under `<root>/<seed>/` and are named
//! `{seed}_{q:+04}_{r:+04}.json`, so every seed's edits are isolated both
//! by directory and by filename prefix. A record that fails to decode is
//! logged and treated as absent -- a corrupt edit never blocks generation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use hexroam_engine::edit::{EditBackend, HexEditData};

// ── Edit document (serde) ───────────────────────────────────────────────────

fn default_version() -> u32 {
    1
}

/// Disk mirror of [`HexEditData`]. Every field is defaulted so partially
/// written documents from older editor versions still load.
#[derive(Serialize, Deserialize, Debug)]
struct EditDoc {
    q: i32,
    r: i32,
    #[serde(default)]
    custom_name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    notes: String,
    #[serde(default)]
    override_terrain: bool,
    #[serde(default)]
    override_settlement: bool,
    #[serde(default)]
    terrain_type: Option<String>,
    #[serde(default)]
    settlement_name: Option<String>,
    #[serde(default)]
    settlement_type: Option<String>,
    #[serde(default)]
    settlement_population: Option<u32>,
    #[serde(default)]
    explored: Option<bool>,
    #[serde(default)]
    exploration_level: Option<u8>,
    #[serde(default)]
    image_files: Vec<String>,
    #[serde(default)]
    audio_file: Option<String>,
    #[serde(default)]
    last_edited: Option<u64>,
    #[serde(default = "default_version")]
    version: u32,
}

impl From<&HexEditData> for EditDoc {
    fn from(edit: &HexEditData) -> Self {
        Self {
            q: edit.q,
            r: edit.r,
            custom_name: edit.custom_name.clone(),
            description: edit.description.clone(),
            notes: edit.notes.clone(),
            override_terrain: edit.override_terrain,
            override_settlement: edit.override_settlement,
            terrain_type: edit.terrain_type.clone(),
            settlement_name: edit.settlement_name.clone(),
            settlement_type: edit.settlement_type.clone(),
            settlement_population: edit.settlement_population,
            explored: edit.explored,
            exploration_level: edit.exploration_level,
            image_files: edit.image_files.clone(),
            audio_file: edit.audio_file.clone(),
            last_edited: edit.last_edited,
            version: edit.version,
        }
    }
}

impl From<EditDoc> for HexEditData {
    fn from(doc: EditDoc) -> Self {
        Self {
            q: doc.q,
            r: doc.r,
            custom_name: doc.custom_name,
            description: doc.description,
            notes: doc.notes,
            override_terrain: doc.override_terrain,
            override_settlement: doc.override_settlement,
            terrain_type: doc.terrain_type,
            settlement_name: doc.settlement_name,
            settlement_type: doc.settlement_type,
            settlement_population: doc.settlement_population,
            explored: doc.explored,
            exploration_level: doc.exploration_level,
            image_files: doc.image_files,
            audio_file: doc.audio_file,
            last_edited: doc.last_edited,
            version: doc.version,
        }
    }
}

// ── Filename scheme ─────────────────────────────────────────────────────────

fn filename(seed: i64, q: i32, r: i32) -> String {
    format!("{seed}_{q:+04}_{r:+04}.json")
}

/// Parse `{seed}_{q}_{r}.json` back to coordinates. Anything else in the
/// directory is skipped by the caller.
fn parse_filename(name: &str) -> Option<(i32, i32)> {
    let stem = name.strip_suffix(".json")?;
    let parts: Vec<&str> = stem.split('_').collect();
    if parts.len() != 3 {
        return None;
    }
    let q = parts[1].parse().ok()?;
    let r = parts[2].parse().ok()?;
    Some((q, r))
}

// ── Backend ─────────────────────────────────────────────────────────────────

/// File-backed [`EditBackend`] rooted at a directory.
pub struct JsonEditBackend {
    root: PathBuf,
}

impl JsonEditBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn seed_dir(&self, seed: i64) -> PathBuf {
        self.root.join(seed.to_string())
    }

    fn path_for(&self, seed: i64, q: i32, r: i32) -> PathBuf {
        self.seed_dir(seed).join(filename(seed, q, r))
    }
}

impl EditBackend for JsonEditBackend {
    fn load(&self, seed: i64, q: i32, r: i32) -> Option<HexEditData> {
        let path = self.path_for(seed, q, r);
        if !path.exists() {
            return None;
        }
        match read_edit(&path) {
            Ok(edit) => Some(edit),
            Err(e) => {
                tracing::warn!(
                    q,
                    r,
                    path = %path.display(),
                    error = %e,
                    "unreadable hex edit; treating as absent"
                );
                None
            }
        }
    }

    fn save(&mut self, seed: i64, edit: &HexEditData) -> bool {
        let dir = self.seed_dir(seed);
        if let Err(e) = fs::create_dir_all(&dir) {
            tracing::warn!(path = %dir.display(), error = %e, "cannot create edit directory");
            return false;
        }
        let path = self.path_for(seed, edit.q, edit.r);
        let doc = EditDoc::from(edit);
        let json = match serde_json::to_string_pretty(&doc) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "cannot serialize hex edit");
                return false;
            }
        };
        match fs::write(&path, json) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot write hex edit");
                false
            }
        }
    }

    fn delete(&mut self, seed: i64, q: i32, r: i32) -> bool {
        let path = self.path_for(seed, q, r);
        if !path.exists() {
            return true;
        }
        match fs::remove_file(&path) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot delete hex edit");
                false
            }
        }
    }

    fn exists(&self, seed: i64, q: i32, r: i32) -> bool {
        self.path_for(seed, q, r).exists()
    }

    fn list_all(&self, seed: i64) -> Vec<(i32, i32)> {
        let dir = self.seed_dir(seed);
        let Ok(entries) = fs::read_dir(&dir) else {
            return Vec::new(); // no directory means no edits yet
        };
        let mut coords = Vec::new();
        for entry in entries.flatten() {
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            match parse_filename(name) {
                Some(coord) => coords.push(coord),
                None => {
                    tracing::debug!(name, "skipping unexpected file in edit directory");
                }
            }
        }
        coords.sort_unstable();
        coords
    }
}

fn read_edit(path: &Path) -> Result<HexEditData, anyhow::Error> {
    let raw = fs::read_to_string(path)?;
    let doc: EditDoc = serde_json::from_str(&raw)?;
    Ok(doc.into())
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_backend(name: &str) -> (JsonEditBackend, PathBuf) {
        let dir = std::env::temp_dir().join("hexroam_test_edits").join(name);
        let _ = fs::remove_dir_all(&dir);
        (JsonEditBackend::new(&dir), dir)
    }

    fn sample_edit(q: i32, r: i32) -> HexEditData {
        let mut edit = HexEditData::new(q, r);
        edit.custom_name = "The Old Crossing".into();
        edit.notes = "toll bridge, 2cp".into();
        edit.override_terrain = true;
        edit.terrain_type = Some("Water".into());
        edit
    }

    #[test]
    fn filename_scheme_round_trips() {
        assert_eq!(filename(42, 1, -2), "42_+001_-002.json");
        assert_eq!(parse_filename("42_+001_-002.json"), Some((1, -2)));
        assert_eq!(parse_filename("-7_-015_+120.json"), Some((-15, 120)));
        assert_eq!(parse_filename("notes.txt"), None);
        assert_eq!(parse_filename("brokenname.json"), None);
    }

    #[test]
    fn save_load_round_trip() {
        let (mut backend, dir) = temp_backend("roundtrip");
        let edit = sample_edit(3, -4);
        assert!(backend.save(42, &edit));
        assert!(backend.exists(42, 3, -4));

        let loaded = backend.load(42, 3, -4).expect("saved edit loads");
        assert_eq!(loaded, edit);
        assert_eq!(backend.list_all(42), vec![(3, -4)]);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn seeds_do_not_leak() {
        let (mut backend, dir) = temp_backend("isolation");
        assert!(backend.save(1, &sample_edit(0, 0)));

        assert!(backend.load(2, 0, 0).is_none());
        assert!(!backend.exists(2, 0, 0));
        assert!(backend.list_all(2).is_empty());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn delete_removes_the_file() {
        let (mut backend, dir) = temp_backend("delete");
        assert!(backend.save(9, &sample_edit(5, 5)));
        assert!(backend.delete(9, 5, 5));
        assert!(!backend.exists(9, 5, 5));
        assert!(backend.load(9, 5, 5).is_none());
        // Deleting a record that never existed still succeeds.
        assert!(backend.delete(9, 8, 8));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn corrupt_record_reads_as_absent() {
        let (backend, dir) = temp_backend("corrupt");
        let path = backend.path_for(3, 1, 1);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{{{ definitely not json").unwrap();

        assert!(backend.exists(3, 1, 1));
        assert!(backend.load(3, 1, 1).is_none());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn partial_document_still_loads() {
        let (backend, dir) = temp_backend("partial");
        let path = backend.path_for(4, 2, 2);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"q": 2, "r": 2, "notes": "old-format record"}"#).unwrap();

        let edit = backend.load(4, 2, 2).expect("partial doc loads");
        assert_eq!(edit.notes, "old-format record");
        assert_eq!(edit.version, 1);
        assert!(!edit.override_terrain);

        let _ = fs::remove_dir_all(&dir);
    }
}
