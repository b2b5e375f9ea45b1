//! Deterministic infinite hex world generation.
//!
//! The engine is the spatial substrate: an unbounded axial hex grid whose
//! terrain and settlements are synthesized on first access and memoized
//! forever after. Every generated value is a pure function of the world
//! seed, the coordinate, and the terrains of already-materialized
//! neighbors -- revisiting a coordinate always yields identical content.
//!
//! File I/O lives outside this crate. Persistence codecs and the edit
//! overlay's on-disk backend are supplied by the application layer; the
//! engine only defines the [`edit::EditBackend`] contract they implement.

pub mod coords;
pub mod edit;
pub mod generation;
pub mod settlement;
pub mod terrain;
pub mod travel;
pub mod viewport;
pub mod world;

use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds since the Unix epoch, saturating to 0 on a pre-epoch clock.
pub(crate) fn now_epoch() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
