//! Position-seeded procedural generation.
//!
//! Both generators are pure functions of `(world_seed, coordinate, inputs)`:
//! each decision builds a fresh [`rand_chacha::ChaCha8Rng`] from a seed
//! derived from the coordinate, draws what it needs, and drops the stream.
//! No generator state survives between calls, so results are independent of
//! call order and safe to recompute at any time.

mod settlement;
pub mod tables;
mod terrain;

pub use settlement::SettlementGenerator;
pub use terrain::TerrainGenerator;
