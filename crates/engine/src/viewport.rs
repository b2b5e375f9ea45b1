//! Viewport-driven loading: keep everything near the camera materialized.

use std::collections::HashSet;

use crate::coords::HexCoord;
use crate::world::{Hex, World};

/// Hexes visible in each direction from the center.
pub const DEFAULT_VISIBLE_RADIUS: i32 = 15;
/// Materialization headroom beyond the visible radius, so small camera
/// moves never generate mid-frame.
pub const DEFAULT_BUFFER_RADIUS: i32 = 20;

/// A moving window over the world. The viewport never creates hexes
/// itself -- it only asks the world to materialize them -- and it never
/// unloads: distant hexes stay resident (eviction is deferred future
/// work, the store grows monotonically).
pub struct Viewport {
    center: HexCoord,
    visible_radius: i32,
    buffer_radius: i32,
    loaded: HashSet<HexCoord>,
}

impl Viewport {
    /// `visible_radius` must not exceed `buffer_radius`; the visible set
    /// is always a subset of the loaded buffer.
    pub fn new(visible_radius: i32, buffer_radius: i32) -> Self {
        debug_assert!(visible_radius <= buffer_radius);
        Self {
            center: HexCoord::new(0, 0),
            visible_radius,
            buffer_radius,
            loaded: HashSet::new(),
        }
    }

    pub fn center(&self) -> HexCoord {
        self.center
    }

    pub fn visible_radius(&self) -> i32 {
        self.visible_radius
    }

    pub fn buffer_radius(&self) -> i32 {
        self.buffer_radius
    }

    /// Move the center and materialize every coordinate within the buffer
    /// radius (cube-distance filter over the axial bounding square).
    pub fn update(&mut self, world: &mut World, new_center: HexCoord) {
        self.center = new_center;

        let mut loaded = HashSet::new();
        for q in (new_center.q - self.buffer_radius)..=(new_center.q + self.buffer_radius) {
            for r in (new_center.r - self.buffer_radius)..=(new_center.r + self.buffer_radius) {
                let coord = HexCoord::new(q, r);
                if coord.distance(new_center) <= self.buffer_radius {
                    world.get_or_generate(coord);
                    loaded.insert(coord);
                }
            }
        }
        self.loaded = loaded;
    }

    /// The rendering-facing subset: everything within the visible radius.
    pub fn visible_hexes<'w>(&self, world: &'w mut World) -> Vec<&'w Hex> {
        world.hexes_in_range(self.center, self.visible_radius)
    }

    pub fn is_visible(&self, coord: HexCoord) -> bool {
        coord.distance(self.center) <= self.visible_radius
    }

    /// How many coordinates the last `update` guaranteed materialized.
    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_loaded(&self, coord: HexCoord) -> bool {
        self.loaded.contains(&coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_materializes_the_buffer() {
        let mut world = World::new(10);
        let mut viewport = Viewport::new(2, 3);
        let center = HexCoord::new(5, -5);
        viewport.update(&mut world, center);

        // 1 + 3·r·(r+1) for r = 3.
        assert_eq!(viewport.loaded_count(), 37);
        assert!(world.hex_count() >= 37);
        for q in (center.q - 3)..=(center.q + 3) {
            for r in (center.r - 3)..=(center.r + 3) {
                let coord = HexCoord::new(q, r);
                if coord.distance(center) <= 3 {
                    assert!(world.contains(coord));
                    assert!(viewport.is_loaded(coord));
                }
            }
        }
    }

    #[test]
    fn visible_set_is_within_radius_and_loaded() {
        let mut world = World::new(20);
        let mut viewport = Viewport::new(2, 4);
        let center = HexCoord::new(0, 0);
        viewport.update(&mut world, center);

        let visible: Vec<HexCoord> = viewport
            .visible_hexes(&mut world)
            .iter()
            .map(|h| h.coord)
            .collect();
        assert_eq!(visible.len(), 19);
        for coord in visible {
            assert!(coord.distance(center) <= 2);
            assert!(viewport.is_visible(coord));
            assert!(viewport.is_loaded(coord));
            assert!(world.contains(coord));
        }
    }

    #[test]
    fn moving_keeps_old_hexes_resident() {
        let mut world = World::new(30);
        let mut viewport = Viewport::new(1, 2);
        viewport.update(&mut world, HexCoord::new(0, 0));
        let before = world.hex_count();

        viewport.update(&mut world, HexCoord::new(10, 0));
        // No eviction: the old neighborhood is still materialized.
        assert!(world.hex_count() > before);
        assert!(world.contains(HexCoord::new(0, 0)));
        // But it is no longer part of the tracked buffer.
        assert!(!viewport.is_loaded(HexCoord::new(0, 0)));
    }
}
