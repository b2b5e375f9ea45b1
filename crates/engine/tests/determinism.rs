//! End-to-end determinism tests: a world is a pure function of its seed
//! and the order coordinates were first materialized in.

use hexroam_engine::coords::HexCoord;
use hexroam_engine::edit::HexEditData;
use hexroam_engine::terrain::TerrainType;
use hexroam_engine::viewport::Viewport;
use hexroam_engine::world::World;

/// A deterministic wandering path: the materialization-order fixture every
/// replay test shares.
fn walk_path() -> Vec<HexCoord> {
    let mut path = vec![HexCoord::new(0, 0)];
    let steps = [
        (1, 0), (1, 0), (0, 1), (1, -1), (0, 1), (1, 0), (-1, 1), (0, 1),
        (1, 0), (1, -1), (0, -1), (1, 0), (0, 1), (1, 0), (1, 0), (0, 1),
    ];
    let mut current = HexCoord::new(0, 0);
    for (dq, dr) in steps {
        current = HexCoord::new(current.q + dq, current.r + dr);
        path.push(current);
    }
    path
}

fn replay(seed: i64) -> World {
    let mut world = World::new(seed);
    let mut viewport = Viewport::new(3, 5);
    for center in walk_path() {
        viewport.update(&mut world, center);
    }
    world
}

#[test]
fn identical_replays_are_bit_identical() {
    let a = replay(42);
    let b = replay(42);

    assert_eq!(a.hex_count(), b.hex_count());
    for hex_a in a.iter() {
        let hex_b = b.get(hex_a.coord).expect("same coordinate set");
        assert_eq!(hex_a.terrain(), hex_b.terrain(), "terrain at {}", hex_a.coord);
        assert_eq!(
            hex_a.settlement_data, hex_b.settlement_data,
            "settlement at {}",
            hex_a.coord
        );
    }
}

#[test]
fn different_seeds_produce_different_worlds() {
    let a = replay(42);
    let b = replay(43);

    let diverged = a.iter().any(|hex_a| {
        b.get(hex_a.coord)
            .map(|hex_b| hex_a.terrain() != hex_b.terrain())
            .unwrap_or(true)
    });
    assert!(diverged, "seeds 42 and 43 generated identical terrain everywhere");
}

#[test]
fn materialization_order_does_not_change_isolated_terrain() {
    // Terrain at a coordinate with no materialized neighbors depends only
    // on (seed, coordinate): generating (50, 50) first or last must agree,
    // because nothing near it exists in either world.
    let far = HexCoord::new(50, 50);

    let mut early = World::new(7);
    let terrain_early = early.get_or_generate(far).terrain();

    let mut late = replay(7);
    let terrain_late = late.get_or_generate(far).terrain();

    assert_eq!(terrain_early, terrain_late);
}

#[test]
fn cube_invariant_and_containment_hold_over_a_replay() {
    let mut world = World::new(1234);
    let mut viewport = Viewport::new(3, 5);
    for center in walk_path() {
        viewport.update(&mut world, center);

        for hex in viewport.visible_hexes(&mut world) {
            assert_eq!(hex.coord.q + hex.coord.r + hex.coord.s(), 0);
            assert!(hex.coord.distance(center) <= 3);
        }
    }
    // Everything visible was materialized along the way.
    let visible: Vec<HexCoord> = {
        let mut v = Viewport::new(3, 5);
        v.update(&mut world, *walk_path().last().unwrap());
        v.visible_hexes(&mut world).iter().map(|h| h.coord).collect()
    };
    for coord in visible {
        assert!(world.contains(coord));
    }
}

#[test]
fn names_replay_identically_and_stay_unique() {
    let a = replay(2024);
    let b = replay(2024);

    let names_a: Vec<String> = a
        .iter()
        .filter_map(|h| h.settlement_data.as_ref())
        .map(|s| s.name.clone())
        .collect();
    let names_b: Vec<String> = b
        .iter()
        .filter_map(|h| h.settlement_data.as_ref())
        .map(|s| s.name.clone())
        .collect();

    assert_eq!(names_a, names_b, "naming depends only on seed and traversal order");

    let mut deduped = names_a.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), names_a.len());
}

#[test]
fn ruin_settlements_are_empty_everywhere() {
    let world = replay(555);
    for hex in world.iter() {
        if let Some(settlement) = &hex.settlement_data {
            if settlement.settlement_type.is_ruins() {
                assert_eq!(settlement.population, 0);
            } else {
                let (min, max) = settlement.settlement_type.population_range();
                assert!(settlement.population >= min && settlement.population <= max);
            }
        }
    }
}

#[test]
fn edits_survive_regeneration_pressure() {
    let mut world = replay(321);
    let coord = HexCoord::new(2, 1);
    world.get_or_generate(coord);

    let mut edit = HexEditData::new(coord.q, coord.r);
    edit.override_terrain = true;
    edit.terrain_type = Some("Mountains".into());
    edit.notes = "the pass is watched".into();
    assert!(world.save_hex_edit(edit));

    // Heavy traffic around the edited hex must not disturb the override.
    let mut viewport = Viewport::new(3, 5);
    for center in walk_path() {
        viewport.update(&mut world, center);
    }
    assert_eq!(world.get_or_generate(coord).terrain(), TerrainType::Mountains);
}
