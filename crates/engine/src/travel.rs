//! Overland movement costs and reachability.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::coords::HexCoord;
use crate::world::World;

/// Cost of stepping from `from` onto `to`. `None` for non-adjacent pairs
/// and for impassable destination terrain (water without a boat).
/// Materializes the destination if needed.
pub fn movement_cost(world: &mut World, from: HexCoord, to: HexCoord) -> Option<f64> {
    if from.distance(to) != 1 {
        return None;
    }
    world.get_or_generate(to).terrain().movement_cost()
}

/// Every hex reachable from `start` within a movement-point budget,
/// by uniform-cost frontier expansion. `start` itself is not included.
pub fn reachable_hexes(
    world: &mut World,
    start: HexCoord,
    movement_points: f64,
) -> HashSet<HexCoord> {
    let mut reachable = HashSet::new();
    let mut best_cost: HashMap<HexCoord, f64> = HashMap::from([(start, 0.0)]);
    let mut frontier: VecDeque<(HexCoord, f64)> = VecDeque::from([(start, 0.0)]);

    while let Some((current, current_cost)) = frontier.pop_front() {
        for neighbor in current.neighbors() {
            let Some(step) = movement_cost(world, current, neighbor) else {
                continue;
            };
            let cost = current_cost + step;
            if cost > movement_points {
                continue;
            }
            let improved = best_cost.get(&neighbor).is_none_or(|&known| cost < known);
            if improved {
                best_cost.insert(neighbor, cost);
                frontier.push_back((neighbor, cost));
                reachable.insert(neighbor);
            }
        }
    }

    reachable
}
