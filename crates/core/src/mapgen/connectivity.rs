//! Connected-component analysis and repair.
//! Guarantees the single-floor-region invariant every other component leans on.

use std::collections::{BTreeSet, VecDeque};

use crate::state::Map;
use crate::types::{Pos, TileKind};

/// Carve L-shaped corridors between the closest cells of separate floor
/// components until exactly one remains. Each carve merges at least two
/// components, so the loop terminates for any finite floor area.
pub(super) fn repair(map: &mut Map) {
    loop {
        let components = floor_components(map);
        if components.len() <= 1 {
            return;
        }
        let (from, to) = closest_pair(&components[0], &components[1]);
        carve_l_corridor(map, from, to);
    }
}

/// All floor components, discovered in row-major order by 4-directional BFS.
pub(crate) fn floor_components(map: &Map) -> Vec<Vec<Pos>> {
    let mut seen: BTreeSet<Pos> = BTreeSet::new();
    let mut components = Vec::new();
    for y in 0..map.height {
        for x in 0..map.width {
            let start = Pos { y: y as i32, x: x as i32 };
            if map.tile_at(start) != TileKind::Floor || seen.contains(&start) {
                continue;
            }
            components.push(flood_fill(map, start, &mut seen));
        }
    }
    components
}

fn flood_fill(map: &Map, start: Pos, seen: &mut BTreeSet<Pos>) -> Vec<Pos> {
    let mut component = Vec::new();
    let mut queue = VecDeque::from([start]);
    seen.insert(start);
    while let Some(current) = queue.pop_front() {
        component.push(current);
        for neighbor in [
            Pos { y: current.y - 1, x: current.x },
            Pos { y: current.y, x: current.x + 1 },
            Pos { y: current.y + 1, x: current.x },
            Pos { y: current.y, x: current.x - 1 },
        ] {
            if map.tile_at(neighbor) == TileKind::Floor && seen.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }
    component
}

/// Exhaustive pairwise scan for the minimum Manhattan distance. Quadratic,
/// fine at this map scale.
fn closest_pair(left: &[Pos], right: &[Pos]) -> (Pos, Pos) {
    let mut best = (left[0], right[0]);
    let mut best_distance = u32::MAX;
    for &a in left {
        for &b in right {
            let distance = a.x.abs_diff(b.x) + a.y.abs_diff(b.y);
            if distance < best_distance {
                best_distance = distance;
                best = (a, b);
            }
        }
    }
    best
}

/// Horizontal run to align x, then vertical run to align y, converting only
/// wall cells. Both endpoints are interior floor, so the runs stay off the
/// border ring.
fn carve_l_corridor(map: &mut Map, from: Pos, to: Pos) {
    let mut x = from.x;
    let y = from.y;
    while x != to.x {
        carve_if_wall(map, Pos { y, x });
        x += if to.x > x { 1 } else { -1 };
    }
    let mut y = from.y;
    while y != to.y {
        carve_if_wall(map, Pos { y, x });
        y += if to.y > y { 1 } else { -1 };
    }
}

fn carve_if_wall(map: &mut Map, pos: Pos) {
    if map.tile_at(pos) == TileKind::Wall {
        map.set_tile(pos, TileKind::Floor);
    }
}
