//! Deterministic shortest-path search for the enemy AI.
//! This module exists so pathing rules stay independent of turn resolution.
//! It does not own path caching or any movement policy.

use std::collections::{BTreeMap, BTreeSet};

use crate::state::Map;
use crate::types::Pos;

/// Open-set entry ordered by `(f, h, y, x)`: `pop_first` always yields the
/// cheapest node, with ties broken by lower heuristic, then position. The
/// fixed tie-break keeps enemy routes reproducible across runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct OpenNode {
    f: u32,
    h: u32,
    y: i32,
    x: i32,
}

/// Grid A* with the Manhattan heuristic over 4-directional unit steps. Walls
/// are the only obstacles. The returned path excludes `start` and ends at
/// `goal`; `None` when no route exists, empty when `start == goal`.
pub(crate) fn astar_path(map: &Map, start: Pos, goal: Pos) -> Option<Vec<Pos>> {
    if !map.is_walkable(start) || !map.is_walkable(goal) {
        return None;
    }
    if start == goal {
        return Some(Vec::new());
    }

    let mut open_set = BTreeSet::new();
    let mut open_entries: BTreeMap<Pos, OpenNode> = BTreeMap::new();
    let mut came_from: BTreeMap<Pos, Pos> = BTreeMap::new();
    let mut g_score: BTreeMap<Pos, u32> = BTreeMap::new();

    let start_h = manhattan(start, goal);
    let start_node = OpenNode { f: start_h, h: start_h, y: start.y, x: start.x };
    open_set.insert(start_node);
    open_entries.insert(start, start_node);
    g_score.insert(start, 0);

    while let Some(current_node) = open_set.pop_first() {
        let current = Pos { y: current_node.y, x: current_node.x };
        open_entries.remove(&current);

        if current == goal {
            return Some(reconstruct_path(&came_from, start, goal));
        }

        let current_g = *g_score.get(&current).expect("expanded node must have a g-score");

        for neighbor in neighbors(current) {
            if !map.is_walkable(neighbor) {
                continue;
            }

            let tentative_g = current_g + 1;
            let existing_g = g_score.get(&neighbor).copied().unwrap_or(u32::MAX);
            if tentative_g >= existing_g {
                continue;
            }

            // Improved route to an already-open node: replace its entry.
            if let Some(existing_node) = open_entries.remove(&neighbor) {
                open_set.remove(&existing_node);
            }

            came_from.insert(neighbor, current);
            g_score.insert(neighbor, tentative_g);

            let h = manhattan(neighbor, goal);
            let node = OpenNode { f: tentative_g + h, h, y: neighbor.y, x: neighbor.x };
            open_set.insert(node);
            open_entries.insert(neighbor, node);
        }
    }

    None
}

fn reconstruct_path(came_from: &BTreeMap<Pos, Pos>, start: Pos, goal: Pos) -> Vec<Pos> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        current = *came_from.get(&current).expect("path must be reconstructible");
        path.push(current);
    }
    path.reverse();
    path.remove(0);
    path
}

pub(crate) fn neighbors(pos: Pos) -> [Pos; 4] {
    [
        Pos { y: pos.y - 1, x: pos.x },
        Pos { y: pos.y, x: pos.x + 1 },
        Pos { y: pos.y + 1, x: pos.x },
        Pos { y: pos.y, x: pos.x - 1 },
    ]
}

pub(crate) fn manhattan(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}
