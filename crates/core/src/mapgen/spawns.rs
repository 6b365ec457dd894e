//! Entity placement onto distinct free floor tiles of a generated map.

use std::collections::BTreeSet;

use crate::config::GameConfig;
use crate::rng::Dice;
use crate::state::Map;
use crate::types::{Pos, TileKind};

/// Rejected draws tolerated per entity before placement falls back to a
/// deterministic scan. Keeps pathological configurations from spinning.
const MAX_PLACEMENT_DRAWS: usize = 1_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpawnSet {
    pub player: Pos,
    pub enemies: Vec<Pos>,
    pub potions: Vec<Pos>,
    pub weapons: Vec<Pos>,
}

/// Rejection-sample distinct free floor tiles in the fixed order
/// player -> enemies -> potions -> weapons, so later draws avoid all earlier
/// occupants. When a draw budget runs out the entity takes the first free
/// floor tile in row-major order instead; a map with fewer free tiles than
/// requested entities yields a truncated spawn set rather than a hang.
pub fn place_entities(map: &Map, config: &GameConfig, dice: &mut Dice) -> SpawnSet {
    let mut occupied: BTreeSet<Pos> = BTreeSet::new();

    let player = place_one(map, dice, &mut occupied)
        .expect("generated maps always contain at least one floor tile");
    let enemies = place_many(map, dice, &mut occupied, config.enemy_count);
    let potions = place_many(map, dice, &mut occupied, config.potion_count);
    let weapons = place_many(map, dice, &mut occupied, config.weapon_count);

    SpawnSet { player, enemies, potions, weapons }
}

fn place_many(
    map: &Map,
    dice: &mut Dice,
    occupied: &mut BTreeSet<Pos>,
    count: usize,
) -> Vec<Pos> {
    let mut placed = Vec::with_capacity(count);
    for _ in 0..count {
        let Some(pos) = place_one(map, dice, occupied) else {
            break;
        };
        placed.push(pos);
    }
    placed
}

fn place_one(map: &Map, dice: &mut Dice, occupied: &mut BTreeSet<Pos>) -> Option<Pos> {
    for _ in 0..MAX_PLACEMENT_DRAWS {
        let candidate = Pos {
            y: dice.roll(0, map.height as i32 - 1),
            x: dice.roll(0, map.width as i32 - 1),
        };
        if map.is_walkable(candidate) && occupied.insert(candidate) {
            return Some(candidate);
        }
    }
    first_free_floor_tile(map, occupied).inspect(|&pos| {
        occupied.insert(pos);
    })
}

fn first_free_floor_tile(map: &Map, occupied: &BTreeSet<Pos>) -> Option<Pos> {
    for y in 0..map.height {
        for x in 0..map.width {
            let pos = Pos { y: y as i32, x: x as i32 };
            if map.tile_at(pos) == TileKind::Floor && !occupied.contains(&pos) {
                return Some(pos);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapgen;

    #[test]
    fn default_config_places_every_entity_on_distinct_floor() {
        let config = GameConfig::default();
        let mut dice = Dice::from_seed(2_024);
        let map = mapgen::generate(&config, &mut dice);
        let spawns = place_entities(&map, &config, &mut dice);

        assert_eq!(spawns.enemies.len(), config.enemy_count);
        assert_eq!(spawns.potions.len(), config.potion_count);
        assert_eq!(spawns.weapons.len(), config.weapon_count);

        let mut all = vec![spawns.player];
        all.extend(&spawns.enemies);
        all.extend(&spawns.potions);
        all.extend(&spawns.weapons);
        let distinct: BTreeSet<Pos> = all.iter().copied().collect();
        assert_eq!(distinct.len(), all.len(), "placements must not overlap");
        assert!(all.iter().all(|&pos| map.is_walkable(pos)));
    }

    #[test]
    fn crowded_map_truncates_instead_of_spinning() {
        // Four floor tiles for one player and ten requested enemies.
        let mut map = Map::new(8, 8);
        for pos in [
            Pos { y: 2, x: 2 },
            Pos { y: 2, x: 3 },
            Pos { y: 3, x: 2 },
            Pos { y: 3, x: 3 },
        ] {
            map.set_tile(pos, TileKind::Floor);
        }
        let config = GameConfig { enemy_count: 10, potion_count: 5, ..GameConfig::default() };
        let spawns = place_entities(&map, &config, &mut Dice::from_seed(9));

        assert_eq!(spawns.enemies.len(), 3);
        assert!(spawns.potions.is_empty());
        assert!(spawns.weapons.is_empty());
    }

    #[test]
    fn placement_is_deterministic_for_a_seed() {
        let config = GameConfig::default();
        let map = mapgen::generate(&config, &mut Dice::from_seed(31));

        let mut dice_a = Dice::from_seed(500);
        let mut dice_b = Dice::from_seed(500);
        assert_eq!(
            place_entities(&map, &config, &mut dice_a),
            place_entities(&map, &config, &mut dice_b)
        );
    }
}
