//! Room placement and corridor carving for the base map topology.
//! Rooms may overlap freely; the carved union is what counts. Connectivity is
//! someone else's problem (`connectivity::repair`).

use crate::config::GameConfig;
use crate::rng::Dice;
use crate::state::Map;
use crate::types::{Pos, TileKind};

pub(super) fn carve_rooms(map: &mut Map, config: &GameConfig, dice: &mut Dice) {
    let room_count = dice.roll_usize(config.min_rooms, config.max_rooms);
    for _ in 0..room_count {
        let room_width = dice.roll_usize(config.min_room_width, config.max_room_width);
        let room_height = dice.roll_usize(config.min_room_height, config.max_room_height);
        carve_random_room(map, dice, room_width, room_height);
    }

    // A configuration whose rooms never fit would otherwise leave solid rock;
    // placement downstream expects at least one patch of floor.
    if map.tiles.iter().all(|&tile| tile == TileKind::Wall) {
        let room_width = config.min_room_width.min(map.width.saturating_sub(2)).max(1);
        let room_height = config.min_room_height.min(map.height.saturating_sub(2)).max(1);
        let origin_x = map.width / 3;
        let origin_y = map.height / 3;
        carve_rect(map, origin_x, origin_y, room_width, room_height);
    }
}

fn carve_random_room(map: &mut Map, dice: &mut Dice, room_width: usize, room_height: usize) {
    // The origin range keeps the room strictly inside the border ring.
    if room_width + 2 >= map.width || room_height + 2 >= map.height {
        return;
    }
    let origin_x = dice.roll_usize(1, map.width - room_width - 2);
    let origin_y = dice.roll_usize(1, map.height - room_height - 2);
    carve_rect(map, origin_x, origin_y, room_width, room_height);
}

fn carve_rect(map: &mut Map, origin_x: usize, origin_y: usize, width: usize, height: usize) {
    for y in origin_y..origin_y + height {
        for x in origin_x..origin_x + width {
            map.set_tile(Pos { y: y as i32, x: x as i32 }, TileKind::Floor);
        }
    }
}

/// Full-span corridors: horizontal ones cross every interior column at a
/// random row, vertical ones every interior row at a random column.
pub(super) fn carve_corridors(map: &mut Map, config: &GameConfig, dice: &mut Dice) {
    if map.width < 3 || map.height < 3 {
        return;
    }

    let horizontal = dice.roll_usize(config.min_corridors, config.max_corridors);
    for _ in 0..horizontal {
        let y = dice.roll_usize(1, map.height - 2) as i32;
        for x in 1..map.width - 1 {
            map.set_tile(Pos { y, x: x as i32 }, TileKind::Floor);
        }
    }

    let vertical = dice.roll_usize(config.min_corridors, config.max_corridors);
    for _ in 0..vertical {
        let x = dice.roll_usize(1, map.width - 2) as i32;
        for y in 1..map.height - 1 {
            map.set_tile(Pos { y: y as i32, x }, TileKind::Floor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rooms_never_touch_the_border_ring() {
        let config = GameConfig::default();
        let mut map = Map::new(config.map_width, config.map_height);
        carve_rooms(&mut map, &config, &mut Dice::from_seed(11));

        let right = map.width as i32 - 1;
        let bottom = map.height as i32 - 1;
        for x in 0..map.width as i32 {
            assert_eq!(map.tile_at(Pos { y: 0, x }), TileKind::Wall);
            assert_eq!(map.tile_at(Pos { y: bottom, x }), TileKind::Wall);
        }
        for y in 0..map.height as i32 {
            assert_eq!(map.tile_at(Pos { y, x: 0 }), TileKind::Wall);
            assert_eq!(map.tile_at(Pos { y, x: right }), TileKind::Wall);
        }
    }

    #[test]
    fn unfittable_rooms_fall_back_to_a_single_carved_patch() {
        let config = GameConfig {
            map_width: 5,
            map_height: 5,
            min_room_width: 10,
            max_room_width: 12,
            min_room_height: 10,
            max_room_height: 12,
            ..GameConfig::default()
        };
        let mut map = Map::new(config.map_width, config.map_height);
        carve_rooms(&mut map, &config, &mut Dice::from_seed(3));
        assert!(map.tiles.iter().any(|&tile| tile == TileKind::Floor));
    }

    #[test]
    fn horizontal_corridors_span_every_interior_column() {
        let config =
            GameConfig { min_corridors: 1, max_corridors: 1, ..GameConfig::default() };
        let mut map = Map::new(config.map_width, config.map_height);
        carve_corridors(&mut map, &config, &mut Dice::from_seed(5));

        let carved_row = (1..map.height as i32 - 1)
            .find(|&y| (1..map.width as i32 - 1).all(|x| map.is_walkable(Pos { y, x })))
            .expect("one horizontal corridor must span the interior");
        assert_eq!(map.tile_at(Pos { y: carved_row, x: 0 }), TileKind::Wall);
        assert_eq!(map.tile_at(Pos { y: carved_row, x: map.width as i32 - 1 }), TileKind::Wall);
    }
}
