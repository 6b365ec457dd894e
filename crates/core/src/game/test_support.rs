//! Shared fixtures for the `game` submodule test suites.
//! This module exists to avoid repeating map and actor setup across tests.
//! It does not own production gameplay logic.

use std::collections::VecDeque;

use super::*;
use crate::state::{Enemy, Item, Map};
use crate::types::{EnemyId, ItemId, Pos, TileKind};

/// A seeded game rebuilt around an open walled arena with the player at the
/// center and no enemies or items. Tests add what they need.
pub(super) fn arena_game(width: usize, height: usize) -> Game {
    let mut game = Game::new(7);
    game.state.map = open_map(width, height);
    game.state.player.pos = Pos { y: height as i32 / 2, x: width as i32 / 2 };
    game.state.enemies.clear();
    game.state.potions.clear();
    game.state.weapons.clear();
    game.log.clear();
    game.turn = 0;
    game
}

/// Like [`arena_game`] but with a single-file corridor along row 3
/// (columns 1..width-1); the player starts at its west end.
pub(super) fn corridor_game(width: usize) -> Game {
    let mut game = arena_game(width, 7);
    let mut map = Map::new(width, 7);
    for x in 1..(width as i32 - 1) {
        map.set_tile(Pos { y: 3, x }, TileKind::Floor);
    }
    game.state.map = map;
    game.state.player.pos = Pos { y: 3, x: 1 };
    game
}

pub(super) fn open_map(width: usize, height: usize) -> Map {
    let mut map = Map::new(width, height);
    for y in 1..(height as i32 - 1) {
        for x in 1..(width as i32 - 1) {
            map.set_tile(Pos { y, x }, TileKind::Floor);
        }
    }
    map
}

pub(super) fn add_enemy(game: &mut Game, pos: Pos) -> EnemyId {
    let id = game.state.enemies.insert(Enemy {
        id: EnemyId::default(),
        pos,
        hp: 30,
        path: VecDeque::new(),
    });
    game.state.enemies[id].id = id;
    id
}

pub(super) fn add_potion(game: &mut Game, pos: Pos) -> ItemId {
    let id = game.state.potions.insert(Item { id: ItemId::default(), pos });
    game.state.potions[id].id = id;
    id
}

pub(super) fn add_weapon(game: &mut Game, pos: Pos) -> ItemId {
    let id = game.state.weapons.insert(Item { id: ItemId::default(), pos });
    game.state.weapons[id].id = id;
    id
}
