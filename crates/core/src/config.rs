//! Tunable generation and combat parameters.
//! Every constant of the reference ruleset lives here so embedders can scale
//! the dungeon without touching simulation code.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub map_width: usize,
    pub map_height: usize,
    /// Rooms carved per map, drawn uniformly from this inclusive range.
    pub min_rooms: usize,
    pub max_rooms: usize,
    pub min_room_width: usize,
    pub max_room_width: usize,
    pub min_room_height: usize,
    pub max_room_height: usize,
    /// Full-span corridors carved per axis, drawn from this inclusive range.
    pub min_corridors: usize,
    pub max_corridors: usize,
    pub enemy_count: usize,
    pub potion_count: usize,
    pub weapon_count: usize,
    pub max_hp: i32,
    pub starting_attack: i32,
    pub enemy_hp: i32,
    /// Healing granted by a potion, capped at `max_hp`.
    pub heal_amount: i32,
    pub weapon_bonus: i32,
    /// Damage an adjacent enemy deals to the player each enemy turn.
    pub contact_damage: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            map_width: 40,
            map_height: 24,
            min_rooms: 5,
            max_rooms: 10,
            min_room_width: 4,
            max_room_width: 8,
            min_room_height: 4,
            max_room_height: 6,
            min_corridors: 3,
            max_corridors: 5,
            enemy_count: 10,
            potion_count: 10,
            weapon_count: 2,
            max_hp: 100,
            starting_attack: 10,
            enemy_hp: 30,
            heal_amount: 30,
            weapon_bonus: 10,
            contact_damage: 5,
        }
    }
}
