//! Starting world construction for a new run.
//! This module exists to isolate generation and placement from turn flow.
//! It does not own any per-turn simulation rules.

use std::collections::VecDeque;

use slotmap::SlotMap;

use super::*;
use crate::mapgen;
use crate::rng::Dice;
use crate::state::{Enemy, Item, Player};
use crate::types::{EnemyId, ItemId};

impl Game {
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, GameConfig::default())
    }

    /// Build the whole world up front: generate a connected map, then scatter
    /// player, enemies, potions, and weapons onto distinct floor tiles. All
    /// randomness is drawn from one seeded stream in this fixed order.
    pub fn with_config(seed: u64, config: GameConfig) -> Self {
        let mut dice = Dice::from_seed(seed);
        let map = mapgen::generate(&config, &mut dice);
        let spawns = mapgen::place_entities(&map, &config, &mut dice);

        let player = Player {
            pos: spawns.player,
            hp: config.max_hp,
            max_hp: config.max_hp,
            attack: config.starting_attack,
        };

        let mut enemies: SlotMap<EnemyId, Enemy> = SlotMap::with_key();
        for pos in spawns.enemies {
            let id = enemies.insert(Enemy {
                id: EnemyId::default(),
                pos,
                hp: config.enemy_hp,
                path: VecDeque::new(),
            });
            enemies[id].id = id;
        }

        let mut potions: SlotMap<ItemId, Item> = SlotMap::with_key();
        for pos in spawns.potions {
            let id = potions.insert(Item { id: ItemId::default(), pos });
            potions[id].id = id;
        }

        let mut weapons: SlotMap<ItemId, Item> = SlotMap::with_key();
        for pos in spawns.weapons {
            let id = weapons.insert(Item { id: ItemId::default(), pos });
            weapons[id].id = id;
        }

        Self {
            seed,
            turn: 0,
            config,
            state: GameState { map, player, enemies, potions, weapons },
            log: Vec::new(),
            game_over: false,
        }
    }
}
