use std::collections::VecDeque;

use slotmap::SlotMap;

use crate::types::*;

#[derive(Clone, Debug)]
pub struct Player {
    pub pos: Pos,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub id: EnemyId,
    pub pos: Pos,
    pub hp: i32,
    /// Cached route toward the player's last known position. Invalidated when
    /// its final step no longer matches where the player stands.
    pub path: VecDeque<Pos>,
}

#[derive(Clone, Debug)]
pub struct Item {
    pub id: ItemId,
    pub pos: Pos,
}

#[derive(Clone)]
pub struct Map {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileKind>,
}

impl Map {
    /// A fresh map is solid rock; generation carves floor into it.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, tiles: vec![TileKind::Wall; width * height] }
    }

    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if pos.x < 0 || pos.y < 0 {
            return TileKind::Wall;
        }
        let xu = pos.x as usize;
        let yu = pos.y as usize;
        if xu >= self.width || yu >= self.height {
            return TileKind::Wall;
        }
        self.tiles[yu * self.width + xu]
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn set_tile(&mut self, pos: Pos, tile: TileKind) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    pub fn is_walkable(&self, pos: Pos) -> bool {
        self.tile_at(pos) == TileKind::Floor
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

pub struct GameState {
    pub map: Map,
    pub player: Player,
    pub enemies: SlotMap<EnemyId, Enemy>,
    pub potions: SlotMap<ItemId, Item>,
    pub weapons: SlotMap<ItemId, Item>,
}

impl GameState {
    pub fn enemy_at(&self, pos: Pos) -> Option<EnemyId> {
        self.enemies.iter().find(|(_, enemy)| enemy.pos == pos).map(|(id, _)| id)
    }

    pub fn potion_at(&self, pos: Pos) -> Option<ItemId> {
        self.potions.iter().find(|(_, item)| item.pos == pos).map(|(id, _)| id)
    }

    pub fn weapon_at(&self, pos: Pos) -> Option<ItemId> {
        self.weapons.iter().find(|(_, item)| item.pos == pos).map(|(id, _)| id)
    }

    /// A tile an enemy may step onto: floor, not the player, no other enemy.
    pub fn is_open_for_enemy(&self, pos: Pos) -> bool {
        self.map.is_walkable(pos) && self.player.pos != pos && self.enemy_at(pos).is_none()
    }
}
