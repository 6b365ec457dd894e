use crate::config::GameConfig;
use crate::state::GameState;
use crate::types::*;

mod bootstrap;
mod enemy_turn;
mod pathfinding;
mod turn;

#[cfg(test)]
mod test_support;

pub(crate) use pathfinding::astar_path;

/// One self-contained dungeon run. Owns the world state; mutation happens
/// only through [`Game::apply`].
pub struct Game {
    seed: u64,
    turn: u64,
    config: GameConfig,
    state: GameState,
    log: Vec<LogEvent>,
    game_over: bool,
}

impl Game {
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn current_turn(&self) -> u64 {
        self.turn
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only world snapshot for presentation layers.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    /// Terminal flag; sticky once the player's hit points reach zero.
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Canonical digest of the world, used by determinism tests and the
    /// replay tool to compare runs cheaply.
    pub fn snapshot_hash(&self) -> u64 {
        use std::hash::Hasher;
        use xxhash_rust::xxh3::Xxh3;

        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.turn);
        hasher.write_u8(u8::from(self.game_over));

        hasher.write_i32(self.state.player.pos.y);
        hasher.write_i32(self.state.player.pos.x);
        hasher.write_i32(self.state.player.hp);
        hasher.write_i32(self.state.player.attack);

        for (_, enemy) in &self.state.enemies {
            hasher.write_i32(enemy.pos.y);
            hasher.write_i32(enemy.pos.x);
            hasher.write_i32(enemy.hp);
        }
        for (_, potion) in &self.state.potions {
            hasher.write_i32(potion.pos.y);
            hasher.write_i32(potion.pos.x);
        }
        for (_, weapon) in &self.state.weapons {
            hasher.write_i32(weapon.pos.y);
            hasher.write_i32(weapon.pos.x);
        }

        hasher.finish()
    }
}
