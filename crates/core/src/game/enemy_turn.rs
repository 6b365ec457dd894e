//! Enemy AI stepping: contact damage, cached pathing, single-tile moves.
//! Enemies act independently in arena order; nobody coordinates, and a later
//! enemy sees the already-updated positions of earlier ones.

use std::collections::VecDeque;

use super::pathfinding::manhattan;
use super::*;
use crate::types::EnemyId;

impl Game {
    pub(super) fn run_enemy_turn(&mut self) {
        let enemy_ids: Vec<EnemyId> = self.state.enemies.keys().collect();
        for enemy_id in enemy_ids {
            self.step_enemy(enemy_id);
        }
    }

    fn step_enemy(&mut self, enemy_id: EnemyId) {
        let player_pos = self.state.player.pos;
        let enemy_pos = self.state.enemies[enemy_id].pos;

        // Contact damage lands whether or not the enemy moves afterwards.
        if manhattan(enemy_pos, player_pos) == 1 {
            self.state.player.hp -= self.config.contact_damage;
            self.log.push(LogEvent::PlayerStruck {
                enemy: enemy_id,
                damage: self.config.contact_damage,
            });
        }

        // The cache is stale once its final step is not where the player
        // stands; only walls block the search, never other actors.
        let cache_is_stale = self.state.enemies[enemy_id].path.back() != Some(&player_pos);
        if cache_is_stale {
            let path = astar_path(&self.state.map, enemy_pos, player_pos).unwrap_or_default();
            self.state.enemies[enemy_id].path = VecDeque::from(path);
        }

        // The popped step is consumed even when blocked; no retry this turn.
        if let Some(next_step) = self.state.enemies[enemy_id].path.pop_front()
            && self.state.is_open_for_enemy(next_step)
        {
            self.state.enemies[enemy_id].pos = next_step;
        }
    }
}
