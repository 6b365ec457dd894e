//! Player command resolution: movement, pickups, and melee strikes.
//! A command either fully applies (including the enemy turn and death check)
//! or is rejected before any mutation.

use super::pathfinding::manhattan;
use super::*;
use crate::types::{Command, Direction, EnemyId};

impl Game {
    /// Resolve one player command. Invalid moves are a normal no-op outcome,
    /// not an error; accepted commands always run a full enemy turn before
    /// the death check. Once the run is over every command is ignored.
    pub fn apply(&mut self, command: Command) -> TurnOutcome {
        if self.game_over {
            return TurnOutcome::GameOver;
        }

        let applied = match command {
            Command::Move(direction) => self.resolve_move(direction),
            Command::Attack => {
                self.resolve_attack();
                true
            }
        };
        if !applied {
            return TurnOutcome::Rejected;
        }

        self.run_enemy_turn();
        self.turn += 1;

        if self.state.player.hp <= 0 {
            self.game_over = true;
            self.log.push(LogEvent::PlayerDefeated);
            return TurnOutcome::GameOver;
        }
        TurnOutcome::Advanced
    }

    fn resolve_move(&mut self, direction: Direction) -> bool {
        let target = self.state.player.pos.stepped(direction);
        if !self.state.map.is_walkable(target) || self.state.enemy_at(target).is_some() {
            return false;
        }

        self.state.player.pos = target;

        if let Some(potion) = self.state.potion_at(target) {
            self.state.potions.remove(potion);
            let player = &mut self.state.player;
            let healed = self.config.heal_amount.min(player.max_hp - player.hp);
            player.hp += healed;
            self.log.push(LogEvent::PotionDrunk { healed });
        }
        if let Some(weapon) = self.state.weapon_at(target) {
            self.state.weapons.remove(weapon);
            self.state.player.attack += self.config.weapon_bonus;
            self.log.push(LogEvent::WeaponClaimed { attack_bonus: self.config.weapon_bonus });
        }
        true
    }

    /// Strike every enemy in melee range (Manhattan distance exactly 1).
    /// Valid even when nothing is in range; the enemy turn still runs.
    fn resolve_attack(&mut self) {
        let player_pos = self.state.player.pos;
        let attack = self.state.player.attack;
        let in_range: Vec<EnemyId> = self
            .state
            .enemies
            .iter()
            .filter(|(_, enemy)| manhattan(enemy.pos, player_pos) == 1)
            .map(|(id, _)| id)
            .collect();

        for enemy_id in in_range {
            let enemy = &mut self.state.enemies[enemy_id];
            enemy.hp -= attack;
            if enemy.hp <= 0 {
                self.state.enemies.remove(enemy_id);
                self.log.push(LogEvent::EnemySlain { enemy: enemy_id });
            }
        }
    }
}
