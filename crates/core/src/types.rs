use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct EnemyId;
    pub struct ItemId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn stepped(self, direction: Direction) -> Pos {
        let offset = direction.offset();
        Pos { y: self.y + offset.y, x: self.x + offset.x }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileKind {
    Wall,
    Floor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit tile offset in grid coordinates (y grows downward).
    pub fn offset(self) -> Pos {
        match self {
            Direction::Up => Pos { y: -1, x: 0 },
            Direction::Down => Pos { y: 1, x: 0 },
            Direction::Left => Pos { y: 0, x: -1 },
            Direction::Right => Pos { y: 0, x: 1 },
        }
    }
}

/// A single player input for one turn. Issued by an input-translation layer;
/// the core itself never reads devices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Move(Direction),
    Attack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The command could not apply. Nothing changed and no enemy acted.
    Rejected,
    /// The command applied and a full enemy turn ran.
    Advanced,
    /// The run has ended. Session-reset policy belongs to the caller.
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogEvent {
    PotionDrunk { healed: i32 },
    WeaponClaimed { attack_bonus: i32 },
    EnemySlain { enemy: EnemyId },
    PlayerStruck { enemy: EnemyId, damage: i32 },
    PlayerDefeated,
}
