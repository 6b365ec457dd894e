pub mod config;
pub mod game;
pub mod journal;
pub mod mapgen;
pub mod replay;
pub mod rng;
pub mod state;
pub mod types;

pub use config::GameConfig;
pub use game::Game;
pub use journal::{CommandJournal, InputRecord};
pub use mapgen::SpawnSet;
pub use replay::*;
pub use rng::Dice;
pub use state::{Enemy, GameState, Item, Map, Player};
pub use types::*;
