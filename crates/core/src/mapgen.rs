//! Procedural map generation split into coherent submodules.

mod connectivity;
mod layout;
mod spawns;

pub use spawns::{SpawnSet, place_entities};

use crate::config::GameConfig;
use crate::rng::Dice;
use crate::state::Map;

/// Carve rooms and corridors into solid rock, then repair connectivity until
/// the floor forms a single component. The 1-cell border ring is never carved,
/// so the result always keeps a closed wall perimeter.
pub fn generate(config: &GameConfig, dice: &mut Dice) -> Map {
    let mut map = Map::new(config.map_width, config.map_height);
    layout::carve_rooms(&mut map, config, dice);
    layout::carve_corridors(&mut map, config, dice);
    connectivity::repair(&mut map);
    map
}
