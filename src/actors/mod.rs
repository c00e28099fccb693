//! Concrete combatants.
//!
//! - [`Player`]: stored stats, restored at the well
//! - [`Monster`]: definition plus difficulty multiplier, stats derived on read
//! - [`SpawnTable`]: weighted monster kinds for a dungeon level

pub mod player;
pub mod monster;
pub mod spawn;

pub use player::Player;
pub use monster::{scale, Monster, MonsterDefinition};
pub use spawn::{SpawnEntry, SpawnTable, LEVEL_DIFFICULTY};
