//! Combat scheduling and resolution.
//!
//! A [`CombatScheduler`] is created per encounter, stepped by the caller
//! until [`CombatScheduler::can_continue`] turns false, and then reduced to
//! its [`CombatLog`]. The [`encounter`] module wraps the common flows
//! (full fight, flee, sneak approach).
//!
//! ## Example
//!
//! ```
//! use tick_combat::actors::{Monster, MonsterDefinition, Player};
//! use tick_combat::combat::{simulate_combat, CombatLogEntry};
//! use tick_combat::core::{Actor, ActorId, CombatConfig, CombatRng};
//!
//! let mut player = Player::starter(ActorId::new(0));
//! let mut rat = Monster::new(ActorId::new(1), MonsterDefinition::rat(), 1.0);
//!
//! let config = CombatConfig::default();
//! let log = simulate_combat(&mut player, &mut rat, CombatRng::new(config.seed), config).unwrap();
//!
//! assert!(matches!(log.entries()[0], CombatLogEntry::Initiative { at: 0, .. }));
//! assert!(!player.is_alive() || !rat.is_alive());
//! ```

mod error;
mod log;
mod scheduler;
pub mod encounter;

pub use error::{CombatError, ParticipantError};
pub use log::{CombatLog, CombatLogEntry};
pub use scheduler::CombatScheduler;
pub use encounter::{approach, run_until_done, simulate_combat, simulate_flee, Approach};
