//! Core types: actor identity and capabilities, random sources, configuration.
//!
//! Everything here is independent of how a fight is scheduled. The roll
//! engine and the scheduler build on these types.

pub mod actor;
pub mod rng;
pub mod config;

pub use actor::{Actor, ActorId, DamageRange, HealthChange};
pub use rng::{CombatRng, CombatRngState, ConstantRoll, RollSource, ScriptedRolls};
pub use config::CombatConfig;
