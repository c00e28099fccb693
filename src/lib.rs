//! # tick-combat
//!
//! Turn-based combat where every actor attacks on its own cooldown timer
//! instead of in fixed alternating turns.
//!
//! ## Design Principles
//!
//! 1. **Simulated time**: Actors act at integer ticks. An actor's next
//!    action is always exactly one cooldown after its previous one.
//!
//! 2. **Injectable randomness**: Every roll draws from a `RollSource`.
//!    Seeded `CombatRng` for play, scripted sources for tests.
//!
//! 3. **Structured output**: The scheduler emits `CombatLogEntry` values,
//!    never strings. Presentation is the caller's business.
//!
//! ## Modules
//!
//! - `core`: Actor trait and IDs, random sources, configuration
//! - `rolls`: Stateless roll engine (initiative, sneak, attack, evade, damage)
//! - `combat`: Scheduler, combat log, errors, encounter flows
//! - `actors`: Player, difficulty-scaled monsters, spawn tables

pub mod core;
pub mod rolls;
pub mod combat;
pub mod actors;

// Re-export commonly used types
pub use crate::core::{
    Actor, ActorId, DamageRange, HealthChange,
    CombatRng, CombatRngState, ConstantRoll, RollSource, ScriptedRolls,
    CombatConfig,
};

pub use crate::rolls::{
    roll_attack_success, roll_damage, roll_evade_success, roll_initiative, roll_sneak_success,
};

pub use crate::combat::{
    CombatScheduler, CombatLog, CombatLogEntry,
    CombatError, ParticipantError,
    Approach, approach, run_until_done, simulate_combat, simulate_flee,
};

pub use crate::actors::{Player, Monster, MonsterDefinition, SpawnTable};
