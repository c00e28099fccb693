//! Roll engine: stateless probability checks.
//!
//! Each roll is a pure function of the actors involved, the
//! [`CombatConfig`](crate::core::CombatConfig) and draws from a
//! [`RollSource`](crate::core::RollSource). Nothing here mutates an actor.
//!
//! ## Resolution Order
//!
//! The scheduler resolves one action as:
//! 1. [`roll_attack_success`] - miss on failure
//! 2. [`roll_evade_success`] - evade on success
//! 3. [`roll_damage`] - hit for the rolled amount
//!
//! [`roll_initiative`] and [`roll_sneak_success`] happen before a fight
//! starts and decide who acts first and whether the defender noticed.

mod engine;

pub use engine::{
    perception_of, roll_attack_success, roll_damage, roll_evade_success, roll_initiative,
    roll_sneak_success,
};
