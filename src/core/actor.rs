//! Actor identity and the capability set the scheduler fights with.
//!
//! ## ActorId
//!
//! Opaque identifier. The scheduler and the combat log refer to
//! participants only through their `ActorId`.
//!
//! ## Actor
//!
//! Anything that can take part in combat: a player, a spawned monster,
//! a test dummy. The scheduler reads stats through the trait and writes
//! health only through [`Actor::apply_damage`].

use serde::{Deserialize, Serialize};

/// Identifier of a combat participant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub u32);

impl ActorId {
    /// Create a new actor ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Actor({})", self.0)
    }
}

/// Inclusive damage range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRange {
    pub min: i64,
    pub max: i64,
}

impl DamageRange {
    /// Create a new damage range.
    #[must_use]
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// A range that always deals `amount`.
    #[must_use]
    pub const fn fixed(amount: i64) -> Self {
        Self { min: amount, max: amount }
    }

    /// Width of the range (`max - min`).
    #[must_use]
    pub const fn spread(self) -> i64 {
        self.max - self.min
    }
}

impl std::fmt::Display for DamageRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}

/// Health before and after a single update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthChange {
    pub before: i64,
    pub after: i64,
}

/// Capability set of a combat participant.
///
/// ## Implementation Notes
///
/// - `cooldown` must be positive; the scheduler rejects zero.
/// - `health` may drop below zero. Nothing floors it.
/// - `perception` is optional; the roll engine substitutes
///   `CombatConfig::default_perception` when it is `None`.
/// - Derived stats (e.g. difficulty-scaled monsters) may be computed on
///   every call, as long as the values stay stable for the encounter.
pub trait Actor {
    /// Identity used in the readiness table and the log.
    fn id(&self) -> ActorId;

    /// Current health.
    fn health(&self) -> i64;

    /// Maximum health.
    fn max_health(&self) -> i64;

    /// Damage dealt by a landed, un-evaded attack.
    fn damage(&self) -> DamageRange;

    /// Ticks between two consecutive actions.
    fn cooldown(&self) -> u64;

    /// Awareness used by the sneak roll.
    fn perception(&self) -> Option<u32> {
        None
    }

    /// Subtract `amount` from current health.
    ///
    /// This is the only write path the scheduler uses.
    fn apply_damage(&mut self, amount: i64) -> HealthChange;

    // === Convenience Methods ===

    /// Whether the actor still stands.
    fn is_alive(&self) -> bool {
        self.health() > 0
    }
}
