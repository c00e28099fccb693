//! Monster definitions and difficulty-scaled instances.
//!
//! A [`MonsterDefinition`] is static data. A [`Monster`] pairs a
//! definition with a difficulty multiplier and derives its combat stats
//! on every read, so the scheduler sees the same [`Actor`] contract as for
//! a player.

use serde::{Deserialize, Serialize};

use crate::core::{Actor, ActorId, DamageRange, HealthChange};

/// Base stats of a monster kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterDefinition {
    /// Short display name ("rat").
    pub name: String,
    /// Health at difficulty 1.0.
    pub health: i64,
    /// Damage at difficulty 1.0.
    pub damage: DamageRange,
    /// Ticks between attacks; not scaled by difficulty.
    pub cooldown: u64,
    /// Awareness for sneak rolls; not scaled by difficulty.
    pub perception: Option<u32>,
}

impl MonsterDefinition {
    /// Create a new definition.
    pub fn new(name: impl Into<String>, health: i64, damage: DamageRange, cooldown: u64) -> Self {
        Self {
            name: name.into(),
            health,
            damage,
            cooldown,
            perception: None,
        }
    }

    /// Set perception (builder pattern).
    #[must_use]
    pub fn with_perception(mut self, perception: u32) -> Self {
        self.perception = Some(perception);
        self
    }

    /// Sharp-eared rat.
    pub fn rat() -> Self {
        Self::new("rat", 50, DamageRange::new(5, 15), 121).with_perception(120)
    }

    /// Half-blind spider.
    pub fn spider() -> Self {
        Self::new("spider", 50, DamageRange::new(5, 15), 121).with_perception(60)
    }
}

/// Round `value * multiplier` to the nearest integer.
#[must_use]
pub fn scale(value: i64, multiplier: f64) -> i64 {
    (value as f64 * multiplier).round() as i64
}

/// A spawned monster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    id: ActorId,
    definition: MonsterDefinition,
    difficulty: f64,
    health: i64,
}

impl Monster {
    /// Spawn at full (scaled) health.
    pub fn new(id: ActorId, definition: MonsterDefinition, difficulty: f64) -> Self {
        let health = scale(definition.health, difficulty);
        Self {
            id,
            definition,
            difficulty,
            health,
        }
    }

    /// Definition this monster was spawned from.
    #[must_use]
    pub fn definition(&self) -> &MonsterDefinition {
        &self.definition
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    /// Difficulty multiplier.
    #[must_use]
    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }
}

impl Actor for Monster {
    fn id(&self) -> ActorId {
        self.id
    }

    fn health(&self) -> i64 {
        self.health
    }

    fn max_health(&self) -> i64 {
        scale(self.definition.health, self.difficulty)
    }

    fn damage(&self) -> DamageRange {
        let base = self.definition.damage;
        DamageRange::new(scale(base.min, self.difficulty), scale(base.max, self.difficulty))
    }

    fn cooldown(&self) -> u64 {
        self.definition.cooldown
    }

    fn perception(&self) -> Option<u32> {
        self.definition.perception
    }

    fn apply_damage(&mut self, amount: i64) -> HealthChange {
        let before = self.health;
        self.health -= amount;
        HealthChange { before, after: self.health }
    }
}
