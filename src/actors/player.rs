//! The player character.

use serde::{Deserialize, Serialize};

use crate::core::{Actor, ActorId, DamageRange, HealthChange};

/// Player stats with stored (not derived) values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: ActorId,
    health: i64,
    max_health: i64,
    damage: DamageRange,
    cooldown: u64,
    perception: Option<u32>,
}

impl Player {
    /// Create a player at full health.
    pub fn new(id: ActorId, max_health: i64, damage: DamageRange, cooldown: u64) -> Self {
        Self {
            id,
            health: max_health,
            max_health,
            damage,
            cooldown,
            perception: None,
        }
    }

    /// A fresh character: 100 health, 10-20 damage, cooldown 117.
    pub fn starter(id: ActorId) -> Self {
        Self::new(id, 100, DamageRange::new(10, 20), 117)
    }

    /// Set perception (builder pattern).
    #[must_use]
    pub fn with_perception(mut self, perception: u32) -> Self {
        self.perception = Some(perception);
        self
    }

    /// Back to full health.
    pub fn restore(&mut self) {
        self.health = self.max_health;
    }
}

impl Actor for Player {
    fn id(&self) -> ActorId {
        self.id
    }

    fn health(&self) -> i64 {
        self.health
    }

    fn max_health(&self) -> i64 {
        self.max_health
    }

    fn damage(&self) -> DamageRange {
        self.damage
    }

    fn cooldown(&self) -> u64 {
        self.cooldown
    }

    fn perception(&self) -> Option<u32> {
        self.perception
    }

    fn apply_damage(&mut self, amount: i64) -> HealthChange {
        let before = self.health;
        self.health -= amount;
        HealthChange { before, after: self.health }
    }
}
