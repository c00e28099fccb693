//! Weighted monster spawning per dungeon level.

use serde::{Deserialize, Serialize};

use super::{Monster, MonsterDefinition};
use crate::core::{ActorId, CombatRng};

/// Difficulty multiplier for dungeon levels 1 through 5.
pub const LEVEL_DIFFICULTY: [f64; 5] = [1.0, 1.2, 1.5, 2.0, 2.5];

/// A monster kind and its relative spawn weight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnEntry {
    pub definition: MonsterDefinition,
    pub weight: f32,
}

/// Monster kinds that can appear together with their difficulty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnTable {
    entries: Vec<SpawnEntry>,
    difficulty: f64,
}

impl SpawnTable {
    /// Create an empty table spawning at `difficulty`.
    pub fn new(difficulty: f64) -> Self {
        Self {
            entries: Vec::new(),
            difficulty,
        }
    }

    /// Empty table for dungeon `level` (1-based), or `None` past the last level.
    pub fn for_level(level: usize) -> Option<Self> {
        let difficulty = *LEVEL_DIFFICULTY.get(level.checked_sub(1)?)?;
        Some(Self::new(difficulty))
    }

    /// Add a monster kind (builder pattern).
    #[must_use]
    pub fn with_monster(mut self, definition: MonsterDefinition, weight: f32) -> Self {
        self.entries.push(SpawnEntry { definition, weight });
        self
    }

    /// Difficulty applied to every spawn.
    #[must_use]
    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }

    /// Registered entries.
    #[must_use]
    pub fn entries(&self) -> &[SpawnEntry] {
        &self.entries
    }

    /// Pick a monster kind by weight and spawn it at full health.
    ///
    /// Returns `None` if the table is empty or every weight is zero.
    pub fn spawn(&self, rng: &mut CombatRng, id: ActorId) -> Option<Monster> {
        let weights: Vec<f32> = self.entries.iter().map(|entry| entry.weight).collect();
        let index = rng.choose_weighted(&weights)?;
        let definition = self.entries[index].definition.clone();
        Some(Monster::new(id, definition, self.difficulty))
    }
}
