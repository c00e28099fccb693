//! Combat log entries.
//!
//! The log is the only artifact an encounter leaves behind. Entries are
//! appended in resolution order; `at` is the simulated tick at which the
//! acting participant was selected.

use serde::{Deserialize, Serialize};

use crate::core::ActorId;

/// A single resolved event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CombatLogEntry {
    /// `winner` acts at tick 0; everyone else waits one cooldown.
    Initiative { at: u64, winner: ActorId },

    /// Damage was dealt. `health_after = health_before - damage`, `damage >= 1`.
    Hit {
        at: u64,
        source: ActorId,
        target: ActorId,
        damage: i64,
        health_before: i64,
        health_after: i64,
    },

    /// The attack failed to land.
    Miss { at: u64, source: ActorId, target: ActorId },

    /// The attack landed but was dodged.
    Evade { at: u64, source: ActorId, target: ActorId },
}

impl CombatLogEntry {
    /// Tick at which the entry was resolved.
    #[must_use]
    pub fn at(&self) -> u64 {
        match *self {
            CombatLogEntry::Initiative { at, .. }
            | CombatLogEntry::Hit { at, .. }
            | CombatLogEntry::Miss { at, .. }
            | CombatLogEntry::Evade { at, .. } => at,
        }
    }

    /// Acting participant, if the entry is an action.
    #[must_use]
    pub fn source(&self) -> Option<ActorId> {
        match *self {
            CombatLogEntry::Initiative { .. } => None,
            CombatLogEntry::Hit { source, .. }
            | CombatLogEntry::Miss { source, .. }
            | CombatLogEntry::Evade { source, .. } => Some(source),
        }
    }

    /// Damage dealt by this entry (0 for everything but a hit).
    #[must_use]
    pub fn damage(&self) -> i64 {
        match *self {
            CombatLogEntry::Hit { damage, .. } => damage,
            CombatLogEntry::Initiative { .. }
            | CombatLogEntry::Miss { .. }
            | CombatLogEntry::Evade { .. } => 0,
        }
    }
}

impl std::fmt::Display for CombatLogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CombatLogEntry::Initiative { at, winner } => {
                write!(f, "at {at:>3} {winner} wins initiative")
            }
            CombatLogEntry::Hit { at, source, target, damage, health_before, health_after } => write!(
                f,
                "at {at:>3} {source} hits {target} for {damage}, health {health_before} -> {health_after}"
            ),
            CombatLogEntry::Miss { at, source, target } => {
                write!(f, "at {at:>3} {source} misses {target}")
            }
            CombatLogEntry::Evade { at, source, target } => {
                write!(f, "at {at:>3} {target} evades {source}")
            }
        }
    }
}

/// Append-only, chronologically ordered list of entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CombatLog {
    entries: Vec<CombatLogEntry>,
}

impl CombatLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: CombatLogEntry) {
        debug_assert!(
            self.entries.last().map_or(true, |last| last.at() <= entry.at()),
            "log entries must be appended in tick order"
        );
        self.entries.push(entry);
    }

    /// All entries in resolution order.
    #[must_use]
    pub fn entries(&self) -> &[CombatLogEntry] {
        &self.entries
    }

    /// Iterate over entries in resolution order.
    pub fn iter(&self) -> std::slice::Iter<'_, CombatLogEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been logged yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&CombatLogEntry> {
        self.entries.last()
    }

    /// Total damage `source` dealt over the log.
    #[must_use]
    pub fn damage_dealt_by(&self, source: ActorId) -> i64 {
        self.iter()
            .filter(|entry| entry.source() == Some(source))
            .map(CombatLogEntry::damage)
            .sum()
    }
}

impl<'a> IntoIterator for &'a CombatLog {
    type Item = &'a CombatLogEntry;
    type IntoIter = std::slice::Iter<'a, CombatLogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for CombatLog {
    type Item = CombatLogEntry;
    type IntoIter = std::vec::IntoIter<CombatLogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
