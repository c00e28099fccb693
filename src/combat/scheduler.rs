//! Cooldown-driven combat scheduler.
//!
//! Each participant owns a readiness timestamp. Every step the scheduler
//! picks the participant with the lowest timestamp, resolves one attack
//! against its opponent, logs the outcome at that timestamp, and pushes
//! the actor's readiness forward by exactly its cooldown.
//!
//! ## Example
//!
//! ```
//! use tick_combat::actors::Player;
//! use tick_combat::combat::CombatScheduler;
//! use tick_combat::core::{ActorId, CombatConfig, ConstantRoll, DamageRange};
//!
//! let mut hero = Player::new(ActorId::new(1), 100, DamageRange::fixed(10), 10);
//! let mut dummy = Player::new(ActorId::new(2), 30, DamageRange::fixed(0), 30);
//!
//! let config = CombatConfig::default().always_hit();
//! let mut combat =
//!     CombatScheduler::duel(&mut hero, &mut dummy, ActorId::new(1), ConstantRoll::low(), config)
//!         .unwrap();
//!
//! while combat.can_continue() {
//!     combat.tick().unwrap();
//! }
//!
//! let ticks: Vec<u64> = combat.log().iter().map(|entry| entry.at()).collect();
//! assert_eq!(ticks, vec![0, 10, 20]);
//! ```

use smallvec::SmallVec;
use tracing::debug;

use super::{CombatError, CombatLog, CombatLogEntry, ParticipantError};
use crate::core::{Actor, ActorId, CombatConfig, RollSource};
use crate::rolls::{roll_attack_success, roll_damage, roll_evade_success};

/// One row of the readiness table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Readiness {
    actor: ActorId,
    ready_at: u64,
}

/// Combat instance for one encounter.
///
/// Borrows its participants for the lifetime of the encounter and is the
/// only writer of their health while it lives.
pub struct CombatScheduler<'a, R> {
    /// Participants, in the order they were supplied.
    participants: SmallVec<[&'a mut dyn Actor; 2]>,
    /// Readiness table, index-aligned with `participants`.
    readiness: SmallVec<[Readiness; 2]>,
    log: CombatLog,
    rng: R,
    config: CombatConfig,
    first: ActorId,
    steps: u32,
}

impl<'a, R: RollSource> CombatScheduler<'a, R> {
    /// Create a scheduler over `participants` where `first` acts at tick 0.
    ///
    /// Every other participant starts at its own cooldown.
    ///
    /// Fails with `InvalidParticipant` for fewer than two participants,
    /// duplicate identities, a zero cooldown, or a `first` that is not a
    /// participant.
    pub fn new(
        participants: impl IntoIterator<Item = &'a mut dyn Actor>,
        first: ActorId,
        rng: R,
        config: CombatConfig,
    ) -> Result<Self, CombatError> {
        config.validate()?;

        let participants: SmallVec<[&'a mut dyn Actor; 2]> = participants.into_iter().collect();
        if participants.len() < 2 {
            return Err(ParticipantError::TooFew { count: participants.len() }.into());
        }

        let mut readiness: SmallVec<[Readiness; 2]> = SmallVec::with_capacity(participants.len());
        for actor in &participants {
            let id = actor.id();
            if readiness.iter().any(|row| row.actor == id) {
                return Err(ParticipantError::Duplicate(id).into());
            }
            if actor.cooldown() == 0 {
                return Err(ParticipantError::ZeroCooldown(id).into());
            }
            let ready_at = if id == first { 0 } else { actor.cooldown() };
            readiness.push(Readiness { actor: id, ready_at });
        }

        if !readiness.iter().any(|row| row.actor == first) {
            return Err(ParticipantError::NotMember(first).into());
        }

        Ok(Self {
            participants,
            readiness,
            log: CombatLog::new(),
            rng,
            config,
            first,
            steps: 0,
        })
    }

    /// Two-actor shorthand for [`CombatScheduler::new`].
    pub fn duel(
        a: &'a mut dyn Actor,
        b: &'a mut dyn Actor,
        first: ActorId,
        rng: R,
        config: CombatConfig,
    ) -> Result<Self, CombatError> {
        Self::new([a, b], first, rng, config)
    }

    /// Log who won initiative as the opening entry.
    ///
    /// Has no effect once the log holds anything.
    #[must_use]
    pub fn announce_initiative(mut self) -> Self {
        if self.log.is_empty() {
            self.log.push(CombatLogEntry::Initiative { at: 0, winner: self.first });
        }
        self
    }

    /// Resolve one action and return the entry it logged.
    ///
    /// Fails with `InvalidParticipant` if the acting participant has no
    /// single opponent; state is left untouched in that case.
    pub fn tick(&mut self) -> Result<CombatLogEntry, CombatError> {
        let (actor_idx, at) = self.next_ready();
        let target_idx = self.opponent_index(actor_idx)?;

        let attacker: &dyn Actor = &*self.participants[actor_idx];
        let defender: &dyn Actor = &*self.participants[target_idx];
        let source = attacker.id();
        let target = defender.id();
        let cooldown = attacker.cooldown();

        let entry = if !roll_attack_success(&mut self.rng, attacker, defender, &self.config) {
            CombatLogEntry::Miss { at, source, target }
        } else if roll_evade_success(&mut self.rng, attacker, defender, &self.config) {
            CombatLogEntry::Evade { at, source, target }
        } else {
            let damage = roll_damage(&mut self.rng, attacker, defender);
            if damage < 1 {
                // Nothing to deal; counts as a miss
                CombatLogEntry::Miss { at, source, target }
            } else {
                let change = self.participants[target_idx].apply_damage(damage);
                debug_assert_eq!(change.after, change.before - damage);
                CombatLogEntry::Hit {
                    at,
                    source,
                    target,
                    damage,
                    health_before: change.before,
                    health_after: change.after,
                }
            }
        };

        self.readiness[actor_idx].ready_at = at + cooldown;
        self.steps += 1;
        self.log.push(entry);

        debug!(at, %source, %target, damage = entry.damage(), step = self.steps, "combat step");
        Ok(entry)
    }

    /// Whether every participant still has positive health.
    #[must_use]
    pub fn can_continue(&self) -> bool {
        self.participants.iter().all(|actor| actor.is_alive())
    }

    /// The single other participant facing `actor`.
    pub fn opponent_of(&self, actor: ActorId) -> Result<ActorId, CombatError> {
        let idx = self
            .index_of(actor)
            .ok_or(ParticipantError::NotMember(actor))?;
        let opponent = self.opponent_index(idx)?;
        Ok(self.readiness[opponent].actor)
    }

    /// Log accumulated so far.
    #[must_use]
    pub fn log(&self) -> &CombatLog {
        &self.log
    }

    /// End the encounter and keep only its log.
    #[must_use]
    pub fn into_log(self) -> CombatLog {
        self.log
    }

    /// Next tick at which `actor` may act.
    #[must_use]
    pub fn readiness(&self, actor: ActorId) -> Option<u64> {
        self.index_of(actor).map(|idx| self.readiness[idx].ready_at)
    }

    /// `(actor, ready_at)` for every participant, in participant order.
    pub fn readiness_table(&self) -> impl Iterator<Item = (ActorId, u64)> + '_ {
        self.readiness.iter().map(|row| (row.actor, row.ready_at))
    }

    /// Participant identities, in the order supplied.
    pub fn participants(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.readiness.iter().map(|row| row.actor)
    }

    /// The participant that started at tick 0.
    #[must_use]
    pub fn first_actor(&self) -> ActorId {
        self.first
    }

    /// Steps resolved so far.
    #[must_use]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Configuration in effect for this encounter.
    #[must_use]
    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    // === Internal ===

    /// Lowest readiness; ties go to the earliest participant.
    fn next_ready(&self) -> (usize, u64) {
        self.readiness
            .iter()
            .enumerate()
            .min_by_key(|(_, row)| row.ready_at)
            .map(|(idx, row)| (idx, row.ready_at))
            .unwrap_or((0, 0))
    }

    fn index_of(&self, actor: ActorId) -> Option<usize> {
        self.readiness.iter().position(|row| row.actor == actor)
    }

    fn opponent_index(&self, idx: usize) -> Result<usize, CombatError> {
        if self.participants.len() != 2 {
            return Err(ParticipantError::NoOpponent { count: self.participants.len() }.into());
        }
        Ok(1 - idx)
    }
}

impl<R> std::fmt::Debug for CombatScheduler<'_, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombatScheduler")
            .field("readiness", &self.readiness)
            .field("first", &self.first)
            .field("steps", &self.steps)
            .field("log_len", &self.log.len())
            .finish()
    }
}
