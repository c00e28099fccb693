use thiserror::Error;

use crate::core::ActorId;

/// Errors raised while setting up or running an encounter.
///
/// None of these are recoverable mid-encounter: the in-progress log
/// should be discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombatError {
    #[error("invalid participant: {0}")]
    InvalidParticipant(#[from] ParticipantError),

    #[error("iteration limit of {limit} steps exceeded with every participant still standing")]
    IterationLimitExceeded { limit: u32 },

    #[error("invalid combat config: {0}")]
    InvalidConfig(String),
}

/// Why a participant set or lookup was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParticipantError {
    #[error("combat needs at least 2 participants, got {count}")]
    TooFew { count: usize },

    #[error("{0} is not a participant in this combat")]
    NotMember(ActorId),

    #[error("{0} joined the combat twice")]
    Duplicate(ActorId),

    #[error("no single opponent among {count} participants")]
    NoOpponent { count: usize },

    #[error("{0} has a zero cooldown")]
    ZeroCooldown(ActorId),
}
