//! Encounter flows built on top of [`CombatScheduler`].
//!
//! - [`approach`]: does the monster notice the player first?
//! - [`simulate_combat`]: roll initiative and fight to a knockout
//! - [`simulate_flee`]: turn your back and take one free hit

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{CombatError, CombatLog, CombatLogEntry, CombatScheduler};
use crate::core::{Actor, ActorId, CombatConfig, RollSource};
use crate::rolls::{roll_initiative, roll_sneak_success};

/// Result of sneaking up on a monster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Approach {
    /// The monster did not notice; the player may still retreat safely.
    Unnoticed,
    /// The monster noticed; the only alternatives are to fight or flee.
    Noticed,
}

/// Sneak roll of `player` against `monster`.
pub fn approach<R: RollSource + ?Sized>(
    rng: &mut R,
    player: &dyn Actor,
    monster: &dyn Actor,
    config: &CombatConfig,
) -> Approach {
    if roll_sneak_success(rng, player, monster, config) {
        Approach::Unnoticed
    } else {
        Approach::Noticed
    }
}

/// Tick `scheduler` until someone drops, honoring its iteration limit.
///
/// Returns the number of steps resolved in total.
pub fn run_until_done<R: RollSource>(scheduler: &mut CombatScheduler<'_, R>) -> Result<u32, CombatError> {
    let limit = scheduler.config().iteration_limit;

    while scheduler.can_continue() {
        if let Some(limit) = limit {
            if scheduler.steps() >= limit {
                warn!(limit, "encounter hit the iteration limit");
                return Err(CombatError::IterationLimitExceeded { limit });
            }
        }
        scheduler.tick()?;
    }

    Ok(scheduler.steps())
}

/// Roll initiative between `a` and `b`, then fight until one drops.
///
/// The log opens with an `Initiative` entry.
pub fn simulate_combat<R: RollSource>(
    a: &mut dyn Actor,
    b: &mut dyn Actor,
    mut rng: R,
    config: CombatConfig,
) -> Result<CombatLog, CombatError> {
    let winner = roll_initiative(&mut rng, &*a, &*b, &config);

    let mut scheduler = CombatScheduler::duel(a, b, winner, rng, config)?.announce_initiative();
    let steps = run_until_done(&mut scheduler)?;

    let survivor = survivor(&scheduler);
    info!(steps, %winner, survivor = ?survivor, "encounter finished");
    Ok(scheduler.into_log())
}

/// `fleeing` turns away and `pursuer` gets exactly one attack.
pub fn simulate_flee<R: RollSource>(
    fleeing: &mut dyn Actor,
    pursuer: &mut dyn Actor,
    rng: R,
    config: CombatConfig,
) -> Result<CombatLog, CombatError> {
    let pursuer_id = pursuer.id();
    let mut scheduler = CombatScheduler::duel(fleeing, pursuer, pursuer_id, rng, config)?;
    let entry = scheduler.tick()?;
    info!(%pursuer_id, damage = entry.damage(), "fled from encounter");
    Ok(scheduler.into_log())
}

fn survivor<R: RollSource>(scheduler: &CombatScheduler<'_, R>) -> Option<ActorId> {
    let log = scheduler.log();
    let mut fallen = log.iter().filter_map(|entry| match *entry {
        CombatLogEntry::Hit { target, health_after, .. } if health_after <= 0 => Some(target),
        _ => None,
    });
    let loser = fallen.next()?;
    scheduler.participants().find(|&id| id != loser)
}
