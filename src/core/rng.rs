//! Uniform random sources for the roll engine.
//!
//! Every roll consumes draws from a [`RollSource`]: a stream of uniform
//! values in `[0, 1)`. Production code uses [`CombatRng`]; tests inject
//! [`ScriptedRolls`] or [`ConstantRoll`] to pin outcomes.
//!
//! ## Example
//!
//! ```
//! use tick_combat::core::{CombatRng, RollSource};
//!
//! let mut rng = CombatRng::new(42);
//! let draw = rng.next_unit();
//! assert!((0.0..1.0).contains(&draw));
//!
//! // Same seed, same stream
//! let mut again = CombatRng::new(42);
//! assert_eq!(again.next_unit(), draw);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// A stream of uniform draws in `[0, 1)`.
pub trait RollSource {
    /// Next uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<R: RollSource + ?Sized> RollSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Deterministic RNG backing real encounters.
///
/// Uses ChaCha8 for speed while keeping a reproducible stream per seed.
#[derive(Clone, Debug)]
pub struct CombatRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl CombatRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG into an independent, deterministic stream.
    ///
    /// Lets each encounter of a session own its own source.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Choose an index with weighted probability.
    ///
    /// Weights do not need to sum to 1.0.
    /// Returns `None` if weights are empty or all zero.
    pub fn choose_weighted(&mut self, weights: &[f32]) -> Option<usize> {
        let total: f32 = weights.iter().sum();
        if weights.is_empty() || total <= 0.0 {
            return None;
        }

        let mut threshold = self.inner.gen::<f32>() * total;

        for (i, &weight) in weights.iter().enumerate() {
            threshold -= weight;
            if weight > 0.0 && threshold <= 0.0 {
                return Some(i);
            }
        }

        // Float rounding can leave a sliver; fall back to the last live weight
        weights.iter().rposition(|&w| w > 0.0)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> CombatRngState {
        CombatRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &CombatRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl RollSource for CombatRng {
    fn next_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

/// Serializable RNG state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

/// Replays a fixed list of draws, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct ScriptedRolls {
    draws: Vec<f64>,
    cursor: usize,
}

impl ScriptedRolls {
    /// Create a scripted source.
    ///
    /// Panics if `draws` is empty or holds a value outside `[0, 1)`.
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        let draws = draws.into();
        assert!(!draws.is_empty(), "Scripted rolls need at least one draw");
        assert!(
            draws.iter().all(|d| (0.0..1.0).contains(d)),
            "Scripted draws must lie in [0, 1)"
        );
        Self { draws, cursor: 0 }
    }

    /// Number of draws consumed so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RollSource for ScriptedRolls {
    fn next_unit(&mut self) -> f64 {
        let draw = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        draw
    }
}

/// Always returns the same draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantRoll(f64);

impl ConstantRoll {
    /// Create a constant source. The value is clamped into `[0, 1)`.
    #[must_use]
    pub fn new(draw: f64) -> Self {
        Self(draw.clamp(0.0, 1.0 - f64::EPSILON))
    }

    /// The largest draw below one: picks the top of every range.
    #[must_use]
    pub fn high() -> Self {
        Self::new(1.0 - f64::EPSILON)
    }

    /// Zero: passes every `draw < chance` check with a positive chance.
    #[must_use]
    pub fn low() -> Self {
        Self(0.0)
    }
}

impl RollSource for ConstantRoll {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}
