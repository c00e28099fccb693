//! Combat configuration.
//!
//! All tunable roll probabilities live here rather than in the roll
//! functions, so callers can pin outcomes (e.g. `attack_chance = 1.0`)
//! without replacing the engine.

use serde::{Deserialize, Serialize};

use crate::combat::CombatError;

/// Combat configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Probability that an attack lands (default: 0.9).
    pub attack_chance: f64,

    /// Probability that a landed attack is evaded (default: 0.1).
    pub evade_chance: f64,

    /// Probability that the first actor wins initiative (default: 0.5).
    pub initiative_chance: f64,

    /// Perception used for actors that expose none (default: 100).
    pub default_perception: u32,

    /// Maximum steps an encounter may take (`None` = unbounded).
    /// Guards against encounters where no damage is ever dealt.
    pub iteration_limit: Option<u32>,

    /// Seed for the encounter RNG.
    pub seed: u64,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            attack_chance: 0.9,
            evade_chance: 0.1,
            initiative_chance: 0.5,
            default_perception: 100,
            iteration_limit: Some(1000),
            seed: 42,
        }
    }
}

impl CombatConfig {
    /// Set the attack success probability.
    #[must_use]
    pub fn with_attack_chance(mut self, chance: f64) -> Self {
        self.attack_chance = chance;
        self
    }

    /// Set the evade probability.
    #[must_use]
    pub fn with_evade_chance(mut self, chance: f64) -> Self {
        self.evade_chance = chance;
        self
    }

    /// Set the first actor's initiative probability.
    #[must_use]
    pub fn with_initiative_chance(mut self, chance: f64) -> Self {
        self.initiative_chance = chance;
        self
    }

    /// Set the fallback perception.
    #[must_use]
    pub fn with_default_perception(mut self, perception: u32) -> Self {
        self.default_perception = perception;
        self
    }

    /// Set the step cap (`None` disables it).
    #[must_use]
    pub fn with_iteration_limit(mut self, limit: Option<u32>) -> Self {
        self.iteration_limit = limit;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Every roll lands and nothing is evaded.
    #[must_use]
    pub fn always_hit(self) -> Self {
        self.with_attack_chance(1.0).with_evade_chance(0.0)
    }

    /// Check that probabilities are in `[0, 1]` and the step cap is non-zero.
    pub fn validate(&self) -> Result<(), CombatError> {
        let chances = [
            ("attack_chance", self.attack_chance),
            ("evade_chance", self.evade_chance),
            ("initiative_chance", self.initiative_chance),
        ];
        for (name, value) in chances {
            if !(0.0..=1.0).contains(&value) {
                return Err(CombatError::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        if self.iteration_limit == Some(0) {
            return Err(CombatError::InvalidConfig(
                "iteration_limit must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CombatConfig::default();
        assert_eq!(config.attack_chance, 0.9);
        assert_eq!(config.evade_chance, 0.1);
        assert_eq!(config.initiative_chance, 0.5);
        assert_eq!(config.default_perception, 100);
        assert_eq!(config.iteration_limit, Some(1000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = CombatConfig::default()
            .with_seed(7)
            .with_iteration_limit(None)
            .always_hit();

        assert_eq!(config.seed, 7);
        assert_eq!(config.iteration_limit, None);
        assert_eq!(config.attack_chance, 1.0);
        assert_eq!(config.evade_chance, 0.0);
    }

    #[test]
    fn test_validate_rejects_bad_probability() {
        let config = CombatConfig::default().with_evade_chance(1.5);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("evade_chance"));
    }

    #[test]
    fn test_validate_rejects_zero_limit() {
        let config = CombatConfig::default().with_iteration_limit(Some(0));
        assert!(matches!(config.validate(), Err(CombatError::InvalidConfig(_))));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: CombatConfig = serde_json::from_str(r#"{"attack_chance": 0.5}"#).unwrap();
        assert_eq!(config.attack_chance, 0.5);
        assert_eq!(config.evade_chance, 0.1);
        assert_eq!(config.iteration_limit, Some(1000));
    }
}
