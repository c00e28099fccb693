use tracing::trace;

use crate::core::{Actor, ActorId, CombatConfig, RollSource};

/// Decide which of two actors acts first.
///
/// Attributes are ignored: `first` wins with `initiative_chance`.
pub fn roll_initiative<R: RollSource + ?Sized>(
    rng: &mut R,
    first: &dyn Actor,
    second: &dyn Actor,
    config: &CombatConfig,
) -> ActorId {
    let draw = rng.next_unit();
    let winner = if draw < config.initiative_chance {
        first.id()
    } else {
        second.id()
    };
    trace!(draw, %winner, "initiative roll");
    winner
}

/// Perception of an actor, falling back to `default_perception`.
#[must_use]
pub fn perception_of(actor: &dyn Actor, config: &CombatConfig) -> u32 {
    actor.perception().unwrap_or(config.default_perception)
}

/// Whether `attacker` gets close to `defender` unnoticed.
///
/// Each side scales an independent draw by its own perception; the
/// attacker wins on a strictly greater value. Perception therefore helps
/// both sides equally.
pub fn roll_sneak_success<R: RollSource + ?Sized>(
    rng: &mut R,
    attacker: &dyn Actor,
    defender: &dyn Actor,
    config: &CombatConfig,
) -> bool {
    let attack = rng.next_unit() * f64::from(perception_of(attacker, config));
    let defend = rng.next_unit() * f64::from(perception_of(defender, config));
    trace!(attacker = %attacker.id(), defender = %defender.id(), attack, defend, "sneak roll");
    attack > defend
}

/// Whether an attack lands. Fixed `attack_chance`, attributes ignored.
pub fn roll_attack_success<R: RollSource + ?Sized>(
    rng: &mut R,
    attacker: &dyn Actor,
    defender: &dyn Actor,
    config: &CombatConfig,
) -> bool {
    let draw = rng.next_unit();
    trace!(attacker = %attacker.id(), defender = %defender.id(), draw, "attack roll");
    draw < config.attack_chance
}

/// Whether a landed attack is dodged. Fixed `evade_chance`, attributes ignored.
pub fn roll_evade_success<R: RollSource + ?Sized>(
    rng: &mut R,
    attacker: &dyn Actor,
    defender: &dyn Actor,
    config: &CombatConfig,
) -> bool {
    let draw = rng.next_unit();
    trace!(attacker = %attacker.id(), defender = %defender.id(), draw, "evade roll");
    draw < config.evade_chance
}

/// Damage in `[min, max]` of the attacker's range, rounded to nearest.
pub fn roll_damage<R: RollSource + ?Sized>(
    rng: &mut R,
    attacker: &dyn Actor,
    _defender: &dyn Actor,
) -> i64 {
    let range = attacker.damage();
    let draw = rng.next_unit();
    let damage = range.min + (draw * range.spread() as f64).round() as i64;
    trace!(attacker = %attacker.id(), draw, damage, "damage roll");
    damage
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConstantRoll, DamageRange, HealthChange, ScriptedRolls};

    struct Stub {
        id: u32,
        damage: DamageRange,
        perception: Option<u32>,
    }

    impl Stub {
        fn new(id: u32) -> Self {
            Self { id, damage: DamageRange::new(5, 15), perception: None }
        }
    }

    impl Actor for Stub {
        fn id(&self) -> ActorId {
            ActorId::new(self.id)
        }
        fn health(&self) -> i64 {
            10
        }
        fn max_health(&self) -> i64 {
            10
        }
        fn damage(&self) -> DamageRange {
            self.damage
        }
        fn cooldown(&self) -> u64 {
            10
        }
        fn perception(&self) -> Option<u32> {
            self.perception
        }
        fn apply_damage(&mut self, _amount: i64) -> HealthChange {
            HealthChange { before: 10, after: 10 }
        }
    }

    #[test]
    fn test_initiative_follows_draw() {
        let a = Stub::new(1);
        let b = Stub::new(2);
        let config = CombatConfig::default();

        let mut low = ScriptedRolls::new([0.2]);
        assert_eq!(roll_initiative(&mut low, &a, &b, &config), a.id());

        let mut high = ScriptedRolls::new([0.7]);
        assert_eq!(roll_initiative(&mut high, &a, &b, &config), b.id());
    }

    #[test]
    fn test_attack_and_evade_thresholds() {
        let a = Stub::new(1);
        let b = Stub::new(2);
        let config = CombatConfig::default();

        let mut rolls = ScriptedRolls::new([0.89, 0.9]);
        assert!(roll_attack_success(&mut rolls, &a, &b, &config));
        assert!(!roll_attack_success(&mut rolls, &a, &b, &config));

        let mut rolls = ScriptedRolls::new([0.09, 0.1]);
        assert!(roll_evade_success(&mut rolls, &a, &b, &config));
        assert!(!roll_evade_success(&mut rolls, &a, &b, &config));
    }

    #[test]
    fn test_always_hit_config() {
        let a = Stub::new(1);
        let b = Stub::new(2);
        let config = CombatConfig::default().always_hit();

        let mut high = ConstantRoll::high();
        assert!(roll_attack_success(&mut high, &a, &b, &config));
        let mut low = ConstantRoll::low();
        assert!(!roll_evade_success(&mut low, &a, &b, &config));
    }

    #[test]
    fn test_damage_bounds_and_rounding() {
        let a = Stub::new(1);
        let b = Stub::new(2);

        assert_eq!(roll_damage(&mut ConstantRoll::low(), &a, &b), 5);
        assert_eq!(roll_damage(&mut ConstantRoll::high(), &a, &b), 15);
        // 0.26 * 10 = 2.6 rounds up
        assert_eq!(roll_damage(&mut ConstantRoll::new(0.26), &a, &b), 8);
        // 0.24 * 10 = 2.4 rounds down
        assert_eq!(roll_damage(&mut ConstantRoll::new(0.24), &a, &b), 7);
    }

    #[test]
    fn test_sneak_uses_perception() {
        let mut attacker = Stub::new(1);
        attacker.perception = Some(120);
        let mut defender = Stub::new(2);
        defender.perception = Some(60);
        let config = CombatConfig::default();

        // 0.5 * 120 = 60 > 0.9 * 60 = 54
        let mut rolls = ScriptedRolls::new([0.5, 0.9]);
        assert!(roll_sneak_success(&mut rolls, &attacker, &defender, &config));

        // 0.2 * 120 = 24 < 0.5 * 60 = 30
        let mut rolls = ScriptedRolls::new([0.2, 0.5]);
        assert!(!roll_sneak_success(&mut rolls, &attacker, &defender, &config));
    }

    #[test]
    fn test_sneak_tie_goes_to_defender() {
        let a = Stub::new(1);
        let b = Stub::new(2);
        let config = CombatConfig::default();

        let mut rolls = ScriptedRolls::new([0.5]);
        assert!(!roll_sneak_success(&mut rolls, &a, &b, &config));
    }

    #[test]
    fn test_perception_fallback() {
        let mut a = Stub::new(1);
        let config = CombatConfig::default().with_default_perception(80);
        assert_eq!(perception_of(&a, &config), 80);

        a.perception = Some(30);
        assert_eq!(perception_of(&a, &config), 30);
    }
}
