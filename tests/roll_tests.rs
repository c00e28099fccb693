//! Roll engine tests.
//!
//! Statistical checks use a seeded `CombatRng` so they are repeatable.

use tick_combat::actors::{MonsterDefinition, Monster, Player};
use tick_combat::core::{ActorId, CombatConfig, CombatRng, DamageRange};
use tick_combat::rolls::{
    roll_attack_success, roll_damage, roll_evade_success, roll_initiative, roll_sneak_success,
};

const TRIALS: usize = 10_000;

fn player(perception: u32) -> Player {
    Player::new(ActorId::new(1), 100, DamageRange::new(10, 20), 100).with_perception(perception)
}

/// Perception 120 against 60: the attacker should win about 75% of the time.
#[test]
fn test_sneak_favors_higher_perception() {
    let attacker = player(120);
    let defender = Monster::new(ActorId::new(2), MonsterDefinition::spider(), 1.0);
    let config = CombatConfig::default();
    let mut rng = CombatRng::new(42);

    let wins = (0..TRIALS)
        .filter(|_| roll_sneak_success(&mut rng, &attacker, &defender, &config))
        .count();

    let rate = wins as f64 / TRIALS as f64;
    assert!(rate > 0.65 && rate < 0.85, "sneak success rate: {rate}");
}

/// Equal perception is a coin flip.
#[test]
fn test_sneak_even_perception() {
    let attacker = player(100);
    let defender = Player::new(ActorId::new(2), 100, DamageRange::fixed(1), 100);
    let config = CombatConfig::default();
    let mut rng = CombatRng::new(3);

    let wins = (0..TRIALS)
        .filter(|_| roll_sneak_success(&mut rng, &attacker, &defender, &config))
        .count();

    let rate = wins as f64 / TRIALS as f64;
    assert!(rate > 0.45 && rate < 0.55, "sneak success rate: {rate}");
}

/// Default probabilities: 90% land, 10% of those evaded.
#[test]
fn test_attack_and_evade_rates() {
    let a = player(100);
    let b = player(100);
    let config = CombatConfig::default();
    let mut rng = CombatRng::new(11);

    let landed = (0..TRIALS)
        .filter(|_| roll_attack_success(&mut rng, &a, &b, &config))
        .count() as f64
        / TRIALS as f64;
    let evaded = (0..TRIALS)
        .filter(|_| roll_evade_success(&mut rng, &a, &b, &config))
        .count() as f64
        / TRIALS as f64;

    assert!((landed - 0.9).abs() < 0.02, "attack rate: {landed}");
    assert!((evaded - 0.1).abs() < 0.02, "evade rate: {evaded}");
}

/// Initiative ignores stats and splits evenly.
#[test]
fn test_initiative_is_even() {
    let a = player(10);
    let b = Monster::new(ActorId::new(2), MonsterDefinition::rat(), 2.5);
    let config = CombatConfig::default();
    let mut rng = CombatRng::new(5);

    let a_wins = (0..TRIALS)
        .filter(|_| roll_initiative(&mut rng, &a, &b, &config) == ActorId::new(1))
        .count() as f64
        / TRIALS as f64;

    assert!((a_wins - 0.5).abs() < 0.03, "initiative rate: {a_wins}");
}

/// Damage covers the whole range, endpoints included, and nothing outside.
#[test]
fn test_damage_stays_in_range() {
    let a = player(100);
    let b = player(100);
    let mut rng = CombatRng::new(8);

    let rolls: Vec<i64> = (0..TRIALS).map(|_| roll_damage(&mut rng, &a, &b)).collect();

    assert!(rolls.iter().all(|d| (10..=20).contains(d)));
    assert!(rolls.contains(&10));
    assert!(rolls.contains(&20));
}

/// Scaled monsters roll from their scaled range.
#[test]
fn test_damage_uses_scaled_monster_range() {
    let monster = Monster::new(ActorId::new(2), MonsterDefinition::rat(), 2.0);
    let target = player(100);
    let mut rng = CombatRng::new(9);

    for _ in 0..1000 {
        let damage = roll_damage(&mut rng, &monster, &target);
        assert!((10..=30).contains(&damage));
    }
}
