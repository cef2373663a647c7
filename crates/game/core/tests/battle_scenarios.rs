use ranger_core::{
    BattleEvent, BattlePhase, BattleResult, BattleSession, Difficulty, Enemy, EnemyFactory,
    EnemyKind, GameConfig, PcgRng, RangerAction, apply_defeat, apply_victory, compute_seed,
    create_ranger,
};

fn enemy(health: u32, attack: u32, defense: u32) -> Enemy {
    Enemy {
        name: "Putty Patroller".into(),
        kind: EnemyKind::Loogies,
        level: 1,
        current_health: health,
        max_health: health,
        attack,
        defense,
        gold_reward: 25,
        experience: 20,
    }
}

/// Attack 10 against defense 12 still chips away one point per hit.
#[test]
fn weak_attacks_deal_minimum_damage() {
    let mut ranger = create_ranger("Billy", "Blue", "Tech").expect("valid ranger");
    ranger.attack = 10;
    let mut session = BattleSession::new(&mut ranger, enemy(5, 1, 12));

    let mut turns = 0;
    while !session.is_over() {
        let outcome = session
            .resolve_turn(RangerAction::Attack)
            .expect("attack is always allowed");
        assert_eq!(outcome.damage_dealt(), 1);
        turns += 1;
    }

    assert_eq!(turns, 5);
    assert_eq!(session.phase(), BattlePhase::Won);
}

/// Level 3, full meter, attack 10: Fusion hits for 30, heals 30% and empties
/// the meter.
#[test]
fn fusion_power_scenario() {
    let mut ranger = create_ranger("Jason", "Red", "Tech")
        .expect("valid ranger")
        .with_level(3)
        .with_mega_energy(GameConfig::MAX_MEGA_ENERGY);
    ranger.attack = 10;
    ranger.current_health = 50;
    let max_health = ranger.max_health;

    let mut session = BattleSession::new(&mut ranger, enemy(100, 1, 50));
    let outcome = session
        .resolve_turn(RangerAction::FusionPower)
        .expect("fusion is eligible");

    assert_eq!(
        outcome.events[0],
        BattleEvent::FusionPower {
            damage: 30,
            healed: max_health * 30 / 100,
        }
    );
    assert_eq!(outcome.enemy_health, 70);
    assert_eq!(outcome.mega_energy, 0);
    assert_eq!(outcome.ranger_health, 50 + max_health * 30 / 100 - 1);
}

#[test]
fn fusion_empties_meter_on_a_killing_blow() {
    let mut ranger = create_ranger("Tommy", "Green", "Nature")
        .expect("valid ranger")
        .with_level(3);
    let mut session = BattleSession::new(&mut ranger, enemy(5, 1, 0));

    let outcome = session
        .resolve_turn(RangerAction::FusionPower)
        .expect("fusion is eligible");

    assert_eq!(outcome.phase, BattlePhase::Won);
    assert_eq!(outcome.mega_energy, 0);
    assert_eq!(session.ranger().mega_energy, 0);
}

#[test]
fn battles_always_terminate() {
    let rng = PcgRng;
    for nonce in 0..50 {
        for difficulty in [Difficulty::Easy, Difficulty::Extreme] {
            let mut ranger = create_ranger("Trini", "Yellow", "Nature").expect("valid ranger");
            let foe = EnemyFactory::spawn_random(difficulty, 1, &rng, compute_seed(7, nonce, 0));
            let mut session = BattleSession::new(&mut ranger, foe);

            let mut turns = 0;
            while !session.is_over() {
                let outcome = session
                    .resolve_turn(RangerAction::Attack)
                    .expect("attack is always allowed");
                assert!(outcome.mega_energy <= GameConfig::MAX_MEGA_ENERGY);
                turns += 1;
                assert!(turns < 1_000, "battle did not terminate");
            }
        }
    }
}

#[test]
fn full_encounter_feeds_progression() {
    let config = GameConfig::default();
    let rng = PcgRng;
    let mut ranger = create_ranger("Kimberly", "Pink", "Magic").expect("valid ranger");
    let foe = EnemyFactory::spawn(EnemyKind::Zombats, Difficulty::Easy, 1);

    let mut session = BattleSession::new(&mut ranger, foe);
    while !session.is_over() {
        session
            .resolve_turn(RangerAction::Attack)
            .expect("attack is always allowed");
    }
    let report = session.conclude().expect("battle is over");
    assert_eq!(report.result, BattleResult::Victory);

    let gold_before = ranger.gold;
    let summary = apply_victory(&mut ranger, &report.enemy, &config, &rng, compute_seed(1, 1, 1));

    assert!(summary.experience > 0);
    assert_eq!(ranger.gold, gold_before + summary.gold);
    assert_eq!(ranger.experience, summary.experience);
}

#[test]
fn losing_costs_gold_and_leaves_the_ranger_standing() {
    let mut ranger = create_ranger("Zack", "Black", "Tech").expect("valid ranger");
    let boss = EnemyFactory::spawn(EnemyKind::EmperorMavro, Difficulty::Extreme, 1);

    let mut session = BattleSession::new(&mut ranger, boss);
    while !session.is_over() {
        session
            .resolve_turn(RangerAction::Defend)
            .expect("defend is always allowed");
    }
    let report = session.conclude().expect("battle is over");
    assert_eq!(report.result, BattleResult::Defeat);
    assert_eq!(report.log.last(), Some(&BattleEvent::RangerDefeated));

    let summary = apply_defeat(&mut ranger);
    assert_eq!(summary.gold_lost, 10);
    assert!(ranger.is_alive());
}
