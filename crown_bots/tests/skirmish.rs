use crown_bots::{autopilot::Autopilot, simple::SimpleEnemy};
use crown_engine::{
    config::{EngineConfig, IncomeCadence, StrengthModel},
    dice::FixedRolls,
    game_engine::GameEngine,
    state::Phase,
    STARTING_GOLD,
};
use crown_shared::{
    faction::{Faction, Side},
    record::{Move, Record},
    scenario::Scenario,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

fn play(seed: u64, config: EngineConfig, max_turns: u32) -> GameEngine {
    let enemy = SimpleEnemy::new(Xoshiro256StarStar::seed_from_u64(seed ^ 0x55));
    let mut engine = GameEngine::new(
        &Scenario::crown_conquest(),
        config,
        Box::new(enemy),
        Box::new(Xoshiro256StarStar::seed_from_u64(seed)),
    )
    .unwrap();
    let mut autopilot = Autopilot::new(Xoshiro256StarStar::seed_from_u64(seed ^ 0xaa));

    for _ in 0..max_turns {
        if engine.tick().is_game_over() || !autopilot.play_turn(&mut engine).unwrap() {
            break;
        }

        assert_eq!(
            engine.state().turn(),
            Side::Enemy,
            "every completed player action hands over the turn"
        );
    }

    engine.tick();
    engine
}

fn config() -> impl Strategy<Value = EngineConfig> {
    (
        prop_oneof![Just(StrengthModel::Biased), Just(StrengthModel::Simple)],
        prop_oneof![Just(IncomeCadence::Once), Just(IncomeCadence::Twice)],
    )
        .prop_map(|(strength_model, income_cadence)| EngineConfig {
            strength_model,
            income_cadence,
            ..EngineConfig::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn games_keep_their_books(seed in any::<u64>(), config in config()) {
        let engine = play(seed, config, 200);
        let state = engine.state();

        // Gold is exactly the starting purse plus income minus recruitment.
        for side in Side::ALL {
            let mut gold = i64::from(STARTING_GOLD);
            for record in state.recording() {
                match record {
                    Record::Income(r) if r.side == side => gold += i64::from(r.amount),
                    Record::Move(s, Move::Recruit(r)) if *s == side => gold -= i64::from(r.cost),
                    _ => {}
                }
            }
            prop_assert_eq!(i64::from(state.gold(side)), gold);
        }

        // Turns strictly alternate.
        let turns = state
            .recording()
            .iter()
            .filter_map(|x| match x {
                Record::StartTurn(side) => Some(*side),
                _ => None,
            })
            .collect::<Vec<_>>();
        for pair in turns.windows(2) {
            prop_assert_ne!(pair[0], pair[1]);
        }

        // Only Player and Enemy ever attack, and conquests change hands.
        for record in state.recording() {
            if let Record::Attack(r) = record {
                prop_assert!(!r.outcome.attacker_faction.is_neutral());
                if r.outcome.conquered {
                    prop_assert_eq!(r.outcome.defender_owner, r.outcome.attacker_faction);
                }
            }
        }

        let counts = state.territory_counts();
        match engine.phase() {
            Phase::GameOver(outcome) if outcome.is_victory() => {
                prop_assert_eq!(counts[Faction::Player], state.territories().len());
            }
            Phase::GameOver(_) => prop_assert_eq!(counts[Faction::Player], 0),
            _ => {
                prop_assert!(counts[Faction::Player] > 0);
                prop_assert!(counts[Faction::Player] < state.territories().len());
            }
        }
    }
}

#[test]
fn seeded_games_replay_identically() {
    let a = play(0x100, EngineConfig::default(), 100);
    let b = play(0x100, EngineConfig::default(), 100);

    assert_eq!(a.state().recording(), b.state().recording());
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn enemy_is_paid_before_it_recruits() {
    let config = EngineConfig {
        enemy_gold: 0,
        ..EngineConfig::default()
    };
    let mut engine = GameEngine::new(
        &Scenario::crown_conquest(),
        config,
        Box::new(SimpleEnemy::new(FixedRolls::new([0.0]))),
        Box::new(FixedRolls::new([0.0, 0.99])),
    )
    .unwrap();
    engine.on_toggle_help();

    engine.on_territory_clicked("Northland").unwrap();
    engine.on_territory_clicked("Highland").unwrap();
    engine.on_move_amount_entered(10).unwrap();
    engine.tick();

    let recording = engine.state().recording();
    let income = recording
        .iter()
        .position(|x| matches!(x, Record::Income(r) if r.side == Side::Enemy && r.amount == 22))
        .unwrap();
    let recruits = recording
        .iter()
        .enumerate()
        .filter(|(_, x)| matches!(x, Record::Move(Side::Enemy, m) if m.is_recruit()))
        .map(|(i, _)| i)
        .collect::<Vec<_>>();

    assert_eq!(recruits.len(), 1);
    assert!(income < recruits[0]);
    assert!(matches!(
        &recording[recruits[0]],
        Record::Move(_, Move::Recruit(r)) if engine.state().map().name(r.territory) == "Southland"
    ));

    // 0 + 22 income - 20 recruit
    assert_eq!(engine.state().gold(Side::Enemy), 2);
}
