use rand::Rng;

use poker_core::domain::{chips::Chips, hand::HandPhase, SeatIndex};
use poker_core::engine::{ActionType, EngineError, GameEngine, PlayerActionKind, SidePot};
use poker_core::domain::table::{TableConfig, TableStakes};
use poker_core::infra::DeterministicRng;
use poker_core::state::GameSnapshot;

fn make_engine(config: TableConfig, stacks: &[u64]) -> GameEngine {
    let mut engine = GameEngine::new(config).unwrap();
    for (i, &stack) in stacks.iter().enumerate() {
        engine
            .seat_player(i as SeatIndex, i as u64 + 1, format!("bot-{i}"), Chips(stack))
            .unwrap();
    }
    engine
}

/// Случайное легальное действие для текущего игрока.
fn random_action(engine: &GameEngine, seat: SeatIndex, rng: &mut DeterministicRng) -> PlayerActionKind {
    let valid = engine.get_valid_actions(seat);
    assert!(!valid.actions.is_empty(), "seat {seat} has no legal actions");

    let pick = valid.actions[rng.inner_mut().gen_range(0..valid.actions.len())];
    let amount = |rng: &mut DeterministicRng| {
        if valid.min_amount >= valid.max_amount {
            valid.max_amount
        } else {
            Chips(rng.inner_mut().gen_range(valid.min_amount.0..=valid.max_amount.0))
        }
    };

    match pick {
        // Фолдим пореже, чтобы доходить до шоудауна.
        ActionType::Fold if rng.inner_mut().gen_bool(0.5) => PlayerActionKind::Fold,
        ActionType::Fold | ActionType::Check | ActionType::Call => {
            if valid.contains(ActionType::Check) {
                PlayerActionKind::Check
            } else if valid.contains(ActionType::Call) {
                PlayerActionKind::Call
            } else {
                PlayerActionKind::Fold
            }
        }
        ActionType::Bet => PlayerActionKind::Bet(amount(rng)),
        ActionType::Raise => PlayerActionKind::Raise(amount(rng)),
        ActionType::AllIn => PlayerActionKind::AllIn,
    }
}

fn assert_pots_consistent(engine: &GameEngine) {
    let sum: Chips = engine.pots().iter().map(|p: &SidePot| p.amount).sum();
    assert_eq!(sum, engine.pot_total(), "pots {:?}", engine.pots());
}

/// Доиграть текущую раздачу до расчёта, проверяя инварианты после каждого шага.
fn play_out(engine: &mut GameEngine, rng: &mut DeterministicRng, total: Chips) {
    let mut steps = 0;
    while !engine.is_hand_complete() {
        steps += 1;
        assert!(steps < 500, "hand does not terminate");

        match engine.current_player() {
            Some(seat) => {
                let action = random_action(engine, seat, rng);
                engine
                    .apply_action(seat, action)
                    .unwrap_or_else(|e| panic!("seat {seat} {action}: {e}"));
            }
            None => engine.advance_street().unwrap(),
        }
        assert_eq!(engine.total_chips(), total);
        assert_pots_consistent(engine);
    }

    let summary = engine.settle_showdown().unwrap();
    let paid: Chips = summary.payouts.iter().map(|p| p.amount).sum();
    assert_eq!(paid, summary.total_pot);
    assert_eq!(engine.pot_total(), Chips::ZERO);
    assert_eq!(engine.phase(), HandPhase::Settled);
    assert_eq!(engine.total_chips(), total);
}

#[test]
fn random_play_conserves_chips_across_many_hands() {
    let stacks = [1_500, 700, 2_000, 90, 1_000, 3_333];
    let total: Chips = stacks.iter().map(|&s| Chips(s)).sum();

    for seed in 0..20 {
        let mut rng = DeterministicRng::from_seed(seed);
        let mut config = TableConfig::holdem(6, 10, 20);
        if seed % 2 == 1 {
            config.stakes = TableStakes::new(Chips(10), Chips(20), Chips(5));
        }
        let mut engine = make_engine(config, &stacks);

        for _ in 0..40 {
            match engine.start_hand_with(&mut rng) {
                Ok(()) => {}
                Err(EngineError::NotEnoughPlayers) => break,
                Err(e) => panic!("start_hand: {e}"),
            }
            assert_eq!(engine.total_chips(), total);
            assert_pots_consistent(&engine);
            play_out(&mut engine, &mut rng, total);
        }
    }
}

#[test]
fn heads_up_random_play_conserves_chips() {
    let mut rng = DeterministicRng::from_seed(31337);
    let mut engine = make_engine(TableConfig::holdem(2, 5, 10), &[300, 300]);
    let total = Chips(600);

    for _ in 0..100 {
        if engine.start_hand_with(&mut rng).is_err() {
            break;
        }
        play_out(&mut engine, &mut rng, total);
    }
    assert!(engine.hands_played() > 0);
}

//
// Снапшот
//
#[test]
fn snapshot_json_round_trip_mid_hand_continues_identically() {
    let mut rng = DeterministicRng::from_seed(5);
    let mut engine = make_engine(TableConfig::holdem(4, 25, 50), &[1_000, 1_000, 1_000, 1_000]);
    engine.start_hand_with(&mut rng).unwrap();

    // Пару шагов, чтобы в снапшоте были ставки и история.
    for _ in 0..3 {
        match engine.current_player() {
            Some(seat) => {
                engine.apply_action(seat, PlayerActionKind::Call).unwrap();
            }
            None => engine.advance_street().unwrap(),
        }
    }

    let snapshot = engine.snapshot();
    let json = snapshot.to_json().unwrap();
    let decoded = GameSnapshot::from_json(&json).unwrap();
    assert_eq!(decoded, snapshot);

    let mut restored = GameEngine::restore(decoded);
    assert_eq!(restored.snapshot(), engine.snapshot());
    assert_eq!(restored.current_player(), engine.current_player());
    assert_eq!(restored.total_chips(), Chips(4_000));

    // Одинаковые действия в обоих движках дают одинаковый результат.
    let mut rng_a = DeterministicRng::from_seed(77);
    let mut rng_b = DeterministicRng::from_seed(77);
    while !engine.is_hand_complete() {
        match engine.current_player() {
            Some(seat) => {
                let a = random_action(&engine, seat, &mut rng_a);
                let b = random_action(&restored, seat, &mut rng_b);
                assert_eq!(a, b);
                engine.apply_action(seat, a).unwrap();
                restored.apply_action(seat, b).unwrap();
            }
            None => {
                engine.advance_street().unwrap();
                restored.advance_street().unwrap();
            }
        }
    }
    assert_eq!(engine.settle_showdown().unwrap(), restored.settle_showdown().unwrap());
    assert_eq!(engine.snapshot(), restored.snapshot());
}

#[test]
fn snapshot_of_idle_table_restores() {
    let engine = make_engine(TableConfig::holdem(3, 1, 2), &[100, 100]);
    let json = engine.snapshot().to_json().unwrap();
    let restored = GameEngine::restore(GameSnapshot::from_json(&json).unwrap());

    assert!(restored.hand().is_none());
    assert_eq!(restored.table().seated_count(), 2);
    assert_eq!(restored.total_chips(), Chips(200));
    assert!(GameSnapshot::from_json("{").is_err());
}
