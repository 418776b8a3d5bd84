use poker_core::api::{build_hand_result_view, build_table_view};
use poker_core::domain::{
    card::parse_cards,
    chips::Chips,
    hand::{HandPhase, Street},
    table::TableConfig,
};
use poker_core::engine::{
    ActionType, GameEngine, HandEventKind, PlayerActionKind, RandomSource, RecordingSink,
};

/// shuffle ничего не делает => колода остаётся в стандартном порядке.
#[derive(Default)]
struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {
        // no-op
    }
}

fn heads_up() -> GameEngine {
    let mut engine = GameEngine::new(TableConfig::holdem(2, 25, 50)).unwrap();
    engine.seat_player(0, 10, "alice", Chips(1_000)).unwrap();
    engine.seat_player(1, 20, "bob", Chips(1_000)).unwrap();
    engine
}

/// Колл с кнопки и чеки до конца.
fn play_passive(engine: &mut GameEngine) {
    while !engine.is_hand_complete() {
        match engine.current_player() {
            Some(seat) => {
                let valid = engine.get_valid_actions(seat);
                let action = if valid.contains(ActionType::Check) {
                    PlayerActionKind::Check
                } else {
                    PlayerActionKind::Call
                };
                engine.apply_action(seat, action).unwrap();
            }
            None => engine.advance_street().unwrap(),
        }
    }
}

#[test]
fn table_view_hides_opponent_cards_and_shows_hero_actions() {
    let mut engine = heads_up();
    engine.start_hand_with(&mut DummyRng).unwrap();

    let view = build_table_view(&engine, Some(0));
    assert_eq!(view.max_seats, 2);
    assert_eq!(view.phase, HandPhase::Betting { street: 0 });
    assert_eq!(view.street, Some(Street::Preflop));
    assert_eq!(view.hand_number, Some(1));
    assert_eq!(view.total_pot, Chips(75));
    assert_eq!(view.current_actor_seat, Some(0));

    let hero = view.seats[0].as_ref().unwrap();
    assert_eq!(hero.display_name, "alice");
    assert!(hero.is_dealer);
    assert!(hero.is_small_blind);
    assert_eq!(hero.hole_cards, Some(parse_cards("2d 2s").unwrap()));

    let villain = view.seats[1].as_ref().unwrap();
    assert!(villain.is_big_blind);
    assert_eq!(villain.street_bet, Chips(50));
    assert_eq!(villain.hole_cards, None);

    let actions = view.hero_actions.unwrap();
    assert_eq!(actions.to_call, Chips(25));
    assert!(actions.contains(ActionType::Call));
    assert!(actions.contains(ActionType::Raise));
    assert!(!actions.contains(ActionType::Check));
    assert_eq!(actions.min_amount, Chips(75));

    // Не его ход – действий нет; свои карты видны.
    let view = build_table_view(&engine, Some(1));
    assert!(view.hero_actions.is_none());
    assert!(view.seats[1].as_ref().unwrap().hole_cards.is_some());
    assert!(view.seats[0].as_ref().unwrap().hole_cards.is_none());

    // Наблюдатель не видит ничьих карт.
    let view = build_table_view(&engine, None);
    assert!(view.seats.iter().flatten().all(|p| p.hole_cards.is_none()));
}

#[test]
fn idle_table_view() {
    let engine = GameEngine::new(TableConfig::holdem(4, 1, 2)).unwrap();
    let view = build_table_view(&engine, Some(0));

    assert_eq!(view.phase, HandPhase::NotStarted);
    assert_eq!(view.hand_number, None);
    assert_eq!(view.street, None);
    assert_eq!(view.seats.len(), 4);
    assert!(view.seats.iter().all(Option::is_none));
    assert!(view.pots.is_empty());
    assert!(view.hero_actions.is_none());
}

#[test]
fn showdown_reveals_cards_and_result_view_describes_hands() {
    let mut engine = heads_up();
    engine.start_hand_with(&mut DummyRng).unwrap();
    play_passive(&mut engine);
    let summary = engine.settle_showdown().unwrap();

    let view = build_table_view(&engine, None);
    assert_eq!(view.phase, HandPhase::Settled);
    assert_eq!(view.board, parse_cards("3d 3h 3s 4d 4s").unwrap());
    assert!(view.seats.iter().flatten().all(|p| p.hole_cards.is_some()));
    assert_eq!(view.total_pot, Chips::ZERO);

    let result = build_hand_result_view(&summary);
    assert_eq!(result.hand_number, 1);
    assert_eq!(result.total_pot, Chips(100));
    assert!(!result.ended_early);
    assert_eq!(result.players.len(), 2);
    for p in &result.players {
        assert!(p.is_winner);
        assert_eq!(p.net_chips, 0);
        assert_eq!(
            p.rank_description.as_deref(),
            Some("Full house, Threes full of Fours")
        );
    }
}

#[test]
fn fold_result_view_has_no_ranks() {
    let mut engine = heads_up();
    engine.start_hand_with(&mut DummyRng).unwrap();
    engine.apply_action(0, PlayerActionKind::Fold).unwrap();

    let summary = engine.settle_showdown().unwrap();
    let result = build_hand_result_view(&summary);
    assert!(result.ended_early);

    let alice = result.players.iter().find(|p| p.player_id == 10).unwrap();
    let bob = result.players.iter().find(|p| p.player_id == 20).unwrap();
    assert_eq!(alice.net_chips, -25);
    assert!(!alice.is_winner);
    assert_eq!(bob.net_chips, 25);
    assert!(bob.is_winner);
    assert!(result.players.iter().all(|p| p.rank_description.is_none()));

    // Без вскрытия карты так и остаются скрытыми.
    let view = build_table_view(&engine, None);
    assert!(view.seats.iter().flatten().all(|p| p.hole_cards.is_none()));
}

//
// Слушатели событий
//
#[test]
fn recording_sink_sees_every_history_event_in_order() {
    let mut engine = heads_up();
    let sink = RecordingSink::new();
    engine.add_sink(sink.clone());

    engine.start_hand_with(&mut DummyRng).unwrap();
    play_passive(&mut engine);
    engine.settle_showdown().unwrap();

    let events = sink.events();
    assert_eq!(events, engine.history().events);
    assert!(matches!(events.first().unwrap().kind, HandEventKind::HandStarted { hand_number: 1, .. }));
    assert!(matches!(events.last().unwrap().kind, HandEventKind::HandFinished { ended_early: false, .. }));
    for (i, e) in events.iter().enumerate() {
        assert_eq!(e.index as usize, i);
    }

    // История новой раздачи начинается заново, слушатель копит дальше.
    let before = sink.len();
    engine.start_hand_with(&mut DummyRng).unwrap();
    assert!(engine.history().len() < sink.len());
    assert_eq!(sink.len() - before, engine.history().len());

    sink.clear();
    assert!(sink.is_empty());
}
