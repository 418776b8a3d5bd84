use std::collections::BTreeMap;

use poker_core::domain::{card::parse_cards, chips::Chips, hand::Payout, table::TableConfig, SeatIndex};
use poker_core::engine::settlement::{payouts_by_seat, showdown_pots, split_pot};
use poker_core::engine::{
    compute_side_pots, settle_showdown, Contribution, GameEngine, PlayerActionKind, Pot,
    RandomSource, SidePot,
};
use poker_core::eval::{evaluate_5, HandRank};

/// shuffle ничего не делает => колода остаётся в стандартном порядке.
#[derive(Default)]
struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {
        // no-op
    }
}

fn contrib(seat: SeatIndex, amount: u64, folded: bool, capped: bool) -> Contribution {
    Contribution {
        seat,
        amount: Chips(amount),
        folded,
        capped,
    }
}

fn rank(s: &str) -> HandRank {
    evaluate_5(&parse_cards(s).unwrap()).unwrap()
}

fn pot_sum(pots: &[SidePot]) -> Chips {
    pots.iter().map(|p| p.amount).sum()
}

//
// compute_side_pots
//
#[test]
fn short_all_in_creates_tier_boundary() {
    let pots = compute_side_pots(&[
        contrib(0, 40, false, true),
        contrib(1, 100, false, false),
        contrib(2, 100, false, false),
    ]);

    assert_eq!(pots.len(), 2);
    assert_eq!(pots[0].amount, Chips(120));
    assert_eq!(pots[0].level, Chips(40));
    assert_eq!(pots[0].eligible_seats, vec![0, 1, 2]);
    assert_eq!(pots[1].amount, Chips(120));
    assert_eq!(pots[1].eligible_seats, vec![1, 2]);
}

#[test]
fn no_all_in_means_single_pot() {
    // Блайнды: SB ещё может доставить – отдельного пота нет.
    let pots = compute_side_pots(&[
        contrib(0, 0, false, false),
        contrib(1, 25, false, false),
        contrib(2, 50, false, false),
    ]);
    assert_eq!(pots.len(), 1);
    assert_eq!(pots[0].amount, Chips(75));
    assert_eq!(pots[0].eligible_seats, vec![0, 1, 2]);
}

#[test]
fn folded_chips_are_dead_money_in_every_tier() {
    let contributions = [
        contrib(0, 150, true, false),
        contrib(1, 50, false, true),
        contrib(2, 100, false, false),
    ];
    let pots = compute_side_pots(&contributions);

    assert_eq!(pots.len(), 2);
    assert_eq!(pots[0].amount, Chips(150));
    assert_eq!(pots[0].eligible_seats, vec![1, 2]);
    // Сверх верхнего уровня – тоже в верхний пот.
    assert_eq!(pots[1].amount, Chips(150));
    assert_eq!(pots[1].eligible_seats, vec![2]);

    assert_eq!(pot_sum(&pots), Chips(300));
}

#[test]
fn tiers_always_sum_to_pot() {
    let contributions = [
        contrib(0, 17, true, false),
        contrib(1, 250, false, true),
        contrib(2, 80, false, true),
        contrib(3, 400, false, false),
        contrib(4, 400, false, false),
        contrib(5, 3, true, false),
    ];
    let pots = compute_side_pots(&contributions);
    let total: Chips = contributions.iter().map(|c| c.amount).sum();
    assert_eq!(pot_sum(&pots), total);

    let levels: Vec<Chips> = pots.iter().map(|p| p.level).collect();
    assert_eq!(levels, vec![Chips(80), Chips(250), Chips(400)]);

    let pots = showdown_pots(&contributions);
    assert_eq!(pot_sum(&pots), total);
    assert_eq!(pots.last().unwrap().eligible_seats, vec![3, 4]);
}

#[test]
fn empty_contributions_have_no_pots() {
    assert!(compute_side_pots(&[]).is_empty());
    assert!(compute_side_pots(&[contrib(0, 0, false, false)]).is_empty());
}

#[test]
fn pot_starts_empty_and_take_drains_it() {
    let mut pot = Pot::default();
    assert_eq!(pot.total, Chips::ZERO);

    pot.add(Chips(25));
    pot.add(Chips(50));
    assert_eq!(pot.take(), Chips(75));
    assert_eq!(pot, Pot::default());
}

//
// settle_showdown
//
#[test]
fn short_stack_with_best_hand_wins_only_its_tier() {
    let contributions = [
        contrib(0, 40, false, true),
        contrib(1, 100, false, false),
        contrib(2, 100, false, false),
    ];
    let mut ranks = BTreeMap::new();
    ranks.insert(0, rank("Ah Ad Ac As Kd"));
    ranks.insert(1, rank("Qh Qd 7c 5s 2d"));
    ranks.insert(2, rank("Jh 9d 7c 5s 2h"));

    let awards = settle_showdown(&contributions, &ranks, 2, 3);
    let payouts = payouts_by_seat(&awards);

    assert_eq!(
        payouts,
        vec![
            Payout { seat: 0, amount: Chips(120) },
            Payout { seat: 1, amount: Chips(120) },
        ]
    );
    assert_eq!(awards[0].pot_index, 0);
    assert_eq!(awards[1].pot_index, 1);
}

#[test]
fn odd_chip_goes_to_first_winner_left_of_button() {
    // 101 фишка: три игрока по 33 + 2 мёртвых от сфолдившего.
    let contributions = [
        contrib(0, 33, false, false),
        contrib(1, 33, false, false),
        contrib(2, 33, false, false),
        contrib(3, 2, true, false),
    ];
    let mut ranks = BTreeMap::new();
    ranks.insert(0, rank("2h 4d 7c 9s Jd"));
    ranks.insert(1, rank("Ah Kd 7c 5s 2d"));
    ranks.insert(2, rank("As Kc 7d 5h 2c"));

    let payouts = payouts_by_seat(&settle_showdown(&contributions, &ranks, 0, 4));
    assert_eq!(
        payouts,
        vec![
            Payout { seat: 1, amount: Chips(51) },
            Payout { seat: 2, amount: Chips(50) },
        ]
    );

    // Кнопка на 1: первым слева идёт место 2.
    let payouts = payouts_by_seat(&settle_showdown(&contributions, &ranks, 1, 4));
    assert_eq!(
        payouts,
        vec![
            Payout { seat: 1, amount: Chips(50) },
            Payout { seat: 2, amount: Chips(51) },
        ]
    );
}

#[test]
fn split_pot_hands_out_remainder_one_by_one() {
    let shares = split_pot(Chips(100), &[4, 0, 2]);
    assert_eq!(shares, vec![(4, Chips(34)), (0, Chips(33)), (2, Chips(33))]);

    let shares = split_pot(Chips(8), &[1, 2, 3]);
    assert_eq!(shares, vec![(1, Chips(3)), (2, Chips(3)), (3, Chips(2))]);

    assert!(split_pot(Chips(10), &[]).is_empty());
}

//
// Сценарий через движок
//
#[test]
fn short_stack_all_in_scenario_through_engine() {
    let mut engine = GameEngine::new(TableConfig::holdem(3, 50, 100)).unwrap();
    engine.seat_player(0, 1, "A", Chips(40)).unwrap();
    engine.seat_player(1, 2, "B", Chips(1_000)).unwrap();
    engine.seat_player(2, 3, "C", Chips(1_000)).unwrap();
    engine.start_hand_with(&mut DummyRng).unwrap();

    // Дилер A, SB B, BB C; A против ставки 100 идёт олл-ин на 40.
    assert_eq!(engine.current_player(), Some(0));
    engine.apply_action(0, PlayerActionKind::AllIn).unwrap();
    assert_eq!(engine.hand().unwrap().betting.current_bet, Chips(100));
    assert_eq!(engine.pots()[0].amount, Chips(120));
    assert_eq!(engine.pots()[0].level, Chips(40));

    engine.apply_action(1, PlayerActionKind::Call).unwrap();
    assert!(!engine.is_betting_complete());
    engine.apply_action(2, PlayerActionKind::Check).unwrap();
    assert!(engine.is_betting_complete());

    let pots = engine.pots().to_vec();
    assert_eq!(pots.len(), 2);
    assert_eq!(pots[0].amount, Chips(120));
    assert_eq!(pots[0].eligible_seats, vec![0, 1, 2]);
    assert_eq!(pots[1].amount, Chips(120));
    assert_eq!(pots[1].eligible_seats, vec![1, 2]);
    assert_eq!(pot_sum(&pots), engine.pot_total());

    while !engine.is_hand_complete() {
        match engine.current_player() {
            Some(seat) => {
                assert_ne!(seat, 0, "all-in player never acts");
                engine.apply_action(seat, PlayerActionKind::Check).unwrap();
            }
            None => engine.advance_street().unwrap(),
        }
    }

    // Неперемешанная колода: у A и C фулл-хаус четвёрки на тройках,
    // у B четвёрки на двойках. A делит с C только нижний пот.
    let summary = engine.settle_showdown().unwrap();
    assert_eq!(summary.total_pot, Chips(240));
    assert_eq!(engine.player(0).unwrap().chips, Chips(60));
    assert_eq!(engine.player(1).unwrap().chips, Chips(900));
    assert_eq!(engine.player(2).unwrap().chips, Chips(1_080));
    assert_eq!(engine.total_chips(), Chips(2_040));
}
