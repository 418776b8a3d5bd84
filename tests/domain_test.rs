use std::collections::HashSet;

use poker_core::domain::{
    card::{parse_cards, Card, Rank, Suit},
    chips::Chips,
    deck::Deck,
    player::{Player, PlayerStatus},
    table::{ConfigError, GameVariant, Table, TableConfig},
};
use poker_core::engine::{ErrorKind, RandomSource};
use poker_core::infra::DeterministicRng;

/// shuffle ничего не делает => колода остаётся в стандартном порядке.
#[derive(Default)]
struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {
        // no-op
    }
}

fn card(s: &str) -> Card {
    s.parse().unwrap()
}

//
// card.rs
//
#[test]
fn card_text_form_round_trips() {
    let c = card("Td");
    assert_eq!(c, Card::new(Rank::Ten, Suit::Diamonds));
    assert_eq!(c.to_string(), "Td");
    assert_eq!(card("ah").to_string(), "Ah");

    assert!("1h".parse::<Card>().is_err());
    assert!("Ax".parse::<Card>().is_err());
    assert!("Ahh".parse::<Card>().is_err());

    let cards = parse_cards("Ah Kd 7c").unwrap();
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[2], Card::new(Rank::Seven, Suit::Clubs));
}

#[test]
fn rank_values_are_two_to_fourteen() {
    assert_eq!(Rank::Two.value(), 2);
    assert_eq!(Rank::Ace.value(), 14);
    assert_eq!(Rank::from_value(11), Some(Rank::Jack));
    assert_eq!(Rank::from_value(1), None);
    assert_eq!(Rank::from_value(15), None);
}

//
// deck.rs
//
#[test]
fn fresh_deck_is_in_canonical_rank_major_order() {
    let deck = Deck::standard_52();
    let cards = deck.undealt();

    assert_eq!(cards.len(), 52);
    assert_eq!(cards[0], card("2c"));
    assert_eq!(cards[1], card("2d"));
    assert_eq!(cards[4], card("3c"));
    assert_eq!(cards[51], card("As"));
}

#[test]
fn dealing_full_shuffled_deck_yields_each_card_once() {
    let mut deck = Deck::standard_52();
    let mut rng = DeterministicRng::from_seed(7);
    deck.shuffle_with(&mut rng);

    let mut seen = HashSet::new();
    while let Some(c) = deck.deal() {
        assert!(seen.insert(c), "duplicate card {c}");
    }
    assert_eq!(seen.len(), 52);

    let fresh: HashSet<Card> = Deck::standard_52().undealt().iter().copied().collect();
    assert_eq!(seen, fresh);
}

#[test]
fn exhausted_deck_returns_sentinel() {
    let mut deck = Deck::standard_52();
    let dealt = deck.deal_many(50);
    assert!(dealt.iter().all(Option::is_some));

    let tail = deck.deal_many(4);
    assert_eq!(tail.len(), 4);
    assert!(tail[0].is_some());
    assert!(tail[1].is_some());
    assert!(tail[2].is_none());
    assert!(tail[3].is_none());

    assert_eq!(deck.deal(), None);
    let err = deck.deal_checked().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DeckExhausted);
}

#[test]
fn shuffle_resets_cursor_and_shuffle_remaining_keeps_dealt_prefix() {
    let mut deck = Deck::standard_52();
    let mut rng = DeterministicRng::from_seed(99);

    deck.deal_many(5);
    let dealt_before: Vec<Card> = deck.dealt().to_vec();

    deck.shuffle_remaining_with(&mut rng);
    assert_eq!(deck.position(), 5);
    assert_eq!(deck.dealt(), dealt_before.as_slice());
    assert_eq!(deck.remaining(), 47);

    deck.shuffle_with(&mut rng);
    assert_eq!(deck.position(), 0);
    assert_eq!(deck.remaining(), 52);
}

#[test]
fn remove_cards_keeps_relative_order_of_the_rest() {
    let mut deck = Deck::standard_52();
    deck.deal(); // 2c

    deck.remove_cards(&[card("2h"), card("3c"), card("2c")]);

    assert_eq!(deck.len(), 50);
    assert!(!deck.contains(&card("2h")));
    assert!(!deck.contains(&card("3c")));
    // Уже розданную карту remove_cards не трогает.
    assert_eq!(deck.dealt(), &[card("2c")]);

    let undealt = deck.undealt();
    assert_eq!(undealt[0], card("2d"));
    assert_eq!(undealt[1], card("2s"));
    assert_eq!(undealt[2], card("3d"));
}

#[test]
fn returning_a_dealt_card_puts_it_back_into_the_undealt_region() {
    let mut deck = Deck::standard_52();
    let c = deck.deal().unwrap();
    assert_eq!(deck.position(), 1);
    assert!(!deck.contains(&c));

    deck.return_cards_with(&[c], &mut DummyRng);

    assert_eq!(deck.position(), 0);
    assert_eq!(deck.len(), 52);
    assert!(deck.contains(&c));
    assert_eq!(deck.undealt().last(), Some(&c));

    // Повторный возврат не создаёт дубликат.
    deck.return_cards_with(&[c], &mut DummyRng);
    assert_eq!(deck.len(), 52);
}

#[test]
fn short_deck_has_only_high_ranks() {
    let deck = Deck::with_min_rank(Rank::Six);
    assert_eq!(deck.len(), 36);
    assert!(deck.undealt().iter().all(|c| c.rank >= Rank::Six));

    let mut deck = Deck::standard_52();
    deck.init_subset(Rank::Ten);
    assert_eq!(deck.len(), 20);
    deck.init();
    assert_eq!(deck.len(), 52);
}

//
// player.rs
//
#[test]
fn player_commit_clamps_to_stack_and_goes_all_in() {
    let mut p = Player::new(1, "alice", Chips(100));
    p.reset_for_hand();
    assert_eq!(p.status, PlayerStatus::Active);

    let paid = p.commit(Chips(30));
    assert_eq!(paid, Chips(30));
    assert_eq!(p.street_bet, Chips(30));
    assert_eq!(p.total_bet, Chips(30));
    assert_eq!(p.to_call(Chips(50)), Chips(20));

    let paid = p.commit(Chips(500));
    assert_eq!(paid, Chips(70));
    assert_eq!(p.chips, Chips::ZERO);
    assert_eq!(p.status, PlayerStatus::AllIn);
    assert!(p.is_in_hand());
    assert!(!p.can_act());
}

#[test]
fn ante_is_dead_money_outside_the_street_bet() {
    let mut p = Player::new(1, "bob", Chips(100));
    p.reset_for_hand();
    p.commit_dead(Chips(10));
    assert_eq!(p.street_bet, Chips::ZERO);
    assert_eq!(p.total_bet, Chips(10));
    assert_eq!(p.chips, Chips(90));
}

#[test]
fn sitting_out_or_broke_player_is_not_dealt_in() {
    let mut p = Player::new(1, "carol", Chips::ZERO);
    p.reset_for_hand();
    assert_eq!(p.status, PlayerStatus::SittingOut);

    let mut q = Player::new(2, "dave", Chips(100));
    q.sitting_out = true;
    q.reset_for_hand();
    assert_eq!(q.status, PlayerStatus::SittingOut);
}

//
// table.rs
//
#[test]
fn table_config_validation() {
    assert!(TableConfig::holdem(6, 25, 50).validate().is_ok());

    assert!(matches!(
        TableConfig::holdem(1, 25, 50).validate(),
        Err(ConfigError::InvalidSeatCount { seats: 1, .. })
    ));
    assert!(matches!(
        TableConfig::holdem(11, 25, 50).validate(),
        Err(ConfigError::InvalidSeatCount { seats: 11, max: 10 })
    ));
    assert!(matches!(
        TableConfig::holdem(6, 25, 0).validate(),
        Err(ConfigError::ZeroBigBlind)
    ));
    assert!(matches!(
        TableConfig::holdem(6, 100, 50).validate(),
        Err(ConfigError::SmallBlindAboveBigBlind { .. })
    ));

    let mut draw = TableConfig::holdem(7, 25, 50);
    draw.variant = GameVariant::FiveCardDraw;
    assert!(draw.validate().is_err());
}

#[test]
fn table_config_loads_from_json_with_defaults() {
    let json = r#"{ "max_seats": 6, "stakes": { "small_blind": 25, "big_blind": 50 } }"#;
    let cfg = TableConfig::from_json_str(json).unwrap();
    assert_eq!(cfg.variant, GameVariant::TexasHoldem);
    assert_eq!(cfg.stakes.ante, Chips::ZERO);
    assert_eq!(cfg.stakes.big_blind, Chips(50));

    let json = r#"{ "max_seats": 4, "variant": "FiveCardDraw",
                    "stakes": { "small_blind": 5, "big_blind": 10, "ante": 1 } }"#;
    let cfg = TableConfig::from_json_str(json).unwrap();
    assert_eq!(cfg.variant, GameVariant::FiveCardDraw);
    assert_eq!(cfg.stakes.ante, Chips(1));

    assert!(matches!(
        TableConfig::from_json_str("{ not json"),
        Err(ConfigError::Json(_))
    ));
    assert!(matches!(
        TableConfig::from_json_str(r#"{ "max_seats": 6, "stakes": { "small_blind": 0, "big_blind": 0 } }"#),
        Err(ConfigError::ZeroBigBlind)
    ));
}

#[test]
fn table_reports_empty_seats() {
    let table = Table::new(TableConfig::holdem(3, 1, 2));
    assert_eq!(table.seats.len(), 3);
    assert_eq!(table.seated_count(), 0);
    assert!(table.is_seat_empty(0));
    assert_eq!(table.status_of(2), PlayerStatus::Empty);
    assert_eq!(table.status_of(9), PlayerStatus::Empty);
}

#[test]
fn variant_street_layout() {
    let holdem = GameVariant::TexasHoldem;
    assert_eq!(holdem.streets(), 4);
    assert_eq!(holdem.hole_cards(), 2);
    assert_eq!(holdem.board_cards_for(1), 3);
    assert_eq!(holdem.board_cards_for(2), 1);
    assert_eq!(holdem.board_cards_for(3), 1);

    let draw = GameVariant::FiveCardDraw;
    assert_eq!(draw.streets(), 2);
    assert_eq!(draw.hole_cards(), 5);
    assert_eq!(draw.board_cards_for(1), 0);
    assert!(draw.draws_before(1));
    assert!(!holdem.draws_before(1));
}
