use crate::domain::hand::{HandPhase, HandSummary};
use crate::domain::SeatIndex;
use crate::engine::GameEngine;
use crate::eval::describe_hand;

use super::dto::{HandPlayerResultView, HandResultView, PlayerView, PotView, TableView};

/// Сформировать DTO стола. `hero` видит свои карты и свои легальные действия;
/// после вскрытия видны карты всех, кто дошёл до шоудауна.
pub fn build_table_view(engine: &GameEngine, hero: Option<SeatIndex>) -> TableView {
    let table = engine.table();
    let hand = engine.hand();
    let phase = engine.phase();

    let revealed: Vec<SeatIndex> = match (phase, engine.last_summary()) {
        (HandPhase::Settled, Some(summary)) => summary
            .results
            .iter()
            .filter(|r| r.rank.is_some())
            .map(|r| r.seat)
            .collect(),
        _ => Vec::new(),
    };

    let seats = table
        .seats
        .iter()
        .enumerate()
        .map(|(idx, slot)| {
            let seat = idx as SeatIndex;
            slot.as_ref().map(|p| {
                let visible = hero == Some(seat) || revealed.contains(&seat);
                PlayerView {
                    player_id: p.player_id,
                    display_name: p.name.clone(),
                    seat_index: seat,
                    stack: p.chips,
                    street_bet: p.street_bet,
                    total_bet: p.total_bet,
                    status: p.status,
                    is_dealer: table.dealer_button == Some(seat),
                    is_small_blind: hand.and_then(|h| h.small_blind_seat) == Some(seat),
                    is_big_blind: hand.and_then(|h| h.big_blind_seat) == Some(seat),
                    hole_cards: (visible && !p.hole_cards.is_empty())
                        .then(|| p.hole_cards.clone()),
                }
            })
        })
        .collect();

    let pots = engine
        .pots()
        .iter()
        .map(|p| PotView {
            amount: p.amount,
            eligible_seats: p.eligible_seats.clone(),
        })
        .collect();

    let hero_actions = hero
        .filter(|&seat| engine.current_player() == Some(seat))
        .map(|seat| engine.get_valid_actions(seat));

    TableView {
        max_seats: table.max_seats(),
        variant: table.config.variant,
        small_blind: table.config.stakes.small_blind,
        big_blind: table.config.stakes.big_blind,
        ante: table.config.stakes.ante,
        hand_number: hand.map(|h| h.hand_number),
        phase,
        street: hand.and_then(|h| table.config.variant.street(h.street())),
        dealer_button: table.dealer_button,
        board: table.board.clone(),
        total_pot: engine.pot_total(),
        pots,
        seats,
        current_actor_seat: engine.current_player(),
        hero_actions,
    }
}

/// DTO завершённой раздачи.
pub fn build_hand_result_view(summary: &HandSummary) -> HandResultView {
    let players = summary
        .results
        .iter()
        .map(|r| HandPlayerResultView {
            player_id: r.player_id,
            seat_index: r.seat,
            net_chips: r.net(),
            is_winner: !r.won.is_zero(),
            rank: r.rank.clone(),
            rank_description: r.rank.as_ref().map(describe_hand),
        })
        .collect();

    HandResultView {
        hand_number: summary.hand_number,
        board: summary.board.clone(),
        total_pot: summary.total_pot,
        ended_early: summary.ended_early,
        players,
    }
}
