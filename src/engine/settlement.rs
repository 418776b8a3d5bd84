use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::hand::Payout;
use crate::domain::{chips::Chips, SeatIndex};
use crate::engine::positions::clockwise_distance_from_button;
use crate::engine::side_pots::{compute_side_pots, Contribution, SidePot};
use crate::eval::HandRank;

/// Выплата из конкретного пота конкретному месту.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PotAward {
    /// Индекс пота (0 = main pot).
    pub pot_index: usize,
    pub seat: SeatIndex,
    pub amount: Chips,
}

/// Поты на момент расчёта: вклад каждого несфолдившего уже окончателен.
pub fn showdown_pots(contributions: &[Contribution]) -> Vec<SidePot> {
    let finals: Vec<Contribution> = contributions
        .iter()
        .map(|c| Contribution {
            capped: !c.folded,
            ..*c
        })
        .collect();
    compute_side_pots(&finals)
}

/// Распределить банк по шоудауну.
///
/// Каждый пот достаётся лучшей руке среди его претендентов; при равенстве пот
/// делится поровну, а нечётные фишки раздаются по одной, начиная с первого
/// победителя слева от кнопки по часовой стрелке. Результат детерминирован.
pub fn settle_showdown(
    contributions: &[Contribution],
    ranks: &BTreeMap<SeatIndex, HandRank>,
    button: SeatIndex,
    seat_count: u8,
) -> Vec<PotAward> {
    let mut awards = Vec::new();

    for (pot_index, pot) in showdown_pots(contributions).iter().enumerate() {
        if pot.amount.is_zero() {
            continue;
        }

        let best = pot
            .eligible_seats
            .iter()
            .filter_map(|seat| ranks.get(seat))
            .max();

        let mut winners: Vec<SeatIndex> = match best {
            Some(best) => pot
                .eligible_seats
                .iter()
                .copied()
                .filter(|seat| ranks.get(seat) == Some(best))
                .collect(),
            // Руки не переданы – делим между всеми претендентами.
            None => pot.eligible_seats.clone(),
        };
        if winners.is_empty() {
            log::warn!("pot {pot_index} ({}) has no eligible seats", pot.amount);
            continue;
        }

        winners.sort_by_key(|&seat| clockwise_distance_from_button(button, seat, seat_count));

        for (seat, amount) in split_pot(pot.amount, &winners) {
            awards.push(PotAward {
                pot_index,
                seat,
                amount,
            });
        }
    }

    awards
}

/// Все сфолдили, кроме одного: он забирает весь банк без вскрытия.
pub fn award_uncontested(contributions: &[Contribution], winner: SeatIndex) -> Vec<PotAward> {
    let total: Chips = contributions.iter().map(|c| c.amount).sum();
    if total.is_zero() {
        return Vec::new();
    }
    vec![PotAward {
        pot_index: 0,
        seat: winner,
        amount: total,
    }]
}

/// Поделить сумму между победителями, уже упорядоченными по часовой от кнопки.
/// Первые `amount % n` победителей получают по лишней фишке.
pub fn split_pot(amount: Chips, winners: &[SeatIndex]) -> Vec<(SeatIndex, Chips)> {
    if winners.is_empty() {
        return Vec::new();
    }
    let n = winners.len() as u64;
    let share = amount.0 / n;
    let remainder = (amount.0 % n) as usize;

    winners
        .iter()
        .enumerate()
        .map(|(i, &seat)| {
            let extra = u64::from(i < remainder);
            (seat, Chips(share + extra))
        })
        .collect()
}

/// Свернуть выплаты по потам в итог по местам (по возрастанию seat).
pub fn payouts_by_seat(awards: &[PotAward]) -> Vec<Payout> {
    let mut totals: BTreeMap<SeatIndex, Chips> = BTreeMap::new();
    for award in awards {
        *totals.entry(award.seat).or_default() += award.amount;
    }
    totals
        .into_iter()
        .map(|(seat, amount)| Payout { seat, amount })
        .collect()
}
