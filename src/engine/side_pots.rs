use serde::{Deserialize, Serialize};

use crate::domain::player::{Player, PlayerStatus};
use crate::domain::{chips::Chips, SeatIndex};

/// Вклад одного места в банк за раздачу.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contribution {
    pub seat: SeatIndex,
    /// Сколько всего внесено (анте + все улицы).
    pub amount: Chips,
    /// Сфолдил – фишки остаются в банке, но претендовать на них нельзя.
    pub folded: bool,
    /// Вклад больше расти не может (олл-ин или раздача закончена).
    pub capped: bool,
}

impl Contribution {
    /// Вклад игрока по его текущему состоянию.
    pub fn from_player(seat: SeatIndex, player: &Player) -> Self {
        Self {
            seat,
            amount: player.total_bet,
            folded: player.status == PlayerStatus::Folded,
            capped: player.status == PlayerStatus::AllIn,
        }
    }
}

/// Сайд-пот: часть банка, в которую участвуют только некоторые игроки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SidePot {
    pub amount: Chips,
    /// Уровень вклада, до которого собран этот пот.
    pub level: Chips,
    pub eligible_seats: Vec<SeatIndex>,
}

/// Разбить банк на main pot и сайд-поты.
///
/// Уровни – различные вклады игроков, чей вклад зафиксирован (олл-ин), плюс
/// максимальный вклад среди несфолдивших. На каждом уровне пот собирает со ВСЕХ
/// (включая сфолдивших) часть вклада между предыдущим и текущим уровнем;
/// всё, что выше верхнего уровня, уходит в верхний пот.
///
/// Претендент уровня – несфолдивший игрок, чей вклад либо ещё растёт,
/// либо дотягивает до уровня. Сумма потов всегда равна сумме вкладов.
pub fn compute_side_pots(contributions: &[Contribution]) -> Vec<SidePot> {
    let total: Chips = contributions.iter().map(|c| c.amount).sum();
    if total.is_zero() {
        return Vec::new();
    }

    let live: Vec<&Contribution> = contributions.iter().filter(|c| !c.folded).collect();
    let top = live.iter().map(|c| c.amount).max().unwrap_or(Chips::ZERO);

    let mut levels: Vec<Chips> = live
        .iter()
        .filter(|c| c.capped)
        .map(|c| c.amount)
        .chain(std::iter::once(top))
        .filter(|level| !level.is_zero())
        .collect();
    levels.sort();
    levels.dedup();

    if levels.is_empty() {
        // Несфолдившие ничего не внесли (например, только анте сфолдивших).
        return vec![SidePot {
            amount: total,
            level: Chips::ZERO,
            eligible_seats: live.iter().map(|c| c.seat).collect(),
        }];
    }

    let mut pots = Vec::with_capacity(levels.len());
    let mut prev_level = Chips::ZERO;

    for &level in &levels {
        let amount: Chips = contributions
            .iter()
            .map(|c| c.amount.min(level).saturating_sub(prev_level))
            .sum();

        let eligible_seats = live
            .iter()
            .filter(|c| !c.capped || c.amount >= level)
            .map(|c| c.seat)
            .collect();

        pots.push(SidePot {
            amount,
            level,
            eligible_seats,
        });
        prev_level = level;
    }

    // Мёртвые деньги сверх верхнего уровня – в верхний пот.
    let overflow: Chips = contributions
        .iter()
        .map(|c| c.amount.saturating_sub(prev_level))
        .sum();
    if let Some(last) = pots.last_mut() {
        last.amount += overflow;
    }

    pots
}
