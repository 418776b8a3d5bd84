use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::{PlayerId, SeatIndex};
use crate::eval::HandRank;

/// Улица (раунд торговли). Какие улицы есть – зависит от варианта игры.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
    /// Дро: торговля до обмена карт.
    PreDraw,
    /// Дро: торговля после обмена.
    PostDraw,
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
            Street::PreDraw => "pre-draw",
            Street::PostDraw => "post-draw",
        };
        f.write_str(s)
    }
}

/// Фаза раздачи.
///
/// `NotStarted → BlindsPosted → Betting(0..N) → Showdown | EarlyEnd → Settled`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandPhase {
    NotStarted,
    BlindsPosted,
    /// Идёт торговля на улице с номером `street` (0 = первая).
    Betting { street: u8 },
    /// Последняя улица сыграна, несколько претендентов – нужен шоудаун.
    Showdown,
    /// Все, кроме одного, сфолдили.
    EarlyEnd,
    /// Банк выплачен.
    Settled,
}

/// Выплата одному месту.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payout {
    pub seat: SeatIndex,
    pub amount: Chips,
}

/// Результат конкретного игрока в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerHandResult {
    pub seat: SeatIndex,
    pub player_id: PlayerId,
    /// Итоговая рука (если дошёл до шоудауна).
    pub rank: Option<HandRank>,
    /// Сколько внёс в банк за раздачу.
    pub invested: Chips,
    /// Сколько забрал из банка.
    pub won: Chips,
}

impl PlayerHandResult {
    /// Выигрыш минус вложения (может быть отрицательным).
    pub fn net(&self) -> i64 {
        self.won.0 as i64 - self.invested.0 as i64
    }
}

/// Краткое описание завершённой раздачи. Удобно для истории/реплеера.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandSummary {
    pub hand_number: u64,
    /// Номер последней сыгранной улицы.
    pub street_reached: u8,
    pub board: Vec<Card>,
    pub total_pot: Chips,
    /// Раздача закончилась без шоудауна.
    pub ended_early: bool,
    pub payouts: Vec<Payout>,
    pub results: Vec<PlayerHandResult>,
}
