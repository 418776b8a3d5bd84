use serde::{Deserialize, Serialize};

use crate::domain::{Chips, SeatIndex, Table};

/// Состояние раунда ставок (на конкретной улице).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingState {
    /// Номер улицы (0 = первая).
    pub street: u8,
    /// Текущая целевая ставка, до которой должны дотянуться игроки (BB, bet, raise).
    pub current_bet: Chips,
    /// Минимальный размер повышающей части рейза (размер последнего полного bet/raise).
    pub min_raise: Chips,
    /// Seat последнего агрессора (bet/raise/all-in сверху). Блайнды агрессией не считаются.
    pub last_aggressor: Option<SeatIndex>,
    /// Сколько игроков ответили check/call после последней агрессии.
    pub callers: u32,
}

impl BettingState {
    pub fn new(street: u8, current_bet: Chips, min_raise: Chips) -> Self {
        Self {
            street,
            current_bet,
            min_raise,
            last_aggressor: None,
            callers: 0,
        }
    }

    /// Check или полноценный call от игрока, который остаётся в игре.
    pub fn on_call(&mut self) {
        self.callers += 1;
    }

    /// Обновить состояние после bet/raise/all-in сверху текущей ставки:
    /// - current_bet;
    /// - min_raise (только если повышение полноценное);
    /// - last_aggressor;
    /// - счётчик ответивших обнуляется.
    pub fn on_raise(&mut self, seat: SeatIndex, new_bet: Chips) {
        let increment = new_bet.saturating_sub(self.current_bet);
        if increment >= self.min_raise {
            self.min_raise = increment;
        }
        self.current_bet = new_bet;
        self.last_aggressor = Some(seat);
        self.callers = 0;
    }

    /// Завершён ли раунд ставок.
    ///
    /// Совпадения ставок мало: сыгравший check может ещё встретить рейз.
    /// Раунд закрыт, когда каждый, кто может ходить, уравнял текущую ставку
    /// и ответил на последнюю агрессию (сам агрессор отвечать не обязан).
    pub fn is_round_complete(&self, table: &Table) -> bool {
        let live = table.occupied().filter(|(_, p)| p.is_in_hand()).count();
        if live <= 1 {
            return true;
        }

        let actors: Vec<SeatIndex> = table
            .occupied()
            .filter(|(_, p)| p.can_act())
            .map(|(seat, _)| seat)
            .collect();
        if actors.is_empty() {
            return true;
        }

        let all_matched = actors.iter().all(|&seat| {
            table
                .player(seat)
                .map(|p| p.street_bet >= self.current_bet)
                .unwrap_or(true)
        });
        if !all_matched {
            return false;
        }

        // Единственному, кто может ходить, доплачивать нечего и торговаться не с кем.
        if actors.len() == 1 {
            return true;
        }

        let aggressor_can_act = self
            .last_aggressor
            .map(|seat| actors.contains(&seat))
            .unwrap_or(false);
        let required = if aggressor_can_act {
            actors.len() - 1
        } else {
            actors.len()
        };

        self.callers as usize >= required
    }
}
