use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Chips, SeatIndex};

/// Категория ошибки – на что должен реагировать вызывающий:
/// переспросить игрока, прервать раздачу или чинить баг в драйвере.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ErrorKind {
    /// Действие нелегально в текущем состоянии (не его ход, не та фаза, неверная сумма).
    InvalidAction,
    /// Сумма больше стека.
    InsufficientChips,
    /// В колоде не осталось карт.
    DeckExhausted,
    /// Оценщику передали не 5–7 карт.
    InvalidHandSize,
}

/// Ошибки движка покера.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Место {0} не существует за столом")]
    InvalidSeat(SeatIndex),

    #[error("Место {0} пустое")]
    EmptySeat(SeatIndex),

    #[error("Место {0} уже занято")]
    SeatTaken(SeatIndex),

    #[error("Недостаточно игроков с фишками для раздачи")]
    NotEnoughPlayers,

    #[error("Раздача уже идёт")]
    HandAlreadyInProgress,

    #[error("Раздача не активна")]
    NoActiveHand,

    #[error("Сейчас не ход места {0}")]
    NotPlayersTurn(SeatIndex),

    #[error("Игрок на месте {0} не может действовать (сфолдил, олл-ин или не в раздаче)")]
    PlayerCannotAct(SeatIndex),

    #[error("Невозможно выполнить check – нужно доплатить {to_call}")]
    CannotCheck { to_call: Chips },

    #[error("Невозможно выполнить call – нет ставки для уравнивания")]
    CannotCall,

    #[error("Bet невозможен – на улице уже есть ставка {current_bet}")]
    BetNotAllowed { current_bet: Chips },

    #[error("Raise невозможен – на улице нет ставки")]
    RaiseNotAllowed,

    #[error("Ставка {amount} меньше минимума {minimum}")]
    BetTooSmall { amount: Chips, minimum: Chips },

    #[error("Размер рейза {increment} меньше минимального {minimum}")]
    RaiseTooSmall { increment: Chips, minimum: Chips },

    #[error("Недостаточно фишек: нужно {needed}, в стеке {available}")]
    NotEnoughChips { needed: Chips, available: Chips },

    #[error("Торговля на улице ещё не завершена")]
    BettingNotComplete,

    #[error("Раздача уже завершена, улиц больше нет")]
    NoMoreStreets,

    #[error("Раздача ещё не дошла до расчёта")]
    HandNotComplete,

    #[error("Обмен карт сейчас невозможен")]
    DrawNotAllowed,

    #[error("Игрок на месте {0} уже менял карты")]
    AlreadyDrew(SeatIndex),

    #[error("Карты {0} нет на руке у игрока")]
    CardNotInHand(String),

    #[error("В колоде закончились карты")]
    DeckExhausted,

    #[error("Оценка руки ожидает 5–7 карт, передано {0}")]
    InvalidHandSize(usize),
}

impl EngineError {
    /// Каждая ошибка относится ровно к одной категории.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::NotEnoughChips { .. } => ErrorKind::InsufficientChips,
            EngineError::DeckExhausted => ErrorKind::DeckExhausted,
            EngineError::InvalidHandSize(_) => ErrorKind::InvalidHandSize,
            EngineError::InvalidSeat(_)
            | EngineError::EmptySeat(_)
            | EngineError::SeatTaken(_)
            | EngineError::NotEnoughPlayers
            | EngineError::HandAlreadyInProgress
            | EngineError::NoActiveHand
            | EngineError::NotPlayersTurn(_)
            | EngineError::PlayerCannotAct(_)
            | EngineError::CannotCheck { .. }
            | EngineError::CannotCall
            | EngineError::BetNotAllowed { .. }
            | EngineError::RaiseNotAllowed
            | EngineError::BetTooSmall { .. }
            | EngineError::RaiseTooSmall { .. }
            | EngineError::BettingNotComplete
            | EngineError::NoMoreStreets
            | EngineError::HandNotComplete
            | EngineError::DrawNotAllowed
            | EngineError::AlreadyDrew(_)
            | EngineError::CardNotInHand(_) => ErrorKind::InvalidAction,
        }
    }
}
