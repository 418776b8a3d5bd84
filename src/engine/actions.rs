use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Chips, SeatIndex};

/// Тип действия игрока.
///
/// Сумма в `Bet`/`Raise` – сколько фишек игрок ДОБАВЛЯЕТ в банк этим действием
/// (для рейза это колл + прибавка сверху).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerActionKind {
    Fold,
    Check,
    Call,
    /// Bet на улице, где ещё нет ставки.
    Bet(Chips),
    /// Raise существующей ставки.
    Raise(Chips),
    /// All-in – поставить весь стек.
    AllIn,
}

impl PlayerActionKind {
    pub fn action_type(&self) -> ActionType {
        match self {
            PlayerActionKind::Fold => ActionType::Fold,
            PlayerActionKind::Check => ActionType::Check,
            PlayerActionKind::Call => ActionType::Call,
            PlayerActionKind::Bet(_) => ActionType::Bet,
            PlayerActionKind::Raise(_) => ActionType::Raise,
            PlayerActionKind::AllIn => ActionType::AllIn,
        }
    }
}

impl fmt::Display for PlayerActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerActionKind::Fold => f.write_str("fold"),
            PlayerActionKind::Check => f.write_str("check"),
            PlayerActionKind::Call => f.write_str("call"),
            PlayerActionKind::Bet(a) => write!(f, "bet {a}"),
            PlayerActionKind::Raise(a) => write!(f, "raise {a}"),
            PlayerActionKind::AllIn => f.write_str("all-in"),
        }
    }
}

/// Вид действия без суммы – для списка легальных действий.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActionType {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    AllIn,
}

/// Конкретное применённое действие (для истории).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAction {
    /// В каком месте сидит игрок.
    pub seat: SeatIndex,
    /// Само действие.
    pub kind: PlayerActionKind,
    /// Сколько фишек реально ушло в банк.
    pub committed: Chips,
}

/// Что может сделать игрок прямо сейчас.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidActions {
    pub seat: SeatIndex,
    pub actions: Vec<ActionType>,
    /// Сколько нужно доплатить до колла.
    pub to_call: Chips,
    /// Минимальная сумма для Bet/Raise (в смысле "добавить в банк").
    pub min_amount: Chips,
    /// Максимальная сумма для Bet/Raise (весь стек).
    pub max_amount: Chips,
}

impl ValidActions {
    /// Пустой набор: игрок сейчас не может ничего.
    pub fn none(seat: SeatIndex) -> Self {
        Self {
            seat,
            actions: Vec::new(),
            to_call: Chips::ZERO,
            min_amount: Chips::ZERO,
            max_amount: Chips::ZERO,
        }
    }

    pub fn contains(&self, action: ActionType) -> bool {
        self.actions.contains(&action)
    }
}
