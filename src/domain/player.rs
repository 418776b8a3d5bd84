use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::PlayerId;

/// Статус игрока именно в контексте стола/раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerStatus {
    /// Игрок активен в текущей раздаче и может действовать.
    Active,
    /// Игрок сфолдил и больше не претендует на банк.
    Folded,
    /// Игрок в олл-ине – претендует на банк, но действовать больше не может.
    AllIn,
    /// Игрок сидит за столом, но не участвует в раздаче (sit out или нет фишек).
    SittingOut,
    /// Место пустое.
    Empty,
}

/// Состояние игрока за конкретным местом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub player_id: PlayerId,
    pub name: String,
    /// Фишки перед игроком (ещё не в банке).
    pub chips: Chips,
    /// Ставка на текущей улице.
    pub street_bet: Chips,
    /// Сколько всего внесено в банк за раздачу (анте + все улицы).
    pub total_bet: Chips,
    pub status: PlayerStatus,
    /// Карманные карты: 2 в холдеме, 5 в дро.
    pub hole_cards: Vec<Card>,
    /// Игрок попросил пропускать раздачи; применяется на следующем `start_hand`.
    pub sitting_out: bool,
}

impl Player {
    pub fn new(player_id: PlayerId, name: impl Into<String>, chips: Chips) -> Self {
        Self {
            player_id,
            name: name.into(),
            chips,
            street_bet: Chips::ZERO,
            total_bet: Chips::ZERO,
            status: PlayerStatus::SittingOut,
            hole_cards: Vec::new(),
            sitting_out: false,
        }
    }

    /// Участвует в розыгрыше банка (не сфолдил и был сдан в раздачу).
    pub fn is_in_hand(&self) -> bool {
        matches!(self.status, PlayerStatus::Active | PlayerStatus::AllIn)
    }

    /// Может сделать ход: активен, не в олл-ине.
    pub fn can_act(&self) -> bool {
        self.status == PlayerStatus::Active
    }

    /// Может получить карты в новой раздаче.
    pub fn can_be_dealt_in(&self) -> bool {
        !self.sitting_out && !self.chips.is_zero()
    }

    /// Сколько нужно доплатить до `current_bet`.
    pub fn to_call(&self, current_bet: Chips) -> Chips {
        current_bet.saturating_sub(self.street_bet)
    }

    /// Сброс перед новой раздачей: карты и ставки очищаются, статус выводится из стека.
    pub fn reset_for_hand(&mut self) {
        self.street_bet = Chips::ZERO;
        self.total_bet = Chips::ZERO;
        self.hole_cards.clear();
        self.status = if self.can_be_dealt_in() {
            PlayerStatus::Active
        } else {
            PlayerStatus::SittingOut
        };
    }

    /// Переложить в банк не более `amount`. Возвращает реально внесённое.
    /// Если стек закончился – игрок в олл-ине.
    pub fn commit(&mut self, amount: Chips) -> Chips {
        let paid = amount.min(self.chips);
        self.chips -= paid;
        self.street_bet += paid;
        self.total_bet += paid;
        if self.chips.is_zero() && self.status == PlayerStatus::Active {
            self.status = PlayerStatus::AllIn;
        }
        paid
    }

    /// Анте: идёт в банк, но не в ставку улицы.
    pub fn commit_dead(&mut self, amount: Chips) -> Chips {
        let paid = amount.min(self.chips);
        self.chips -= paid;
        self.total_bet += paid;
        if self.chips.is_zero() && self.status == PlayerStatus::Active {
            self.status = PlayerStatus::AllIn;
        }
        paid
    }
}
