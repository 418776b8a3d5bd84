use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::Street;
use crate::domain::{PlayerId, SeatIndex};
use crate::engine::actions::PlayerAction;
use crate::engine::side_pots::SidePot;
use crate::eval::HandRank;

/// Тип события в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandEventKind {
    /// Новая раздача началась.
    HandStarted {
        hand_number: u64,
        dealer: SeatIndex,
        /// Места, сданные в раздачу, по часовой от кнопки.
        seats: Vec<SeatIndex>,
    },

    /// Кнопка/блайнды/анте.
    BlindsPosted {
        dealer: SeatIndex,
        small_blind: Option<(SeatIndex, Chips)>,
        big_blind: Option<(SeatIndex, Chips)>,
        ante: Vec<(SeatIndex, Chips)>,
    },

    /// Игрок получил карманные карты.
    HoleCardsDealt {
        seat: SeatIndex,
        cards: Vec<Card>,
    },

    /// Действие игрока.
    PlayerActed {
        player_id: PlayerId,
        action: PlayerAction,
        new_stack: Chips,
        pot_after: Chips,
    },

    /// Изменился банк или его разбивка на поты.
    PotUpdated {
        total: Chips,
        pots: Vec<SidePot>,
    },

    /// Торговля на улице завершена.
    StreetCompleted {
        street: u8,
    },

    /// Переход на новую улицу.
    StreetChanged {
        street: u8,
        label: Option<Street>,
    },

    /// Открыты общие карты на борде.
    BoardDealt {
        street: u8,
        cards: Vec<Card>,
    },

    /// Дро: игрок сбросил и добрал карты.
    CardsExchanged {
        seat: SeatIndex,
        discarded: Vec<Card>,
        received: Vec<Card>,
    },

    /// Шоудаун – открытие карт.
    ShowdownReveal {
        seat: SeatIndex,
        player_id: PlayerId,
        hole_cards: Vec<Card>,
        rank: HandRank,
    },

    /// Выплата из пота.
    PotAwarded {
        pot_index: usize,
        seat: SeatIndex,
        player_id: PlayerId,
        amount: Chips,
    },

    /// Раздача завершена.
    HandFinished {
        hand_number: u64,
        ended_early: bool,
    },
}

/// Событие в раздаче с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandEvent {
    pub index: u32,
    pub kind: HandEventKind,
}

/// Полная история раздачи. Без ограничения длины.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandHistory {
    pub events: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Добавить событие и вернуть ссылку на него (для рассылки слушателям).
    pub fn push(&mut self, kind: HandEventKind) -> &HandEvent {
        let index = self.events.len() as u32;
        self.events.push(HandEvent { index, kind });
        &self.events[index as usize]
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Только действия игроков, по порядку.
    pub fn actions(&self) -> impl Iterator<Item = &PlayerAction> {
        self.events.iter().filter_map(|e| match &e.kind {
            HandEventKind::PlayerActed { action, .. } => Some(action),
            _ => None,
        })
    }
}
