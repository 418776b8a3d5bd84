use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::{HandPhase, Street};
use crate::domain::player::PlayerStatus;
use crate::domain::table::GameVariant;
use crate::domain::{PlayerId, SeatIndex};
use crate::engine::actions::ValidActions;
use crate::eval::HandRank;

/// DTO игрока за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerView {
    pub player_id: PlayerId,
    pub display_name: String,
    pub seat_index: SeatIndex,
    pub stack: Chips,
    pub street_bet: Chips,
    pub total_bet: Chips,
    pub status: PlayerStatus,
    pub is_dealer: bool,
    pub is_small_blind: bool,
    pub is_big_blind: bool,
    /// Карманные карты – только для "героя" или после вскрытия.
    pub hole_cards: Option<Vec<Card>>,
}

/// Один пот (main или side).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PotView {
    pub amount: Chips,
    pub eligible_seats: Vec<SeatIndex>,
}

/// DTO стола для рендерера.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableView {
    pub max_seats: u8,
    pub variant: GameVariant,
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub ante: Chips,
    pub hand_number: Option<u64>,
    pub phase: HandPhase,
    pub street: Option<Street>,
    pub dealer_button: Option<SeatIndex>,
    pub board: Vec<Card>,
    pub total_pot: Chips,
    pub pots: Vec<PotView>,
    /// Все места по порядку; пустые – `None`.
    pub seats: Vec<Option<PlayerView>>,
    /// Текущий игрок, чей ход (если раздача идёт).
    pub current_actor_seat: Option<SeatIndex>,
    /// Легальные действия героя, если сейчас его ход.
    pub hero_actions: Option<ValidActions>,
}

/// Результат одного игрока в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandPlayerResultView {
    pub player_id: PlayerId,
    pub seat_index: SeatIndex,
    pub net_chips: i64,
    pub is_winner: bool,
    pub rank: Option<HandRank>,
    /// "Full house, Kings full of Sevens".
    pub rank_description: Option<String>,
}

/// DTO одной сыгранной раздачи (для истории).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandResultView {
    pub hand_number: u64,
    pub board: Vec<Card>,
    pub total_pot: Chips,
    pub ended_early: bool,
    pub players: Vec<HandPlayerResultView>,
}
