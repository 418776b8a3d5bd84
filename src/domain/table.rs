use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::Street;
use crate::domain::player::{Player, PlayerStatus};

/// Индекс места за столом (0..max_seats-1).
pub type SeatIndex = u8;

/// Вариант игры. Определяет число улиц, карманных карт и раздачу борда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameVariant {
    /// Холдем: 2 карманные, борд 3/1/1, 4 улицы.
    TexasHoldem,
    /// Пятикарточное дро: 5 карманных, обмен между двумя раундами торговли.
    FiveCardDraw,
}

impl GameVariant {
    pub fn hole_cards(self) -> usize {
        match self {
            GameVariant::TexasHoldem => 2,
            GameVariant::FiveCardDraw => 5,
        }
    }

    /// Количество раундов торговли.
    pub fn streets(self) -> u8 {
        match self {
            GameVariant::TexasHoldem => 4,
            GameVariant::FiveCardDraw => 2,
        }
    }

    /// Номер последней улицы.
    pub fn final_street(self) -> u8 {
        self.streets() - 1
    }

    pub fn street(self, index: u8) -> Option<Street> {
        match (self, index) {
            (GameVariant::TexasHoldem, 0) => Some(Street::Preflop),
            (GameVariant::TexasHoldem, 1) => Some(Street::Flop),
            (GameVariant::TexasHoldem, 2) => Some(Street::Turn),
            (GameVariant::TexasHoldem, 3) => Some(Street::River),
            (GameVariant::FiveCardDraw, 0) => Some(Street::PreDraw),
            (GameVariant::FiveCardDraw, 1) => Some(Street::PostDraw),
            _ => None,
        }
    }

    /// Сколько карт борда открывается при переходе на улицу `index`.
    pub fn board_cards_for(self, index: u8) -> usize {
        match (self, index) {
            (GameVariant::TexasHoldem, 1) => 3,
            (GameVariant::TexasHoldem, 2 | 3) => 1,
            _ => 0,
        }
    }

    /// Перед улицей `index` идёт обмен карт.
    pub fn draws_before(self, index: u8) -> bool {
        matches!((self, index), (GameVariant::FiveCardDraw, 1))
    }

    /// Сколько мест максимум выдерживает колода.
    pub fn seat_limit(self) -> u8 {
        match self {
            GameVariant::TexasHoldem => 10,
            GameVariant::FiveCardDraw => 6,
        }
    }
}

/// Стейки стола (SB/BB/ante).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableStakes {
    pub small_blind: Chips,
    pub big_blind: Chips,
    /// Классическое анте с каждого сданного игрока (0 – без анте).
    #[serde(default)]
    pub ante: Chips,
}

impl TableStakes {
    pub fn new(sb: Chips, bb: Chips, ante: Chips) -> Self {
        Self {
            small_blind: sb,
            big_blind: bb,
            ante,
        }
    }
}

/// Ошибки конфигурации стола.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Число мест {seats} вне диапазона 2..={max}")]
    InvalidSeatCount { seats: u8, max: u8 },

    #[error("Большой блайнд не может быть нулевым")]
    ZeroBigBlind,

    #[error("Малый блайнд {small} больше большого {big}")]
    SmallBlindAboveBigBlind { small: Chips, big: Chips },

    #[error("Не удалось разобрать конфиг: {0}")]
    Json(#[from] serde_json::Error),
}

/// Конфиг стола: сколько мест, вариант игры, стейки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    /// Максимальное количество мест за столом.
    pub max_seats: u8,
    #[serde(default = "default_variant")]
    pub variant: GameVariant,
    pub stakes: TableStakes,
}

fn default_variant() -> GameVariant {
    GameVariant::TexasHoldem
}

impl TableConfig {
    /// Холдем без анте.
    pub fn holdem(max_seats: u8, small_blind: u64, big_blind: u64) -> Self {
        Self {
            max_seats,
            variant: GameVariant::TexasHoldem,
            stakes: TableStakes::new(Chips(small_blind), Chips(big_blind), Chips::ZERO),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let max = self.variant.seat_limit();
        if self.max_seats < 2 || self.max_seats > max {
            return Err(ConfigError::InvalidSeatCount {
                seats: self.max_seats,
                max,
            });
        }
        if self.stakes.big_blind.is_zero() {
            return Err(ConfigError::ZeroBigBlind);
        }
        if self.stakes.small_blind > self.stakes.big_blind {
            return Err(ConfigError::SmallBlindAboveBigBlind {
                small: self.stakes.small_blind,
                big: self.stakes.big_blind,
            });
        }
        Ok(())
    }

    /// Загрузить и провалидировать конфиг из JSON.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: TableConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

/// Состояние стола между раздачами и во время раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    pub config: TableConfig,

    /// Места за столом: индекс вектора = SeatIndex.
    /// None – место пустое.
    pub seats: Vec<Option<Player>>,

    /// Общие карты борда (0–5 карт, только холдем).
    pub board: Vec<Card>,

    /// Индекс дилерской кнопки или None, если раздач ещё не было.
    pub dealer_button: Option<SeatIndex>,
}

impl Table {
    /// Создать пустой стол с заданной конфигурацией.
    pub fn new(config: TableConfig) -> Self {
        let seats = vec![None; config.max_seats as usize];
        Self {
            config,
            seats,
            board: Vec::new(),
            dealer_button: None,
        }
    }

    pub fn max_seats(&self) -> u8 {
        self.config.max_seats
    }

    pub fn seated_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_seat_empty(&self, index: SeatIndex) -> bool {
        self.player(index).is_none()
    }

    pub fn player(&self, seat: SeatIndex) -> Option<&Player> {
        self.seats.get(seat as usize).and_then(|s| s.as_ref())
    }

    pub fn player_mut(&mut self, seat: SeatIndex) -> Option<&mut Player> {
        self.seats.get_mut(seat as usize).and_then(|s| s.as_mut())
    }

    /// Статус места; пустое место – `Empty`.
    pub fn status_of(&self, seat: SeatIndex) -> PlayerStatus {
        self.player(seat)
            .map(|p| p.status)
            .unwrap_or(PlayerStatus::Empty)
    }

    /// Все занятые места по порядку.
    pub fn occupied(&self) -> impl Iterator<Item = (SeatIndex, &Player)> {
        self.seats
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|p| (i as SeatIndex, p)))
    }

    /// Сумма фишек в стеках всех игроков.
    pub fn chips_in_stacks(&self) -> Chips {
        self.occupied().map(|(_, p)| p.chips).sum()
    }
}
