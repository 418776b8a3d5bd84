//! Ядро покерного стола для терминальной игры.
//!
//! - `domain` – карты, колода, фишки, игроки, стол и его конфиг;
//! - `eval` – оценка 5–7-карточных рук;
//! - `engine` – раздача: ставки, улицы, сайд-поты, расчёт, события;
//! - `api` – DTO для рендереров;
//! - `state` – сериализуемый снапшот движка;
//! - `infra` – генераторы случайных чисел.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
pub mod state;

pub use domain::{Card, Chips, Deck, GameVariant, Player, PlayerStatus, Rank, SeatIndex, Suit, TableConfig};
pub use engine::{EngineError, ErrorKind, GameEngine, PlayerActionKind};
pub use eval::{compare, evaluate_5, evaluate_7, HandRank};
pub use state::GameSnapshot;
