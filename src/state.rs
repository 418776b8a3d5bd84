use serde::{Deserialize, Serialize};

use crate::domain::deck::Deck;
use crate::domain::hand::HandSummary;
use crate::domain::table::Table;
use crate::engine::game_loop::HandState;
use crate::engine::hand_history::HandHistory;

/// Снэпшот движка стола: всё, что нужно, чтобы восстановить `GameEngine`.
///
/// Чистые данные – слушатели событий сюда не попадают.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSnapshot {
    pub table: Table,
    pub deck: Deck,
    pub hand: Option<HandState>,
    pub history: HandHistory,
    pub hands_played: u64,
    pub last_summary: Option<HandSummary>,
}

impl GameSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}
