use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Общий банк раздачи. Разбивка на main/side pots – в `side_pots`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    pub total: Chips,
}

impl Pot {
    pub fn add(&mut self, amount: Chips) {
        self.total += amount;
    }

    /// Забрать всё (при выплате).
    pub fn take(&mut self) -> Chips {
        std::mem::take(&mut self.total)
    }
}
