use core::cmp::Ordering;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;

/// Категория покерной руки по силе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    /// Роял-флеш – это просто старший стрит-флеш (primary = туз).
    StraightFlush = 8,
}

/// Сила руки. Сравнение лексикографическое по порядку полей:
/// категория, primary, secondary, кикеры.
///
/// - `primary` – определяющий ранг категории (старшая карта стрита, ранг пары, сета…);
///   для стрита A2345 это пятёрка, не туз;
/// - `secondary` – второй определяющий ранг (младшая пара в двух парах, пара в фулл-хаусе);
/// - `kickers` – оставшиеся ранги по убыванию, ровно столько, сколько нужно категории.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank {
    pub category: HandCategory,
    pub primary: Rank,
    pub secondary: Option<Rank>,
    pub kickers: Vec<Rank>,
}

impl HandRank {
    pub fn new(
        category: HandCategory,
        primary: Rank,
        secondary: Option<Rank>,
        kickers: Vec<Rank>,
    ) -> Self {
        Self {
            category,
            primary,
            secondary,
            kickers,
        }
    }

    pub fn category(&self) -> HandCategory {
        self.category
    }

    pub fn is_royal_flush(&self) -> bool {
        self.category == HandCategory::StraightFlush && self.primary == Rank::Ace
    }

    /// Упаковка в u32 (для логов/истории), сохраняет порядок сравнения:
    ///   [категория:4][primary:4][secondary:4][k0:4][k1:4][k2:4][k3:4]
    /// Отсутствующие поля кодируются нулём.
    pub fn to_u32(&self) -> u32 {
        let mut value = (self.category as u32) & 0x0F;
        value = (value << 4) | self.primary.value() as u32;
        value = (value << 4) | self.secondary.map(|r| r.value() as u32).unwrap_or(0);
        for i in 0..4 {
            let k = self.kickers.get(i).map(|r| r.value() as u32).unwrap_or(0);
            value = (value << 4) | k;
        }
        value
    }
}

/// Сравнить две руки: `Greater` – выигрывает `a`, `Equal` – сплит.
pub fn compare(a: &HandRank, b: &HandRank) -> Ordering {
    a.cmp(b)
}

/// Удобная функция – получить категорию из HandRank.
pub fn hand_category(rank: &HandRank) -> HandCategory {
    rank.category()
}

fn rank_name(rank: Rank) -> &'static str {
    match rank {
        Rank::Two => "Two",
        Rank::Three => "Three",
        Rank::Four => "Four",
        Rank::Five => "Five",
        Rank::Six => "Six",
        Rank::Seven => "Seven",
        Rank::Eight => "Eight",
        Rank::Nine => "Nine",
        Rank::Ten => "Ten",
        Rank::Jack => "Jack",
        Rank::Queen => "Queen",
        Rank::King => "King",
        Rank::Ace => "Ace",
    }
}

fn rank_plural(rank: Rank) -> String {
    match rank {
        Rank::Six => "Sixes".to_string(),
        r => format!("{}s", rank_name(r)),
    }
}

/// Человеческое описание руки: "Full house, Kings full of Sevens".
pub fn describe_hand(rank: &HandRank) -> String {
    let p = rank.primary;
    let s = rank.secondary.unwrap_or(p);
    match rank.category {
        HandCategory::HighCard => format!("High card, {}", rank_name(p)),
        HandCategory::OnePair => format!("One pair, {}", rank_plural(p)),
        HandCategory::TwoPair => format!("Two pair, {} and {}", rank_plural(p), rank_plural(s)),
        HandCategory::ThreeOfAKind => format!("Three of a kind, {}", rank_plural(p)),
        HandCategory::Straight => format!("Straight, {} high", rank_name(p)),
        HandCategory::Flush => format!("Flush, {} high", rank_name(p)),
        HandCategory::FullHouse => {
            format!("Full house, {} full of {}", rank_plural(p), rank_plural(s))
        }
        HandCategory::FourOfAKind => format!("Four of a kind, {}", rank_plural(p)),
        HandCategory::StraightFlush if rank.is_royal_flush() => "Royal flush".to_string(),
        HandCategory::StraightFlush => format!("Straight flush, {} high", rank_name(p)),
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&describe_hand(self))
    }
}
