//! Модуль оценки силы покерных рук.
//!
//! Основные функции:
//!   `evaluate_5(cards) -> Result<HandRank, _>`
//!   `evaluate_7(cards) -> Result<HandRank, _>`
//!   `compare(a, b) -> Ordering`

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

pub use evaluator::{
    best_of_five_card_subsets, evaluate_5, evaluate_7, evaluate_best_hand, evaluate_hand,
};
pub use hand_rank::{compare, describe_hand, hand_category, HandCategory, HandRank};
