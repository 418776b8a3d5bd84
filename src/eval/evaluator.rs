use crate::domain::card::{Card, Rank, Suit};
use crate::engine::errors::EngineError;

use super::hand_rank::{HandCategory, HandRank};
use super::lookup_tables::{detect_straight, rank_to_bit, ranks_desc, RankMask};

/// Оценка ровно 5 карт.
pub fn evaluate_5(cards: &[Card]) -> Result<HandRank, EngineError> {
    if cards.len() != 5 {
        return Err(EngineError::InvalidHandSize(cards.len()));
    }
    Ok(rank_cards(cards))
}

/// Оценка ровно 7 карт: лучшая 5-карточная комбинация из 21 возможной,
/// но без перебора – считаем по маскам рангов/мастей за один проход.
pub fn evaluate_7(cards: &[Card]) -> Result<HandRank, EngineError> {
    if cards.len() != 7 {
        return Err(EngineError::InvalidHandSize(cards.len()));
    }
    Ok(rank_cards(cards))
}

/// Оценка от 5 до 7 карт (6 карт – например, холдем на тёрне).
pub fn evaluate_hand(cards: &[Card]) -> Result<HandRank, EngineError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(EngineError::InvalidHandSize(cards.len()));
    }
    Ok(rank_cards(cards))
}

/// Лучшая рука из hole + board.
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> Result<HandRank, EngineError> {
    let mut all_cards = Vec::with_capacity(hole.len() + board.len());
    all_cards.extend_from_slice(hole);
    all_cards.extend_from_slice(board);
    evaluate_hand(&all_cards)
}

/// Перебираем все комбинации 5 карт из N (N=5–7) и выбираем лучшую.
///
/// Медленный эталон: `evaluate_7` обязан давать тот же результат.
pub fn best_of_five_card_subsets(cards: &[Card]) -> Result<HandRank, EngineError> {
    let n = cards.len();
    if !(5..=7).contains(&n) {
        return Err(EngineError::InvalidHandSize(n));
    }

    let mut best: Option<HandRank> = None;

    for a in 0..(n - 4) {
        for b in (a + 1)..(n - 3) {
            for c in (b + 1)..(n - 2) {
                for d in (c + 1)..(n - 1) {
                    for e in (d + 1)..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let r = rank_cards(&five);
                        if best.as_ref().map_or(true, |best_r| r > *best_r) {
                            best = Some(r);
                        }
                    }
                }
            }
        }
    }

    best.ok_or(EngineError::InvalidHandSize(n))
}

/// Общий алгоритм для 5..=7 различных карт.
fn rank_cards(cards: &[Card]) -> HandRank {
    let mut rank_counts = [0u8; 15]; // индексы 2..=14
    let mut suit_masks: [RankMask; 4] = [0; 4];
    let mut rank_mask: RankMask = 0;

    for card in cards {
        let bit = rank_to_bit(card.rank);
        rank_counts[card.rank.value() as usize] += 1;
        suit_masks[card.suit.index()] |= bit;
        rank_mask |= bit;
    }

    let flush_mask = Suit::ALL
        .iter()
        .map(|s| suit_masks[s.index()])
        .find(|m| m.count_ones() >= 5);

    // Straight flush: стрит ищем только внутри флешевой масти.
    if let Some(high) = flush_mask.and_then(detect_straight) {
        return HandRank::new(HandCategory::StraightFlush, high, None, Vec::new());
    }

    // Группы рангов по убыванию.
    let mut quads: Vec<Rank> = Vec::new();
    let mut trips: Vec<Rank> = Vec::new();
    let mut pairs: Vec<Rank> = Vec::new();
    for rank in Rank::ALL.into_iter().rev() {
        match rank_counts[rank.value() as usize] {
            4 => quads.push(rank),
            3 => trips.push(rank),
            2 => pairs.push(rank),
            _ => {}
        }
    }

    if let Some(&four) = quads.first() {
        let kickers = top_excluding(rank_mask, &[four], 1);
        return HandRank::new(HandCategory::FourOfAKind, four, None, kickers);
    }

    // Full house: сет + (второй сет или пара), берём старшее.
    if let Some(&three) = trips.first() {
        let pair = trips.get(1).copied().into_iter().chain(pairs.first().copied()).max();
        if let Some(pair) = pair {
            return HandRank::new(HandCategory::FullHouse, three, Some(pair), Vec::new());
        }
    }

    if let Some(mask) = flush_mask {
        let top: Vec<Rank> = ranks_desc(mask).take(5).collect();
        return HandRank::new(HandCategory::Flush, top[0], None, top[1..].to_vec());
    }

    if let Some(high) = detect_straight(rank_mask) {
        return HandRank::new(HandCategory::Straight, high, None, Vec::new());
    }

    if let Some(&three) = trips.first() {
        let kickers = top_excluding(rank_mask, &[three], 2);
        return HandRank::new(HandCategory::ThreeOfAKind, three, None, kickers);
    }

    if let [high_pair, low_pair, ..] = pairs[..] {
        // Третья пара (если есть) может стать кикером.
        let kickers = top_excluding(rank_mask, &[high_pair, low_pair], 1);
        return HandRank::new(HandCategory::TwoPair, high_pair, Some(low_pair), kickers);
    }

    if let Some(&pair) = pairs.first() {
        let kickers = top_excluding(rank_mask, &[pair], 3);
        return HandRank::new(HandCategory::OnePair, pair, None, kickers);
    }

    let top: Vec<Rank> = ranks_desc(rank_mask).take(5).collect();
    HandRank::new(HandCategory::HighCard, top[0], None, top[1..].to_vec())
}

/// Старшие `n` рангов из маски, кроме `exclude`.
fn top_excluding(rank_mask: RankMask, exclude: &[Rank], n: usize) -> Vec<Rank> {
    ranks_desc(rank_mask)
        .filter(|r| !exclude.contains(r))
        .take(n)
        .collect()
}
