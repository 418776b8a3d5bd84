use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::errors::EngineError;
use crate::infra::rng::{GlobalRng, RandomSource};

/// Колода карт с курсором раздачи.
///
/// `cards[..position]` – уже розданные карты, `cards[position..]` – ещё нет.
/// Каждая карта встречается в `cards` не более одного раза.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard_52()
    }
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке "ранг-мажор":
    /// 2c 2d 2h 2s 3c ... As.
    pub fn standard_52() -> Self {
        let mut deck = Deck {
            cards: Vec::with_capacity(52),
            position: 0,
        };
        deck.init();
        deck
    }

    /// Укороченная колода: только ранги >= `min_rank` (short deck: от шестёрки).
    pub fn with_min_rank(min_rank: Rank) -> Self {
        let mut deck = Deck {
            cards: Vec::with_capacity(52),
            position: 0,
        };
        deck.init_subset(min_rank);
        deck
    }

    /// Заполнить заново всеми 52 картами, курсор в ноль.
    pub fn init(&mut self) {
        self.init_subset(Rank::Two);
    }

    /// Заполнить заново картами с рангом >= `min_rank`.
    pub fn init_subset(&mut self, min_rank: Rank) {
        self.cards.clear();
        for rank in Rank::ALL.into_iter().filter(|r| *r >= min_rank) {
            for suit in Suit::ALL {
                self.cards.push(Card::new(rank, suit));
            }
        }
        self.position = 0;
    }

    /// Всего карт в колоде (розданные + нерозданные).
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Позиция курсора = сколько карт уже роздано.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Сколько карт ещё можно раздать.
    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    pub fn dealt(&self) -> &[Card] {
        &self.cards[..self.position]
    }

    pub fn undealt(&self) -> &[Card] {
        &self.cards[self.position..]
    }

    /// Fisher–Yates по всей колоде через глобальный RNG, курсор в ноль.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut GlobalRng);
    }

    /// То же, но с явным источником случайности.
    pub fn shuffle_with<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.cards);
        self.position = 0;
    }

    /// Перемешать только нерозданную часть (draw-покер: открытые карты не трогаем).
    pub fn shuffle_remaining(&mut self) {
        self.shuffle_remaining_with(&mut GlobalRng);
    }

    pub fn shuffle_remaining_with<R: RandomSource>(&mut self, rng: &mut R) {
        let pos = self.position;
        rng.shuffle(&mut self.cards[pos..]);
    }

    /// Следующая карта. `None` – колода исчерпана (сентинел, вызывающий обязан проверить).
    pub fn deal(&mut self) -> Option<Card> {
        let card = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(card)
    }

    /// То же, что `deal()`, но исчерпание колоды – ошибка движка.
    pub fn deal_checked(&mut self) -> Result<Card, EngineError> {
        self.deal().ok_or(EngineError::DeckExhausted)
    }

    /// `n` раз `deal()`. При исчерпании хвост заполняется `None`, а не обрывается.
    pub fn deal_many(&mut self, n: usize) -> Vec<Option<Card>> {
        (0..n).map(|_| self.deal()).collect()
    }

    /// Сжечь карту перед улицей.
    pub fn burn(&mut self) -> Option<Card> {
        self.deal()
    }

    /// Есть ли карта среди ещё не розданных.
    pub fn contains(&self, card: &Card) -> bool {
        self.undealt().contains(card)
    }

    /// Убрать известные карты из нерозданной части (стад: открытые карты соперников).
    /// Относительный порядок остальных карт сохраняется.
    pub fn remove_cards(&mut self, to_remove: &[Card]) {
        let pos = self.position;
        let mut undealt = self.cards.split_off(pos);
        undealt.retain(|c| !to_remove.contains(c));
        self.cards.extend(undealt);
    }

    /// Вернуть карты (сброс в draw-покере) в конец колоды и перемешать нерозданную часть.
    pub fn return_cards(&mut self, cards: &[Card]) {
        self.return_cards_with(cards, &mut GlobalRng);
    }

    pub fn return_cards_with<R: RandomSource>(&mut self, cards: &[Card], rng: &mut R) {
        for card in cards {
            if self.contains(card) {
                continue;
            }
            if let Some(idx) = self.dealt().iter().position(|c| c == card) {
                self.cards.remove(idx);
                self.position -= 1;
            }
            self.cards.push(*card);
        }
        self.shuffle_remaining_with(rng);
    }
}

