use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};

/// Колода карт. В домене — просто упорядоченный список карт.
/// Перемешивание делает engine (через `RandomSource` из infra), НЕ здесь.
/// Карты берутся с хвоста вектора.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(rank, suit)))
            .collect();
        Deck { cards }
    }

    /// Колода из заранее заданных карт (для тестов и реплея).
    /// Последняя карта вектора будет сдана первой.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять одну карту сверху колоды.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Взять ровно n карт. Если карт меньше, колода не трогается, `None`.
    pub fn draw_n(&mut self, n: usize) -> Option<Vec<Card>> {
        if self.cards.len() < n {
            return None;
        }
        let split = self.cards.len() - n;
        let mut taken = self.cards.split_off(split);
        taken.reverse();
        Some(taken)
    }

    /// Есть ли в колоде повторяющиеся карты.
    pub fn has_duplicates(&self) -> bool {
        let mut seen = [false; 52];
        for c in &self.cards {
            let idx = c.suit.index() * 13 + (c.rank.value() as usize - 2);
            if seen[idx] {
                return true;
            }
            seen[idx] = true;
        }
        false
    }
}
