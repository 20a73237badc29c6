use serde::{Deserialize, Serialize};

use crate::domain::hand::HandRank;

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
    StraightFlush = 8,
}

impl HandCategory {
    fn from_id(id: u8) -> HandCategory {
        match id {
            1 => HandCategory::OnePair,
            2 => HandCategory::TwoPair,
            3 => HandCategory::ThreeOfAKind,
            4 => HandCategory::Straight,
            5 => HandCategory::Flush,
            6 => HandCategory::FullHouse,
            7 => HandCategory::FourOfAKind,
            8 => HandCategory::StraightFlush,
            _ => HandCategory::HighCard,
        }
    }
}

impl HandRank {
    /// Собрать HandRank из категории и 5 значений (от старшего к младшему).
    ///
    /// Схема кодирования (u32):
    ///   [категория:4 бита][v0:4][v1:4][v2:4][v3:4][v4:4]
    /// Значения 0..=14: 2..14 — обычные ранги, 1 — туз в стрите A-5,
    /// 0 — пустой слот (рука меньше 5 карт или незначимый кикер).
    pub fn from_category_and_values(category: HandCategory, values: [u8; 5]) -> Self {
        let value = values
            .iter()
            .fold((category as u32) & 0x0F, |acc, &v| (acc << 4) | (v as u32 & 0x0F));
        HandRank(value)
    }

    /// Вытащить категорию из HandRank.
    pub fn category(&self) -> HandCategory {
        HandCategory::from_id(((self.0 >> 20) & 0x0F) as u8)
    }

    /// Достать 5 значений (от старшего к младшему).
    pub fn values(&self) -> [u8; 5] {
        let mut out = [0u8; 5];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = ((self.0 >> (16 - 4 * i)) & 0x0F) as u8;
        }
        out
    }

    pub fn is_royal_flush(&self) -> bool {
        self.category() == HandCategory::StraightFlush && self.values()[0] == 14
    }
}

/// Удобная функция – получить категорию из HandRank.
pub fn hand_category(rank: HandRank) -> HandCategory {
    rank.category()
}

/// Человеческое описание руки по категории.
pub fn describe_hand(rank: HandRank) -> String {
    if rank.is_royal_flush() {
        return "Royal flush".to_string();
    }
    match rank.category() {
        HandCategory::HighCard => "High card",
        HandCategory::OnePair => "One pair",
        HandCategory::TwoPair => "Two pair",
        HandCategory::ThreeOfAKind => "Three of a kind",
        HandCategory::Straight => "Straight",
        HandCategory::Flush => "Flush",
        HandCategory::FullHouse => "Full house",
        HandCategory::FourOfAKind => "Four of a kind",
        HandCategory::StraightFlush => "Straight flush",
    }
    .to_string()
}
