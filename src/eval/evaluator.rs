use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::HandRank;

use super::hand_rank::HandCategory;
use super::lookup_tables::{detect_straight, rank_to_bit, straight_values, RankMask};

/// Результат оценки: ранг и карты, которые его образуют
/// (по убыванию значимости: сначала группы, потом кикеры).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvaluatedHand {
    pub rank: HandRank,
    pub best_five: Vec<Card>,
}

impl EvaluatedHand {
    pub fn category(&self) -> HandCategory {
        self.rank.category()
    }
}

/// Главная функция: вычислить лучшую руку из hole + board.
///
/// Всего карт должно быть от 1 до 7. При 5+ картах перебираются все
/// 5-карточные подмножества (не больше C(7,5) = 21). При меньшем числе
/// карт (префлоп) считаются только пары/сеты/каре и кикеры.
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> Option<EvaluatedHand> {
    let mut all_cards = Vec::with_capacity(hole.len() + board.len());
    all_cards.extend_from_slice(hole);
    all_cards.extend_from_slice(board);
    evaluate_cards(&all_cards)
}

/// То же, что `evaluate_best_hand`, но по плоскому списку карт.
pub fn evaluate_cards(cards: &[Card]) -> Option<EvaluatedHand> {
    match cards.len() {
        0 => None,
        1..=4 => Some(evaluate_partial(cards)),
        5..=7 => Some(best_of_all_5card_combinations(cards)),
        _ => None,
    }
}

/// Перебираем все комбинации 5 карт из N (N=5–7) и выбираем лучшую.
fn best_of_all_5card_combinations(cards: &[Card]) -> EvaluatedHand {
    let n = cards.len();
    let mut best: Option<EvaluatedHand> = None;

    for a in 0..(n - 4) {
        for b in (a + 1)..(n - 3) {
            for c in (b + 1)..(n - 2) {
                for d in (c + 1)..(n - 1) {
                    for e in (d + 1)..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let candidate = evaluate_5card_hand(&five);
                        if best.as_ref().map_or(true, |b| candidate.rank > b.rank) {
                            best = Some(candidate);
                        }
                    }
                }
            }
        }
    }

    // n >= 5 гарантирует хотя бы одну комбинацию.
    best.unwrap_or_else(|| evaluate_partial(cards))
}

/// Группы одинаковых рангов: (количество, значение), по убыванию количества, затем значения.
fn rank_groups(cards: &[Card]) -> Vec<(u8, u8)> {
    let mut counts = [0u8; 15];
    for card in cards {
        counts[card.rank.value() as usize] += 1;
    }
    let mut groups: Vec<(u8, u8)> = (2u8..=14)
        .rev()
        .filter(|&v| counts[v as usize] > 0)
        .map(|v| (counts[v as usize], v))
        .collect();
    groups.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1)));
    groups
}

/// Категория по шаблону групп без учёта стрита/флеша.
fn category_from_groups(groups: &[(u8, u8)]) -> HandCategory {
    let pattern: Vec<u8> = groups.iter().map(|g| g.0).collect();
    match pattern.as_slice() {
        [4, ..] => HandCategory::FourOfAKind,
        [3, 2, ..] => HandCategory::FullHouse,
        [3, ..] => HandCategory::ThreeOfAKind,
        [2, 2, ..] => HandCategory::TwoPair,
        [2, ..] => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    }
}

/// Значения для кодирования: по одному на группу, в порядке групп, добиваем нулями.
fn group_values(groups: &[(u8, u8)]) -> [u8; 5] {
    let mut values = [0u8; 5];
    for (slot, (_, v)) in values.iter_mut().zip(groups.iter()) {
        *slot = *v;
    }
    values
}

/// Упорядочить карты так же, как значения в ранге: сначала старшие группы.
fn order_by_groups(cards: &[Card], groups: &[(u8, u8)]) -> Vec<Card> {
    let mut ordered = Vec::with_capacity(cards.len());
    for &(_, v) in groups {
        let mut same: Vec<Card> = cards.iter().copied().filter(|c| c.rank.value() == v).collect();
        same.sort_by_key(|c| c.suit);
        ordered.extend(same);
    }
    ordered
}

/// Оценка руки из менее чем 5 карт (только группы рангов).
fn evaluate_partial(cards: &[Card]) -> EvaluatedHand {
    let groups = rank_groups(cards);
    let category = category_from_groups(&groups);
    EvaluatedHand {
        rank: HandRank::from_category_and_values(category, group_values(&groups)),
        best_five: order_by_groups(cards, &groups),
    }
}

/// Оценка строго 5-карточной комбинации.
fn evaluate_5card_hand(cards: &[Card; 5]) -> EvaluatedHand {
    let mut suit_counts = [0u8; 4];
    let mut rank_mask: RankMask = 0;
    for card in cards.iter() {
        suit_counts[card.suit.index()] += 1;
        rank_mask |= rank_to_bit(card.rank);
    }

    let is_flush = suit_counts.iter().any(|&c| c == 5);
    let straight_high = detect_straight(rank_mask);
    let groups = rank_groups(cards);

    if let Some(high) = straight_high {
        let category = if is_flush {
            HandCategory::StraightFlush
        } else {
            HandCategory::Straight
        };
        // 5 разных рангов: каре и фулл здесь невозможны.
        return EvaluatedHand {
            rank: HandRank::from_category_and_values(category, straight_values(high)),
            best_five: order_straight(cards, high),
        };
    }

    let category = match category_from_groups(&groups) {
        HandCategory::HighCard if is_flush => HandCategory::Flush,
        other => other,
    };

    EvaluatedHand {
        rank: HandRank::from_category_and_values(category, group_values(&groups)),
        best_five: order_by_groups(cards, &groups),
    }
}

/// Карты стрита от старшей к младшей; туз в wheel уходит в конец.
fn order_straight(cards: &[Card; 5], high: u8) -> Vec<Card> {
    let mut ordered = cards.to_vec();
    let key = |c: &Card| -> u8 {
        let v = c.rank.value();
        if high == 5 && v == 14 {
            1
        } else {
            v
        }
    };
    ordered.sort_by(|a, b| key(b).cmp(&key(a)).then_with(|| a.suit.cmp(&b.suit)));
    ordered
}
