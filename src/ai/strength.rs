use crate::domain::Card;
use crate::eval::{evaluate_best_hand, HandCategory};

/// Грубая сила руки в `[0, 1]` без подсчёта шансов.
///
/// До флопа смотрим только на карманные карты (пара, старшая карта,
/// одномастность, связность), дальше на категорию лучшей руки.
pub fn hand_strength(hole: &[Card], board: &[Card]) -> f64 {
    if board.is_empty() {
        return preflop_strength(hole);
    }
    let Some(hand) = evaluate_best_hand(hole, board) else {
        return 0.0;
    };
    match hand.category() {
        HandCategory::HighCard => 0.15,
        HandCategory::OnePair => 0.35,
        HandCategory::TwoPair => 0.55,
        HandCategory::ThreeOfAKind => 0.65,
        HandCategory::Straight => 0.75,
        HandCategory::Flush => 0.8,
        HandCategory::FullHouse => 0.9,
        HandCategory::FourOfAKind => 0.97,
        HandCategory::StraightFlush => 1.0,
    }
}

fn preflop_strength(hole: &[Card]) -> f64 {
    let [a, b] = hole else {
        return 0.0;
    };
    let (hi, lo) = if a.rank >= b.rank {
        (a.rank.value(), b.rank.value())
    } else {
        (b.rank.value(), a.rank.value())
    };

    if hi == lo {
        return 0.5 + f64::from(hi) / 28.0;
    }
    let mut score = f64::from(hi) / 14.0 * 0.35 + f64::from(lo) / 14.0 * 0.1;
    if a.suit == b.suit {
        score += 0.1;
    }
    if hi - lo <= 2 {
        score += 0.1;
    }
    score
}
