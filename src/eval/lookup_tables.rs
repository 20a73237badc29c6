use crate::domain::card::Rank;

/// Битовая маска рангов.
///
/// Используем 13 бит (от 2 до A):
/// бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

const fn bit(value: u8) -> RankMask {
    1 << (value - 2)
}

/// Маски всех стритов, индекс = старшая карта стрита минус 5.
///
///   0: A2345 (wheel), 1: 23456, ..., 9: TJQKA (broadway)
pub const STRAIGHT_MASKS: [RankMask; 10] = {
    let mut masks = [0 as RankMask; 10];
    // wheel: туз + 2..5
    masks[0] = bit(14) | bit(2) | bit(3) | bit(4) | bit(5);
    let mut i = 1;
    while i < 10 {
        let high = (i + 5) as u8;
        masks[i] = bit(high) | bit(high - 1) | bit(high - 2) | bit(high - 3) | bit(high - 4);
        i += 1;
    }
    masks
};

/// Получить битовую маску для одного ранга.
pub fn rank_to_bit(rank: Rank) -> RankMask {
    bit(rank.value())
}

/// Найти стрит в битовой маске рангов.
/// Возвращает значение старшей карты стрита (5 для wheel, 14 для broadway).
pub fn detect_straight(rank_mask: RankMask) -> Option<u8> {
    STRAIGHT_MASKS
        .iter()
        .enumerate()
        .rev()
        .find(|(_, &sm)| rank_mask & sm == sm)
        .map(|(i, _)| i as u8 + 5)
}

/// Значения карт стрита от старшей к младшей; в wheel туз идёт как 1.
pub fn straight_values(high: u8) -> [u8; 5] {
    if high == 5 {
        [5, 4, 3, 2, 1]
    } else {
        [high, high - 1, high - 2, high - 3, high - 4]
    }
}
