use crate::domain::{Player, SeatIndex};

/// Найти следующее место по кругу (не включая `start`), удовлетворяющее условию.
pub fn next_seat_where<F>(players: &[Player], start: SeatIndex, pred: F) -> Option<SeatIndex>
where
    F: Fn(&Player) -> bool,
{
    let n = players.len();
    if n == 0 {
        return None;
    }
    (1..=n)
        .map(|step| (start as usize + step) % n)
        .find(|&idx| pred(&players[idx]))
        .map(|idx| idx as SeatIndex)
}

/// Все места по кругу, начиная со следующего после `start`, для которых выполняется условие.
/// Сам `start` (если подходит) идёт последним.
pub fn seats_after<F>(players: &[Player], start: SeatIndex, pred: F) -> Vec<SeatIndex>
where
    F: Fn(&Player) -> bool,
{
    let n = players.len();
    (1..=n)
        .map(|step| (start as usize + step) % n)
        .filter(|&idx| pred(&players[idx]))
        .map(|idx| idx as SeatIndex)
        .collect()
}

/// Места, ещё не выбывшие из игры, по кругу после `start`.
pub fn in_play_seats_after(players: &[Player], start: SeatIndex) -> Vec<SeatIndex> {
    seats_after(players, start, |p| !p.is_eliminated())
}

/// Следующая позиция дилера: ближайшее по кругу место с фишками.
pub fn next_dealer(players: &[Player], current: SeatIndex) -> Option<SeatIndex> {
    next_seat_where(players, current, |p| !p.is_eliminated() && !p.stack.is_zero())
}
