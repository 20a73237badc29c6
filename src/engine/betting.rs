use serde::{Deserialize, Serialize};

use crate::domain::{Chips, Player, PlayerStatus, SeatIndex};
use crate::engine::errors::EngineError;
use crate::engine::positions::in_play_seats_after;

/// Места блайндов.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlindIndices {
    pub small: SeatIndex,
    pub big: SeatIndex,
}

/// Позиции блайндов относительно дилера в списке из `seat_count` играющих мест.
///
/// SB — следующий после дилера, BB — следующий после SB. Хедз-ап:
/// дилер сам ставит малый блайнд.
pub fn determine_blind_indices(dealer: usize, seat_count: usize) -> (usize, usize) {
    if seat_count == 2 {
        (dealer % 2, (dealer + 1) % 2)
    } else {
        ((dealer + 1) % seat_count, (dealer + 2) % seat_count)
    }
}

/// Блайнды в индексах мест стола, с пропуском выбывших.
pub fn blind_seats(players: &[Player], dealer: SeatIndex) -> Result<BlindIndices, EngineError> {
    let mut order = vec![dealer];
    order.extend(
        in_play_seats_after(players, dealer)
            .into_iter()
            .filter(|&s| s != dealer),
    );
    if order.len() < 2 {
        return Err(EngineError::NotEnoughPlayers);
    }
    let (small, big) = determine_blind_indices(0, order.len());
    Ok(BlindIndices {
        small: order[small],
        big: order[big],
    })
}

/// Списать блайнды в текущую ставку. Короткий стек ставит сколько есть и уходит в олл-ин.
///
/// Возвращает фактически поставленные (SB, BB).
pub fn ante_up_blinds(players: &mut [Player], blinds: BlindIndices, min_bet: Chips) -> (Chips, Chips) {
    let small = post_blind(&mut players[blinds.small as usize], Chips(min_bet.0 / 2));
    let big = post_blind(&mut players[blinds.big as usize], min_bet);
    (small, big)
}

fn post_blind(player: &mut Player, amount: Chips) -> Chips {
    let paid = amount.min(player.stack);
    player.stack = player.stack.saturating_sub(paid);
    player.current_bet += paid;
    if player.stack.is_zero() {
        player.status = PlayerStatus::AllIn;
    }
    paid
}

/// Минимальная легальная ставка (raise-to): колл до `high_bet`, но не больше,
/// чем игрок в состоянии поставить (олл-ин потолок `stack + current_bet`).
pub fn determine_min_bet(high_bet: Chips, actor_stack: Chips, actor_current_bet: Chips) -> Chips {
    high_bet.min(actor_stack + actor_current_bet)
}

/// Границы ставки для игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BetBounds {
    /// Чек/колл (или олл-ин, если стека на колл не хватает).
    pub call: Chips,
    /// Минимальный полноценный рейз: high_bet + шаг.
    pub min_raise: Chips,
    /// Олл-ин потолок.
    pub max: Chips,
}

impl BetBounds {
    pub fn for_player(player: &Player, high_bet: Chips, increment: Chips) -> Self {
        Self {
            call: determine_min_bet(high_bet, player.stack, player.current_bet),
            min_raise: high_bet + increment,
            max: player.all_in_ceiling(),
        }
    }

    /// Можно ли вообще сделать полноценный рейз.
    pub fn can_raise(&self) -> bool {
        self.min_raise <= self.max
    }

    /// Колл, олл-ин или рейз не меньше минимального.
    pub fn is_legal(&self, amount: Chips) -> bool {
        amount == self.call || amount == self.max || (amount >= self.min_raise && amount <= self.max)
    }
}

/// Раунд ставок закрыт: каждый, кто ещё может ходить, сходил после последнего
/// повышения и уравнял high_bet.
///
/// Если ходить может только один игрок и его ставка не меньше, чем у всех
/// остальных в раздаче, действовать ему не против кого, и раунд тоже закрыт.
pub fn is_round_closed(players: &[Player], high_bet: Chips) -> bool {
    let actors: Vec<&Player> = players.iter().filter(|p| p.can_act()).collect();
    if let [only] = actors.as_slice() {
        let others_max = players
            .iter()
            .filter(|p| p.is_in_hand() && p.seat != only.seat)
            .map(|p| p.current_bet)
            .max()
            .unwrap_or(Chips::ZERO);
        if only.current_bet >= others_max {
            return true;
        }
    }
    actors
        .iter()
        .all(|p| p.acted_this_street && p.current_bet == high_bet)
}
