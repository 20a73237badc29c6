use crate::domain::{Chips, Player, SeatIndex};
use crate::engine::betting::BetBounds;
use crate::engine::errors::EngineError;
use crate::engine::game_loop::RoundState;

/// Проверка, что место `seat` может сейчас сделать ход.
///
/// Порядок проверок: фаза ставок → место существует → игрок может ходить → его очередь.
pub fn validate_turn(state: &RoundState, seat: SeatIndex) -> Result<&Player, EngineError> {
    if !state.phase.is_betting() {
        return Err(EngineError::InvalidPhase(state.phase));
    }

    let player = state
        .players
        .get(seat as usize)
        .ok_or(EngineError::InvalidSeat(seat))?;

    if !player.can_act() {
        return Err(EngineError::InvalidSeatState(seat));
    }

    match state.active_player_index {
        Some(active) if active == seat => Ok(player),
        Some(active) => Err(EngineError::ActionOutOfTurn { seat, active }),
        None => Err(EngineError::InvalidPhase(state.phase)),
    }
}

/// Проверка суммы ставки: колл, олл-ин или рейз не меньше минимального шага.
pub fn validate_bet_amount(bounds: &BetBounds, amount: Chips) -> Result<(), EngineError> {
    if bounds.is_legal(amount) {
        Ok(())
    } else {
        Err(EngineError::IllegalBetAmount {
            amount,
            min: bounds.call,
            max: bounds.max,
        })
    }
}
