use log::{debug, warn};

use crate::ai::strength::hand_strength;
use crate::domain::{Chips, SeatIndex};
use crate::engine::{handle_fold, submit_bet, EngineError, PlayerAction, RandomSource, RoundState};

/// Политика скриптового оппонента.
pub trait ScriptedPolicy {
    /// Выбрать действие для места `seat`. Место обязано быть текущим
    /// (`ActionOutOfTurn` иначе), сумма ставки всегда легальна.
    fn decide<R: RandomSource>(
        &self,
        state: &RoundState,
        seat: SeatIndex,
        rng: &mut R,
    ) -> Result<PlayerAction, EngineError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Choice {
    Fold,
    Passive,
    Raise,
    Shove,
}

/// Взвешенный случайный выбор между фолдом, чеком/коллом, рейзом и олл-ином.
///
/// Базовые веса сдвигаются силой руки: слабая рука чаще сбрасывает,
/// сильная чаще повышает.
#[derive(Clone, Copy, Debug)]
pub struct HeuristicPolicy {
    pub fold: f64,
    pub check: f64,
    pub call: f64,
    pub raise: f64,
    pub shove: f64,
}

impl Default for HeuristicPolicy {
    fn default() -> Self {
        Self {
            fold: 1500.0,
            check: 1000.0,
            call: 4000.0,
            raise: 500.0,
            shove: 1.0,
        }
    }
}

impl HeuristicPolicy {
    fn weights(&self, strength: f64, free_check: bool, can_raise: bool) -> Vec<(Choice, f64)> {
        let mut choices = Vec::with_capacity(4);
        if !free_check {
            choices.push((Choice::Fold, self.fold * (1.0 - strength) * 2.0));
            choices.push((Choice::Passive, self.call * (0.5 + strength)));
        } else {
            choices.push((Choice::Passive, self.check * (1.5 - strength)));
        }
        if can_raise {
            choices.push((Choice::Raise, self.raise * strength * 4.0));
        }
        choices.push((Choice::Shove, self.shove + self.raise * strength.powi(6)));
        choices
    }
}

impl ScriptedPolicy for HeuristicPolicy {
    fn decide<R: RandomSource>(
        &self,
        state: &RoundState,
        seat: SeatIndex,
        rng: &mut R,
    ) -> Result<PlayerAction, EngineError> {
        let legal = state.legal_actions(seat)?;
        let player = state.player(seat)?;
        let bounds = legal.bounds;

        let strength = hand_strength(&player.hole_cards, &state.community_cards);
        let free_check = bounds.call == player.current_bet;
        let choices = self.weights(strength, free_check, bounds.can_raise());

        let total: f64 = choices.iter().map(|(_, w)| w).sum();
        let mut roll = rng.roll_unit() * total;
        let mut picked = Choice::Passive;
        for (choice, weight) in &choices {
            if roll < *weight {
                picked = *choice;
                break;
            }
            roll -= weight;
        }

        let action = match picked {
            Choice::Fold => PlayerAction::Fold,
            Choice::Passive => PlayerAction::Bet(bounds.call),
            Choice::Raise => {
                let steps = (strength * 3.0).floor() as u64;
                let extra = Chips(state.min_raise_increment.0 * steps);
                PlayerAction::Bet((bounds.min_raise + extra).min(bounds.max))
            }
            Choice::Shove => PlayerAction::Bet(bounds.max),
        };
        debug!("seat {seat}: strength {strength:.2} -> {action:?}");
        Ok(action)
    }
}

/// Результат запуска отложенного хода бота.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptedOutcome {
    /// Ход сделан, `state` — новый снапшот.
    Applied {
        seat: SeatIndex,
        action: PlayerAction,
        state: RoundState,
    },
    /// Состояние успело измениться после планирования, ход пропущен.
    Stale { seat: SeatIndex, generation: u64 },
}

/// Сыграть за место `seat`, если снапшот всё ещё тот, для которого ход
/// планировался (`generation` совпадает). За человека бот не ходит:
/// `InvalidSeatState`.
pub fn run_scripted_action<P, R>(
    state: &RoundState,
    seat: SeatIndex,
    generation: u64,
    policy: &P,
    rng: &mut R,
) -> Result<ScriptedOutcome, EngineError>
where
    P: ScriptedPolicy,
    R: RandomSource,
{
    if state.generation != generation {
        warn!(
            "stale scripted action for seat {seat}: scheduled at generation {generation}, now {}",
            state.generation
        );
        return Ok(ScriptedOutcome::Stale { seat, generation });
    }
    if !state.player(seat)?.scripted {
        return Err(EngineError::InvalidSeatState(seat));
    }

    let action = policy.decide(state, seat, rng)?;
    let next = match action {
        PlayerAction::Bet(amount) => submit_bet(state, seat, amount)?,
        PlayerAction::Fold => handle_fold(state, seat)?,
    };
    Ok(ScriptedOutcome::Applied {
        seat,
        action,
        state: next,
    })
}
