use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Chips, Player, SeatIndex};

/// Действие игрока.
///
/// Ставка всегда задаётся как итоговая сумма на улице ("raise to"),
/// а не как добавка: чек = текущая ставка игрока, колл = high_bet.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerAction {
    Bet(Chips),
    Fold,
}

/// Подпись действия, как её видит игрок на кнопке.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionLabel {
    Check,
    Call,
    Bet,
    Raise,
    AllIn,
    Fold,
}

impl ActionLabel {
    /// Как назвать ставку `amount` (raise-to) для игрока при текущем high_bet.
    pub fn for_bet(high_bet: Chips, amount: Chips, player: &Player) -> ActionLabel {
        if amount == player.current_bet {
            ActionLabel::Check
        } else if amount == player.all_in_ceiling() {
            ActionLabel::AllIn
        } else if amount == high_bet {
            ActionLabel::Call
        } else if high_bet.is_zero() {
            ActionLabel::Bet
        } else {
            ActionLabel::Raise
        }
    }
}

impl fmt::Display for ActionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActionLabel::Check => "Check",
            ActionLabel::Call => "Call",
            ActionLabel::Bet => "Bet",
            ActionLabel::Raise => "Raise",
            ActionLabel::AllIn => "All-In",
            ActionLabel::Fold => "Fold",
        };
        f.write_str(s)
    }
}

/// Применённое действие (для истории раздачи).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionRecord {
    pub seat: SeatIndex,
    pub label: ActionLabel,
    /// Итоговая ставка игрока на улице после действия.
    pub bet_after: Chips,
    pub stack_after: Chips,
}
