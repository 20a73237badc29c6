use crate::domain::{Chips, Phase, SeatIndex};

use thiserror::Error;

/// Ошибки движка раздачи.
///
/// Любая ошибка означает, что действие отклонено и снапшот состояния
/// остался прежним.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Недопустимый размер ставки {amount}: разрешено от {min} до {max}")]
    IllegalBetAmount { amount: Chips, min: Chips, max: Chips },

    #[error("Сейчас не ход места {seat} (ходит место {active})")]
    ActionOutOfTurn { seat: SeatIndex, active: SeatIndex },

    #[error("Колода закончилась: нужно {needed} карт, осталось {remaining}")]
    DeckExhausted { needed: usize, remaining: usize },

    #[error("Место {0} не может действовать (сфолдил, олл-ин или выбыл)")]
    InvalidSeatState(SeatIndex),

    #[error("Место {0} не существует за столом")]
    InvalidSeat(SeatIndex),

    #[error("Операция недоступна в фазе {0:?}")]
    InvalidPhase(Phase),

    #[error("Недостаточно игроков с фишками для раздачи")]
    NotEnoughPlayers,

    #[error("Игра окончена: фишки остались только у места {0}")]
    GameOver(SeatIndex),

    #[error("Некорректная конфигурация стола: {0}")]
    InvalidConfig(String),
}
