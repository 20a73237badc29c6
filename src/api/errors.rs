use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::EngineError;

/// Категория ошибки для клиента.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Неправильные входные данные (например, битый JSON).
    BadRequest,
    IllegalBetAmount,
    ActionOutOfTurn,
    DeckExhausted,
    InvalidSeatState,
    InvalidSeat,
    InvalidPhase,
    NotEnoughPlayers,
    GameOver,
    InvalidConfig,
}

/// Ошибка внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::BadRequest,
            message: message.into(),
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        let kind = match &err {
            EngineError::IllegalBetAmount { .. } => ApiErrorKind::IllegalBetAmount,
            EngineError::ActionOutOfTurn { .. } => ApiErrorKind::ActionOutOfTurn,
            EngineError::DeckExhausted { .. } => ApiErrorKind::DeckExhausted,
            EngineError::InvalidSeatState(_) => ApiErrorKind::InvalidSeatState,
            EngineError::InvalidSeat(_) => ApiErrorKind::InvalidSeat,
            EngineError::InvalidPhase(_) => ApiErrorKind::InvalidPhase,
            EngineError::NotEnoughPlayers => ApiErrorKind::NotEnoughPlayers,
            EngineError::GameOver(_) => ApiErrorKind::GameOver,
            EngineError::InvalidConfig(_) => ApiErrorKind::InvalidConfig,
        };
        Self {
            kind,
            message: err.to_string(),
        }
    }
}
