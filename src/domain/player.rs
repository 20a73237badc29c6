use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::SeatIndex;

/// Статус игрока в контексте стола/раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerStatus {
    /// Игрок активен в текущей раздаче и может ходить.
    Active,
    /// Игрок сфолдил и больше не претендует на банк.
    Folded,
    /// Игрок в олл-ине – не может больше делать ставки.
    AllIn,
    /// Стек кончился в одной из прошлых раздач – выбыл из игры.
    Eliminated,
}

/// Описание места при создании стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatSpec {
    pub name: String,
    pub stack: Chips,
    /// true – за местом играет скриптовый оппонент.
    pub scripted: bool,
}

impl SeatSpec {
    pub fn human(name: impl Into<String>, stack: Chips) -> Self {
        Self {
            name: name.into(),
            stack,
            scripted: false,
        }
    }

    pub fn scripted(name: impl Into<String>, stack: Chips) -> Self {
        Self {
            name: name.into(),
            stack,
            scripted: true,
        }
    }
}

/// Состояние игрока за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub seat: SeatIndex,
    pub name: String,
    /// Текущий стек за столом.
    pub stack: Chips,
    /// Ставка на текущей улице (ещё не сметена в банк).
    pub current_bet: Chips,
    /// Сколько уже сметено в банк(и) за эту раздачу.
    pub committed: Chips,
    pub status: PlayerStatus,
    /// Карманные карты (0 или 2).
    pub hole_cards: Vec<Card>,
    pub scripted: bool,
    /// Делал ли игрок действие на этой улице после последнего повышения.
    pub acted_this_street: bool,
    /// Стек на момент начала раздачи (для подсчёта выигрыша/проигрыша).
    pub round_start_stack: Chips,
}

impl Player {
    pub fn from_spec(seat: SeatIndex, spec: &SeatSpec) -> Self {
        Self {
            seat,
            name: spec.name.clone(),
            stack: spec.stack,
            current_bet: Chips::ZERO,
            committed: Chips::ZERO,
            status: if spec.stack.is_zero() {
                PlayerStatus::Eliminated
            } else {
                PlayerStatus::Active
            },
            hole_cards: Vec::new(),
            scripted: spec.scripted,
            acted_this_street: false,
            round_start_stack: spec.stack,
        }
    }

    /// Участвует в раздаче (не сфолдил и не выбыл).
    pub fn is_in_hand(&self) -> bool {
        matches!(self.status, PlayerStatus::Active | PlayerStatus::AllIn)
    }

    /// Может делать ставки.
    pub fn can_act(&self) -> bool {
        self.status == PlayerStatus::Active
    }

    pub fn is_folded(&self) -> bool {
        self.status == PlayerStatus::Folded
    }

    pub fn is_all_in(&self) -> bool {
        self.status == PlayerStatus::AllIn
    }

    pub fn is_eliminated(&self) -> bool {
        self.status == PlayerStatus::Eliminated
    }

    /// Верхняя граница ставки: весь стек плюс уже поставленное на улице.
    pub fn all_in_ceiling(&self) -> Chips {
        self.stack + self.current_bet
    }

    /// Выигрыш/проигрыш относительно начала раздачи.
    pub fn chip_delta(&self) -> i64 {
        self.stack.0 as i64 - self.round_start_stack.0 as i64
    }
}
