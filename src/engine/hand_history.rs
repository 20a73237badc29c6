use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::Street;
use crate::domain::{HandNumber, HandRank, SeatIndex};
use crate::engine::actions::ActionRecord;

/// Тип события в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandEventKind {
    /// Новая раздача началась.
    HandStarted {
        hand_number: HandNumber,
        dealer: SeatIndex,
    },

    /// Блайнды (место, фактически поставлено).
    BlindsPosted {
        small_blind: (SeatIndex, Chips),
        big_blind: (SeatIndex, Chips),
    },

    /// Игрок получил карманные карты.
    HoleCardsDealt { seat: SeatIndex, cards: Vec<Card> },

    /// Открыты общие карты (только новые карты улицы).
    BoardDealt { street: Street, cards: Vec<Card> },

    /// Действие игрока.
    PlayerActed(ActionRecord),

    /// Шоудаун – открытие карт.
    ShowdownReveal {
        seat: SeatIndex,
        hole_cards: Vec<Card>,
        rank: HandRank,
        description: String,
    },

    /// Выплата банка.
    PotAwarded {
        seat: SeatIndex,
        pot_index: usize,
        amount: Chips,
    },

    /// Место выбыло (стек 0 после раздачи).
    SeatEliminated { seat: SeatIndex },

    /// Раздача завершена.
    HandFinished { hand_number: HandNumber },
}

/// Событие в раздаче с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandEvent {
    pub index: u32,
    pub kind: HandEventKind,
}

/// Полная история текущей раздачи. Сбрасывается при переходе к следующей.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandHistory {
    pub events: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: HandEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(HandEvent { index: idx, kind });
    }

    /// Действия игроков в порядке совершения.
    pub fn actions(&self) -> impl Iterator<Item = &ActionRecord> {
        self.events.iter().filter_map(|e| match &e.kind {
            HandEventKind::PlayerActed(record) => Some(record),
            _ => None,
        })
    }

    /// Короткие текстовые сообщения для ленты действий.
    pub fn messages(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match &e.kind {
                HandEventKind::BlindsPosted {
                    small_blind,
                    big_blind,
                } => Some(format!(
                    "seat {} posts small blind {}, seat {} posts big blind {}",
                    small_blind.0, small_blind.1, big_blind.0, big_blind.1
                )),
                HandEventKind::PlayerActed(r) => Some(format!("seat {}: {} {}", r.seat, r.label, r.bet_after)),
                HandEventKind::BoardDealt { street, cards } => {
                    let cards: Vec<String> = cards.iter().map(|c| c.to_string()).collect();
                    Some(format!("{:?}: {}", street, cards.join(" ")))
                }
                HandEventKind::ShowdownReveal { seat, description, .. } => {
                    Some(format!("seat {seat} shows {description}"))
                }
                HandEventKind::PotAwarded {
                    seat,
                    pot_index,
                    amount,
                } => Some(format!("seat {seat} wins {amount} from pot #{pot_index}")),
                HandEventKind::SeatEliminated { seat } => Some(format!("seat {seat} is eliminated")),
                _ => None,
            })
            .collect()
    }
}
