use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::Player;
use crate::engine::side_pots::{compute_side_pots, SidePot};

/// Банки раздачи: основной (первый) и сайд-поты.
///
/// Строится только из уже сметённых ставок (`Player::committed`);
/// ставки текущей улицы лежат перед игроками до конца раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    pub pots: Vec<SidePot>,
}

impl Pot {
    pub fn new() -> Self {
        Self { pots: Vec::new() }
    }

    /// Пересчитать банки по вкладам игроков.
    pub fn from_players(players: &[Player]) -> Self {
        let contributions: BTreeMap<_, _> = players
            .iter()
            .filter(|p| !p.committed.is_zero())
            .map(|p| (p.seat, p.committed))
            .collect();
        let folded: BTreeSet<_> = players
            .iter()
            .filter(|p| p.is_folded())
            .map(|p| p.seat)
            .collect();
        Self {
            pots: compute_side_pots(&contributions, &folded),
        }
    }

    /// Сумма основного банка.
    pub fn main(&self) -> Chips {
        self.pots.first().map(|p| p.amount).unwrap_or(Chips::ZERO)
    }

    /// Сайд-поты (всё, кроме основного).
    pub fn side_pots(&self) -> &[SidePot] {
        self.pots.get(1..).unwrap_or(&[])
    }

    pub fn total(&self) -> Chips {
        self.pots.iter().map(|p| p.amount).sum()
    }

    pub fn reset(&mut self) {
        self.pots.clear();
    }
}
