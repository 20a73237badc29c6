use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::SeatIndex;

/// Команды, меняющие состояние стола.
///
/// Каждая команда превращается ровно в одну операцию движка и, в случае
/// успеха, в новый снапшот `RoundState`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Поставить блайнды (фаза Idle).
    PostBlinds,

    /// Раздать карманные карты (после блайндов).
    DealPrivateCards,

    /// Ставка места: итоговая сумма на улице (чек/колл/рейз/олл-ин).
    Bet { seat: SeatIndex, amount: Chips },

    /// Фолд места.
    Fold { seat: SeatIndex },

    /// Перейти к следующей раздаче (после шоудауна).
    AdvanceToNextRound,

    /// Отложенный ход бота, запланированный для снапшота `generation`.
    RunScriptedAction { seat: SeatIndex, generation: u64 },
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Команда применена, новый снапшот имеет этот `generation`.
    Applied { generation: u64 },

    /// Отложенный ход бота устарел и пропущен.
    Stale { seat: SeatIndex, generation: u64 },
}
