use serde::{Deserialize, Serialize};

use crate::domain::hand::HandOutcome;
use crate::domain::SeatIndex;
use crate::engine::{LegalActions, RoundState};

use super::dto::{build_table_view, TableViewDto};
use super::errors::ApiError;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Состояние стола глазами места `viewer`.
    TableView { viewer: Option<SeatIndex> },

    /// Что может сделать место, чей сейчас ход.
    LegalActions { seat: SeatIndex },

    /// Итог последней раздачи (если закончена).
    Showdown,

    /// Лента сообщений текущей раздачи.
    Messages,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Table(Box<TableViewDto>),
    LegalActions(LegalActions),
    Showdown(Option<HandOutcome>),
    Messages(Vec<String>),
}

/// Ответить на запрос по снапшоту.
pub fn answer(state: &RoundState, query: &Query) -> Result<QueryResponse, ApiError> {
    let response = match query {
        Query::TableView { viewer } => QueryResponse::Table(Box::new(build_table_view(state, *viewer))),
        Query::LegalActions { seat } => QueryResponse::LegalActions(state.legal_actions(*seat)?),
        Query::Showdown => QueryResponse::Showdown(state.outcome.clone()),
        Query::Messages => QueryResponse::Messages(state.history.messages()),
    };
    Ok(response)
}
