//! Движок раздач Texas Hold'em за одним столом.
//!
//! Слои:
//! - `domain` – карты, фишки, игроки, конфиг стола;
//! - `eval` – оценка рук;
//! - `engine` – ставки, банки, шоудаун, жизненный цикл раздач, `TableSession`;
//! - `ai` – скриптовые оппоненты;
//! - `time_ctrl` – отложенные ходы ботов;
//! - `api` – команды, запросы и DTO для фронта;
//! - `infra` – реализации RNG.

pub mod ai;
pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
pub mod time_ctrl;

pub use api::{Command, CommandResponse, Query, QueryResponse};
pub use domain::{Chips, SeatIndex, SeatSpec, TableConfig};
pub use engine::{EngineError, RoundState, TableSession};
