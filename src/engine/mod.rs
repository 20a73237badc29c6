//! Движок одной раздачи за одним столом: ставки, переход улиц, сайд-поты, шоудаун.
//!
//! Снапшот: `RoundState`. Основные операции (каждая возвращает новый снапшот):
//!   - `post_blinds` / `deal_private_cards` – начало раздачи
//!   - `submit_bet` / `handle_fold` – действия игроков
//!   - `advance_to_next_round` – переход к следующей раздаче
//!
//! `TableSession` держит актуальный снапшот и очередь отложенных ходов ботов.

pub mod actions;
pub mod betting;
pub mod errors;
pub mod game_loop;
pub mod hand_history;
pub mod positions;
pub mod pot;
pub mod rounds;
pub mod showdown;
pub mod side_pots;
pub mod table_manager;
pub mod validation;

pub use actions::{ActionLabel, ActionRecord, PlayerAction};
pub use betting::{determine_blind_indices, determine_min_bet, BetBounds, BlindIndices};
pub use errors::EngineError;
pub use game_loop::{
    deal_private_cards, handle_bet, handle_fold, post_blinds, submit_bet, LegalActions, RoundState,
    SeatCounts,
};
pub use hand_history::{HandEvent, HandEventKind, HandHistory};
pub use pot::Pot;
pub use rounds::{
    advance_to_next_round, begin_next_round, check_win, default_seat_specs, generate_table,
    new_table, winner_seat,
};
pub use side_pots::{award_pots, compute_side_pots, SidePot};
pub use table_manager::TableSession;

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand`); в тестах – свои заглушки.
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Равномерный индекс в `0..upper` (`upper > 0`).
    fn pick_index(&mut self, upper: usize) -> usize;

    /// Равномерное число в `[0, 1)`.
    fn roll_unit(&mut self) -> f64;
}
