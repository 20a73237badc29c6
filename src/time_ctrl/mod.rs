// src/time_ctrl/mod.rs
//! Отложенные ходы скриптовых оппонентов.
//!
//! Бот не ходит сразу: ход ставится в очередь с задержкой
//! `TableConfig::scripted_delay_ms` и помечается `generation` снапшота,
//! для которого он планировался. Если к моменту запуска состояние
//! поменялось, ход считается устаревшим.

pub mod scheduler;

pub use scheduler::{ActionScheduler, ScheduledAction};
