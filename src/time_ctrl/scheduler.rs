// src/time_ctrl/scheduler.rs

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::domain::SeatIndex;

/// Запланированный ход бота.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduledAction {
    pub seat: SeatIndex,
    /// `RoundState::generation` на момент планирования.
    pub generation: u64,
    /// Когда запускать (мс на часах сессии).
    pub due_at_ms: u64,
}

/// Очередь отложенных ходов. Задержка одна на весь стол, поэтому очередь
/// всегда упорядочена по `due_at_ms`.
#[derive(Clone, Debug, Default)]
pub struct ActionScheduler {
    queue: VecDeque<ScheduledAction>,
    delay_ms: u64,
}

impl ActionScheduler {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            queue: VecDeque::new(),
            delay_ms,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Поставить ход места `seat` через `delay_ms` от `now_ms`.
    pub fn schedule(&mut self, seat: SeatIndex, generation: u64, now_ms: u64) -> ScheduledAction {
        let entry = ScheduledAction {
            seat,
            generation,
            due_at_ms: now_ms.saturating_add(self.delay_ms),
        };
        self.queue.push_back(entry);
        entry
    }

    /// Забрать первый ход, время которого наступило.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<ScheduledAction> {
        match self.queue.front() {
            Some(entry) if entry.due_at_ms <= now_ms => self.queue.pop_front(),
            _ => None,
        }
    }

    /// Когда сработает ближайший ход.
    pub fn next_due(&self) -> Option<u64> {
        self.queue.front().map(|e| e.due_at_ms)
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
