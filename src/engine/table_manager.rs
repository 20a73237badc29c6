// src/engine/table_manager.rs

use std::sync::Arc;

use log::debug;

use crate::ai::{run_scripted_action, HeuristicPolicy, ScriptedOutcome, ScriptedPolicy};
use crate::api::{ApiError, Command, CommandResponse};
use crate::domain::{Chips, SeatIndex, SeatSpec, TableConfig};
use crate::engine::{self, EngineError, RandomSource, RoundState};
use crate::time_ctrl::ActionScheduler;

/// Сессия одного стола:
/// - хранит последний снапшот `RoundState` (читатели держат `Arc` и видят
///   согласованное состояние, пока сессия двигается дальше);
/// - применяет операции движка и подменяет снапшот только при успехе;
/// - планирует отложенные ходы ботов и запускает их по часам сессии.
pub struct TableSession<R, P = HeuristicPolicy> {
    state: Arc<RoundState>,
    rng: R,
    policy: P,
    scheduler: ActionScheduler,
    clock_ms: u64,
}

impl<R: RandomSource, P: ScriptedPolicy> TableSession<R, P> {
    /// Новый стол в фазе Idle.
    pub fn new(config: TableConfig, seats: &[SeatSpec], mut rng: R, policy: P) -> Result<Self, EngineError> {
        let state = engine::new_table(config, seats, &mut rng)?;
        Ok(Self::from_state(state, rng, policy))
    }

    /// Продолжить с готового снапшота (тесты, реплей).
    pub fn from_state(state: RoundState, rng: R, policy: P) -> Self {
        let scheduler = ActionScheduler::new(state.config.scripted_delay_ms);
        let mut session = Self {
            state: Arc::new(state),
            rng,
            policy,
            scheduler,
            clock_ms: 0,
        };
        session.schedule_if_scripted();
        session
    }

    /// Текущий снапшот.
    pub fn snapshot(&self) -> Arc<RoundState> {
        Arc::clone(&self.state)
    }

    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    pub fn scheduler(&self) -> &ActionScheduler {
        &self.scheduler
    }

    pub fn post_blinds(&mut self) -> Result<Arc<RoundState>, EngineError> {
        let next = engine::post_blinds(&self.state)?;
        Ok(self.commit(next))
    }

    pub fn deal_private_cards(&mut self) -> Result<Arc<RoundState>, EngineError> {
        let next = engine::deal_private_cards(&self.state)?;
        Ok(self.commit(next))
    }

    pub fn bet(&mut self, seat: SeatIndex, amount: Chips) -> Result<Arc<RoundState>, EngineError> {
        let next = engine::submit_bet(&self.state, seat, amount)?;
        Ok(self.commit(next))
    }

    pub fn fold(&mut self, seat: SeatIndex) -> Result<Arc<RoundState>, EngineError> {
        let next = engine::handle_fold(&self.state, seat)?;
        Ok(self.commit(next))
    }

    pub fn advance_to_next_round(&mut self) -> Result<Arc<RoundState>, EngineError> {
        let next = engine::advance_to_next_round(&self.state, &mut self.rng)?;
        self.scheduler.clear();
        Ok(self.commit(next))
    }

    /// Ход бота за место `seat`, запланированный для снапшота `generation`.
    pub fn run_scripted_action(&mut self, seat: SeatIndex, generation: u64) -> Result<CommandResponse, EngineError> {
        let outcome = run_scripted_action(&self.state, seat, generation, &self.policy, &mut self.rng)?;
        match outcome {
            ScriptedOutcome::Applied { state, .. } => {
                let snapshot = self.commit(state);
                Ok(CommandResponse::Applied {
                    generation: snapshot.generation,
                })
            }
            ScriptedOutcome::Stale { seat, generation } => Ok(CommandResponse::Stale { seat, generation }),
        }
    }

    /// Продвинуть часы сессии и выполнить все ходы ботов, время которых
    /// наступило. Ход, запланированный внутри этого вызова, тоже выполняется,
    /// если успевает к `now_ms`.
    pub fn advance_clock(&mut self, now_ms: u64) -> Result<Vec<CommandResponse>, EngineError> {
        let mut results = Vec::new();
        while let Some(entry) = self.scheduler.pop_due(now_ms) {
            self.clock_ms = self.clock_ms.max(entry.due_at_ms);
            results.push(self.run_scripted_action(entry.seat, entry.generation)?);
        }
        self.clock_ms = self.clock_ms.max(now_ms);
        Ok(results)
    }

    /// Выполнить внешнюю команду.
    pub fn handle(&mut self, command: Command) -> Result<CommandResponse, ApiError> {
        let snapshot = match command {
            Command::PostBlinds => self.post_blinds()?,
            Command::DealPrivateCards => self.deal_private_cards()?,
            Command::Bet { seat, amount } => self.bet(seat, amount)?,
            Command::Fold { seat } => self.fold(seat)?,
            Command::AdvanceToNextRound => self.advance_to_next_round()?,
            Command::RunScriptedAction { seat, generation } => {
                return Ok(self.run_scripted_action(seat, generation)?);
            }
        };
        Ok(CommandResponse::Applied {
            generation: snapshot.generation,
        })
    }

    fn commit(&mut self, next: RoundState) -> Arc<RoundState> {
        self.state = Arc::new(next);
        self.schedule_if_scripted();
        self.snapshot()
    }

    fn schedule_if_scripted(&mut self) {
        let Some(player) = self.state.active_player() else {
            return;
        };
        if player.scripted {
            let entry = self
                .scheduler
                .schedule(player.seat, self.state.generation, self.clock_ms);
            debug!(
                "scheduled seat {} at generation {} for {} ms",
                entry.seat, entry.generation, entry.due_at_ms
            );
        }
    }
}
