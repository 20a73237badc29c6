//! Скриптовый оппонент: политика выбора действия и запуск отложенного хода.

pub mod policy;
pub mod strength;

pub use policy::{run_scripted_action, HeuristicPolicy, ScriptedOutcome, ScriptedPolicy};
pub use strength::hand_strength;
