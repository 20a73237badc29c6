// src/bin/poker_dev_cli.rs
//
// Прогон стола, где за всеми местами играют боты, до победителя.
//
//   poker_dev_cli [мест] [seed] [макс. раздач]
//
// Логи: RUST_LOG=debug poker_dev_cli 4 42

use std::env;
use std::error::Error;
use std::process::ExitCode;

use holdem_round_engine::ai::HeuristicPolicy;
use holdem_round_engine::api::build_table_view;
use holdem_round_engine::domain::{SeatSpec, TableConfig};
use holdem_round_engine::engine::TableSession;
use holdem_round_engine::infra::DeterministicRng;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = env::args().skip(1);
    let seats: u8 = args.next().and_then(|s| s.parse().ok()).unwrap_or(6);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(7);
    let max_hands: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(500);

    match run(seats, seed, max_hands) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("poker_dev_cli: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(seats: u8, seed: u64, max_hands: u64) -> Result<String, Box<dyn Error>> {
    let config = TableConfig {
        max_seats: seats,
        ..TableConfig::default()
    };
    let specs: Vec<SeatSpec> = (0..seats)
        .map(|idx| SeatSpec::scripted(format!("Bot {idx}"), config.starting_stack))
        .collect();

    let mut session = TableSession::new(
        config,
        &specs,
        DeterministicRng::from_seed(seed),
        HeuristicPolicy::default(),
    )?;
    session.post_blinds()?;
    session.deal_private_cards()?;

    loop {
        let snapshot = session.snapshot();
        if snapshot.winner.is_some() || snapshot.hand_number > max_hands {
            break;
        }
        if snapshot.is_hand_over() {
            for line in snapshot.history.messages() {
                log::debug!("{line}");
            }
            session.advance_to_next_round()?;
            continue;
        }
        match session.scheduler().next_due() {
            Some(due) => {
                session.advance_clock(due)?;
            }
            None => break,
        }
    }

    let view = build_table_view(&session.snapshot(), None);
    Ok(serde_json::to_string_pretty(&view)?)
}
