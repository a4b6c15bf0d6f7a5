//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `tasklist_core` linkage.
//! - Replay a fixed task-list session and print each view, deterministically.
//!
//! Set `TASKLIST_LOG_DIR` (absolute) to enable file logging, and optionally
//! `TASKLIST_LOG_LEVEL`.

use std::process::ExitCode;
use tasklist_core::{
    init_logging, FilterMode, LogConfig, TaskSession, TaskView,
};

const LOG_DIR_ENV: &str = "TASKLIST_LOG_DIR";
const LOG_LEVEL_ENV: &str = "TASKLIST_LOG_LEVEL";

fn main() -> ExitCode {
    if let Err(err) = configure_logging() {
        eprintln!("tasklist_cli failed to configure logging: {err}");
        return ExitCode::FAILURE;
    }

    println!("tasklist_core ping={}", tasklist_core::ping());
    println!("tasklist_core version={}", tasklist_core::core_version());

    run_demo();
    ExitCode::SUCCESS
}

fn configure_logging() -> Result<(), tasklist_core::LoggingError> {
    let Some(log_dir) = std::env::var_os(LOG_DIR_ENV) else {
        return Ok(());
    };
    let config = match std::env::var(LOG_LEVEL_ENV) {
        Ok(level) => LogConfig::new(&level, log_dir)?,
        Err(_) => LogConfig::with_default_level(log_dir)?,
    };
    init_logging(&config)
}

fn run_demo() {
    let mut session = TaskSession::new();
    let milk = session.add("buy milk");
    let dog = session.add("walk dog");

    if let Some(id) = milk {
        session.set_checked(id, true);
    }
    if let Some(id) = dog {
        session.soft_delete(id);
    }

    for mode in FilterMode::ALL_MODES {
        session.select_filter(mode);
        print_view(&session.view());
    }

    session.purge();
    session.select_filter(FilterMode::All);
    log::info!(
        "event=demo_done module=cli status=ok remaining={}",
        session.tasks().len()
    );
    print_view(&session.view());
}

fn print_view(view: &TaskView<'_>) {
    println!(
        "[{}] entry={} purge={} items={}",
        view.mode,
        view.entry_enabled,
        view.purge_enabled,
        view.items.len()
    );
    for task in &view.items {
        let mark = if task.checked { "x" } else { " " };
        println!("  [{mark}] #{} {}", task.id(), task.text);
    }
}
