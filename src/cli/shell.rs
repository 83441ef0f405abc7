use std::io;

use crate::{
    config::ConfigManager,
    core::ledger_manager::LedgerManager,
    errors::CliError,
    storage::json_backend::JsonStorage,
};

use super::{
    commands,
    io::{EditorReader, LineReader, ReadOutcome, ScriptReader},
    menu,
    output::{self, OutputPreferences},
    shell_context::{CliMode, LoopControl, ShellContext},
};

pub const SCRIPT_ENV: &str = "EXPENSE_LEDGER_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let config_manager = ConfigManager::new()?;
    let config = config_manager.load()?;
    let ledger_path = config_manager.ledger_path(&config);
    tracing::info!(path = %ledger_path.display(), ?mode, "starting shell");

    output::set_preferences(OutputPreferences {
        plain_mode: mode == CliMode::Script || config.use_plain_output(),
    });

    let manager = LedgerManager::open(Box::new(JsonStorage::new(ledger_path)))?;
    for warning in manager.load_warnings() {
        output::warning(format!("Stored transaction not loaded, {warning}"));
    }
    let confirm_exit = config.confirm_exit;
    let mut context = ShellContext::new(mode, manager, config);

    match mode {
        CliMode::Interactive => {
            let mut reader = EditorReader::new(confirm_exit)?;
            run_loop(&mut context, &mut reader)
        }
        CliMode::Script => {
            let stdin = io::stdin();
            let mut reader = ScriptReader::new(stdin.lock());
            run_loop(&mut context, &mut reader)
        }
    }
}

/// Shows the menu and dispatches choices until exit or end of input.
pub fn run_loop(context: &mut ShellContext, reader: &mut dyn LineReader) -> Result<(), CliError> {
    while context.running {
        menu::render();
        let choice = match reader.read_line("Choose user option: ")? {
            ReadOutcome::Line(line) => line,
            ReadOutcome::Interrupted => {
                if reader.confirm_exit()? {
                    break;
                }
                continue;
            }
            ReadOutcome::Eof => {
                output::info("Exiting.");
                break;
            }
        };

        if let LoopControl::Exit = commands::dispatch(context, reader, &choice)? {
            context.running = false;
        }
    }
    tracing::debug!(status = %context.status(), "shell finished");
    Ok(())
}
