mod commands;
pub mod io;
pub mod menu;
pub mod output;
pub mod report;
mod shell;
mod shell_context;

pub use shell::{run_cli, run_loop, SCRIPT_ENV};
pub use shell_context::{CliMode, ShellContext};
