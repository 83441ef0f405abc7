use crate::{config::Config, core::ledger_manager::LedgerManager};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// State threaded through the menu loop in place of any global ledger.
pub struct ShellContext {
    pub mode: CliMode,
    pub manager: LedgerManager,
    pub config: Config,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode, manager: LedgerManager, config: Config) -> Self {
        Self {
            mode,
            manager,
            config,
            running: true,
        }
    }

    pub fn status(&self) -> String {
        format!(
            "ShellContext {{ running: {}, entries: {}, store: {} }}",
            self.running,
            self.manager.len(),
            self.manager.location()
        )
    }
}
