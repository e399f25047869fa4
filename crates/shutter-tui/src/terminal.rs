//! Terminal setup and restoration

use ratatui::DefaultTerminal;
use shutter_core::prelude::*;

/// Owns the raw-mode alternate screen; restores the terminal on drop.
///
/// Panics are handled by the crash reporter's hook, which does not restore the
/// terminal, so unwinding out of the runner relies on this guard.
pub struct TerminalGuard {
    terminal: DefaultTerminal,
}

impl TerminalGuard {
    pub fn init() -> Result<Self> {
        let terminal = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
        debug!("Terminal initialized");
        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut DefaultTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        ratatui::restore();
        debug!("Terminal restored");
    }
}
