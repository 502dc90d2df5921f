//! # TUI Adapter
//!
//! The ratatui-specific layer. Implements the core `Surface` on a real
//! terminal, renders the shell frame, and translates crossterm key events
//! into `KeyPress` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! There is no tick and no animation: the loop clears and redraws once per
//! keystroke, then blocks on `event::read()` until the next key. Resizes are
//! picked up by the next draw.

mod component;
pub mod components;
pub mod event;
pub mod style;
pub mod terminal;
pub mod ui;

use log::info;

use crate::core::config::ResolvedConfig;
use crate::core::context::AppContext;
use crate::core::error::ShellError;
use crate::core::shell::Shell;
use crate::tui::event::CrosstermKeys;
use crate::tui::terminal::TerminalSurface;

/// Leaves raw mode and the alternate screen however `run` exits.
struct TerminalRestoreGuard;

impl Drop for TerminalRestoreGuard {
    fn drop(&mut self) {
        ratatui::restore();
        info!("Terminal restored");
    }
}

/// Runs the shell on the real terminal until the user confirms quit.
pub fn run(config: &ResolvedConfig) -> Result<(), ShellError> {
    let mut ctx = AppContext::from_config(config);

    let terminal = ratatui::try_init()?;
    let _restore_guard = TerminalRestoreGuard;
    info!("Terminal initialized");

    let mut surface = TerminalSurface::new(terminal, CrosstermKeys);
    Shell::new().run(&mut ctx, &mut surface)
}
