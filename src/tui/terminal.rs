//! The ratatui implementation of [`Surface`].
//!
//! Generic over the backend so tests can render into a `TestBackend` and feed
//! keys from a queue, while the binary uses crossterm for both.

use ratatui::Terminal;
use ratatui::backend::Backend;

use crate::core::error::ShellError;
use crate::core::surface::{KeyPress, Surface, View};
use crate::tui::event::KeySource;
use crate::tui::ui;

pub struct TerminalSurface<B: Backend, K: KeySource> {
    terminal: Terminal<B>,
    keys: K,
}

impl<B: Backend, K: KeySource> TerminalSurface<B, K> {
    pub fn new(terminal: Terminal<B>, keys: K) -> Self {
        Self { terminal, keys }
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }
}

impl<B, K> Surface for TerminalSurface<B, K>
where
    B: Backend,
    K: KeySource,
    ShellError: From<B::Error>,
{
    fn clear(&mut self) -> Result<(), ShellError> {
        self.terminal.clear()?;
        Ok(())
    }

    fn draw(&mut self, view: View<'_>) -> Result<(), ShellError> {
        self.terminal.draw(|frame| ui::draw_view(frame, view))?;
        Ok(())
    }

    fn read_key(&mut self) -> Result<KeyPress, ShellError> {
        Ok(self.keys.next_key()?)
    }
}
