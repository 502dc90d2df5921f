//! # Render Surface
//!
//! Everything the shell needs from a screen, and nothing more:
//! clear it, draw a view, read one key, ask a yes/no question.
//!
//! The TUI adapter implements this on top of ratatui; tests script it.

use crate::core::context::AppContext;
use crate::core::error::ShellError;
use crate::core::menu::normalize_key;

/// A single keystroke, already stripped of terminal-specific detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Char(char),
    Enter,
    Escape,
    /// Any other key. Good enough for "press any key", never a hotkey.
    Other,
}

impl KeyPress {
    /// The uppercased character for menu lookup, if this key has one.
    pub fn hotkey(self) -> Option<char> {
        match self {
            KeyPress::Char(c) => Some(normalize_key(c)),
            _ => None,
        }
    }
}

/// What to put on screen.
#[derive(Debug, Clone, Copy)]
pub enum View<'a> {
    /// The main frame: title, session and menu panels, footer.
    Shell(&'a AppContext),
    /// A few centered lines of text.
    Notice(&'a [&'a str]),
    /// A yes/no question; `default` is what Enter or Esc answers.
    Prompt { question: &'a str, default: bool },
}

/// The choice hint shown after a yes/no question, capitalizing the default.
pub fn prompt_hint(default: bool) -> &'static str {
    if default { "[Y/n]" } else { "[y/N]" }
}

pub trait Surface {
    fn clear(&mut self) -> Result<(), ShellError>;

    fn draw(&mut self, view: View<'_>) -> Result<(), ShellError>;

    /// Blocks until one key is pressed. No timeout.
    fn read_key(&mut self) -> Result<KeyPress, ShellError>;

    /// Clears the screen and asks `question`. `y`/`n` answer directly,
    /// Enter and Esc take `default`, anything else is ignored.
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool, ShellError> {
        self.clear()?;
        self.draw(View::Prompt { question, default })?;
        loop {
            match self.read_key()? {
                KeyPress::Enter | KeyPress::Escape => return Ok(default),
                key => match key.hotkey() {
                    Some('Y') => return Ok(true),
                    Some('N') => return Ok(false),
                    _ => {}
                },
            }
        }
    }
}
