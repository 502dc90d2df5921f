//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::io;

use crate::core::context::AppContext;
use crate::core::error::ShellError;
use crate::core::surface::{KeyPress, Surface, View, prompt_hint};

/// A surface that records what was drawn and replays scripted keys.
///
/// Views are recorded as short strings: `"shell"`, `"notice:<line>|<line>"`
/// and `"prompt:<question> <hint>"`. Running out of keys is a terminal error.
#[derive(Default)]
pub struct FakeSurface {
    pub keys: VecDeque<KeyPress>,
    pub drawn: Vec<String>,
    pub clears: usize,
    /// Returned (once) from the next attempt to draw a notice.
    pub fail_notice_with: Option<ShellError>,
}

impl FakeSurface {
    pub fn with_keys(keys: impl IntoIterator<Item = KeyPress>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            ..Default::default()
        }
    }
}

impl Surface for FakeSurface {
    fn clear(&mut self) -> Result<(), ShellError> {
        self.clears += 1;
        Ok(())
    }

    fn draw(&mut self, view: View<'_>) -> Result<(), ShellError> {
        let entry = match view {
            View::Shell(_) => "shell".to_string(),
            View::Notice(lines) => {
                if let Some(err) = self.fail_notice_with.take() {
                    return Err(err);
                }
                format!("notice:{}", lines.join("|"))
            }
            View::Prompt { question, default } => {
                format!("prompt:{} {}", question, prompt_hint(default))
            }
        };
        self.drawn.push(entry);
        Ok(())
    }

    fn read_key(&mut self) -> Result<KeyPress, ShellError> {
        self.keys.pop_front().ok_or_else(|| {
            ShellError::Terminal(io::Error::new(io::ErrorKind::UnexpectedEof, "no more keys"))
        })
    }
}

/// Creates a context with the default session and the main menu.
pub fn test_context() -> AppContext {
    AppContext::default()
}
