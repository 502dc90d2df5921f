use std::collections::VecDeque;
use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::surface::KeyPress;

/// Somewhere keystrokes come from. Blocks until one is available.
pub trait KeySource {
    fn next_key(&mut self) -> io::Result<KeyPress>;
}

/// Reads the real keyboard through crossterm.
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> io::Result<KeyPress> {
        loop {
            // Resize, focus, mouse and paste events are skipped; the next
            // frame picks up the new size on its own.
            if let Event::Key(key_event) = event::read()?
                && let Some(key) = translate(key_event)
            {
                return Ok(key);
            }
        }
    }
}

/// Replays queued keys, then reports end of input.
impl KeySource for VecDeque<KeyPress> {
    fn next_key(&mut self) -> io::Result<KeyPress> {
        self.pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "key queue exhausted"))
    }
}

/// Turn a crossterm key event into a `KeyPress`. Release and repeat events
/// give `None`. Ctrl/Alt chords are never hotkeys.
pub fn translate(key_event: KeyEvent) -> Option<KeyPress> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);

    let chord = key_event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    let key = match key_event.code {
        KeyCode::Char(_) if chord => KeyPress::Other,
        KeyCode::Char(c) => KeyPress::Char(c),
        KeyCode::Enter => KeyPress::Enter,
        KeyCode::Esc => KeyPress::Escape,
        _ => KeyPress::Other,
    };
    Some(key)
}
