//! # Session State
//!
//! The handful of values shown in the session panel. Lives for one process
//! run and is never written to disk.
//!
//! ```text
//! Session
//! ├── engine: String   // oracle engine name
//! ├── theme: String    // campaign theme
//! └── chaos: u8        // chaos factor, always within 1..=9
//! ```

pub const DEFAULT_ENGINE: &str = "Mythic 2e";
pub const DEFAULT_THEME: &str = "Fantasy";
pub const DEFAULT_CHAOS: u8 = 5;

pub const CHAOS_MIN: u8 = 1;
pub const CHAOS_MAX: u8 = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    engine: String,
    theme: String,
    chaos: u8,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            engine: DEFAULT_ENGINE.to_string(),
            theme: DEFAULT_THEME.to_string(),
            chaos: DEFAULT_CHAOS,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn engine(&self) -> &str {
        &self.engine
    }

    pub fn set_engine(&mut self, engine: impl Into<String>) {
        self.engine = engine.into();
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: impl Into<String>) {
        self.theme = theme.into();
    }

    pub fn chaos(&self) -> u8 {
        self.chaos
    }

    /// Stores `value` clamped into `CHAOS_MIN..=CHAOS_MAX` and returns what was stored.
    /// Out-of-range input is never an error.
    pub fn set_chaos(&mut self, value: i64) -> u8 {
        let clamped = value.clamp(i64::from(CHAOS_MIN), i64::from(CHAOS_MAX));
        // In range after the clamp, so the narrowing cannot truncate.
        self.chaos = clamped as u8;
        self.chaos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_defaults() {
        let session = Session::new();
        assert_eq!(session.engine(), "Mythic 2e");
        assert_eq!(session.theme(), "Fantasy");
        assert_eq!(session.chaos(), 5);
    }

    #[test]
    fn test_set_chaos_clamps_into_range() {
        let mut session = Session::new();
        for (input, expected) in [(0, 1), (1, 1), (9, 9), (10, 9), (-5, 1)] {
            assert_eq!(session.set_chaos(input), expected, "input {input}");
            assert_eq!(session.chaos(), expected, "input {input}");
        }
    }

    #[test]
    fn test_set_chaos_keeps_in_range_values() {
        let mut session = Session::new();
        for value in 1..=9 {
            assert_eq!(i64::from(session.set_chaos(value)), value);
        }
    }

    #[test]
    fn test_set_chaos_extreme_values() {
        let mut session = Session::new();
        assert_eq!(session.set_chaos(i64::MAX), CHAOS_MAX);
        assert_eq!(session.set_chaos(i64::MIN), CHAOS_MIN);
    }

    #[test]
    fn test_engine_and_theme_accept_anything() {
        let mut session = Session::new();
        session.set_engine("");
        session.set_theme(String::from("Cyberpunk Noir"));
        assert_eq!(session.engine(), "");
        assert_eq!(session.theme(), "Cyberpunk Noir");
    }
}
