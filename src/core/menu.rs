//! # Menu Model
//!
//! The ordered list of entries shown in the menu panel. Built once at startup
//! and never mutated afterwards.
//!
//! Each entry binds a hotkey (and optionally a number key) to an [`Action`].
//! Lookup is case-insensitive and first-match-wins; uniqueness of keys is the
//! menu author's job, checked by [`Menu::conflicts`] rather than enforced.

use crate::core::action::Action;

/// Display color for a hotkey. The TUI maps these onto terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyColor {
    Green,
    Yellow,
    Cyan,
    Magenta,
    Blue,
    Red,
    Gray,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub hotkey: char,
    pub number_key: Option<u32>,
    pub hotkey_color: HotkeyColor,
    pub action: Action,
    pub separator_before: bool,
}

impl MenuItem {
    pub const fn new(label: &'static str, hotkey: char, action: Action) -> Self {
        Self {
            label,
            hotkey,
            number_key: None,
            hotkey_color: HotkeyColor::Gray,
            action,
            separator_before: false,
        }
    }

    pub const fn number(mut self, number_key: u32) -> Self {
        self.number_key = Some(number_key);
        self
    }

    pub const fn color(mut self, color: HotkeyColor) -> Self {
        self.hotkey_color = color;
        self
    }

    pub const fn separated(mut self) -> Self {
        self.separator_before = true;
        self
    }

    /// First character of the number key's decimal form, e.g. `12` → `'1'`.
    pub fn number_char(&self) -> Option<char> {
        self.number_key.and_then(|n| n.to_string().chars().next())
    }

    fn matches(&self, key: char) -> bool {
        normalize_key(self.hotkey) == key || self.number_char() == Some(key)
    }
}

/// A pair of menu entries that answer to the same key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyConflict {
    pub key: char,
    pub first: &'static str,
    pub second: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// The main menu: five numbered features, then Settings and Quit below a separator.
    pub fn main_menu() -> Self {
        use HotkeyColor::*;

        Self::new(vec![
            MenuItem::new("Fate Check", 'F', Action::FateCheck).number(1).color(Green),
            MenuItem::new("Random Event", 'R', Action::RandomEvent).number(2).color(Yellow),
            MenuItem::new("NPC Generator", 'N', Action::NpcGenerator).number(3).color(Cyan),
            MenuItem::new("Dice Roller", 'D', Action::DiceRoller).number(4).color(Magenta),
            MenuItem::new("Lists", 'L', Action::Lists).number(5).color(Blue),
            MenuItem::new("Settings", 'S', Action::Settings).color(Gray).separated(),
            MenuItem::new("Quit", 'Q', Action::Quit).color(Red),
        ])
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn separator_count(&self) -> usize {
        self.items.iter().filter(|item| item.separator_before).count()
    }

    /// Looks up the entry bound to `key`, ignoring case. Number keys match on
    /// their first decimal digit. The earliest entry wins if several match.
    pub fn find(&self, key: char) -> Option<&MenuItem> {
        let key = normalize_key(key);
        self.items.iter().find(|item| item.matches(key))
    }

    /// Every key claimed by more than one entry, in list order.
    pub fn conflicts(&self) -> Vec<KeyConflict> {
        let mut conflicts = Vec::new();
        for (i, first) in self.items.iter().enumerate() {
            for second in &self.items[i + 1..] {
                let hotkey = normalize_key(first.hotkey);
                let number = first.number_char().filter(|&c| c != hotkey);
                for key in std::iter::once(hotkey).chain(number) {
                    if second.matches(key) {
                        conflicts.push(KeyConflict {
                            key,
                            first: first.label,
                            second: second.label,
                        });
                    }
                }
            }
        }
        conflicts
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::main_menu()
    }
}

/// Uppercases a key so lookups are case-insensitive. Keys whose uppercase
/// form is more than one character (`'ß'` → `"SS"`) are left as they are.
pub fn normalize_key(key: char) -> char {
    let mut upper = key.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(c), None) => c,
        _ => key,
    }
}
