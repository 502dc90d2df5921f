//! # MenuPanel Component
//!
//! One line per menu entry:
//!
//! ```text
//! 1. [F] Fate Check
//! ----------------------------
//!    [Q] Quit
//! ```
//!
//! The number column is as wide as the widest `"12."` in the menu, never less
//! than two cells, and the hotkey is drawn in its own color. Entries flagged
//! `separator_before` get a dashed line across the panel above them.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::menu::{Menu, MenuItem};
use crate::tui::component::Component;
use crate::tui::style::{MUTED, SECONDARY, hotkey_color, rounded_block};

/// Space + `[X]` + space, after the number column.
const HOTKEY_COLUMN_WIDTH: usize = 5;

const MIN_NUMBER_WIDTH: usize = 2;

pub struct MenuPanel<'a> {
    pub menu: &'a Menu,
}

impl<'a> MenuPanel<'a> {
    pub fn new(menu: &'a Menu) -> Self {
        Self { menu }
    }

    /// Rows including the border.
    pub fn height(&self) -> u16 {
        (self.menu.len() + self.menu.separator_count()) as u16 + 2
    }
}

impl Component for MenuPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = usize::from(area.width.saturating_sub(2));
        let paragraph = Paragraph::new(menu_lines(self.menu, inner_width))
            .block(rounded_block("Main Menu", SECONDARY));
        frame.render_widget(paragraph, area);
    }
}

/// Menu lines for a panel whose inside is `inner_width` cells wide.
pub fn menu_lines(menu: &Menu, inner_width: usize) -> Vec<Line<'static>> {
    let number_width = number_column_width(menu);
    let mut lines = Vec::with_capacity(menu.len() + menu.separator_count());
    for item in menu.items() {
        if item.separator_before {
            lines.push(separator_line(inner_width));
        }
        lines.push(item_line(item, number_width, inner_width));
    }
    lines
}

fn separator_line(inner_width: usize) -> Line<'static> {
    Line::styled("-".repeat(inner_width), Style::default().fg(MUTED))
}

fn number_label(number_key: u32) -> String {
    format!("{number_key}.")
}

fn number_column_width(menu: &Menu) -> usize {
    menu.items()
        .iter()
        .filter_map(|item| item.number_key)
        .map(|n| number_label(n).width())
        .fold(MIN_NUMBER_WIDTH, usize::max)
}

fn item_line(item: &MenuItem, number_width: usize, inner_width: usize) -> Line<'static> {
    let number = item.number_key.map(number_label).unwrap_or_default();
    let number = format!("{number:<number_width$}");
    let hotkey_style = Style::default()
        .fg(hotkey_color(item.hotkey_color))
        .add_modifier(Modifier::BOLD);
    let prefix_width = number_width + HOTKEY_COLUMN_WIDTH;
    let label = truncate_to_width(item.label, inner_width.saturating_sub(prefix_width));

    Line::from(vec![
        Span::raw(format!("{number} [")),
        Span::styled(item.hotkey.to_string(), hotkey_style),
        Span::raw("] "),
        Span::raw(label),
    ])
}

/// Truncate to `max_width` display cells, ending in "…" if anything was cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
