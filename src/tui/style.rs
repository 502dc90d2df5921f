//! Colors and the shared rounded panel frame.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType};

use crate::core::menu::HotkeyColor;

/// Title banner and outer border.
pub const ACCENT: Color = Color::Yellow;
/// Session and menu panel borders.
pub const SECONDARY: Color = Color::Cyan;
/// Separators, footer, secondary text.
pub const MUTED: Color = Color::DarkGray;

pub fn hotkey_color(color: HotkeyColor) -> Color {
    match color {
        HotkeyColor::Green => Color::Green,
        HotkeyColor::Yellow => Color::Yellow,
        HotkeyColor::Cyan => Color::Cyan,
        HotkeyColor::Magenta => Color::Magenta,
        HotkeyColor::Blue => Color::LightBlue,
        HotkeyColor::Red => Color::Red,
        HotkeyColor::Gray => Color::Gray,
    }
}

/// A rounded, colored border with a centered bold header.
pub fn rounded_block(header: &str, color: Color) -> Block<'static> {
    let border_style = Style::default().fg(color);
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(
            Line::from(Span::styled(
                format!(" {header} "),
                border_style.add_modifier(Modifier::BOLD),
            ))
            .centered(),
        )
}
