//! # TitleBanner Component
//!
//! The application name in large block letters, centered in the title region.
//! Falls back to the plain name when the terminal is too narrow for the banner.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::style::ACCENT;

const GLYPH_HEIGHT: usize = 5;

fn glyph(c: char) -> [&'static str; GLYPH_HEIGHT] {
    match c.to_ascii_uppercase() {
        'S' => [" ████", "█    ", " ███ ", "    █", "████ "],
        'O' => [" ███ ", "█   █", "█   █", "█   █", " ███ "],
        'L' => ["█    ", "█    ", "█    ", "█    ", "█████"],
        'F' => ["█████", "█    ", "████ ", "█    ", "█    "],
        'R' => ["████ ", "█   █", "████ ", "█  █ ", "█   █"],
        'G' => [" ████", "█    ", "█  ██", "█   █", " ████"],
        'E' => ["█████", "█    ", "████ ", "█    ", "█████"],
        _ => ["     "; GLYPH_HEIGHT],
    }
}

/// Block-letter rows for `text`, one space between letters.
pub fn banner_rows(text: &str) -> Vec<String> {
    (0..GLYPH_HEIGHT)
        .map(|row| {
            text.chars()
                .map(|c| glyph(c)[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

pub struct TitleBanner<'a> {
    pub text: &'a str,
}

impl<'a> TitleBanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl Component for TitleBanner<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rows = banner_rows(self.text);
        let fits = rows
            .first()
            .is_some_and(|row| row.width() <= usize::from(area.width));

        let lines: Vec<Line> = if fits {
            rows.into_iter().map(Line::from).collect()
        } else {
            vec![Line::from(self.text)]
        };

        let [banner_area] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
        frame.render_widget(paragraph, banner_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_banner_rows_are_even() {
        let rows = banner_rows("SoloForge");
        assert_eq!(rows.len(), GLYPH_HEIGHT);
        let width = rows[0].width();
        assert_eq!(width, 9 * 5 + 8);
        assert!(rows.iter().all(|row| row.width() == width));
    }

    #[test]
    fn test_unknown_letters_are_blank() {
        let rows = banner_rows("?");
        assert!(rows.iter().all(|row| row.trim().is_empty()));
    }

    #[test]
    fn test_banner_renders_centered() {
        let backend = TestBackend::new(80, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                TitleBanner::new("SoloForge").render(f, area);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row_text = |y: u16| (0..80).map(|x| buffer[(x, y)].symbol()).collect::<String>();
        // 5 banner rows in an 8-row region, with blank rows above and below
        let banner_lines: Vec<u16> = (0..8).filter(|&y| row_text(y).contains('█')).collect();
        assert_eq!(banner_lines.len(), 5);
        assert!(row_text(0).trim().is_empty());
        assert!(row_text(7).trim().is_empty());
        assert_eq!(buffer[(13, banner_lines[0])].fg, ACCENT);
    }

    #[test]
    fn test_banner_falls_back_when_narrow() {
        let backend = TestBackend::new(20, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                TitleBanner::new("SoloForge").render(f, area);
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("SoloForge"));
        assert!(!text.contains('█'));
    }
}
