//! # SessionPanel Component
//!
//! Label/value table for the current session, padded with blank rows so the
//! panel is as tall as the menu panel beside it.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Cell, Row, Table};

use crate::core::menu::Menu;
use crate::core::session::Session;
use crate::tui::component::Component;
use crate::tui::style::{MUTED, SECONDARY, rounded_block};

/// Engine, Theme, Chaos.
pub const SESSION_DATA_ROWS: usize = 3;

const LABEL_WIDTH: u16 = 7;

/// Blank rows needed to match the menu panel's line count
/// (one line per item plus one per separator).
pub fn padding_rows(menu: &Menu) -> usize {
    (menu.len() + menu.separator_count()).saturating_sub(SESSION_DATA_ROWS)
}

pub struct SessionPanel<'a> {
    pub session: &'a Session,
    pub padding_rows: usize,
}

impl<'a> SessionPanel<'a> {
    pub fn new(session: &'a Session, padding_rows: usize) -> Self {
        Self {
            session,
            padding_rows,
        }
    }

    /// Table contents as `[label, value]` pairs, padding included.
    pub fn rows(&self) -> Vec<[String; 2]> {
        let mut rows = vec![
            ["Engine".to_string(), self.session.engine().to_string()],
            ["Theme".to_string(), self.session.theme().to_string()],
            ["Chaos".to_string(), self.session.chaos().to_string()],
        ];
        rows.extend((0..self.padding_rows).map(|_| [String::new(), String::new()]));
        rows
    }

    /// Rows including the border.
    pub fn height(&self) -> u16 {
        (SESSION_DATA_ROWS + self.padding_rows) as u16 + 2
    }
}

impl Component for SessionPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rows = self.rows().into_iter().map(|[label, value]| {
            Row::new([
                Cell::from(label).style(Style::default().fg(MUTED)),
                Cell::from(value).style(Style::default().add_modifier(Modifier::BOLD)),
            ])
        });

        let table = Table::new(rows, [Constraint::Length(LABEL_WIDTH), Constraint::Fill(1)])
            .column_spacing(1)
            .block(rounded_block("Session", SECONDARY));

        frame.render_widget(table, area);
    }
}
