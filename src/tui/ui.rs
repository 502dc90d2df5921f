use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::context::AppContext;
use crate::core::surface::{View, prompt_hint};
use crate::tui::component::Component;
use crate::tui::components::session_panel::padding_rows;
use crate::tui::components::{MenuPanel, SessionPanel, TitleBanner};
use crate::tui::style::{ACCENT, MUTED, SECONDARY, rounded_block};

pub const APP_NAME: &str = "SoloForge";
pub const FOOTER_HINT: &str = "Press a highlighted key or number to select an option";

pub const TITLE_HEIGHT: u16 = 8;
pub const FOOTER_HEIGHT: u16 = 2;
pub const SHELL_WIDTH: u16 = 60;
pub const SESSION_PANEL_WIDTH: u16 = 24;
pub const MENU_PANEL_WIDTH: u16 = 30;

pub fn draw_view(frame: &mut Frame, view: View<'_>) {
    match view {
        View::Shell(ctx) => draw_shell(frame, ctx),
        View::Notice(lines) => draw_notice(frame, lines),
        View::Prompt { question, default } => draw_prompt(frame, question, default),
    }
}

/// The main frame. Depends only on `ctx`, so the same context always
/// produces the same cells.
pub fn draw_shell(frame: &mut Frame, ctx: &AppContext) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(TITLE_HEIGHT), Min(0), Length(FOOTER_HEIGHT)]);
    let [title_area, content_area, footer_area] = layout.areas(frame.area());

    TitleBanner::new(APP_NAME).render(frame, title_area);
    draw_content(frame, content_area, ctx);
    draw_footer(frame, footer_area);
}

fn draw_content(frame: &mut Frame, area: Rect, ctx: &AppContext) {
    let mut session_panel = SessionPanel::new(&ctx.session, padding_rows(ctx.menu()));
    let mut menu_panel = MenuPanel::new(ctx.menu());

    let panel_height = session_panel.height().max(menu_panel.height());
    let shell_area = centered(area, SHELL_WIDTH, panel_height + 2);

    let outer = rounded_block(APP_NAME, ACCENT);
    let inner = outer.inner(shell_area);
    frame.render_widget(outer, shell_area);

    let [session_area, menu_area] = Layout::horizontal([
        Constraint::Length(SESSION_PANEL_WIDTH),
        Constraint::Length(MENU_PANEL_WIDTH),
    ])
    .flex(Flex::Center)
    .areas(inner);

    session_panel.render(frame, session_area);
    menu_panel.render(frame, menu_area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let hint = Paragraph::new(FOOTER_HINT)
        .style(Style::default().fg(MUTED))
        .alignment(Alignment::Center);
    frame.render_widget(hint, area);
}

/// A "not implemented" style message: first line highlighted, the rest muted.
fn draw_notice(frame: &mut Frame, lines: &[&str]) {
    let text: Vec<Line> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let style = if i == 0 {
                Style::default().fg(SECONDARY).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED)
            };
            Line::styled(line.to_string(), style)
        })
        .collect();
    draw_centered_text(frame, text);
}

fn draw_prompt(frame: &mut Frame, question: &str, default: bool) {
    let line = Line::from(vec![
        Span::styled(
            question.to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(prompt_hint(default), Style::default().fg(MUTED)),
    ]);
    draw_centered_text(frame, vec![line]);
}

fn draw_centered_text(frame: &mut Frame, text: Vec<Line>) {
    let [area] = Layout::vertical([Constraint::Length(text.len() as u16)])
        .flex(Flex::Center)
        .areas(frame.area());
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

/// A `width` × `height` rect centered in `outer`, shrunk to fit if needed.
fn centered(outer: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(outer);
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    area
}
