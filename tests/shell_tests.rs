use std::collections::VecDeque;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use soloforge::core::context::AppContext;
use soloforge::core::error::ShellError;
use soloforge::core::shell::{Shell, ShellState};
use soloforge::core::surface::{KeyPress, Surface, View};
use soloforge::tui::terminal::TerminalSurface;
use soloforge::tui::ui::FOOTER_HINT;

// ============================================================================
// Helper Functions
// ============================================================================

type TestSurface = TerminalSurface<TestBackend, VecDeque<KeyPress>>;

/// Creates an 80x30 in-memory terminal that replays `keys`.
fn create_surface(keys: &[KeyPress]) -> TestSurface {
    let terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    TerminalSurface::new(terminal, keys.iter().copied().collect())
}

/// The visible screen, one string per row.
fn screen_lines(surface: &TestSurface) -> Vec<String> {
    let buffer = surface.backend().buffer();
    buffer
        .content()
        .chunks(usize::from(buffer.area.width))
        .map(|row| row.iter().map(|c| c.symbol()).collect())
        .collect()
}

/// The text between the first pair of `│` borders after `start`.
fn cell_text(line: &str, start: usize) -> String {
    line.chars()
        .skip(start)
        .skip_while(|c| *c != '│')
        .skip(1)
        .take_while(|c| *c != '│')
        .collect::<String>()
        .trim()
        .to_string()
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_fresh_session_end_to_end_frame() {
    let ctx = AppContext::default();
    let mut surface = create_surface(&[]);
    surface.draw(View::Shell(&ctx)).unwrap();
    let lines = screen_lines(&surface);

    let first_row = lines.iter().position(|l| l.contains("Engine")).unwrap();
    assert!(lines[first_row].contains("Mythic 2e"));
    assert!(lines[first_row + 1].contains("Theme") && lines[first_row + 1].contains("Fantasy"));
    assert!(lines[first_row + 2].contains("Chaos") && lines[first_row + 2].contains('5'));

    // Session panel: five blank padding rows, then the bottom border
    let session_column = lines[first_row].chars().position(|c| c == '│').unwrap() + 1;
    for offset in 3..8 {
        let row = &lines[first_row + offset];
        assert!(cell_text(row, session_column).is_empty(), "row {offset}: {row}");
    }
    assert!(lines[first_row + 8].contains('╰'));

    // Menu panel, same rows
    let menu: Vec<&String> = lines[first_row..first_row + 8].iter().collect();
    assert!(menu[0].contains("1. [F] Fate Check"));
    assert!(menu[1].contains("2. [R] Random Event"));
    assert!(menu[2].contains("3. [N] NPC Generator"));
    assert!(menu[3].contains("4. [D] Dice Roller"));
    assert!(menu[4].contains("5. [L] Lists"));
    assert!(menu[5].contains(&"-".repeat(28)));
    assert!(menu[6].contains("   [S] Settings"));
    assert!(menu[7].contains("   [Q] Quit"));

    assert!(lines.iter().any(|l| l.contains(FOOTER_HINT)));
}

#[test]
fn test_rendering_twice_is_identical() {
    let ctx = AppContext::default();
    let mut surface = create_surface(&[]);
    surface.draw(View::Shell(&ctx)).unwrap();
    let first = surface.backend().buffer().clone();
    surface.clear().unwrap();
    surface.draw(View::Shell(&ctx)).unwrap();
    assert_eq!(&first, surface.backend().buffer());
}

// ============================================================================
// Application Loop
// ============================================================================

#[test]
fn test_confirmed_quit_terminates() {
    let mut ctx = AppContext::default();
    let mut surface = create_surface(&[KeyPress::Char('q'), KeyPress::Char('y')]);
    let mut shell = Shell::new();
    shell.run(&mut ctx, &mut surface).unwrap();
    assert_eq!(shell.state(), ShellState::Terminated);
}

#[test]
fn test_declined_quit_returns_to_menu() {
    let mut ctx = AppContext::default();
    let mut surface = create_surface(&[KeyPress::Char('Q'), KeyPress::Enter]);
    let mut shell = Shell::new();
    assert_eq!(shell.step(&mut ctx, &mut surface).unwrap(), ShellState::Running);

    // The loop redraws the menu on the next step, then runs out of keys
    let err = shell.step(&mut ctx, &mut surface).unwrap_err();
    assert!(matches!(err, ShellError::Terminal(_)));
    assert!(screen_lines(&surface).iter().any(|l| l.contains("Main Menu")));
    assert_eq!(shell.state(), ShellState::Running);
}

#[test]
fn test_placeholder_then_quit() {
    let mut ctx = AppContext::default();
    let mut surface = create_surface(&[
        KeyPress::Char('n'),
        KeyPress::Char(' '),
        KeyPress::Char('z'),
        KeyPress::Char('q'),
        KeyPress::Char('Y'),
    ]);
    let mut shell = Shell::new();

    assert_eq!(shell.step(&mut ctx, &mut surface).unwrap(), ShellState::Running);
    assert!(
        screen_lines(&surface)
            .iter()
            .any(|l| l.contains("NPC Generator is not implemented yet..."))
    );

    assert_eq!(shell.step(&mut ctx, &mut surface).unwrap(), ShellState::Running);
    assert_eq!(shell.step(&mut ctx, &mut surface).unwrap(), ShellState::Terminated);
    assert!(
        screen_lines(&surface)
            .iter()
            .any(|l| l.contains("Are you sure you want to quit?"))
    );
}
