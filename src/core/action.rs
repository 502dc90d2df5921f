//! # Actions
//!
//! Every menu entry binds one `Action`. Pressing its key runs it through
//! [`perform`], which returns whether the shell should keep running.
//!
//! ```text
//! key  →  dispatch()  →  Menu::find()  →  perform()  →  keep running?
//! ```
//!
//! Only `Quit` can answer `false`, and only after the user confirms.
//! The feature actions are placeholders until their real screens exist.
//! A failing action reports `ShellError::Action` instead of stopping the shell.

use log::{debug, info};

use crate::core::context::AppContext;
use crate::core::error::ShellError;
use crate::core::surface::{KeyPress, Surface, View};

pub const QUIT_QUESTION: &str = "Are you sure you want to quit?";
pub const PRESS_ANY_KEY: &str = "Press any key to continue...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    FateCheck,
    RandomEvent,
    NpcGenerator,
    DiceRoller,
    Lists,
    Settings,
    Quit,
}

impl Action {
    pub fn name(self) -> &'static str {
        match self {
            Action::FateCheck => "Fate Check",
            Action::RandomEvent => "Random Event",
            Action::NpcGenerator => "NPC Generator",
            Action::DiceRoller => "Dice Roller",
            Action::Lists => "Lists",
            Action::Settings => "Settings",
            Action::Quit => "Quit",
        }
    }
}

/// Routes one keystroke to its menu action. Keys with no binding are ignored
/// and the shell keeps running.
pub fn dispatch<S: Surface + ?Sized>(
    key: KeyPress,
    ctx: &mut AppContext,
    surface: &mut S,
) -> Result<bool, ShellError> {
    debug!("Key pressed: {:?}", key);

    let Some(hotkey) = key.hotkey() else {
        return Ok(true);
    };
    let Some(action) = ctx.menu().find(hotkey).map(|item| item.action) else {
        debug!("No menu entry for {:?}, ignoring", hotkey);
        return Ok(true);
    };

    perform(action, ctx, surface)
}

/// Runs `action`. `Ok(false)` asks the shell to stop.
pub fn perform<S: Surface + ?Sized>(
    action: Action,
    ctx: &mut AppContext,
    surface: &mut S,
) -> Result<bool, ShellError> {
    info!("Performing {:?}", action);
    debug!("Session: {:?}", ctx.session);

    match action {
        Action::Quit => confirm_quit(surface),
        Action::FateCheck
        | Action::RandomEvent
        | Action::NpcGenerator
        | Action::DiceRoller
        | Action::Lists
        | Action::Settings => not_implemented(action, surface),
    }
}

fn confirm_quit<S: Surface + ?Sized>(surface: &mut S) -> Result<bool, ShellError> {
    let confirmed = surface.confirm(QUIT_QUESTION, false)?;
    info!("Quit confirmed: {}", confirmed);
    Ok(!confirmed)
}

fn not_implemented<S: Surface + ?Sized>(
    action: Action,
    surface: &mut S,
) -> Result<bool, ShellError> {
    let message = format!("{} is not implemented yet...", action.name());
    surface.clear()?;
    surface.draw(View::Notice(&[message.as_str(), PRESS_ANY_KEY]))?;
    surface.read_key()?;
    Ok(true)
}
