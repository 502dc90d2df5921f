//! # Application Loop
//!
//! A two-state machine driving render → read → dispatch.
//!
//! ```text
//!            dispatch() == true
//!              ┌─────────┐
//!              ▼         │
//!          ┌─────────┐   │    dispatch() == false    ┌────────────┐
//!  start → │ Running │───┴──────────────────────────▶│ Terminated │
//!          └─────────┘                               └────────────┘
//! ```
//!
//! `Terminated` is absorbing. The only way in is the quit action returning
//! `false` after the user confirms.

use log::{info, warn};

use crate::core::action;
use crate::core::context::AppContext;
use crate::core::error::ShellError;
use crate::core::surface::{Surface, View};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShellState {
    #[default]
    Running,
    Terminated,
}

#[derive(Debug, Default)]
pub struct Shell {
    state: ShellState,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ShellState::Running
    }

    /// The single transition: a `false` dispatch result terminates.
    pub fn advance(&mut self, keep_running: bool) -> ShellState {
        if !keep_running && self.state == ShellState::Running {
            info!("Shell terminating");
            self.state = ShellState::Terminated;
        }
        self.state
    }

    /// One loop iteration: clear, render, wait for a key, dispatch it.
    ///
    /// Action failures are logged and the shell keeps running. Surface
    /// failures are returned to the caller.
    pub fn step<S: Surface + ?Sized>(
        &mut self,
        ctx: &mut AppContext,
        surface: &mut S,
    ) -> Result<ShellState, ShellError> {
        if !self.is_running() {
            return Ok(self.state);
        }

        surface.clear()?;
        surface.draw(View::Shell(ctx))?;
        let key = surface.read_key()?;

        let keep_running = match action::dispatch(key, ctx, surface) {
            Ok(keep_running) => keep_running,
            Err(e) if !e.is_fatal() => {
                warn!("{}", e);
                true
            }
            Err(e) => return Err(e),
        };

        Ok(self.advance(keep_running))
    }

    /// Steps until the shell terminates.
    pub fn run<S: Surface + ?Sized>(
        &mut self,
        ctx: &mut AppContext,
        surface: &mut S,
    ) -> Result<(), ShellError> {
        while self.is_running() {
            self.step(ctx, surface)?;
        }
        Ok(())
    }
}
