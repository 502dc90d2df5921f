//! # Core Shell Logic
//!
//! This module contains SoloForge's menu shell.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Session (settings)   │
//!                    │  • Menu (key bindings)  │
//!                    │  • dispatch() / Shell   │
//!                    │                         │
//!                    │  Talks to a Surface.    │
//!                    └───────────┬─────────────┘
//!                                │ Surface trait
//!                    ┌───────────┴─────────────┐
//!                    ▼                         ▼
//!             ┌────────────┐            ┌────────────┐
//!             │    TUI     │            │   Tests    │
//!             │  Adapter   │            │ (scripted  │
//!             │ (ratatui)  │            │  surface)  │
//!             └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`session`]: The `Session` struct: engine, theme, chaos
//! - [`menu`]: The `Menu` model and key lookup
//! - [`action`]: The `Action` enum and `dispatch()`
//! - [`shell`]: The Running/Terminated loop
//! - [`surface`]: The four screen primitives the shell needs
//! - [`context`]: `AppContext`, handed to every action
//! - [`config`]: Startup configuration
//! - [`error`]: `ShellError`

pub mod action;
pub mod config;
pub mod context;
pub mod error;
pub mod menu;
pub mod session;
pub mod shell;
pub mod surface;
