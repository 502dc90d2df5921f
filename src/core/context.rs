//! # Application Context
//!
//! The composition root handed to every action.
//!
//! ```text
//! AppContext
//! ├── session: Session   // mutable, read by the session panel
//! └── menu: Menu         // fixed after construction
//! ```

use log::warn;

use crate::core::config::ResolvedConfig;
use crate::core::menu::Menu;
use crate::core::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    pub session: Session,
    menu: Menu,
}

impl AppContext {
    pub fn new(session: Session, menu: Menu) -> Self {
        for conflict in menu.conflicts() {
            warn!(
                "Menu key {:?} is bound to both {:?} and {:?}; the first one wins",
                conflict.key, conflict.first, conflict.second
            );
        }
        Self { session, menu }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.session(), Menu::main_menu())
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(Session::new(), Menu::main_menu())
    }
}
