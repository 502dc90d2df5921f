//! # TUI Components
//!
//! The pieces of the main shell frame. All three are stateless: they take
//! their data as props borrowed from `AppContext` and render it.
//!
//! - `TitleBanner`: the application name in block letters
//! - `SessionPanel`: engine / theme / chaos table, padded to the menu's height
//! - `MenuPanel`: one line per menu entry, with separators
//!
//! Each file keeps its rendering logic, its pure helpers (line building,
//! padding math) and its tests together.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_banner.rs   (Title region)
//! ├── session_panel.rs  (Left panel)
//! └── menu_panel.rs     (Right panel)
//! ```

pub mod menu_panel;
pub mod session_panel;
pub mod title_banner;

pub use menu_panel::MenuPanel;
pub use session_panel::SessionPanel;
pub use title_banner::TitleBanner;
