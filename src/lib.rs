// Public API exports (shared between browser and native builds)
pub mod domain;
pub mod shared;
pub mod config;
pub mod app;
pub mod infrastructure;

pub use app::MenuToggle;
pub use config::MenuConfig;
pub use domain::{Display, MenuState};
pub use shared::errors::{MenuError, Result};

#[cfg(target_arch = "wasm32")]
pub use infrastructure::web_dom::{init_menu, init_menu_with_config};
