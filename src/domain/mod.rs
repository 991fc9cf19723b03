pub mod menu_state;
pub mod selector;

// Re-export for convenience
pub use menu_state::{Display, MenuState};
pub use selector::{Compound, Selector};
