pub mod menu_toggle;

pub use menu_toggle::{HostDocument, HostElement, MenuToggle};
