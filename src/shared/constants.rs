// DOM contract defaults
pub const DEFAULT_CONTROL_ID: &str = "menu";
pub const DEFAULT_PANEL_CLASS: &str = "sidebar";
pub const DEFAULT_TRIGGER_SELECTOR: &str = "a";
pub const DEFAULT_MARKER_CLASS: &str = "clicked";

// Inline `style.display` values written to the panel
pub const DISPLAY_PROPERTY: &str = "display";
pub const DISPLAY_BLOCK: &str = "block";
pub const DISPLAY_NONE: &str = "none";
