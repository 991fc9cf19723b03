//! Structured logging module for the sidebar menu
//!
//! Provides consistent, contextual logging for initialization and toggling.
//! Uses structured `tracing` fields so native runs can filter by operation.

use crate::domain::MenuState;

/// Operations that emit log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Init,
    Lookup,
    Toggle,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Init => "init",
            LogOperation::Lookup => "lookup",
            LogOperation::Toggle => "toggle",
        }
    }
}

/// Log initialization start
pub fn log_init_start(control_id: &str, panel_class: &str) {
    tracing::debug!(
        operation = LogOperation::Init.as_str(),
        control_id = control_id,
        panel_class = panel_class,
        "Initializing sidebar menu"
    );
}

/// Log initialization success
pub fn log_init_success(control_id: &str, trigger_selector: &str) {
    tracing::info!(
        operation = LogOperation::Init.as_str(),
        control_id = control_id,
        trigger_selector = trigger_selector,
        "Sidebar menu listener attached"
    );
}

/// Log a lookup that found nothing
pub fn log_lookup_missing(element: &str) {
    tracing::error!(
        operation = LogOperation::Lookup.as_str(),
        element = element,
        "Required element not found"
    );
}

/// Log a state transition
pub fn log_toggle(from: MenuState, to: MenuState) {
    tracing::debug!(
        operation = LogOperation::Toggle.as_str(),
        from = from.as_str(),
        to = to.as_str(),
        "Sidebar toggled"
    );
}
