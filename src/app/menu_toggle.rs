//! Sidebar menu toggle component
//!
//! Wires a click on the menu control's trigger to showing or hiding the
//! sidebar panel. The open/closed state lives in the DOM as the marker class
//! on the control, so the component itself holds no mutable state and can be
//! cloned freely into event handlers.

use crate::config::MenuConfig;
use crate::domain::{Display, MenuState};
use crate::shared::errors::{MenuError, Result};
use crate::shared::logging::{log_init_start, log_init_success, log_lookup_missing, log_toggle};

/// Element operations the menu needs from its host
pub trait HostElement: Clone + 'static {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);

    /// Set the inline `style.display` value
    fn set_display(&self, display: Display);

    /// First descendant matching `selector`. A selector the host can't parse
    /// is an `InvalidConfig` error, not a miss.
    fn query_selector(&self, selector: &str) -> Result<Option<Self>>;

    /// Register a click listener for the rest of the page session
    fn on_click(&self, handler: Box<dyn FnMut()>) -> Result<()>;
}

/// Document-level lookups used during initialization
pub trait HostDocument {
    type Element: HostElement;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// First element in document order carrying `class`
    fn first_by_class(&self, class: &str) -> Option<Self::Element>;
}

#[derive(Clone)]
pub struct MenuToggle<E: HostElement> {
    control: E,
    panel: E,
    marker_class: String,
}

impl<E: HostElement> MenuToggle<E> {
    /// Build a toggle from elements the caller already holds. No listener is attached.
    pub fn new(control: E, panel: E, config: &MenuConfig) -> Self {
        Self {
            control,
            panel,
            marker_class: config.marker_class.clone(),
        }
    }

    /// Locate the control, panel and trigger, then attach one click listener.
    ///
    /// Every lookup happens before the listener is registered, so a failed
    /// call leaves the document untouched.
    pub fn attach<D>(document: &D, config: &MenuConfig) -> Result<Self>
    where
        D: HostDocument<Element = E>,
    {
        config.validate()?;
        log_init_start(&config.control_id, &config.panel_class);

        let control = document
            .element_by_id(&config.control_id)
            .ok_or_else(|| missing(config.control_selector()))?;
        let panel = document
            .first_by_class(&config.panel_class)
            .ok_or_else(|| missing(config.panel_selector()))?;
        let trigger = control
            .query_selector(&config.trigger_selector)?
            .ok_or_else(|| missing(config.trigger_path()))?;

        let menu = Self::new(control, panel, config);
        menu.listen(&trigger)?;

        log_init_success(&config.control_id, &config.trigger_selector);
        Ok(menu)
    }

    /// Attach the toggle to clicks on `trigger`
    pub fn listen(&self, trigger: &E) -> Result<()> {
        let menu = self.clone();
        trigger.on_click(Box::new(move || {
            menu.toggle_visibility();
        }))
    }

    pub fn state(&self) -> MenuState {
        MenuState::from_marker(self.control.has_class(&self.marker_class))
    }

    /// Flip between open and closed, returning the new state
    pub fn toggle_visibility(&self) -> MenuState {
        let current = self.state();
        match current {
            MenuState::Open => self.hide(),
            MenuState::Closed => self.show(),
        }
        let next = current.toggled();
        log_toggle(current, next);
        next
    }

    pub fn show(&self) {
        self.control.add_class(&self.marker_class);
        self.panel.set_display(MenuState::Open.display());
    }

    pub fn hide(&self) {
        self.control.remove_class(&self.marker_class);
        self.panel.set_display(MenuState::Closed.display());
    }

    pub fn control(&self) -> &E {
        &self.control
    }

    pub fn panel(&self) -> &E {
        &self.panel
    }
}

fn missing(element: String) -> MenuError {
    log_lookup_missing(&element);
    MenuError::MissingElement(element)
}
