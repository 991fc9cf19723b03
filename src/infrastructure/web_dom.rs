//! Browser bindings for the sidebar menu (WASM only)
//!
//! The page calls `init_menu()` once from its startup code. Failures are
//! logged to the console and reported as `false`, so the rest of the page
//! keeps running when the menu markup is absent.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::app::menu_toggle::{HostDocument, HostElement, MenuToggle};
use crate::config::MenuConfig;
use crate::domain::Display;
use crate::shared::constants::DISPLAY_PROPERTY;
use crate::shared::errors::{MenuError, Result};

#[derive(Clone)]
pub struct WebElement(web_sys::Element);

impl HostElement for WebElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        if let Err(e) = self.0.class_list().add_1(class) {
            tracing::warn!("Failed to add class {}: {:?}", class, e);
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(e) = self.0.class_list().remove_1(class) {
            tracing::warn!("Failed to remove class {}: {:?}", class, e);
        }
    }

    fn set_display(&self, display: Display) {
        match self.0.dyn_ref::<web_sys::HtmlElement>() {
            Some(html) => {
                if let Err(e) = html.style().set_property(DISPLAY_PROPERTY, display.as_css()) {
                    tracing::warn!("Failed to set display: {:?}", e);
                }
            }
            None => tracing::warn!("Panel is not an HTML element, display unchanged"),
        }
    }

    fn query_selector(&self, selector: &str) -> Result<Option<Self>> {
        self.0
            .query_selector(selector)
            .map(|found| found.map(WebElement))
            .map_err(|e| {
                MenuError::InvalidConfig(format!("trigger_selector {:?}: {:?}", selector, e))
            })
    }

    fn on_click(&self, handler: Box<dyn FnMut()>) -> Result<()> {
        let callback = Closure::wrap(handler);
        self.0
            .add_event_listener_with_callback_and_bool(
                "click",
                callback.as_ref().unchecked_ref(),
                false,
            )
            .map_err(|e| MenuError::ListenerFailed(format!("{:?}", e)))?;
        // Listener lives for the page session
        callback.forget();
        Ok(())
    }
}

pub struct WebDocument(web_sys::Document);

impl WebDocument {
    /// Document of the current window
    pub fn current() -> Result<Self> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(WebDocument)
            .ok_or_else(|| MenuError::MissingElement("document".to_string()))
    }
}

impl HostDocument for WebDocument {
    type Element = WebElement;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.0.get_element_by_id(id).map(WebElement)
    }

    fn first_by_class(&self, class: &str) -> Option<WebElement> {
        self.0.get_elements_by_class_name(class).item(0).map(WebElement)
    }
}

/// Attach the menu to the current page
pub fn attach_to_page(config: &MenuConfig) -> Result<MenuToggle<WebElement>> {
    let document = WebDocument::current()?;
    MenuToggle::attach(&document, config)
}

/// Initialize the sidebar menu with the default element names
#[wasm_bindgen]
pub fn init_menu() -> bool {
    report(attach_to_page(&MenuConfig::default()))
}

/// Initialize the sidebar menu from a (possibly partial) JSON configuration
#[wasm_bindgen]
pub fn init_menu_with_config(json: &str) -> bool {
    report(MenuConfig::from_json(json).and_then(|config| attach_to_page(&config)))
}

fn report(result: Result<MenuToggle<WebElement>>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            web_sys::console::error_1(&format!("[WASM] Sidebar menu disabled: {}", e).into());
            false
        }
    }
}
