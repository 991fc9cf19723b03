//! In-memory DOM used by tests and the native simulator
//!
//! Only what the menu touches is modelled: tag, id, class list, inline
//! `display`, children and click listeners. Clicks run the element's own
//! listeners; there is no bubbling. Nodes have no parent link, so descendant
//! selectors only see ancestors from the queried element downwards.

use std::cell::RefCell;
use std::rc::Rc;

use crate::app::menu_toggle::{HostDocument, HostElement};
use crate::domain::{Compound, Display, Selector};
use crate::shared::errors::Result;

struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    display: Option<String>,
    children: Vec<MemoryElement>,
    listeners: Vec<Box<dyn FnMut()>>,
}

/// Shared handle to an in-memory element. Clones point at the same node.
#[derive(Clone)]
pub struct MemoryElement(Rc<RefCell<Node>>);

impl MemoryElement {
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(Node {
            tag: tag.to_lowercase(),
            id: None,
            classes: Vec::new(),
            display: None,
            children: Vec::new(),
            listeners: Vec::new(),
        })))
    }

    pub fn with_id(self, id: &str) -> Self {
        self.0.borrow_mut().id = Some(id.to_string());
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn append_child(&self, child: &MemoryElement) {
        self.0.borrow_mut().children.push(child.clone());
    }

    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    pub fn id(&self) -> Option<String> {
        self.0.borrow().id.clone()
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    /// Inline `display` value, `None` while unset
    pub fn display(&self) -> Option<String> {
        self.0.borrow().display.clone()
    }

    pub fn listener_count(&self) -> usize {
        self.0.borrow().listeners.len()
    }

    /// Dispatch a click to this element's listeners
    pub fn click(&self) {
        // Listeners may mutate this node, so they run outside the borrow.
        let mut listeners = std::mem::take(&mut self.0.borrow_mut().listeners);
        for listener in listeners.iter_mut() {
            listener();
        }
        let mut node = self.0.borrow_mut();
        listeners.append(&mut node.listeners);
        node.listeners = listeners;
    }

    fn matches(&self, compound: &Compound) -> bool {
        let node = self.0.borrow();
        compound.matches(&node.tag, node.id.as_deref(), &node.classes)
    }

    /// Subject matches, and the ancestor compounds match the path in order
    fn matches_path(&self, selector: &Selector, path: &[MemoryElement]) -> bool {
        if !self.matches(selector.subject()) {
            return false;
        }
        let mut remaining = path.iter().rev();
        selector
            .ancestors()
            .iter()
            .rev()
            .all(|compound| remaining.any(|ancestor| ancestor.matches(compound)))
    }

    fn find_by_selector(
        &self,
        selector: &Selector,
        path: &mut Vec<MemoryElement>,
    ) -> Option<MemoryElement> {
        path.push(self.clone());
        let children = self.0.borrow().children.clone();
        let mut found = None;
        for child in children {
            if child.matches_path(selector, path) {
                found = Some(child);
                break;
            }
            if let Some(hit) = child.find_by_selector(selector, path) {
                found = Some(hit);
                break;
            }
        }
        path.pop();
        found
    }

    /// Depth-first search over descendants, in document order
    fn find_descendant(&self, predicate: &dyn Fn(&MemoryElement) -> bool) -> Option<MemoryElement> {
        let children = self.0.borrow().children.clone();
        for child in children {
            if predicate(&child) {
                return Some(child);
            }
            if let Some(found) = child.find_descendant(predicate) {
                return Some(found);
            }
        }
        None
    }
}

impl HostElement for MemoryElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn add_class(&self, class: &str) {
        if !self.has_class(class) {
            self.0.borrow_mut().classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|c| c != class);
    }

    fn set_display(&self, display: Display) {
        self.0.borrow_mut().display = Some(display.as_css().to_string());
    }

    fn query_selector(&self, selector: &str) -> Result<Option<Self>> {
        let selector = Selector::parse(selector)?;
        Ok(self.find_by_selector(&selector, &mut Vec::new()))
    }

    fn on_click(&self, handler: Box<dyn FnMut()>) -> Result<()> {
        self.0.borrow_mut().listeners.push(handler);
        Ok(())
    }
}

/// Document rooted at a `body` element
#[derive(Clone)]
pub struct MemoryDocument {
    body: MemoryElement,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self {
            body: MemoryElement::new("body"),
        }
    }

    pub fn body(&self) -> &MemoryElement {
        &self.body
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl HostDocument for MemoryDocument {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.body
            .find_descendant(&|el: &MemoryElement| el.0.borrow().id.as_deref() == Some(id))
    }

    fn first_by_class(&self, class: &str) -> Option<MemoryElement> {
        self.body.find_descendant(&|el: &MemoryElement| el.has_class(class))
    }
}
