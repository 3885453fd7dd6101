//! Seam between the controllers and the page.
//!
//! Controllers only talk to [`Element`] handles. [`MemoryElement`] keeps the
//! state in process; a browser binding implements the same trait over real
//! nodes.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use crate::error::{UiError, UiResult};

pub trait Element: Send + Sync {
    fn id(&self) -> &str;
    /// Form control name; unnamed elements are never submitted
    fn name(&self) -> Option<&str>;
    /// Options of a `<select>`, empty for everything else
    fn options(&self) -> &[String];

    fn value(&self) -> String;
    fn set_value(&self, value: &str);

    fn text(&self) -> String;
    fn set_text(&self, text: &str);

    fn is_visible(&self) -> bool;
    fn set_visible(&self, visible: bool);

    fn is_required(&self) -> bool;
    fn set_required(&self, required: bool);

    fn is_disabled(&self) -> bool;
    fn set_disabled(&self, disabled: bool);

    /// Rendered rows of a suggestion list
    fn rows(&self) -> Vec<String>;
    fn set_rows(&self, rows: Vec<String>);
}

pub type ElementRef = Arc<dyn Element>;

#[derive(Debug, Clone, Default)]
struct ElementState {
    value: String,
    text: String,
    visible: bool,
    required: bool,
    disabled: bool,
    rows: Vec<String>,
}

#[derive(Debug)]
pub struct MemoryElement {
    id: String,
    name: Option<String>,
    options: Vec<String>,
    state: RwLock<ElementState>,
}

impl MemoryElement {
    fn build(id: &str, name: Option<&str>, visible: bool) -> Self {
        Self {
            id: id.to_string(),
            name: name.map(str::to_string),
            options: Vec::new(),
            state: RwLock::new(ElementState {
                visible,
                ..ElementState::default()
            }),
        }
    }

    pub fn input(id: &str, name: &str) -> Self {
        Self::build(id, Some(name), true)
    }

    pub fn hidden(id: &str, name: &str) -> Self {
        Self::build(id, Some(name), false)
    }

    /// `<select>` starting on its first option
    pub fn select(id: &str, name: &str, options: &[&str]) -> Self {
        let mut element = Self::build(id, Some(name), true);
        element.options = options.iter().map(|o| o.to_string()).collect();
        if let Some(first) = element.options.first() {
            element.write().value = first.clone();
        }
        element
    }

    /// Unnamed block element such as a wrapper `<div>`
    pub fn block(id: &str) -> Self {
        Self::build(id, None, true)
    }

    /// Block that starts hidden: suggestion lists, spinners, alerts
    pub fn hidden_block(id: &str) -> Self {
        Self::build(id, None, false)
    }

    pub fn button(id: &str, label: &str) -> Self {
        let element = Self::build(id, None, true);
        element.write().text = label.to_string();
        element
    }

    pub fn with_value(self, value: &str) -> Self {
        self.write().value = value.to_string();
        self
    }

    fn read(&self) -> RwLockReadGuard<'_, ElementState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ElementState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Element for MemoryElement {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn options(&self) -> &[String] {
        &self.options
    }

    fn value(&self) -> String {
        self.read().value.clone()
    }

    fn set_value(&self, value: &str) {
        self.write().value = value.to_string();
    }

    fn text(&self) -> String {
        self.read().text.clone()
    }

    fn set_text(&self, text: &str) {
        self.write().text = text.to_string();
    }

    fn is_visible(&self) -> bool {
        self.read().visible
    }

    fn set_visible(&self, visible: bool) {
        self.write().visible = visible;
    }

    fn is_required(&self) -> bool {
        self.read().required
    }

    fn set_required(&self, required: bool) {
        self.write().required = required;
    }

    fn is_disabled(&self) -> bool {
        self.read().disabled
    }

    fn set_disabled(&self, disabled: bool) {
        self.write().disabled = disabled;
    }

    fn rows(&self) -> Vec<String> {
        self.read().rows.clone()
    }

    fn set_rows(&self, rows: Vec<String>) {
        self.write().rows = rows;
    }
}

/// Elements of one page, by id
#[derive(Clone, Default)]
pub struct Document {
    elements: HashMap<String, ElementRef>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, element: ElementRef) -> ElementRef {
        self.elements.insert(element.id().to_string(), element.clone());
        element
    }

    pub fn add(&mut self, element: MemoryElement) -> ElementRef {
        self.insert(Arc::new(element))
    }

    pub fn get(&self, id: &str) -> UiResult<ElementRef> {
        self.elements
            .get(id)
            .cloned()
            .ok_or_else(|| UiError::MissingElement(id.to_string()))
    }
}

/// A click, described by the ids on the path from the target up to the root
#[derive(Debug, Clone, Default)]
pub struct ClickEvent {
    pub path: Vec<String>,
    /// Index of the suggestion row hit, when the target is a row
    pub row: Option<usize>,
}

impl ClickEvent {
    pub fn on(path: &[&str]) -> Self {
        Self {
            path: path.iter().map(|id| id.to_string()).collect(),
            row: None,
        }
    }

    pub fn on_row(path: &[&str], row: usize) -> Self {
        Self {
            row: Some(row),
            ..Self::on(path)
        }
    }

    pub fn passes_through(&self, id: &str) -> bool {
        self.path.iter().any(|p| p == id)
    }
}

/// Fired whenever the page is shown, including restores from the history cache
#[derive(Debug, Clone, Copy, Default)]
pub struct PageShowEvent {
    /// True when the page came back from the back/forward cache
    pub persisted: bool,
}
