//! Headless DOM for the calculator widget
//!
//! Just enough document model to host `calc-button` elements, route clicks
//! into bubbling custom events and observe what the widget renders.

use std::collections::HashMap;
use thiserror::Error;
use tracing::trace;

/// DOM failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// A custom element tag was registered twice
    #[error("custom element already defined: {0}")]
    AlreadyDefined(String),
    /// No element with this ID is registered
    #[error("element not found: #{0}")]
    ElementNotFound(String),
}

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// Represents a DOM element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
    /// Vertical scroll offset, in rows
    pub scroll_top: usize,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
            scroll_top: 0,
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Collects this element and its descendants, depth-first
    pub fn descendants(&self) -> Vec<&DomElement> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.descendants());
        }
        out
    }
}

/// A bubbling custom event raised by a custom element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomEvent {
    /// Event name
    pub name: String,
    /// String payload
    pub detail: String,
    /// Whether the event bubbles to ancestors
    pub bubbles: bool,
}

impl CustomEvent {
    /// Creates a bubbling custom event
    #[must_use]
    pub fn bubbling(name: &str, detail: &str) -> Self {
        Self {
            name: name.to_string(),
            detail: detail.to_string(),
            bubbles: true,
        }
    }
}

/// DOM events that can be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Key press event
    KeyPress {
        /// The key that was pressed
        key: String,
    },
    /// Custom event raised by a custom element
    Custom {
        /// The ID of the element that raised it
        target: String,
        /// The event itself
        event: CustomEvent,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a key press event
    #[must_use]
    pub fn key_press(key: &str) -> Self {
        Self::KeyPress {
            key: key.to_string(),
        }
    }
}

/// Click behaviour attached to a custom element tag
pub type ClickBehavior = fn(&DomElement) -> Option<CustomEvent>;

/// Headless document
#[derive(Debug)]
pub struct MockDom {
    root: DomElement,
    /// Child-index path from the root for every element with an ID
    elements: HashMap<String, Vec<usize>>,
    /// Custom element registry
    definitions: HashMap<String, ClickBehavior>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates an empty document
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: DomElement::new("div").with_id("root"),
            elements: HashMap::new(),
            definitions: HashMap::new(),
            event_history: Vec::new(),
        }
    }

    /// Registers a custom element tag. Each tag can be defined once.
    pub fn define(&mut self, tag: &str, behavior: ClickBehavior) -> DomResult<()> {
        if self.definitions.contains_key(tag) {
            return Err(DomError::AlreadyDefined(tag.to_string()));
        }
        trace!(tag, "custom element defined");
        self.definitions.insert(tag.to_string(), behavior);
        Ok(())
    }

    /// Returns true if `tag` has been defined
    #[must_use]
    pub fn is_defined(&self, tag: &str) -> bool {
        self.definitions.contains_key(tag)
    }

    /// Root of the document tree
    ///
    /// The tree is the single copy of every element, so it always reflects
    /// text and scroll updates made through the ID accessors.
    #[must_use]
    pub fn root(&self) -> &DomElement {
        &self.root
    }

    /// Replaces the root and indexes every element with an ID beneath it
    pub fn mount(&mut self, root: DomElement) {
        self.elements.clear();
        index_ids(&root, &mut Vec::new(), &mut self.elements);
        self.root = root;
    }

    /// Appends an element under the root and indexes its IDs
    pub fn register_element(&mut self, element: DomElement) {
        let mut path = vec![self.root.children.len()];
        index_ids(&element, &mut path, &mut self.elements);
        self.root.children.push(element);
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        let path = self.elements.get(id)?;
        path.iter()
            .try_fold(&self.root, |node, &index| node.children.get(index))
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        let path = self.elements.get(id)?;
        path.iter()
            .try_fold(&mut self.root, |node, &index| node.children.get_mut(index))
    }

    /// Returns the number of registered elements
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Clicks an element.
    ///
    /// If the element's tag is a defined custom element, its behaviour runs and
    /// the custom event it raises (if any) is recorded and returned.
    pub fn click(&mut self, id: &str) -> DomResult<Option<CustomEvent>> {
        let element = self
            .get_element(id)
            .ok_or_else(|| DomError::ElementNotFound(id.to_string()))?;
        let raised = self
            .definitions
            .get(&element.tag)
            .and_then(|behavior| behavior(element));

        self.event_history.push(DomEvent::click(id));
        if let Some(event) = &raised {
            trace!(element = id, name = %event.name, detail = %event.detail, "custom event");
            self.event_history.push(DomEvent::Custom {
                target: id.to_string(),
                event: event.clone(),
            });
        }
        Ok(raised)
    }

    /// Records a key press
    pub fn key_press(&mut self, key: &str) {
        self.event_history.push(DomEvent::key_press(key));
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.get_element_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.get_element(id).map(|e| e.text_content.as_str())
    }
}

fn index_ids(
    element: &DomElement,
    path: &mut Vec<usize>,
    index: &mut HashMap<String, Vec<usize>>,
) {
    if !element.id.is_empty() {
        index.insert(element.id.clone(), path.clone());
    }
    for (i, child) in element.children.iter().enumerate() {
        path.push(i);
        index_ids(child, path, index);
        path.pop();
    }
}
