//! In-memory page and store used by the unit tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::rc::Rc;

use crate::dom::Page;
use crate::error::UiError;
use crate::storage::PreferenceStore;

#[derive(Debug, Default, Clone)]
struct FakeElement {
    text: String,
    attributes: BTreeMap<String, String>,
}

#[derive(Debug, Default)]
struct FakeDom {
    elements: HashMap<String, FakeElement>,
    root_classes: BTreeSet<String>,
    writes: usize,
}

/// Shared handle; clones see the same document.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    dom: Rc<RefCell<FakeDom>>,
}

impl MemoryPage {
    pub fn with_elements(ids: &[&str]) -> Self {
        let page = Self::default();
        for id in ids {
            page.add_element(id, "");
        }
        page
    }

    pub fn add_element(&self, id: &str, text: &str) {
        self.dom.borrow_mut().elements.insert(
            id.to_string(),
            FakeElement {
                text: text.to_string(),
                attributes: BTreeMap::new(),
            },
        );
    }

    pub fn text(&self, id: &str) -> Option<String> {
        self.dom.borrow().elements.get(id).map(|e| e.text.clone())
    }

    pub fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.dom
            .borrow()
            .elements
            .get(id)
            .and_then(|e| e.attributes.get(name).cloned())
    }

    pub fn has_root_class(&self, class: &str) -> bool {
        self.dom.borrow().root_classes.contains(class)
    }

    /// Number of successful mutations so far.
    pub fn writes(&self) -> usize {
        self.dom.borrow().writes
    }
}

impl Page for MemoryPage {
    fn has_element(&self, id: &str) -> bool {
        self.dom.borrow().elements.contains_key(id)
    }

    fn set_text(&self, id: &str, text: &str) -> Result<(), UiError> {
        let mut dom = self.dom.borrow_mut();
        let element = dom
            .elements
            .get_mut(id)
            .ok_or_else(|| UiError::MissingElement(id.to_string()))?;
        element.text = text.to_string();
        dom.writes += 1;
        Ok(())
    }

    fn set_attribute(&self, id: &str, name: &str, value: &str) -> Result<(), UiError> {
        let mut dom = self.dom.borrow_mut();
        let element = dom
            .elements
            .get_mut(id)
            .ok_or_else(|| UiError::MissingElement(id.to_string()))?;
        element
            .attributes
            .insert(name.to_string(), value.to_string());
        dom.writes += 1;
        Ok(())
    }

    fn set_root_class(&self, class: &str, present: bool) -> Result<(), UiError> {
        let mut dom = self.dom.borrow_mut();
        if present {
            dom.root_classes.insert(class.to_string());
        } else {
            dom.root_classes.remove(class);
        }
        dom.writes += 1;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct FakeStorage {
    items: HashMap<String, String>,
    unavailable: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<FakeStorage>>,
}

impl MemoryStore {
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .inner
            .borrow_mut()
            .items
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Every call fails, like a browser that blocks storage.
    pub fn unavailable() -> Self {
        let store = Self::default();
        store.inner.borrow_mut().unavailable = true;
        store
    }

    pub fn item(&self, key: &str) -> Option<String> {
        self.inner.borrow().items.get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, UiError> {
        let inner = self.inner.borrow();
        if inner.unavailable {
            return Err(UiError::StorageUnavailable("blocked".to_string()));
        }
        Ok(inner.items.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        let mut inner = self.inner.borrow_mut();
        if inner.unavailable {
            return Err(UiError::StorageUnavailable("blocked".to_string()));
        }
        inner.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
