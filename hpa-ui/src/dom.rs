//! Port to the document the script writes into.
//!
//! Everything the controller and the bridge do to the page goes through
//! [`Page`], so both can run against an in-memory page in tests.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::error::{js_error_message, UiError};

pub trait Page {
    fn has_element(&self, id: &str) -> bool;

    /// Replace the text content of the element with `id`.
    fn set_text(&self, id: &str, text: &str) -> Result<(), UiError>;

    fn set_attribute(&self, id: &str, name: &str, value: &str) -> Result<(), UiError>;

    /// Add or remove a class on the page root (`<body>`).
    fn set_root_class(&self, class: &str, present: bool) -> Result<(), UiError>;
}

/// [`Page`] backed by the live browser document.
#[derive(Debug, Clone)]
pub struct WebPage {
    document: Document,
}

impl WebPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn current() -> Result<Self, UiError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| UiError::Dom("no document on window".to_string()))?;
        Ok(Self::new(document))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn element(&self, id: &str) -> Result<Element, UiError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| UiError::MissingElement(id.to_string()))
    }

    /// Run `handler` on every click of the element with `id`. The listener
    /// lives as long as the page.
    pub fn on_click<F>(&self, id: &str, mut handler: F) -> Result<(), UiError>
    where
        F: FnMut() + 'static,
    {
        let element = self.element(id)?;
        let callback = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            handler();
        }) as Box<dyn FnMut(web_sys::Event)>);

        element
            .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
            .map_err(|e| UiError::Dom(js_error_message(&e)))?;

        callback.forget();
        Ok(())
    }
}

impl Page for WebPage {
    fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn set_text(&self, id: &str, text: &str) -> Result<(), UiError> {
        self.element(id)?.set_text_content(Some(text));
        Ok(())
    }

    fn set_attribute(&self, id: &str, name: &str, value: &str) -> Result<(), UiError> {
        self.element(id)?
            .set_attribute(name, value)
            .map_err(|e| UiError::Dom(js_error_message(&e)))
    }

    fn set_root_class(&self, class: &str, present: bool) -> Result<(), UiError> {
        let body = self
            .document
            .body()
            .ok_or_else(|| UiError::MissingElement("body".to_string()))?;
        body.class_list()
            .toggle_with_force(class, present)
            .map(|_| ())
            .map_err(|e| UiError::Dom(js_error_message(&e)))
    }
}
