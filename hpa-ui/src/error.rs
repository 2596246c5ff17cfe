use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum UiError {
    #[error("Element not found: {0}")]
    MissingElement(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Best-effort message for a thrown JS value.
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{value:?}")
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
