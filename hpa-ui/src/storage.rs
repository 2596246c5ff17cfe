use web_sys::Storage;

use crate::error::{js_error_message, UiError};

/// Durable, origin-scoped key-value store for the theme preference.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, UiError>;
    fn set(&self, key: &str, value: &str) -> Result<(), UiError>;
}

/// [`PreferenceStore`] over `window.localStorage`.
///
/// The storage handle is looked up on every call; browsers may refuse it
/// (private mode, sandboxed iframes) and that should not poison the page.
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<Storage, UiError> {
        let window = web_sys::window()
            .ok_or_else(|| UiError::StorageUnavailable("no global `window`".to_string()))?;
        window
            .local_storage()
            .map_err(|e| UiError::StorageUnavailable(js_error_message(&e)))?
            .ok_or_else(|| UiError::StorageUnavailable("localStorage is null".to_string()))
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, UiError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| UiError::StorageUnavailable(js_error_message(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| UiError::StorageUnavailable(js_error_message(&e)))
    }
}
