//! Theme preference controller.
//!
//! Owns the dark/light flag for the session. The page and the preference
//! store only receive side effects; after any public call the body class and
//! the button label agree with [`ThemeController::mode`].

use hpa_shared_types::ThemeMode;

use crate::config::UiConfig;
use crate::dom::Page;
use crate::storage::PreferenceStore;

pub struct ThemeController<P, S> {
    page: P,
    store: S,
    config: UiConfig,
    mode: ThemeMode,
}

impl<P: Page, S: PreferenceStore> ThemeController<P, S> {
    /// Does not touch the page until [`initialize`](Self::initialize).
    pub fn new(page: P, store: S, config: UiConfig) -> Self {
        Self {
            page,
            store,
            config,
            mode: ThemeMode::DEFAULT,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Load the persisted preference and apply it. A missing key stays
    /// missing; only [`toggle`](Self::toggle) writes to the store.
    pub fn initialize(&mut self) -> ThemeMode {
        let stored = match self.store.get(&self.config.storage_key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Theme preference unreadable, using default: {}", e);
                None
            }
        };

        self.mode = ThemeMode::from_stored(stored.as_deref());
        log::debug!(
            "Theme initialized: {:?} (stored={:?})",
            self.mode,
            stored.as_deref()
        );
        self.apply();
        self.mode
    }

    /// Apply `mode` without consulting the store, e.g. when the controller is
    /// rebuilt mid-session.
    pub fn restore(&mut self, mode: ThemeMode) -> ThemeMode {
        self.mode = mode;
        self.apply();
        self.mode
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();

        if let Err(e) = self
            .store
            .set(&self.config.storage_key, self.mode.as_stored())
        {
            log::warn!("Failed to persist theme preference: {}", e);
        }

        self.apply();
        self.mode
    }

    /// Set the toggle button text for `is_dark`. No-op without a button.
    pub fn update_button_label(&self, is_dark: bool) {
        let label = self.config.toggle_label(is_dark);
        if let Err(e) = self.page.set_text(&self.config.toggle_button_id, label) {
            log::debug!("Skipping toggle label update: {}", e);
        }
    }

    fn apply(&self) {
        let is_dark = self.mode.is_dark();
        if let Err(e) = self.page.set_root_class(&self.config.dark_class, is_dark) {
            log::debug!("Skipping theme marker update: {}", e);
        }
        self.update_button_label(is_dark);
    }
}
