//! Page script for the HPA demo: dark/light theme toggle plus the display
//! bridge the host uses to push the title version and legend values.

pub mod bridge;
pub mod config;
pub mod dom;
pub mod error;
pub mod interop;
pub mod storage;
pub mod theme;

#[cfg(test)]
mod testing;

pub use bridge::DisplayBridge;
pub use config::UiConfig;
pub use dom::{Page, WebPage};
pub use error::UiError;
pub use storage::{LocalStorageStore, PreferenceStore};
pub use theme::ThemeController;
