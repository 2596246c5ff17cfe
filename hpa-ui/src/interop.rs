//! JS surface of the page script.
//!
//! Globals: `toggleDarkMode()`, `isDarkMode()`, `configure(json)`, and the
//! free `renderTitleVersion` / `updateLegend` functions. Hosts that prefer an
//! explicit handle construct `new HpaDisplay()` and call the same operations
//! as methods.

use std::cell::{Cell, RefCell};

use hpa_shared_types::{DisplayValue, LegendUpdate, ThemeMode};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::bridge::DisplayBridge;
use crate::config::UiConfig;
use crate::dom::WebPage;
use crate::error::UiError;
use crate::storage::LocalStorageStore;
use crate::theme::ThemeController;

type WebThemeController = ThemeController<WebPage, LocalStorageStore>;

thread_local! {
    static CONFIG: RefCell<UiConfig> = RefCell::new(UiConfig::default());
    static THEME: RefCell<Option<WebThemeController>> = RefCell::new(None);
    static CLICK_BOUND: Cell<bool> = Cell::new(false);
}

fn current_config() -> UiConfig {
    CONFIG.with(|config| config.borrow().clone())
}

#[wasm_bindgen(start)]
pub fn start() {
    wasm_logger::init(wasm_logger::Config::default());
    on_dom_ready(|| {
        initialize_page();
        bind_toggle_click();
    });
}

/// Run `f` once the document structure is available.
fn on_dom_ready<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available, page script idle");
        return;
    };

    if document.ready_state() != "loading" {
        f();
        return;
    }

    let mut pending = Some(f);
    let callback = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        if let Some(f) = pending.take() {
            f();
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    if let Err(e) = document
        .add_event_listener_with_callback("DOMContentLoaded", callback.as_ref().unchecked_ref())
    {
        log::warn!("Failed to listen for DOMContentLoaded: {:?}", e);
        return;
    }

    // Fires once per page load.
    callback.forget();
}

fn initialize_page() {
    let page = match WebPage::current() {
        Ok(page) => page,
        Err(e) => {
            log::warn!("Theme controller not started: {}", e);
            return;
        }
    };

    let mut theme = ThemeController::new(page, LocalStorageStore::new(), current_config());
    theme.initialize();
    THEME.with(|slot| *slot.borrow_mut() = Some(theme));
}

/// Rebuild the running controller under the current config, keeping the
/// in-session mode instead of re-reading storage.
fn rebuild_theme(mode: ThemeMode) {
    let page = match WebPage::current() {
        Ok(page) => page,
        Err(e) => {
            log::warn!("Theme controller not rebuilt: {}", e);
            return;
        }
    };

    let mut theme = ThemeController::new(page, LocalStorageStore::new(), current_config());
    theme.restore(mode);
    THEME.with(|slot| *slot.borrow_mut() = Some(theme));
}

fn bind_toggle_click() {
    let config = current_config();
    if !config.bind_toggle_click || CLICK_BOUND.with(Cell::get) {
        return;
    }
    let page = match WebPage::current() {
        Ok(page) => page,
        Err(e) => {
            log::warn!("Toggle button not bound: {}", e);
            return;
        }
    };

    match page.on_click(&config.toggle_button_id, toggle_dark_mode) {
        Ok(()) => CLICK_BOUND.with(|bound| bound.set(true)),
        Err(e) => log::debug!("Toggle button not bound: {}", e),
    }
}

/// Run `f` on the page's controller, starting it first if the host got here
/// before DOMContentLoaded.
fn with_theme<R>(f: impl FnOnce(&mut WebThemeController) -> R) -> Option<R> {
    if THEME.with(|slot| slot.borrow().is_none()) {
        log::debug!("Theme controller used before page load, initializing now");
        initialize_page();
    }
    THEME.with(|slot| slot.borrow_mut().as_mut().map(f))
}

#[wasm_bindgen(js_name = toggleDarkMode)]
pub fn toggle_dark_mode() {
    with_theme(|theme| {
        theme.toggle();
    });
}

#[wasm_bindgen(js_name = isDarkMode)]
pub fn is_dark_mode() -> bool {
    with_theme(|theme| theme.is_dark()).unwrap_or(ThemeMode::DEFAULT.is_dark())
}

/// Replace the page configuration. Keys that are left out keep their
/// defaults. A controller that is already running is rebuilt and re-applied
/// with its current mode.
#[wasm_bindgen]
pub fn configure(json: &str) -> Result<(), JsValue> {
    let config = UiConfig::from_json(json)?;
    CONFIG.with(|slot| *slot.borrow_mut() = config);

    let running = THEME.with(|slot| slot.borrow().as_ref().map(|theme| theme.mode()));
    if let Some(mode) = running {
        rebuild_theme(mode);
        bind_toggle_click();
    }
    Ok(())
}

#[wasm_bindgen(js_name = renderTitleVersion)]
pub fn render_title_version(version: JsValue) {
    if let Ok(display) = HpaDisplay::new() {
        display.render_title_version(version);
    }
}

#[wasm_bindgen(js_name = updateLegend)]
pub fn update_legend(legend_prefix: &str, min: JsValue, max: JsValue, current: JsValue) {
    if let Ok(display) = HpaDisplay::new() {
        display.update_legend(legend_prefix, min, max, current);
    }
}

/// Explicit handle on the display bridge for the host.
#[wasm_bindgen]
pub struct HpaDisplay {
    bridge: DisplayBridge<WebPage>,
}

#[wasm_bindgen]
impl HpaDisplay {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<HpaDisplay, JsValue> {
        let page = WebPage::current()?;
        Ok(Self {
            bridge: DisplayBridge::new(page, current_config()),
        })
    }

    #[wasm_bindgen(js_name = renderTitleVersion)]
    pub fn render_title_version(&self, version: JsValue) -> bool {
        self.bridge
            .render_title_version(title_version(&version).as_deref())
    }

    /// Returns how many of the three fields were written.
    #[wasm_bindgen(js_name = updateLegend)]
    pub fn update_legend(
        &self,
        legend_prefix: &str,
        min: JsValue,
        max: JsValue,
        current: JsValue,
    ) -> usize {
        self.bridge
            .update_legend(
                legend_prefix,
                &display_value(&min),
                &display_value(&max),
                &display_value(&current),
            )
            .len()
    }

    /// Apply a JSON-encoded `LegendUpdate`; throws only on malformed JSON.
    #[wasm_bindgen(js_name = applyLegendJson)]
    pub fn apply_legend_json(&self, json: &str) -> Result<usize, JsValue> {
        let update: LegendUpdate = serde_json::from_str(json)
            .map_err(|e| UiError::Config(format!("invalid legend update: {e}")))?;
        Ok(self.bridge.apply_legend(&update).len())
    }
}

/// Convert an arbitrary JS value to what the page would show for it.
pub fn display_value(value: &JsValue) -> DisplayValue {
    if value.is_null() || value.is_undefined() {
        return DisplayValue::Empty;
    }
    if let Some(text) = value.as_string() {
        return DisplayValue::Text(text);
    }
    if let Some(n) = value.as_f64() {
        return DisplayValue::Number(n);
    }
    if let Some(flag) = value.as_bool() {
        return DisplayValue::Text(flag.to_string());
    }
    DisplayValue::Text(String::from(
        value.unchecked_ref::<js_sys::Object>().to_string(),
    ))
}

/// Version text for any JS value; falsy values (`undefined`, `null`, `""`,
/// `0`, `false`, `NaN`) leave the title alone.
pub fn title_version(value: &JsValue) -> Option<String> {
    if !value.is_truthy() {
        return None;
    }
    Some(display_value(value).to_string())
}
