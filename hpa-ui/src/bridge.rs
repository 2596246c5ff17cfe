//! Display update bridge: stateless setters the host calls whenever the title
//! version or a legend changes. Absent elements are skipped, never reported.

use hpa_shared_types::{DisplayValue, LegendField, LegendUpdate, TitleVersion};

use crate::config::UiConfig;
use crate::dom::Page;

pub struct DisplayBridge<P> {
    page: P,
    config: UiConfig,
}

impl<P: Page> DisplayBridge<P> {
    pub fn new(page: P, config: UiConfig) -> Self {
        Self { page, config }
    }

    /// Returns `true` when the title was written.
    pub fn render_title_version(&self, version: Option<&str>) -> bool {
        let id = &self.config.title_id;
        let version = TitleVersion::new(version);
        if !version.is_renderable() {
            return false;
        }
        if !self.page.has_element(id) {
            log::debug!("Title element '{}' not found, skipping", id);
            return false;
        }

        let value = version.as_str().unwrap_or_default();
        let text = version.render(&self.config.title_prefix).unwrap_or_default();
        if let Err(e) = self
            .page
            .set_attribute(id, &self.config.version_attribute, value)
        {
            log::debug!("Failed to record title version: {}", e);
            return false;
        }
        if let Err(e) = self.page.set_text(id, &text) {
            log::debug!("Failed to set title text: {}", e);
            return false;
        }
        true
    }

    /// Write each value into `<prefix>_min`, `<prefix>_max` and
    /// `<prefix>_current`. Returns the fields that were actually written.
    pub fn update_legend(
        &self,
        legend_prefix: &str,
        min: &DisplayValue,
        max: &DisplayValue,
        current: &DisplayValue,
    ) -> Vec<LegendField> {
        self.apply_legend(&LegendUpdate::new(
            legend_prefix,
            min.clone(),
            max.clone(),
            current.clone(),
        ))
    }

    pub fn apply_legend(&self, update: &LegendUpdate) -> Vec<LegendField> {
        let mut written = Vec::with_capacity(LegendField::ALL.len());
        for field in LegendField::ALL {
            let id = field.element_id(&update.prefix);
            match self.page.set_text(&id, &update.value(field).to_string()) {
                Ok(()) => written.push(field),
                Err(e) => log::debug!("Skipping legend field: {}", e),
            }
        }
        written
    }
}
