//! Shared types between the HPA demo page script and its host
//!
//! These types are used by both:
//! - the wasm page script (`hpa-ui`)
//! - whatever host drives the page's title and legend values
//!
//! Serializable with serde so a host can hand them over as JSON.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ============================================================================
// Theme
// ============================================================================

/// Visual theme of the page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../../hpa-ui/bindings/generated.ts")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Mode used when no preference has ever been stored.
    pub const DEFAULT: ThemeMode = ThemeMode::Dark;

    /// Resolve the persisted preference. Only the literal `"true"` means dark;
    /// an absent key falls back to [`ThemeMode::DEFAULT`].
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            None => Self::DEFAULT,
            Some(v) => Self::from(v == "true"),
        }
    }

    /// String form written to the preference store.
    pub fn as_stored(self) -> &'static str {
        if self.is_dark() {
            "true"
        } else {
            "false"
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<bool> for ThemeMode {
    fn from(is_dark: bool) -> Self {
        if is_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

// ============================================================================
// Display values
// ============================================================================

/// Opaque value written into a display element.
///
/// Untagged so a host can send `"42"`, `42` or `null` interchangeably.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(untagged)]
#[ts(export, export_to = "../../hpa-ui/bindings/generated.ts")]
pub enum DisplayValue {
    Text(String),
    Number(f64),
    Empty,
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(n) => fmt_number(*n, f),
            Self::Empty => Ok(()),
        }
    }
}

// ECMAScript Number::toString: shortest round-trip digits, positional
// notation for exponents in [-7, 21), scientific otherwise.
fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        return f.write_str("NaN");
    }
    if n == 0.0 {
        return f.write_str("0");
    }
    if n < 0.0 {
        f.write_str("-")?;
    }
    if n.is_infinite() {
        return f.write_str("Infinity");
    }

    let sci = format!("{:e}", n.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let point = exponent + 1;

    if k <= point && point <= 21 {
        write!(f, "{digits}{}", "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        write!(f, "{int}.{frac}")
    } else if -6 < point && point <= 0 {
        write!(f, "0.{}{digits}", "0".repeat((-point) as usize))
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            write!(f, "{first}e{sign}{}", exponent.abs())
        } else {
            write!(f, "{first}.{rest}e{sign}{}", exponent.abs())
        }
    }
}

impl From<&str> for DisplayValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DisplayValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for DisplayValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl<T: Into<DisplayValue>> From<Option<T>> for DisplayValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Empty)
    }
}

// ============================================================================
// Legend
// ============================================================================

/// One of the three display slots of a metric legend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../../hpa-ui/bindings/generated.ts")]
pub enum LegendField {
    Min,
    Max,
    Current,
}

impl LegendField {
    pub const ALL: [LegendField; 3] = [LegendField::Min, LegendField::Max, LegendField::Current];

    pub fn suffix(self) -> &'static str {
        match self {
            Self::Min => "_min",
            Self::Max => "_max",
            Self::Current => "_current",
        }
    }

    /// Element id for this slot under a legend prefix, e.g. `cpu_max`.
    pub fn element_id(self, prefix: &str) -> String {
        format!("{prefix}{}", self.suffix())
    }
}

/// A full legend refresh for one metric
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../hpa-ui/bindings/generated.ts")]
pub struct LegendUpdate {
    /// Prefix the three element ids are derived from
    pub prefix: String,
    #[serde(default = "empty_value")]
    pub min: DisplayValue,
    #[serde(default = "empty_value")]
    pub max: DisplayValue,
    #[serde(default = "empty_value")]
    pub current: DisplayValue,
}

fn empty_value() -> DisplayValue {
    DisplayValue::Empty
}

impl LegendUpdate {
    pub fn new(
        prefix: impl Into<String>,
        min: impl Into<DisplayValue>,
        max: impl Into<DisplayValue>,
        current: impl Into<DisplayValue>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            min: min.into(),
            max: max.into(),
            current: current.into(),
        }
    }

    pub fn value(&self, field: LegendField) -> &DisplayValue {
        match field {
            LegendField::Min => &self.min,
            LegendField::Max => &self.max,
            LegendField::Current => &self.current,
        }
    }
}

// ============================================================================
// Title
// ============================================================================

/// Version string handed over by the host for the page title
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../hpa-ui/bindings/generated.ts")]
pub struct TitleVersion(pub Option<String>);

impl TitleVersion {
    pub fn new(version: Option<&str>) -> Self {
        Self(version.map(str::to_string))
    }

    /// Empty or absent versions leave the title untouched.
    pub fn is_renderable(&self) -> bool {
        self.as_str().is_some()
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref().filter(|v| !v.is_empty())
    }

    /// Title text for `template_prefix`, or `None` when there is nothing to render.
    pub fn render(&self, template_prefix: &str) -> Option<String> {
        self.as_str().map(|v| format!("{template_prefix}{v}"))
    }
}

// ============================================================================
// Tests
// ============================================================================
