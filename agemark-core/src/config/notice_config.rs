use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::{
    ALLOWED_RECORD_TYPES, DEFAULT_DANGER_MONTHS, DEFAULT_RECORD_TYPE, DEFAULT_WARN_MONTHS,
    FALLBACK_COLOR,
};
use crate::errors::AgemarkResult;
use crate::markup;

/// Which timestamp anchors age computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeBasis {
    #[default]
    Modified,
    Published,
}

impl AgeBasis {
    /// Parse a stored basis value. Unknown values fall back to `Modified`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "published" => Self::Published,
            _ => Self::Modified,
        }
    }
}

/// Raw, untrusted settings as supplied by the platform's storage.
///
/// Every field is optional; `NoticeConfig::validate` merges this over
/// defaults and never fails. Unknown fields are ignored by serde.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawNoticeConfig {
    pub enabled: Option<bool>,
    pub age_basis: Option<String>,
    pub warn_months: Option<u32>,
    pub danger_months: Option<u32>,
    pub label_warn: Option<String>,
    pub label_danger: Option<String>,
    pub allowed_types: Option<Vec<String>>,
    pub structured_data_enabled: Option<bool>,
    pub structured_data_types: Option<Vec<String>>,
    pub css_enabled: Option<bool>,
    pub theme_styling: Option<bool>,
    pub colors: Option<ColorScheme>,
}

impl RawNoticeConfig {
    /// Parse raw config from TOML text. The parse itself is the only
    /// fallible step; validation afterwards always succeeds.
    pub fn from_toml_str(text: &str) -> AgemarkResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Parse raw config from a JSON value.
    pub fn from_json_value(value: serde_json::Value) -> AgemarkResult<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Validated installation-wide settings.
///
/// Invariants held by construction: `warn_months >= 1`,
/// `danger_months > warn_months`, `structured_data_types` non-empty,
/// labels restricted to the markup whitelist, colors valid hex.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoticeConfig {
    pub enabled: bool,
    pub age_basis: AgeBasis,
    pub warn_months: u32,
    pub danger_months: u32,
    pub label_warn: String,
    pub label_danger: String,
    /// Content types that receive notices. May be empty.
    pub allowed_types: Vec<String>,
    pub structured_data_enabled: bool,
    /// First entry is the primary type, the rest are secondary.
    pub structured_data_types: Vec<String>,
    /// Presentation toggles, passed through untouched for the caller.
    pub css_enabled: bool,
    pub theme_styling: bool,
    pub colors: ColorScheme,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            age_basis: AgeBasis::Modified,
            warn_months: DEFAULT_WARN_MONTHS,
            danger_months: DEFAULT_DANGER_MONTHS,
            label_warn: defaults::LABEL_WARN.to_string(),
            label_danger: defaults::LABEL_DANGER.to_string(),
            allowed_types: defaults::ALLOWED_TYPES.iter().map(ToString::to_string).collect(),
            structured_data_enabled: true,
            structured_data_types: vec![DEFAULT_RECORD_TYPE.to_string()],
            css_enabled: true,
            theme_styling: true,
            colors: ColorScheme::default(),
        }
    }
}

impl NoticeConfig {
    /// Merge raw settings over defaults and enforce every invariant.
    ///
    /// Fails softly: malformed values are clamped or replaced, never
    /// surfaced as errors. `known_types` is the platform's set of
    /// public content types; requested types outside it are dropped.
    pub fn validate(raw: RawNoticeConfig, known_types: &[String]) -> Self {
        let d = Self::default();

        // Warn is capped one below the numeric ceiling so danger can
        // always sit strictly above it.
        let warn_months = raw.warn_months.unwrap_or(d.warn_months).clamp(1, u32::MAX - 1);
        let danger_months = raw
            .danger_months
            .unwrap_or(d.danger_months)
            .max(warn_months + 1);

        let allowed_types =
            intersect_types(raw.allowed_types.unwrap_or_else(|| d.allowed_types.clone()), known_types);

        let structured_data_types =
            whitelist_record_types(raw.structured_data_types.unwrap_or_else(|| d.structured_data_types.clone()));

        Self {
            enabled: raw.enabled.unwrap_or(d.enabled),
            age_basis: raw
                .age_basis
                .as_deref()
                .map(AgeBasis::parse)
                .unwrap_or(d.age_basis),
            warn_months,
            danger_months,
            label_warn: markup::sanitize(&raw.label_warn.unwrap_or(d.label_warn)),
            label_danger: markup::sanitize(&raw.label_danger.unwrap_or(d.label_danger)),
            allowed_types,
            structured_data_enabled: raw.structured_data_enabled.unwrap_or(d.structured_data_enabled),
            structured_data_types,
            css_enabled: raw.css_enabled.unwrap_or(d.css_enabled),
            theme_styling: raw.theme_styling.unwrap_or(d.theme_styling),
            colors: raw.colors.unwrap_or(d.colors).sanitized(),
        }
    }
}

/// Notice colors, light and dark palettes.
///
/// Pure presentation; the engine never reads these, but they travel
/// with the config so one validation pass covers everything stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    pub warn_bg: String,
    pub warn_border: String,
    pub warn_text: String,
    pub danger_bg: String,
    pub danger_border: String,
    pub danger_text: String,
    pub warn_bg_dark: String,
    pub warn_border_dark: String,
    pub warn_text_dark: String,
    pub danger_bg_dark: String,
    pub danger_border_dark: String,
    pub danger_text_dark: String,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            warn_bg: defaults::WARN_BG.to_string(),
            warn_border: defaults::WARN_BORDER.to_string(),
            warn_text: defaults::WARN_TEXT.to_string(),
            danger_bg: defaults::DANGER_BG.to_string(),
            danger_border: defaults::DANGER_BORDER.to_string(),
            danger_text: defaults::DANGER_TEXT.to_string(),
            warn_bg_dark: defaults::WARN_BG_DARK.to_string(),
            warn_border_dark: defaults::WARN_BORDER_DARK.to_string(),
            warn_text_dark: defaults::WARN_TEXT_DARK.to_string(),
            danger_bg_dark: defaults::DANGER_BG_DARK.to_string(),
            danger_border_dark: defaults::DANGER_BORDER_DARK.to_string(),
            danger_text_dark: defaults::DANGER_TEXT_DARK.to_string(),
        }
    }
}

impl ColorScheme {
    /// Replace every value that isn't a `#rgb`/`#rrggbb` color.
    pub fn sanitized(self) -> Self {
        Self {
            warn_bg: sanitize_color(self.warn_bg),
            warn_border: sanitize_color(self.warn_border),
            warn_text: sanitize_color(self.warn_text),
            danger_bg: sanitize_color(self.danger_bg),
            danger_border: sanitize_color(self.danger_border),
            danger_text: sanitize_color(self.danger_text),
            warn_bg_dark: sanitize_color(self.warn_bg_dark),
            warn_border_dark: sanitize_color(self.warn_border_dark),
            warn_text_dark: sanitize_color(self.warn_text_dark),
            danger_bg_dark: sanitize_color(self.danger_bg_dark),
            danger_border_dark: sanitize_color(self.danger_border_dark),
            danger_text_dark: sanitize_color(self.danger_text_dark),
        }
    }
}

/// Keep only requested types the platform actually knows, deduplicated
/// in order of first appearance.
fn intersect_types(requested: Vec<String>, known: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    requested
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .filter(|t| known.iter().any(|k| k == t))
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

/// Keep only recognized schema.org types; fall back to the default
/// primary type when nothing valid remains.
fn whitelist_record_types(requested: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out: Vec<String> = requested
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| ALLOWED_RECORD_TYPES.contains(&t.as_str()))
        .filter(|t| seen.insert(t.clone()))
        .collect();
    if out.is_empty() {
        out.push(DEFAULT_RECORD_TYPE.to_string());
    }
    out
}

/// Validate a hex color, replacing anything else with the neutral fallback.
fn sanitize_color(color: String) -> String {
    let trimmed = color.trim();
    let hex_ok = trimmed.starts_with('#')
        && matches!(trimmed.len(), 4 | 7)
        && trimmed[1..].chars().all(|c| c.is_ascii_hexdigit());
    if hex_ok {
        trimmed.to_string()
    } else {
        FALLBACK_COLOR.to_string()
    }
}
