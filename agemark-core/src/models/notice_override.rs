use serde::{Deserialize, Serialize};

/// Per-item override data. Zero or one per content item.
///
/// All fields have an explicit "unset" encoding so a missing override
/// and an empty one behave identically.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeOverride {
    /// Forced state, or `None` when unset.
    pub state: StateOverride,
    /// Replacement warn threshold in months. 0 means unset.
    /// The danger threshold can never be overridden.
    pub threshold_months: u32,
    /// Replacement label template. Empty means unset.
    pub label: String,
}

/// Per-item state override. `None` encodes absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum StateOverride {
    #[default]
    None,
    /// Suppress the notice entirely regardless of age.
    Hide,
    Warn,
    Danger,
}

impl StateOverride {
    /// Parse a stored override value. Unknown values act as unset.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "hide" => Self::Hide,
            "warn" => Self::Warn,
            "danger" => Self::Danger,
            _ => Self::None,
        }
    }
}

impl From<String> for StateOverride {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}
