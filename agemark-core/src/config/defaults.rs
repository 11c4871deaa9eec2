//! Default config values merged under user-supplied settings.

/// Default warn label template (modified-basis wording).
pub const LABEL_WARN: &str = "Outdated content notice: this article was last \
updated {age_months} month(s) ago and may be outdated.";

/// Default danger label template (modified-basis wording).
pub const LABEL_DANGER: &str = "Outdated content warning: this article was \
last updated {age_years} year(s) ago and is likely outdated.";

/// Content types annotated when the platform doesn't restrict them further.
pub const ALLOWED_TYPES: [&str; 2] = ["post", "page"];

// Light palette.
pub const WARN_BG: &str = "#fff8e1";
pub const WARN_BORDER: &str = "#ffcc80";
pub const WARN_TEXT: &str = "#3b2f00";
pub const DANGER_BG: &str = "#ffebee";
pub const DANGER_BORDER: &str = "#ef9a9a";
pub const DANGER_TEXT: &str = "#7a1f24";

// Dark palette.
pub const WARN_BG_DARK: &str = "#3b2f00";
pub const WARN_BORDER_DARK: &str = "#855f1a";
pub const WARN_TEXT_DARK: &str = "#ffe8b3";
pub const DANGER_BG_DARK: &str = "#3a0c0f";
pub const DANGER_BORDER_DARK: &str = "#7a1f24";
pub const DANGER_TEXT_DARK: &str = "#ffffff";
