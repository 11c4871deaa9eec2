/// Agemark system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Seconds per day, used for age computation.
pub const SECS_PER_DAY: i64 = 86_400;

/// Flat month divisor for age approximation (not calendar-aware).
///
/// Existing label templates were authored against this approximation,
/// so it must stay exactly 30.
pub const DAYS_PER_MONTH: u64 = 30;

/// Flat year divisor for age approximation (not calendar-aware).
pub const DAYS_PER_YEAR: u64 = 365;

/// Default warn threshold in months.
pub const DEFAULT_WARN_MONTHS: u32 = 12;

/// Default danger threshold in months.
pub const DEFAULT_DANGER_MONTHS: u32 = 36;

/// Replacement for color values that fail hex validation.
pub const FALLBACK_COLOR: &str = "#cccccc";

/// Value of the `{company}` label token.
pub const COMPANY_NAME: &str = "Agemark";

/// JSON-LD context for annotation records.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// `creativeWorkStatus` value marking annotated items.
pub const OUTDATED_WORK_STATUS: &str = "Outdated";

/// schema.org types accepted for structured data output.
pub const ALLOWED_RECORD_TYPES: [&str; 4] = ["Article", "BlogPosting", "NewsArticle", "WebPage"];

/// Fallback primary type when no valid structured data type survives validation.
pub const DEFAULT_RECORD_TYPE: &str = "Article";

// Label tokens. This set is a compatibility contract with existing
// templates; keys include the braces and are substituted literally.
pub const TOKEN_AGE_DAYS: &str = "{age_days}";
pub const TOKEN_AGE_MONTHS: &str = "{age_months}";
pub const TOKEN_AGE_YEARS: &str = "{age_years}";
pub const TOKEN_PUBLISHED_DATE: &str = "{published_date}";
pub const TOKEN_COMPANY: &str = "{company}";
