use chrono::{DateTime, Utc};

use agemark_core::config::AgeBasis;
use agemark_core::constants::{DAYS_PER_MONTH, DAYS_PER_YEAR, SECS_PER_DAY};
use agemark_core::models::{AgeFacts, ContentItem};

/// Select the instant that anchors age computation.
///
/// `None` means the basis timestamp is absent and classification must
/// be skipped entirely (the item is treated as not applicable).
pub fn reference_time(item: &ContentItem, basis: AgeBasis) -> Option<DateTime<Utc>> {
    match basis {
        AgeBasis::Modified => item.modified,
        AgeBasis::Published => item.published,
    }
}

/// Compute age facts from a reference instant and one "now" reading.
///
/// Future reference timestamps clamp to zero days. Months and years use
/// flat 30/365-day divisors; existing templates depend on these exact
/// values, so calendar-accurate math is deliberately not used.
pub fn compute_age(reference: DateTime<Utc>, now: DateTime<Utc>) -> AgeFacts {
    let age_days = ((now - reference).num_seconds().max(0) / SECS_PER_DAY) as u64;
    AgeFacts {
        reference,
        age_days,
        age_months: age_days / DAYS_PER_MONTH,
        age_years: age_days / DAYS_PER_YEAR,
    }
}
