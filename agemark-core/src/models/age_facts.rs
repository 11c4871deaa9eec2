use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Computed age of a content item. Never persisted; recomputed per
/// evaluation from the reference instant and a single "now" reading.
///
/// Months and years are flat-divisor approximations (30-day months,
/// 365-day years), not calendar arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeFacts {
    /// The instant age was measured from (publish or modified, per basis).
    pub reference: DateTime<Utc>,
    pub age_days: u64,
    pub age_months: u64,
    pub age_years: u64,
}
