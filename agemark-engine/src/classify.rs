use agemark_core::config::NoticeConfig;
use agemark_core::models::{AgeFacts, ContentItem, NoticeOverride, NoticeState, StateOverride};

/// What an external policy hook gets to see when adjusting a state.
///
/// This hook is the only place a caller may inject custom business
/// rules without modifying the classifier.
pub struct PolicyInput<'a> {
    pub item: &'a ContentItem,
    pub age_months: u64,
    /// Warn threshold after any per-item override was applied.
    pub warn_months: u32,
    pub danger_months: u32,
}

/// External state adjustment: `(baseline state, context) -> state`.
pub type PolicyHook<'a> = &'a dyn Fn(NoticeState, &PolicyInput<'_>) -> NoticeState;

/// The warn boundary for this item: the per-item threshold override if
/// set (> 0), else the configured warn threshold. The danger boundary
/// is never overridable.
pub fn effective_warn_months(config: &NoticeConfig, item_override: &NoticeOverride) -> u32 {
    if item_override.threshold_months > 0 {
        item_override.threshold_months
    } else {
        config.warn_months
    }
}

/// Classify an item's age into none/warn/danger.
///
/// Order matters: thresholds produce a baseline, then a state override
/// fully replaces it (`Hide` forces `None`, `Warn`/`Danger` force that
/// state), then the optional policy hook runs last. Pure and
/// infallible; identical inputs always yield the identical state.
pub fn classify(
    facts: &AgeFacts,
    config: &NoticeConfig,
    item_override: &NoticeOverride,
    item: &ContentItem,
    hook: Option<PolicyHook<'_>>,
) -> NoticeState {
    let warn_months = effective_warn_months(config, item_override);
    let danger_months = config.danger_months;

    let baseline = if facts.age_months >= u64::from(danger_months) {
        NoticeState::Danger
    } else if facts.age_months >= u64::from(warn_months) {
        NoticeState::Warn
    } else {
        NoticeState::None
    };

    let state = match item_override.state {
        StateOverride::Hide => NoticeState::None,
        StateOverride::Warn => NoticeState::Warn,
        StateOverride::Danger => NoticeState::Danger,
        StateOverride::None => baseline,
    };

    match hook {
        Some(hook) => {
            let input = PolicyInput {
                item,
                age_months: facts.age_months,
                warn_months,
                danger_months,
            };
            hook(state, &input)
        }
        None => state,
    }
}
