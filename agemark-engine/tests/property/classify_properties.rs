use chrono::{Duration, Utc};
use proptest::prelude::*;

use agemark_core::config::{NoticeConfig, RawNoticeConfig};
use agemark_core::models::{
    AgeFacts, ContentItem, ItemStatus, NoticeOverride, NoticeState, StateOverride,
};
use agemark_engine::{age, classify};

fn make_item(days_old: i64) -> ContentItem {
    let now = Utc::now();
    ContentItem {
        id: "item-1".to_string(),
        item_type: "post".to_string(),
        status: ItemStatus::Published,
        title: "Test".to_string(),
        language: "en-US".to_string(),
        canonical_url: "https://example.com/test".to_string(),
        published: Some(now - Duration::days(days_old)),
        modified: Some(now - Duration::days(days_old)),
        display_date: "June 1, 2024".to_string(),
    }
}

fn config_with_thresholds(warn: u32, danger: u32) -> NoticeConfig {
    let raw = RawNoticeConfig {
        warn_months: Some(warn),
        danger_months: Some(danger),
        ..Default::default()
    };
    NoticeConfig::validate(raw, &["post".to_string()])
}

fn arb_override_state() -> impl Strategy<Value = StateOverride> {
    prop_oneof![
        Just(StateOverride::None),
        Just(StateOverride::Hide),
        Just(StateOverride::Warn),
        Just(StateOverride::Danger),
    ]
}

// ── Flat divisor exactness ───────────────────────────────────────────────

proptest! {
    #[test]
    fn age_divisors_are_exact(days in 0i64..200_000) {
        let now = Utc::now();
        let facts = age::compute_age(now - Duration::days(days), now);
        prop_assert_eq!(facts.age_days, days as u64);
        prop_assert_eq!(facts.age_months, days as u64 / 30);
        prop_assert_eq!(facts.age_years, days as u64 / 365);
    }
}

proptest! {
    #[test]
    fn future_timestamps_never_go_negative(days in 1i64..10_000) {
        let now = Utc::now();
        let facts = age::compute_age(now + Duration::days(days), now);
        prop_assert_eq!(facts.age_days, 0);
    }
}

// ── Threshold bands ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn state_matches_threshold_band(
        warn in 1u32..120,
        danger_gap in 1u32..120,
        days in 0i64..10_000,
    ) {
        let danger = warn + danger_gap;
        let config = config_with_thresholds(warn, danger);
        let now = Utc::now();
        let facts = age::compute_age(now - Duration::days(days), now);
        let state = classify::classify(
            &facts,
            &config,
            &NoticeOverride::default(),
            &make_item(days),
            None,
        );

        let expected = if facts.age_months >= u64::from(danger) {
            NoticeState::Danger
        } else if facts.age_months >= u64::from(warn) {
            NoticeState::Warn
        } else {
            NoticeState::None
        };
        prop_assert_eq!(state, expected);
    }
}

// ── Override precedence ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn state_override_always_wins(
        days in 0i64..10_000,
        override_state in arb_override_state(),
    ) {
        let config = NoticeConfig::default();
        let item_override = NoticeOverride {
            state: override_state,
            ..Default::default()
        };
        let now = Utc::now();
        let facts = age::compute_age(now - Duration::days(days), now);
        let state = classify::classify(
            &facts,
            &config,
            &item_override,
            &make_item(days),
            None,
        );

        match override_state {
            StateOverride::Hide => prop_assert_eq!(state, NoticeState::None),
            StateOverride::Warn => prop_assert_eq!(state, NoticeState::Warn),
            StateOverride::Danger => prop_assert_eq!(state, NoticeState::Danger),
            StateOverride::None => {} // baseline stands, covered above
        }
    }
}

proptest! {
    #[test]
    fn threshold_override_shifts_only_the_warn_boundary(
        threshold in 1u32..120,
        days in 0i64..10_000,
    ) {
        let config = NoticeConfig::default();
        let item_override = NoticeOverride {
            threshold_months: threshold,
            ..Default::default()
        };
        let now = Utc::now();
        let facts = age::compute_age(now - Duration::days(days), now);
        let state = classify::classify(
            &facts,
            &config,
            &item_override,
            &make_item(days),
            None,
        );

        if facts.age_months >= u64::from(config.danger_months) {
            prop_assert_eq!(state, NoticeState::Danger, "danger boundary is fixed");
        } else if facts.age_months >= u64::from(threshold) {
            prop_assert_eq!(state, NoticeState::Warn);
        } else {
            prop_assert_eq!(state, NoticeState::None);
        }
    }
}

// ── Purity ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn classify_is_idempotent(
        days in 0i64..10_000,
        override_state in arb_override_state(),
        threshold in 0u32..120,
    ) {
        let config = NoticeConfig::default();
        let item_override = NoticeOverride {
            state: override_state,
            threshold_months: threshold,
            ..Default::default()
        };
        let item = make_item(days);
        let now = Utc::now();
        let facts: AgeFacts = age::compute_age(now - Duration::days(days), now);

        let first = classify::classify(&facts, &config, &item_override, &item, None);
        let second = classify::classify(&facts, &config, &item_override, &item, None);
        prop_assert_eq!(first, second);
    }
}
