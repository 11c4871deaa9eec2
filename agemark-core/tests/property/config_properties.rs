use agemark_core::config::{NoticeConfig, RawNoticeConfig};
use proptest::prelude::*;

// ── Threshold invariants hold for any input ──────────────────────────────

proptest! {
    #[test]
    fn thresholds_always_valid(
        warn in proptest::option::of(any::<u32>()),
        danger in proptest::option::of(any::<u32>()),
    ) {
        let raw = RawNoticeConfig {
            warn_months: warn,
            danger_months: danger,
            ..Default::default()
        };
        let config = NoticeConfig::validate(raw, &["post".to_string()]);
        prop_assert!(config.warn_months >= 1, "warn below 1: {}", config.warn_months);
        prop_assert!(
            config.danger_months > config.warn_months,
            "danger {} not above warn {}",
            config.danger_months,
            config.warn_months
        );
    }
}

proptest! {
    #[test]
    fn structured_types_never_empty(types in proptest::collection::vec("[A-Za-z]{0,12}", 0..8)) {
        let raw = RawNoticeConfig {
            structured_data_types: Some(types),
            ..Default::default()
        };
        let config = NoticeConfig::validate(raw, &[]);
        prop_assert!(!config.structured_data_types.is_empty());
    }
}

proptest! {
    #[test]
    fn colors_always_hex(color in "\\PC{0,12}") {
        let mut colors = agemark_core::config::ColorScheme::default();
        colors.warn_bg = color;
        let raw = RawNoticeConfig {
            colors: Some(colors),
            ..Default::default()
        };
        let config = NoticeConfig::validate(raw, &[]);
        let c = &config.colors.warn_bg;
        prop_assert!(c.starts_with('#') && matches!(c.len(), 4 | 7), "not hex: {c}");
        prop_assert!(c[1..].chars().all(|ch| ch.is_ascii_hexdigit()), "not hex: {c}");
    }
}
