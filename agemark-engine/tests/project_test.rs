use chrono::{Duration, Utc};

use agemark_core::config::{NoticeConfig, RawNoticeConfig};
use agemark_core::models::{ContentItem, ItemStatus, NoticeState};
use agemark_engine::{age, project};

fn make_item(days_old: i64) -> ContentItem {
    let now = Utc::now();
    ContentItem {
        id: "item-1".to_string(),
        item_type: "post".to_string(),
        status: ItemStatus::Published,
        title: "Aging gracefully".to_string(),
        language: "en-US".to_string(),
        canonical_url: "https://example.com/aging".to_string(),
        published: Some(now - Duration::days(days_old + 10)),
        modified: Some(now - Duration::days(days_old)),
        display_date: "June 1, 2024".to_string(),
    }
}

fn config_with_types(types: &[&str]) -> NoticeConfig {
    let raw = RawNoticeConfig {
        structured_data_types: Some(types.iter().map(ToString::to_string).collect()),
        ..Default::default()
    };
    NoticeConfig::validate(raw, &["post".to_string()])
}

fn facts_for(days_old: i64) -> agemark_core::models::AgeFacts {
    let now = Utc::now();
    age::compute_age(now - Duration::days(days_old), now)
}

// ── Gating ───────────────────────────────────────────────────────────────

#[test]
fn no_record_when_structured_data_disabled() {
    let raw = RawNoticeConfig {
        structured_data_enabled: Some(false),
        ..Default::default()
    };
    let config = NoticeConfig::validate(raw, &["post".to_string()]);
    let record = project::project(&make_item(400), &config, NoticeState::Warn, &facts_for(400));
    assert!(record.is_none());
}

#[test]
fn no_record_for_none_state() {
    let config = NoticeConfig::default();
    let record = project::project(&make_item(400), &config, NoticeState::None, &facts_for(400));
    assert!(record.is_none());
}

// ── Record contents ──────────────────────────────────────────────────────

#[test]
fn first_type_is_primary_rest_are_secondary() {
    let config = config_with_types(&["Article", "WebPage"]);
    let record = project::project(&make_item(400), &config, NoticeState::Warn, &facts_for(400))
        .expect("record expected");
    assert_eq!(record.record_type, "Article");
    assert_eq!(record.additional_types, vec!["WebPage"]);
}

#[test]
fn record_carries_item_facts_as_strings() {
    let item = make_item(1200);
    let config = NoticeConfig::default();
    let record = project::project(&item, &config, NoticeState::Danger, &facts_for(1200))
        .expect("record expected");

    assert_eq!(record.context, "https://schema.org");
    assert_eq!(record.headline, "Aging gracefully");
    assert_eq!(record.in_language, "en-US");
    assert_eq!(record.main_entity_of_page, "https://example.com/aging");
    assert_eq!(record.creative_work_status, "Outdated");

    let names: Vec<&str> = record
        .additional_properties
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["outdatedState", "contentAgeDays", "contentAgeMonths", "contentAgeYears"],
        "property pair order is part of the contract"
    );
    let values: Vec<&str> = record
        .additional_properties
        .iter()
        .map(|p| p.value.as_str())
        .collect();
    assert_eq!(values, vec!["danger", "1200", "40", "3"]);
}

#[test]
fn missing_publish_instant_serializes_empty() {
    let mut item = make_item(400);
    item.published = None;
    let config = NoticeConfig::default();
    let record = project::project(&item, &config, NoticeState::Warn, &facts_for(400))
        .expect("record expected");
    assert_eq!(record.date_published, "");
    assert!(!record.date_modified.is_empty());
}

// ── JSON-LD shape ────────────────────────────────────────────────────────

#[test]
fn serializes_with_json_ld_field_names() {
    let config = config_with_types(&["NewsArticle", "WebPage"]);
    let record = project::project(&make_item(400), &config, NoticeState::Warn, &facts_for(400))
        .expect("record expected");
    let json = serde_json::to_value(&record).expect("serializable");

    assert_eq!(json["@context"], "https://schema.org");
    assert_eq!(json["@type"], "NewsArticle");
    assert_eq!(json["additionalType"][0], "WebPage");
    assert_eq!(json["creativeWorkStatus"], "Outdated");
    assert_eq!(json["additionalProperty"][0]["@type"], "PropertyValue");
    assert_eq!(json["additionalProperty"][0]["name"], "outdatedState");
    assert_eq!(json["additionalProperty"][0]["value"], "warn");
    assert!(json["datePublished"].is_string());
    assert!(json["inLanguage"].is_string());
}
