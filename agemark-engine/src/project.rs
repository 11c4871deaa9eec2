use agemark_core::config::NoticeConfig;
use agemark_core::constants::{DEFAULT_RECORD_TYPE, OUTDATED_WORK_STATUS, SCHEMA_CONTEXT};
use agemark_core::models::{AgeFacts, AnnotationRecord, ContentItem, NoticeState, PropertyValue};

/// Build the structured annotation record for an item, or `None` when
/// structured data is disabled or the state is `None`.
///
/// Pure projection with no side effects; serializing the record (e.g.
/// into a linked-data block) is the caller's concern.
pub fn project(
    item: &ContentItem,
    config: &NoticeConfig,
    state: NoticeState,
    facts: &AgeFacts,
) -> Option<AnnotationRecord> {
    if !config.structured_data_enabled || state.is_none() {
        return None;
    }

    let mut types = config.structured_data_types.iter();
    let record_type = types
        .next()
        .cloned()
        .unwrap_or_else(|| DEFAULT_RECORD_TYPE.to_string());
    let additional_types: Vec<String> = types.cloned().collect();

    Some(AnnotationRecord {
        context: SCHEMA_CONTEXT.to_string(),
        record_type,
        headline: item.title.clone(),
        in_language: item.language.clone(),
        main_entity_of_page: item.canonical_url.clone(),
        date_published: item.published.map(|d| d.to_rfc3339()).unwrap_or_default(),
        date_modified: item.modified.map(|d| d.to_rfc3339()).unwrap_or_default(),
        creative_work_status: OUTDATED_WORK_STATUS.to_string(),
        additional_types,
        additional_properties: vec![
            PropertyValue::new("outdatedState", state.as_str()),
            PropertyValue::new("contentAgeDays", facts.age_days.to_string()),
            PropertyValue::new("contentAgeMonths", facts.age_months.to_string()),
            PropertyValue::new("contentAgeYears", facts.age_years.to_string()),
        ],
    })
}
