use serde::{Deserialize, Serialize};

/// Machine-readable projection of an item's outdated classification.
///
/// Field renames follow schema.org JSON-LD, so serializing with
/// `serde_json` yields a valid linked-data block. Serialization itself
/// is the caller's concern; the record is a pure projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationRecord {
    #[serde(rename = "@context")]
    pub context: String,
    /// Primary type (first configured structured data type).
    #[serde(rename = "@type")]
    pub record_type: String,
    pub headline: String,
    #[serde(rename = "inLanguage")]
    pub in_language: String,
    #[serde(rename = "mainEntityOfPage")]
    pub main_entity_of_page: String,
    /// RFC 3339 publish instant, or empty if the platform supplied none.
    #[serde(rename = "datePublished")]
    pub date_published: String,
    /// RFC 3339 modification instant, or empty if the platform supplied none.
    #[serde(rename = "dateModified")]
    pub date_modified: String,
    #[serde(rename = "creativeWorkStatus")]
    pub creative_work_status: String,
    /// Secondary types (configured structured data types after the first).
    #[serde(rename = "additionalType")]
    pub additional_types: Vec<String>,
    /// Ordered name/value pairs: outdatedState, contentAgeDays,
    /// contentAgeMonths, contentAgeYears. All values are strings.
    #[serde(rename = "additionalProperty")]
    pub additional_properties: Vec<PropertyValue>,
}

/// One schema.org PropertyValue pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyValue {
    #[serde(rename = "@type")]
    pub value_type: String,
    pub name: String,
    pub value: String,
}

impl PropertyValue {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            value_type: "PropertyValue".to_string(),
            name: name.into(),
            value: value.into(),
        }
    }
}
