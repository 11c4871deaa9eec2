#[path = "property/classify_properties.rs"]
mod classify_properties;
