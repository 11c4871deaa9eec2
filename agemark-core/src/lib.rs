//! # agemark-core
//!
//! Foundation crate for the agemark outdated-content annotation system.
//! Defines config, models, the restricted markup policy, errors, and
//! constants. The engine crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod markup;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::{AgeBasis, ColorScheme, NoticeConfig, RawNoticeConfig};
pub use errors::{AgemarkError, AgemarkResult};
pub use models::{
    AgeFacts, AnnotationRecord, ContentItem, ItemStatus, NoticeOverride, NoticeState,
    PropertyValue, StateOverride,
};
