pub mod age_facts;
pub mod annotation;
pub mod content_item;
pub mod notice_override;
pub mod notice_state;

pub use age_facts::AgeFacts;
pub use annotation::{AnnotationRecord, PropertyValue};
pub use content_item::{ContentItem, ItemStatus};
pub use notice_override::{NoticeOverride, StateOverride};
pub use notice_state::NoticeState;
