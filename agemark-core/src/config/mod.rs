pub mod defaults;
pub mod notice_config;

pub use notice_config::{AgeBasis, ColorScheme, NoticeConfig, RawNoticeConfig};
