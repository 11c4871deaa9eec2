/// Errors for the agemark annotation system.
///
/// Evaluation itself is infallible: invalid config is coerced, missing
/// timestamps skip classification, unknown overrides act as unset. The
/// only fallible surface is parsing raw config text.
#[derive(Debug, thiserror::Error)]
pub enum AgemarkError {
    #[error("config parse error ({format}): {reason}")]
    ConfigParse { format: &'static str, reason: String },
}

pub type AgemarkResult<T> = Result<T, AgemarkError>;

impl From<toml::de::Error> for AgemarkError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigParse {
            format: "toml",
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AgemarkError {
    fn from(err: serde_json::Error) -> Self {
        Self::ConfigParse {
            format: "json",
            reason: err.to_string(),
        }
    }
}
