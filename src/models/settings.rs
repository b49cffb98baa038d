use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Text scale preference for the chat UI.
///
/// Persisted as the plain strings `"small"`, `"medium"`, `"large"` under the
/// `fontSize` storage key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextScale {
    Small,
    #[default]
    Medium,
    Large,
}

impl TextScale {
    /// All valid scales, in ascending size order.
    pub const ALL: [TextScale; 3] = [TextScale::Small, TextScale::Medium, TextScale::Large];

    /// The raw string written to durable storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextScale::Small => "small",
            TextScale::Medium => "medium",
            TextScale::Large => "large",
        }
    }
}

impl fmt::Display for TextScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextScale {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(TextScale::Small),
            "medium" => Ok(TextScale::Medium),
            "large" => Ok(TextScale::Large),
            _ => Err(()),
        }
    }
}

/// A named backend credential pair: which engine to talk to and the access
/// key to use for it.
///
/// JSON field names match the durable `chatbotConfigurations` encoding.
/// Engine names are not required to be unique; the list may hold duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(rename = "engineName")]
    pub engine_name: String,

    #[serde(rename = "accessKey")]
    pub access_key: String,
}

impl EngineConfig {
    pub fn new(engine_name: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            engine_name: engine_name.into(),
            access_key: access_key.into(),
        }
    }
}

/// Full in-memory settings snapshot.
///
/// The active selection is a detached value copy of one list entry, not an
/// index; replacing the list does not revalidate it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsState {
    pub text_scale: TextScale,
    pub engine_configs: Vec<EngineConfig>,
    pub active_config: Option<EngineConfig>,
}
