//! Game plugin contract.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// A settings UI section exposed by a game type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsSection {
    /// Stable key used by the settings editor.
    pub key: String,

    /// Display title, in Hebrew.
    pub title: String,
}

impl SettingsSection {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
        }
    }
}

/// Content validation failure for a game type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("Content field '{field}' is invalid: {reason}")]
    Invalid { field: String, reason: String },

    #[error("Content field '{field}' is missing")]
    Missing { field: String },
}

impl ContentError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ContentError::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        ContentError::Missing {
            field: field.into(),
        }
    }
}

/// Behavior a game type contributes to the platform.
///
/// Default methods cover the common case; game types override only what
/// differs.
pub trait GamePlugin: Send + Sync {
    /// Stable type key, e.g. `"memory_game"`.
    fn game_type(&self) -> &str;

    /// Display name shown in the template catalog.
    fn display_name(&self) -> &str;

    /// Default settings payload for a new template.
    fn default_settings(&self) -> Value {
        json!({})
    }

    /// Settings sections shown by the editor. Every game type gets the
    /// general and display sections; overrides prepend their own.
    fn settings_sections(&self) -> Vec<SettingsSection> {
        base_sections()
    }

    /// Validates template content before saving. The base contract accepts
    /// everything; game types attach their own rules.
    fn validate_content(&self, _content: &Value) -> Result<(), ContentError> {
        Ok(())
    }
}

/// Settings sections shared by all game types.
pub fn base_sections() -> Vec<SettingsSection> {
    vec![
        SettingsSection::new("general", "הגדרות כלליות"),
        SettingsSection::new("display", "תצוגה"),
    ]
}
