use pagedom::{Key, Selector};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How panels are found and which keys toggle them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinderConfig {
    /// Selects panel containers across the whole document.
    pub container_selector: String,
    /// Selects the click target inside a container. The first match wins.
    pub title_selector: String,
    /// Value written to `tabindex` on containers that have none.
    pub default_tabindex: String,
    /// Keys that toggle a focused container.
    pub trigger_keys: Vec<Key>,
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            container_selector: ".collapse".to_string(),
            title_selector: ".collapse-title".to_string(),
            default_tabindex: "0".to_string(),
            trigger_keys: vec![Key::Enter, Key::SPACE],
        }
    }
}

impl BinderConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub(crate) fn container(&self) -> Result<Selector, ConfigError> {
        Selector::parse(&self.container_selector).map_err(|source| ConfigError::Selector {
            field: "container",
            source,
        })
    }

    pub(crate) fn title(&self) -> Result<Selector, ConfigError> {
        Selector::parse(&self.title_selector).map_err(|source| ConfigError::Selector {
            field: "title",
            source,
        })
    }
}
