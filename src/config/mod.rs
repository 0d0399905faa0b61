//! Configuration loading and management

use crate::core::error::ConfigError;
use crate::core::filter::DEFAULT_ALL_SENTINEL;
use crate::core::presentation::BadgePalette;
use crate::core::query::MAX_PAGE_SIZE;
use crate::core::selection::SelectAllScope;
use crate::core::sort::RankTable;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

fn default_page_size() -> usize {
    20
}

fn default_sentinel() -> String {
    DEFAULT_ALL_SENTINEL.to_string()
}

/// Configuration for one list view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Resource name of the view (e.g. "discounts")
    pub name: String,

    /// Rows per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Rows targeted by the "select all" checkbox
    #[serde(default)]
    pub select_all_scope: SelectAllScope,

    /// Dropdown value meaning "no constraint" (`"all"` or `"All"`)
    #[serde(default = "default_sentinel")]
    pub all_sentinel: String,

    /// Badge palette overrides (field -> label -> color)
    #[serde(default)]
    pub badges: HashMap<String, BadgePalette>,

    /// Rank table overrides (field -> label -> rank)
    #[serde(default)]
    pub ranks: HashMap<String, RankTable>,
}

/// Effective settings of one view after defaults are applied
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSettings {
    pub page_size: usize,
    pub select_all_scope: SelectAllScope,
    pub all_sentinel: String,
    pub badges: HashMap<String, BadgePalette>,
    pub ranks: HashMap<String, RankTable>,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            select_all_scope: SelectAllScope::default(),
            all_sentinel: default_sentinel(),
            badges: HashMap::new(),
            ranks: HashMap::new(),
        }
    }
}

impl From<&ViewConfig> for ViewSettings {
    fn from(config: &ViewConfig) -> Self {
        Self {
            page_size: config.page_size.clamp(1, MAX_PAGE_SIZE),
            select_all_scope: config.select_all_scope,
            all_sentinel: config.all_sentinel.clone(),
            badges: config.badges.clone(),
            ranks: config.ranks.clone(),
        }
    }
}

/// Complete configuration for all views
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewsConfig {
    #[serde(default)]
    pub views: Vec<ViewConfig>,
}

impl ViewsConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Merge several configurations
    ///
    /// Views are keyed by name; a later configuration replaces an earlier
    /// entry for the same view.
    pub fn merge(configs: Vec<ViewsConfig>) -> Self {
        let mut views: Vec<ViewConfig> = Vec::new();

        for config in configs {
            for view in config.views {
                match views.iter_mut().find(|v| v.name == view.name) {
                    Some(existing) => *existing = view,
                    None => views.push(view),
                }
            }
        }

        Self { views }
    }

    pub fn find_view(&self, name: &str) -> Option<&ViewConfig> {
        self.views.iter().find(|v| v.name == name)
    }

    /// Effective settings for a view, falling back to defaults
    pub fn settings_for(&self, name: &str) -> ViewSettings {
        self.find_view(name)
            .map(ViewSettings::from)
            .unwrap_or_default()
    }
}
