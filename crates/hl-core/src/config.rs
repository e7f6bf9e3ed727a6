//! Rendering options.

use crate::catalog::Catalog;

/// Options for building a day conclusion.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Separator placed between activity labels in a sentence.
    pub separator: String,
    /// Label used when the snapshot names neither officer nor day-god.
    pub default_label: String,
    /// Officer tables to use instead of the built-in ones.
    pub catalog: Option<Catalog>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            separator: "、".to_string(),
            default_label: "今日".to_string(),
            catalog: None,
        }
    }
}

impl RenderConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the activity separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the fallback label.
    pub fn with_default_label(mut self, label: impl Into<String>) -> Self {
        self.default_label = label.into();
        self
    }

    /// Use custom officer tables.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }
}
