//! Analysis configuration objects.
//!
//! An [`AnalysisConfig`] names an analysis and carries uninterpreted
//! options from the enclosing harness. The core passes it through to
//! analysis constructors without reading the options itself.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Configuration handed to an analysis constructor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Identifier of the analysis this configuration targets.
    id: String,
    /// Harness-defined options; opaque to the core.
    #[serde(default)]
    options: JsonValue,
}

impl AnalysisConfig {
    /// Create a configuration with no options.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            options: JsonValue::Null,
        }
    }

    /// Attach harness-defined options.
    #[must_use]
    pub fn with_options(mut self, options: JsonValue) -> Self {
        self.options = options;
        self
    }

    /// The analysis identifier (e.g. `"constprop"`).
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The uninterpreted option payload.
    #[must_use]
    pub fn options(&self) -> &JsonValue {
        &self.options
    }
}
