//! Generated component artifacts.
//!
//! An `Artifact` is always fully populated: all four fields exist and are
//! strings even when the content represents a failure. Untrusted values
//! recovered from model output live in `Unvalidated` until the shape
//! check converts them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A validated, fully populated component artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Component name, used as a file base-name and archive title
    pub name: String,

    /// Human-readable summary (may be empty, never absent)
    pub description: String,

    /// Generated component source text
    pub source: String,

    /// Auxiliary stylesheet text (may be empty, never absent)
    pub style: String,
}

impl Artifact {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        source: impl Into<String>,
        style: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            source: source.into(),
            style: style.into(),
        }
    }

    /// Trim leading/trailing whitespace from source and style in place
    pub fn normalize(&mut self) {
        self.source = self.source.trim().to_string();
        self.style = self.style.trim().to_string();
    }
}

/// A structured value recovered from model output but not yet shape-checked.
///
/// `validate` is the only conversion from untrusted to trusted data.
#[derive(Debug, Clone)]
pub struct Unvalidated(pub Value);

impl Unvalidated {
    /// Shape check: an object with string `name`, `description`, `source`
    /// and `style`. No semantic checks beyond presence and type.
    pub fn is_valid_shape(value: &Value) -> bool {
        let Some(obj) = value.as_object() else {
            return false;
        };
        ["name", "description", "source", "style"]
            .iter()
            .all(|key| obj.get(*key).map(Value::is_string).unwrap_or(false))
    }

    /// Convert into a typed `Artifact` if the shape check passes
    pub fn validate(self) -> Option<Artifact> {
        if !Self::is_valid_shape(&self.0) {
            return None;
        }
        serde_json::from_value(self.0).ok()
    }
}
