//! User style customizations.
//!
//! Created with defaults at session start, mutated by the UI, and
//! read-only to the generation core. Only the preview rewrite consumes
//! it; the stored artifact is never touched.

use serde::{Deserialize, Serialize};

/// Cosmetic parameters applied to the preview rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationSet {
    /// Primary accent color (hex)
    pub primary_color: String,

    /// Secondary accent color (hex)
    pub secondary_color: String,

    /// Tailwind corner-rounding token (e.g. `rounded-xl`)
    pub border_radius: String,

    /// Tailwind spacing token (e.g. `p-6`)
    pub spacing: String,
}

impl Default for CustomizationSet {
    fn default() -> Self {
        Self {
            primary_color: "#3b82f6".to_string(),
            secondary_color: "#64748b".to_string(),
            border_radius: "rounded-lg".to_string(),
            spacing: "p-4".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let set = CustomizationSet::default();
        assert_eq!(set.primary_color, "#3b82f6");
        assert_eq!(set.border_radius, "rounded-lg");
        assert_eq!(set.spacing, "p-4");
    }

    #[test]
    fn test_camel_case_wire_format() {
        let set = CustomizationSet::default();
        let json = serde_json::to_value(&set).unwrap();
        assert!(json.get("primaryColor").is_some());
        assert!(json.get("borderRadius").is_some());
    }
}
