//! Preview customization rewriting.
//!
//! Literal token substitution over generated source text, for preview
//! display only. The stored artifact is never modified. Substitution
//! order is fixed so the transform is deterministic, and unmatched
//! tokens are left alone.

use crate::domain::CustomizationSet;

/// Apply the customization set to source text for preview rendering.
///
/// Fixed order: background color, text color, border color, corner
/// rounding, spacing. Idempotent on text containing no default tokens.
pub fn apply(source: &str, customizations: &CustomizationSet) -> String {
    source
        .replace(
            "bg-blue-500",
            &format!("bg-[{}]", customizations.primary_color),
        )
        .replace(
            "text-blue-500",
            &format!("text-[{}]", customizations.primary_color),
        )
        .replace(
            "border-blue-500",
            &format!("border-[{}]", customizations.primary_color),
        )
        .replace("rounded-lg", &customizations.border_radius)
        .replace("p-4", &customizations.spacing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customizations() -> CustomizationSet {
        CustomizationSet {
            primary_color: "#ff0000".to_string(),
            secondary_color: "#00ff00".to_string(),
            border_radius: "rounded-xl".to_string(),
            spacing: "p-8".to_string(),
        }
    }

    #[test]
    fn test_color_tokens_substituted() {
        let source = r#"<div class="bg-blue-500 text-blue-500 border-blue-500">x</div>"#;
        let out = apply(source, &customizations());
        assert_eq!(
            out,
            r#"<div class="bg-[#ff0000] text-[#ff0000] border-[#ff0000]">x</div>"#
        );
    }

    #[test]
    fn test_radius_and_spacing_substituted() {
        let source = r#"<div class="rounded-lg p-4">x</div>"#;
        let out = apply(source, &customizations());
        assert_eq!(out, r#"<div class="rounded-xl p-8">x</div>"#);
    }

    #[test]
    fn test_unmatched_tokens_untouched() {
        let source = r#"<div class="bg-red-500 rounded-full p-2">x</div>"#;
        assert_eq!(apply(source, &customizations()), source);
    }

    #[test]
    fn test_idempotent_after_first_pass() {
        let source = r#"<div class="bg-blue-500 rounded-lg p-4">x</div>"#;
        let once = apply(source, &customizations());
        let twice = apply(&once, &customizations());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_defaults_rewrite_to_same_tokens() {
        // Rewriting with the default set still pins colors to arbitrary
        // values, but radius and spacing map to themselves
        let source = r#"<div class="rounded-lg p-4">x</div>"#;
        let out = apply(source, &CustomizationSet::default());
        assert_eq!(out, source);
    }
}
