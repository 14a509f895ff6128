//! Deterministic fallback artifacts.
//!
//! This is the terminal safety net: whenever the pipeline cannot produce
//! a validated artifact, a fully populated placeholder is synthesized
//! instead. Everything here is pure string assembly and must never fail.

use crate::domain::{Artifact, Framework};

/// Why the normal pipeline could not produce an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The text-generation call itself failed
    Transport,
    /// No structured value could be recovered from the reply
    Extraction,
    /// A structured value was recovered but its shape was wrong
    Validation,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Transport => "transport",
            FailureKind::Extraction => "extraction",
            FailureKind::Validation => "validation",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build a complete placeholder artifact for a failed generation.
///
/// Transport failures get an embedded error-display component so the
/// preview surface is never empty; recovery failures get a commented
/// placeholder inviting a retry. The style field is always empty.
pub fn synthesize(kind: FailureKind, framework: Framework, detail: &str) -> Artifact {
    match kind {
        FailureKind::Transport => Artifact::new(
            "ErrorComponent",
            "Error occurred during generation. Please try again.",
            error_component_source(framework, detail),
            "",
        ),
        FailureKind::Extraction => Artifact::new(
            "GeneratedComponent",
            "AI generated component",
            format!(
                "{}\n{}",
                framework.comment(&format!("Generated component for {}", framework)),
                framework.comment("Error parsing full response, please try again"),
            ),
            "",
        ),
        FailureKind::Validation => Artifact::new(
            "GeneratedComponent",
            "AI generated component",
            format!(
                "{}\n{}",
                framework.comment(&format!("Generated component for {}", framework)),
                framework.comment("Invalid response structure, please try again"),
            ),
            "",
        ),
    }
}

/// Minimal renderable error-display component per framework family
fn error_component_source(framework: Framework, detail: &str) -> String {
    let header = format!(
        "{}\n{}\n",
        framework.comment(&format!("Error generating {} component", framework)),
        framework.comment(&format!("Error: {}", detail)),
    );

    let body = match framework {
        Framework::Html => concat!(
            "<div class=\"p-4 border border-red-300 rounded-lg bg-red-50\">\n",
            "  <h3 class=\"text-red-800 font-semibold\">Generation Error</h3>\n",
            "  <p class=\"text-red-600 text-sm mt-1\">\n",
            "    Please try again with a different prompt or check your connection.\n",
            "  </p>\n",
            "</div>",
        )
        .to_string(),
        Framework::ReactNative => concat!(
            "export default function ErrorComponent() {\n",
            "  return (\n",
            "    <View style={{ padding: 16 }}>\n",
            "      <Text style={{ fontWeight: 'bold' }}>Generation Error</Text>\n",
            "      <Text>Please try again with a different prompt or check your connection.</Text>\n",
            "    </View>\n",
            "  )\n",
            "}",
        )
        .to_string(),
        _ => concat!(
            "export default function ErrorComponent() {\n",
            "  return (\n",
            "    <div className=\"p-4 border border-red-300 rounded-lg bg-red-50\">\n",
            "      <h3 className=\"text-red-800 font-semibold\">Generation Error</h3>\n",
            "      <p className=\"text-red-600 text-sm mt-1\">\n",
            "        Please try again with a different prompt or check your connection.\n",
            "      </p>\n",
            "    </div>\n",
            "  )\n",
            "}",
        )
        .to_string(),
    };

    format!("{}\n{}", header, body)
}
