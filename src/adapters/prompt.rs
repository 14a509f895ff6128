//! Prompt composition for component generation.
//!
//! Static requirement text per target framework plus the JSON-only
//! output instruction. The framework table is total, so every member of
//! the closed set gets a defined requirements block.

use crate::domain::{CustomizationSet, Framework};

/// Framework-specific requirement block for the system prompt
fn framework_requirements(framework: Framework) -> &'static str {
    match framework {
        Framework::React => {
            "\
- Use modern React functional components with hooks
- Use Tailwind CSS for styling
- Include proper TypeScript types if needed
- Use JSX syntax"
        }
        Framework::Vue => {
            "\
- Use Vue 3 Composition API
- Use Tailwind CSS for styling
- Use single-file component format (.vue)
- Include proper TypeScript if needed"
        }
        Framework::Angular => {
            "\
- Use Angular component architecture
- Use Tailwind CSS for styling
- Include proper TypeScript
- Use Angular template syntax"
        }
        Framework::Svelte => {
            "\
- Use modern Svelte component syntax
- Use Tailwind CSS for styling
- Include proper script and style blocks
- Use Svelte reactive statements"
        }
        Framework::Html => {
            "\
- Use semantic HTML5
- Use Tailwind CSS classes
- Include inline styles if needed
- Make it a complete HTML document"
        }
        Framework::ReactNative => {
            "\
- Use React Native components (View, Text, TouchableOpacity, etc.)
- Use StyleSheet for styling or NativeWind
- Follow React Native best practices
- Use proper React Native syntax"
        }
    }
}

/// Compose the full prompt sent to the text-generation backend
pub fn compose(
    request_text: &str,
    customizations: &CustomizationSet,
    framework: Framework,
) -> String {
    let customizations_json =
        serde_json::to_string(customizations).unwrap_or_else(|_| "{}".to_string());

    format!(
        "You are an expert component generator for multiple frameworks. Generate a complete, \
         production-ready component based on the user's description for the {framework} framework.\n\
         \n\
         Framework-specific requirements:\n\
         {requirements}\n\
         \n\
         General requirements:\n\
         - Make it responsive and accessible\n\
         - Use modern best practices for {framework}\n\
         - Apply these customizations: {customizations_json}\n\
         - Generate clean, readable code\n\
         \n\
         IMPORTANT: Return ONLY a valid JSON object with this EXACT structure (no markdown, no code \
         blocks, no extra text):\n\
         \n\
         {{\n\
           \"name\": \"ComponentName\",\n\
           \"description\": \"Brief description of the component\",\n\
           \"source\": \"Complete component code as a string\",\n\
           \"style\": \"Any additional CSS if needed (can be empty string)\"\n\
         }}\n\
         \n\
         User request: {request_text}",
        framework = framework,
        requirements = framework_requirements(framework),
        customizations_json = customizations_json,
        request_text = request_text,
    )
}
