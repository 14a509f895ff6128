//! Target framework identifiers and the tables keyed by them.
//!
//! Every operation keyed by a framework is a total match over this
//! closed set, so exhaustiveness is checked at build time.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Closed set of supported target frameworks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Framework {
    React,
    Vue,
    Angular,
    Svelte,
    Html,
    ReactNative,
}

impl Framework {
    /// All members, in display order
    pub const ALL: [Framework; 6] = [
        Framework::React,
        Framework::Vue,
        Framework::Angular,
        Framework::Svelte,
        Framework::Html,
        Framework::ReactNative,
    ];

    /// Stable identifier used in API payloads and archive names
    pub fn id(&self) -> &'static str {
        match self {
            Framework::React => "react",
            Framework::Vue => "vue",
            Framework::Angular => "angular",
            Framework::Svelte => "svelte",
            Framework::Html => "html",
            Framework::ReactNative => "react-native",
        }
    }

    /// Human-readable label for READMEs and UI
    pub fn label(&self) -> &'static str {
        match self {
            Framework::React => "React",
            Framework::Vue => "Vue",
            Framework::Angular => "Angular",
            Framework::Svelte => "Svelte",
            Framework::Html => "HTML",
            Framework::ReactNative => "React Native",
        }
    }

    /// File extension for the exported component source
    pub fn extension(&self) -> &'static str {
        match self {
            Framework::React => "jsx",
            Framework::Vue => "vue",
            Framework::Angular => "ts",
            Framework::Svelte => "svelte",
            Framework::Html => "html",
            Framework::ReactNative => "jsx",
        }
    }

    /// Wrap text in a comment appropriate for the framework's source
    /// format, so placeholder source stays loadable as-is
    pub fn comment(&self, text: &str) -> String {
        match self {
            Framework::Html => format!("<!-- {} -->", text),
            _ => format!("// {}", text),
        }
    }

    /// Dependency manifest (`package.json`) contents for an exported
    /// component. Total over the set; never fails.
    pub fn manifest(&self) -> serde_json::Value {
        let (dependencies, scripts) = match self {
            Framework::React => (
                serde_json::json!({
                    "react": "^18.2.0",
                    "react-dom": "^18.2.0",
                    "tailwindcss": "^3.3.0",
                }),
                serde_json::json!({
                    "start": "react-scripts start",
                    "build": "react-scripts build",
                }),
            ),
            Framework::Vue => (
                serde_json::json!({
                    "vue": "^3.3.0",
                    "tailwindcss": "^3.3.0",
                }),
                serde_json::json!({
                    "dev": "vite",
                    "build": "vite build",
                }),
            ),
            Framework::Angular => (
                serde_json::json!({
                    "@angular/core": "^16.0.0",
                    "@angular/common": "^16.0.0",
                    "tailwindcss": "^3.3.0",
                }),
                serde_json::json!({
                    "start": "ng serve",
                    "build": "ng build",
                }),
            ),
            Framework::Svelte => (
                serde_json::json!({
                    "svelte": "^4.0.0",
                    "tailwindcss": "^3.3.0",
                }),
                serde_json::json!({
                    "dev": "vite dev",
                    "build": "vite build",
                }),
            ),
            Framework::Html => (
                serde_json::json!({
                    "tailwindcss": "^3.3.0",
                }),
                serde_json::json!({
                    "build": "tailwindcss -i ./src/input.css -o ./dist/output.css --watch",
                }),
            ),
            Framework::ReactNative => (
                serde_json::json!({
                    "react": "^18.2.0",
                    "react-native": "^0.72.0",
                    "nativewind": "^2.0.11",
                }),
                serde_json::json!({
                    "start": "expo start",
                    "android": "expo start --android",
                    "ios": "expo start --ios",
                }),
            ),
        };

        serde_json::json!({
            "name": "generated-component",
            "version": "1.0.0",
            "description": "AI Generated Component",
            "dependencies": dependencies,
            "scripts": scripts,
        })
    }
}

impl std::fmt::Display for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
