//! Export packaging.
//!
//! Assembles an artifact plus derived manifest, readme and bootstrap
//! files into an in-memory zip archive. The file set is a pure function
//! of the artifact and framework, so exports are reproducible. Failures
//! here never touch the artifact itself.

use std::io::{Cursor, Write};

use thiserror::Error;
use zip::write::FileOptions;
use zip::ZipWriter;

use crate::domain::{Artifact, Framework};

/// Archive assembly failure
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("archive assembly failed: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("archive write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Zip entry base-name derived from the artifact name. The name is
/// model-controlled text, so path separators and parent-dir hops are
/// stripped before it can shape an archive entry.
fn file_base_name(name: &str) -> String {
    let cleaned: String = name.chars().filter(|c| !matches!(c, '/' | '\\')).collect();
    let cleaned = cleaned.replace("..", "");
    if cleaned.trim().is_empty() {
        "Component".to_string()
    } else {
        cleaned
    }
}

/// Download file name for the packaged archive
pub fn archive_file_name(artifact: &Artifact, framework: Framework) -> String {
    format!(
        "{}-{}-component.zip",
        file_base_name(&artifact.name).to_lowercase(),
        framework
    )
}

/// Package an artifact into a downloadable zip blob.
///
/// Contents: `<name>.<ext>` with the component source, `styles.css`
/// when trimmed style text exists, `package.json` from the framework
/// dependency table, a generated `README.md`, and for React an
/// `index.js` bootstrap referencing the component by name.
pub fn package(artifact: &Artifact, framework: Framework) -> Result<Vec<u8>, ExportError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default();

    let base_name = file_base_name(&artifact.name);
    let component_file = format!("{}.{}", base_name, framework.extension());
    zip.start_file(component_file.as_str(), options)?;
    zip.write_all(artifact.source.as_bytes())?;

    let style = artifact.style.trim();
    if !style.is_empty() {
        zip.start_file("styles.css", options)?;
        zip.write_all(artifact.style.as_bytes())?;
    }

    zip.start_file("package.json", options)?;
    let manifest = serde_json::to_string_pretty(&framework.manifest())
        .map_err(|e| ExportError::Io(e.into()))?;
    zip.write_all(manifest.as_bytes())?;

    if framework == Framework::React {
        zip.start_file("index.js", options)?;
        zip.write_all(react_bootstrap(&base_name).as_bytes())?;
    }

    zip.start_file("README.md", options)?;
    zip.write_all(readme(artifact, framework).as_bytes())?;

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

/// Entry file rendering the component, React only
fn react_bootstrap(name: &str) -> String {
    format!(
        "import React from 'react';\n\
         import ReactDOM from 'react-dom/client';\n\
         import {name} from './{name}';\n\
         \n\
         const root = ReactDOM.createRoot(document.getElementById('root'));\n\
         root.render(<{name} />);\n"
    )
}

/// Generated README with a fenced listing of the source
fn readme(artifact: &Artifact, framework: Framework) -> String {
    let mut text = format!(
        "# {}\n\n{}\n\n## Tech Stack: {}\n\n## Usage\n\n```{}\n{}\n```\n\n## Installation\n\n```bash\nnpm install\n```\n",
        artifact.name,
        artifact.description,
        framework.label(),
        framework.extension(),
        artifact.source,
    );

    if !artifact.style.trim().is_empty() {
        text.push_str(
            "\n## Additional CSS\n\nInclude the styles.css file in your project for additional styling.\n",
        );
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn sample() -> Artifact {
        Artifact::new(
            "PricingCard",
            "3-tier pricing",
            "<div class=\"p-4\">cards</div>",
            "",
        )
    }

    fn entries(bytes: &[u8]) -> Vec<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect()
    }

    fn read_entry(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        let mut entry = archive.by_name(name).unwrap();
        let mut content = String::new();
        entry.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_react_archive_contents() {
        let bytes = package(&sample(), Framework::React).unwrap();
        let names = entries(&bytes);
        assert!(names.contains(&"PricingCard.jsx".to_string()));
        assert!(names.contains(&"package.json".to_string()));
        assert!(names.contains(&"index.js".to_string()));
        assert!(names.contains(&"README.md".to_string()));
        assert!(!names.contains(&"styles.css".to_string()));
    }

    #[test]
    fn test_non_react_has_no_bootstrap() {
        let bytes = package(&sample(), Framework::Vue).unwrap();
        let names = entries(&bytes);
        assert!(names.contains(&"PricingCard.vue".to_string()));
        assert!(!names.contains(&"index.js".to_string()));
    }

    #[test]
    fn test_styles_file_only_when_style_present() {
        let mut artifact = sample();
        artifact.style = ".card { color: blue; }".to_string();
        let bytes = package(&artifact, Framework::React).unwrap();
        assert!(entries(&bytes).contains(&"styles.css".to_string()));
        assert_eq!(read_entry(&bytes, "styles.css"), ".card { color: blue; }");
    }

    #[test]
    fn test_blank_style_omitted() {
        let mut artifact = sample();
        artifact.style = "   \n".to_string();
        let bytes = package(&artifact, Framework::React).unwrap();
        assert!(!entries(&bytes).contains(&"styles.css".to_string()));
    }

    #[test]
    fn test_readme_mentions_style_note_only_with_style() {
        let plain = readme(&sample(), Framework::React);
        assert!(!plain.contains("Additional CSS"));

        let mut styled = sample();
        styled.style = ".x {}".to_string();
        let with_note = readme(&styled, Framework::React);
        assert!(with_note.contains("Additional CSS"));
        assert!(with_note.contains("# PricingCard"));
        assert!(with_note.contains("Tech Stack: React"));
    }

    #[test]
    fn test_bootstrap_references_component_name() {
        let bytes = package(&sample(), Framework::React).unwrap();
        let bootstrap = read_entry(&bytes, "index.js");
        assert!(bootstrap.contains("import PricingCard from './PricingCard'"));
        assert!(bootstrap.contains("<PricingCard />"));
    }

    #[test]
    fn test_archive_file_name() {
        assert_eq!(
            archive_file_name(&sample(), Framework::ReactNative),
            "pricingcard-react-native-component.zip"
        );
    }

    #[test]
    fn test_traversal_name_stripped_from_entries() {
        let mut artifact = sample();
        artifact.name = "../../etc/Card".to_string();

        let bytes = package(&artifact, Framework::React).unwrap();
        let names = entries(&bytes);
        assert!(names.contains(&"etcCard.jsx".to_string()));
        assert!(names.iter().all(|n| !n.contains('/') && !n.contains("..")));

        let bootstrap = read_entry(&bytes, "index.js");
        assert!(bootstrap.contains("import etcCard from './etcCard'"));

        assert_eq!(
            archive_file_name(&artifact, Framework::React),
            "etccard-react-component.zip"
        );
    }

    #[test]
    fn test_separator_only_name_gets_placeholder() {
        let mut artifact = sample();
        artifact.name = "..//..".to_string();

        let bytes = package(&artifact, Framework::Vue).unwrap();
        assert!(entries(&bytes).contains(&"Component.vue".to_string()));
    }
}
