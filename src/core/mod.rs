//! Core generation pipeline.
//!
//! This module contains:
//! - Extractor: structured-value recovery from raw model replies
//! - Fallback: deterministic placeholder artifacts
//! - Orchestrator: the never-throws generation boundary
//! - Rewriter: preview customization substitution
//! - Exporter: zip packaging

pub mod exporter;
pub mod extractor;
pub mod fallback;
pub mod orchestrator;
pub mod rewriter;

// Re-export commonly used types
pub use exporter::{archive_file_name, package, ExportError};
pub use extractor::{extract, ExtractError};
pub use fallback::{synthesize, FailureKind};
pub use orchestrator::{GenerateRequest, GenerationOutcome, InputError, Orchestrator};
