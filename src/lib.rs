//! uiforge - AI UI component generator
//!
//! Turns a free-text component request into a typed artifact by calling
//! a generative text model and recovering structure from its free-form
//! reply. The pipeline guarantees the caller always receives a fully
//! populated artifact: extraction or validation failures synthesize a
//! deterministic fallback instead of erroring.
//!
//! # Modules
//!
//! - `adapters`: External system integrations (Gemini, prompt text)
//! - `core`: Pipeline logic (Extractor, Fallback, Orchestrator,
//!   Rewriter, Exporter)
//! - `domain`: Data structures (Artifact, CustomizationSet, Framework)
//! - `server`: HTTP endpoints
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Generate a component
//! uiforge generate "pricing card with three tiers" --framework react
//!
//! # Package an artifact for download
//! uiforge export artifact.json --framework react
//!
//! # Run the HTTP server
//! uiforge serve --address 127.0.0.1:9000
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;

// Re-export main types at crate root for convenience
pub use crate::core::{GenerateRequest, GenerationOutcome, Orchestrator};
pub use crate::domain::{Artifact, CustomizationSet, Framework, Unvalidated};

// Text-generation boundary
pub use crate::adapters::{GeminiClient, TextGenerator};
