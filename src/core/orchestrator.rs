//! Generation orchestrator.
//!
//! Drives the transport call, extraction, validation and fallback
//! synthesis. The contract at this boundary: given a non-empty request,
//! the caller always gets back a fully populated artifact. The only
//! error that escapes is the upfront input check, before any generation
//! is attempted.

use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::adapters::{prompt, TextGenerator};
use crate::domain::{Artifact, CustomizationSet, Framework};

use super::extractor;
use super::fallback::{self, FailureKind};

/// A single generation request snapshot
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Free-text description of the desired component
    pub request_text: String,

    /// User style choices, read-only here
    pub customizations: CustomizationSet,

    /// Target framework
    pub framework: Framework,
}

/// Rejected before any generation was attempted
#[derive(Debug, Error)]
pub enum InputError {
    #[error("request text must not be empty")]
    EmptyRequest,
}

/// Result of a generation: either the model's validated artifact or a
/// synthesized fallback carrying the failure category.
///
/// Both variants hold a fully populated artifact, so callers can render
/// something on every path.
#[derive(Debug, Clone)]
pub enum GenerationOutcome {
    Generated(Artifact),
    Fallback {
        artifact: Artifact,
        kind: FailureKind,
        detail: String,
    },
}

impl GenerationOutcome {
    pub fn artifact(&self) -> &Artifact {
        match self {
            GenerationOutcome::Generated(artifact) => artifact,
            GenerationOutcome::Fallback { artifact, .. } => artifact,
        }
    }

    pub fn into_artifact(self) -> Artifact {
        match self {
            GenerationOutcome::Generated(artifact) => artifact,
            GenerationOutcome::Fallback { artifact, .. } => artifact,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, GenerationOutcome::Fallback { .. })
    }
}

/// Main generation orchestrator
pub struct Orchestrator {
    generator: Box<dyn TextGenerator>,
}

impl Orchestrator {
    /// Create an orchestrator over a text-generation backend
    pub fn new(generator: Box<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Run the full pipeline for one request.
    ///
    /// Transport, extraction and validation failures are all converted
    /// into fallback artifacts; nothing past the input check raises.
    #[instrument(skip(self, request), fields(framework = %request.framework))]
    pub async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerationOutcome, InputError> {
        if request.request_text.trim().is_empty() {
            return Err(InputError::EmptyRequest);
        }

        let composed = prompt::compose(
            &request.request_text,
            &request.customizations,
            request.framework,
        );

        let raw = match self.generator.generate(&composed).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Text-generation call failed, returning transport fallback");
                return Ok(self.fall_back(FailureKind::Transport, request.framework, e.to_string()));
            }
        };

        debug!(reply = %raw, "Raw model reply");

        let unvalidated = match extractor::extract(&raw) {
            Ok(unvalidated) => unvalidated,
            Err(e) => {
                warn!(error = %e, "No structured value recovered, returning extraction fallback");
                debug!(reply = %e.offending_text(), "Unrecoverable reply text");
                return Ok(self.fall_back(
                    FailureKind::Extraction,
                    request.framework,
                    e.to_string(),
                ));
            }
        };

        match unvalidated.validate() {
            Some(mut artifact) => {
                artifact.normalize();
                info!(name = %artifact.name, "Generated component artifact");
                Ok(GenerationOutcome::Generated(artifact))
            }
            None => {
                warn!("Extracted value has wrong shape, returning validation fallback");
                Ok(self.fall_back(
                    FailureKind::Validation,
                    request.framework,
                    "response structure missing required string fields".to_string(),
                ))
            }
        }
    }

    fn fall_back(
        &self,
        kind: FailureKind,
        framework: Framework,
        detail: String,
    ) -> GenerationOutcome {
        let artifact = fallback::synthesize(kind, framework, &detail);
        GenerationOutcome::Fallback {
            artifact,
            kind,
            detail,
        }
    }
}
