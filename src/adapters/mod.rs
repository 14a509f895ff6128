//! Adapter interfaces for external systems.
//!
//! Adapters provide a unified interface to text-generation backends.
//! The orchestrator only sees [`TextGenerator`]; the concrete Gemini
//! client lives behind it.

pub mod gemini;
pub mod prompt;

use anyhow::Result;
use async_trait::async_trait;

pub use gemini::GeminiClient;

/// Trait for text-generation backends
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Human-readable backend name
    fn name(&self) -> &str;

    /// Send a composed prompt and return the model's full textual reply.
    ///
    /// Any transport, auth or quota failure surfaces as an error; the
    /// caller treats all of them identically.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
