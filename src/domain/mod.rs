//! Domain types for the uiforge generator.
//!
//! This module contains the core data structures:
//! - Artifact: validated component output (and its untrusted precursor)
//! - CustomizationSet: user style choices
//! - Framework: closed set of target frameworks and their tables

pub mod artifact;
pub mod customization;
pub mod framework;

// Re-export commonly used types
pub use artifact::{Artifact, Unvalidated};
pub use customization::CustomizationSet;
pub use framework::Framework;
