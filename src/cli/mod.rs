//! Command-line interface for uiforge.
//!
//! Provides commands for generating components, exporting them as zip
//! bundles, and running the HTTP server.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;

use crate::adapters::GeminiClient;
use crate::config::Config;
use crate::core::{self, GenerateRequest, GenerationOutcome, Orchestrator};
use crate::domain::{Artifact, CustomizationSet, Framework};

/// uiforge - AI UI component generator
#[derive(Parser, Debug)]
#[command(name = "uiforge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a component from a description
    Generate {
        /// Component description (reads from stdin if not provided)
        prompt: Option<String>,

        /// Target framework
        #[arg(short, long, value_enum, default_value_t = Framework::React)]
        framework: Framework,

        /// Primary accent color (hex)
        #[arg(long)]
        primary_color: Option<String>,

        /// Secondary accent color (hex)
        #[arg(long)]
        secondary_color: Option<String>,

        /// Corner-rounding token
        #[arg(long)]
        border_radius: Option<String>,

        /// Spacing token
        #[arg(long)]
        spacing: Option<String>,

        /// Write the artifact JSON to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Package an artifact JSON file into a downloadable zip
    Export {
        /// Path to the artifact JSON file
        artifact: PathBuf,

        /// Target framework
        #[arg(short, long, value_enum, default_value_t = Framework::React)]
        framework: Framework,

        /// Output zip path (defaults to <name>-<framework>-component.zip)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Start the HTTP server
    Serve {
        /// Address to bind to (overrides config)
        #[arg(short, long)]
        address: Option<String>,
    },
}

impl Cli {
    /// Execute the parsed command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Generate {
                prompt,
                framework,
                primary_color,
                secondary_color,
                border_radius,
                spacing,
                output,
            } => {
                let request_text = match prompt {
                    Some(text) => text,
                    None => read_stdin()?,
                };

                let defaults = CustomizationSet::default();
                let customizations = CustomizationSet {
                    primary_color: primary_color.unwrap_or(defaults.primary_color),
                    secondary_color: secondary_color.unwrap_or(defaults.secondary_color),
                    border_radius: border_radius.unwrap_or(defaults.border_radius),
                    spacing: spacing.unwrap_or(defaults.spacing),
                };

                generate(request_text, customizations, framework, output).await
            }

            Commands::Export {
                artifact,
                framework,
                output,
            } => export(artifact, framework, output),

            Commands::Serve { address } => {
                let mut config = Config::load()?;
                if let Some(address) = address {
                    config.bind_address = address;
                }
                crate::server::serve(&config).await
            }
        }
    }
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read prompt from stdin")?;
    Ok(buffer)
}

async fn generate(
    request_text: String,
    customizations: CustomizationSet,
    framework: Framework,
    output: Option<PathBuf>,
) -> Result<()> {
    let config = Config::load()?;
    let generator = GeminiClient::new(config.api_key, config.model, config.timeout)?;
    let orchestrator = Orchestrator::new(Box::new(generator));

    let request = GenerateRequest {
        request_text,
        customizations,
        framework,
    };

    let outcome = orchestrator.generate(&request).await?;
    if let GenerationOutcome::Fallback { kind, detail, .. } = &outcome {
        warn!(%kind, %detail, "Generation fell back to a placeholder artifact");
    }

    let artifact = outcome.into_artifact();
    let json = serde_json::to_string_pretty(&artifact)?;

    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write artifact to {}", path.display()))?;
            println!("Wrote {} ({})", path.display(), artifact.name);
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn export(artifact_path: PathBuf, framework: Framework, output: Option<PathBuf>) -> Result<()> {
    let content = std::fs::read_to_string(&artifact_path)
        .with_context(|| format!("Failed to read {}", artifact_path.display()))?;

    let artifact: Artifact = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a valid artifact", artifact_path.display()))?;

    let bytes = core::package(&artifact, framework)?;
    let output = output.unwrap_or_else(|| PathBuf::from(core::archive_file_name(&artifact, framework)));

    std::fs::write(&output, bytes)
        .with_context(|| format!("Failed to write archive to {}", output.display()))?;
    println!("Wrote {}", output.display());

    Ok(())
}
