//! Error types emitted by the placerank CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use placerank_collector::CollectError;
use placerank_core::ScoreError;
use placerank_scorer::RankError;
use thiserror::Error;

/// Errors emitted by the placerank CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag that was not supplied.
        field: &'static str,
        /// Environment variable that could have supplied it.
        env: &'static str,
    },
    /// The configured confidence level is unusable.
    #[error("invalid confidence level: {0}")]
    InvalidConfidence(#[source] ScoreError),
    /// The input document does not exist or is not a file.
    #[error("input path {path:?} does not exist or is not a file")]
    MissingInputFile {
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// Opening the input document failed.
    #[error("failed to open places document at {path:?}: {source}")]
    OpenInput {
        /// Path that could not be opened.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The input document is not valid JSON of the expected shape.
    #[error("failed to parse places document at {path:?}: {source}")]
    ParseInput {
        /// Path of the malformed document.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// A place in the input could not be ranked.
    #[error("failed to rank places: {0}")]
    Rank(#[source] RankError),
    /// The search plan could not be built.
    #[error("failed to plan search grid: {0}")]
    Grid(#[source] CollectError),
    /// Serialising the command output failed.
    #[error("failed to serialise output: {0}")]
    Serialise(#[source] serde_json::Error),
    /// Creating the output file or its parent directories failed.
    #[error("failed to create output at {path:?}: {source}")]
    CreateOutput {
        /// Path that could not be created.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
