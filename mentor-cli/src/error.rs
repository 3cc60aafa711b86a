//! Error types emitted by the mentor matching CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use mentor_core::UnknownRoleError;
use mentor_data::LoadPopulationError;
use mentor_scorer::ScoringError;
use thiserror::Error;

/// Errors emitted by the mentor matching CLI.
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
        /// Flag or positional name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk or is not a file.
    #[error("{field} path {path} does not exist or is not a file")]
    MissingSourceFile {
        /// Flag or positional name.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected.
    #[error("failed to inspect {field} path {path}: {source}")]
    InspectSourcePath {
        /// Flag or positional name.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// A role option did not name a known role.
    #[error("invalid --{field}: {source}")]
    InvalidRole {
        /// Flag that carried the role.
        field: &'static str,
        /// Parse failure.
        #[source]
        source: UnknownRoleError,
    },
    /// The report format was not `text` or `json`.
    #[error("invalid --format {value:?}; expected \"text\" or \"json\"")]
    InvalidFormat {
        /// Rejected value.
        value: String,
    },
    /// Loading the population failed.
    #[error(transparent)]
    LoadPopulation(#[from] LoadPopulationError),
    /// Scoring failed or the configuration was rejected.
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    /// Serializing a JSON report failed.
    #[error("failed to serialize report: {0}")]
    SerializeReport(#[source] serde_json::Error),
    /// Creating the output file failed.
    #[error("failed to create report file at {path}: {source}")]
    CreateOutput {
        /// Requested output path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    WriteReport(#[source] std::io::Error),
}
