//! Command-line interface for mentor matching.
//!
//! `mentor-match match <population>` scores a population file and writes
//! ranked mentor candidates for every mentee. `mentor-match suitability
//! <population>` writes the standalone suitability score of every person.
//! Options layer CLI flags over `MENTOR_`-prefixed environment variables over
//! configuration files.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use mentor_core::{Role, UnknownRoleError};

mod error;
mod logging;
mod matching;
mod report;
mod suitability;

pub use error::CliError;
pub use logging::init_logging;
pub use report::ReportFormat;

use matching::{MatchArgs, run_match};
use suitability::{SuitabilityArgs, run_suitability};

pub(crate) const ARG_POPULATION: &str = "population";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ARG_FORMAT: &str = "format";
pub(crate) const ARG_MENTEE_ROLE: &str = "mentee-role";
pub(crate) const ARG_MENTOR_ROLE: &str = "mentor-role";
pub(crate) const ARG_TOP_N: &str = "top-n";
pub(crate) const ARG_TENURE_WEIGHT: &str = "tenure-weight";
pub(crate) const ARG_GENDER_WEIGHT: &str = "gender-weight";
pub(crate) const ARG_AGE_WEIGHT: &str = "age-weight";
pub(crate) const ARG_AGE_BAND: &str = "age-band";
pub(crate) const ENV_MATCH_POPULATION: &str = "MENTOR_CMDS_MATCH_POPULATION";
pub(crate) const ENV_SUITABILITY_POPULATION: &str = "MENTOR_CMDS_SUITABILITY_POPULATION";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments are invalid, the population cannot be
/// loaded or scored, or the report cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Match(args) => run_match(args, &mut stdout),
        Command::Suitability(args) => run_suitability(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "mentor-match",
    about = "Match mentees with mentors by profile similarity",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Rank mentor candidates for every mentee.
    Match(MatchArgs),
    /// Report the standalone suitability score of every person.
    Suitability(SuitabilityArgs),
}

pub(crate) fn parse_role(field: &'static str, value: &str) -> Result<Role, CliError> {
    value
        .parse()
        .map_err(|source: UnknownRoleError| CliError::InvalidRole { field, source })
}

pub(crate) fn parse_format(value: Option<&str>) -> Result<ReportFormat, CliError> {
    value.map_or(Ok(ReportFormat::default()), str::parse)
}

pub(crate) fn require_existing(
    path: &camino::Utf8Path,
    field: &'static str,
) -> Result<(), CliError> {
    match mentor_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests;
