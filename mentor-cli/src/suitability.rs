//! `suitability` command: report standalone suitability scores.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use mentor_data::load_population;
use mentor_scorer::{SuitabilityWeights, encode_population, suitability_scores};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::report::write_suitability_report;
use crate::{
    ARG_FORMAT, ARG_POPULATION, CliError, ENV_SUITABILITY_POPULATION, ReportFormat, parse_format,
    require_existing,
};

/// CLI arguments for the `suitability` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Report the suitability score of every person")]
#[ortho_config(prefix = "MENTOR")]
pub(crate) struct SuitabilityArgs {
    /// Population file: JSON array, JSON Lines (`.jsonl`/`.ndjson`) or `.csv`.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) population: Option<Utf8PathBuf>,
    /// Report format: `text` or `json`.
    #[arg(long = ARG_FORMAT, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<String>,
}

/// Resolved `suitability` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SuitabilityConfig {
    pub(crate) population: Utf8PathBuf,
    pub(crate) format: ReportFormat,
}

impl TryFrom<SuitabilityArgs> for SuitabilityConfig {
    type Error = CliError;

    fn try_from(args: SuitabilityArgs) -> Result<Self, Self::Error> {
        let population = args.population.ok_or(CliError::MissingArgument {
            field: ARG_POPULATION,
            env: ENV_SUITABILITY_POPULATION,
        })?;
        Ok(Self {
            population,
            format: parse_format(args.format.as_deref())?,
        })
    }
}

pub(crate) fn run_suitability(
    args: SuitabilityArgs,
    stdout: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = SuitabilityConfig::try_from(merged)?;
    require_existing(&config.population, ARG_POPULATION)?;

    let population = load_population(&config.population)?;
    let encoding = encode_population(&population)?;
    let scores = suitability_scores(&population, &encoding, SuitabilityWeights::default())?;
    write_suitability_report(stdout, &population, &scores, config.format)
}
