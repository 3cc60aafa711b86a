//! `match` command: score a population and report ranked candidates.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use mentor_data::load_population;
use mentor_scorer::{AdjusterConfig, AdjustmentWeights, MatchPipeline, Matcher, PipelineConfig};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::report::write_match_report;
use crate::{
    ARG_AGE_BAND, ARG_AGE_WEIGHT, ARG_FORMAT, ARG_GENDER_WEIGHT, ARG_MENTEE_ROLE,
    ARG_MENTOR_ROLE, ARG_OUTPUT, ARG_POPULATION, ARG_TENURE_WEIGHT, ARG_TOP_N, CliError,
    ENV_MATCH_POPULATION, ReportFormat, parse_format, parse_role, require_existing,
};

/// CLI arguments for the `match` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every person in a population file and list the best \
                 mentor candidates for each mentee. Options can come from CLI \
                 flags, configuration files, or environment variables.",
    about = "Rank mentor candidates for every mentee"
)]
#[ortho_config(prefix = "MENTOR")]
pub(crate) struct MatchArgs {
    /// Population file: JSON array, JSON Lines (`.jsonl`/`.ndjson`) or `.csv`.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) population: Option<Utf8PathBuf>,
    /// Write the report here instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Report format: `text` or `json`.
    #[arg(long = ARG_FORMAT, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<String>,
    /// Role whose members receive match lists (default `Junior PM`).
    #[arg(long = ARG_MENTEE_ROLE, value_name = "role")]
    #[serde(default)]
    pub(crate) mentee_role: Option<String>,
    /// Role whose members are candidates (default `Senior PM`).
    #[arg(long = ARG_MENTOR_ROLE, value_name = "role")]
    #[serde(default)]
    pub(crate) mentor_role: Option<String>,
    /// Candidates kept per mentee (default 3).
    #[arg(long = ARG_TOP_N, value_name = "n")]
    #[serde(default)]
    pub(crate) top_n: Option<usize>,
    /// Weight of tenure proximity (default 0.1).
    #[arg(long = ARG_TENURE_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) tenure_weight: Option<f64>,
    /// Weight of gender agreement (default 0.1).
    #[arg(long = ARG_GENDER_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) gender_weight: Option<f64>,
    /// Weight of age-band agreement (default 0.1).
    #[arg(long = ARG_AGE_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) age_weight: Option<f64>,
    /// Inclusive age band in years (default 5).
    #[arg(long = ARG_AGE_BAND, value_name = "years")]
    #[serde(default)]
    pub(crate) age_band: Option<f64>,
}

impl MatchArgs {
    pub(crate) fn into_config(self) -> Result<MatchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        MatchConfig::try_from(merged)
    }
}

/// Resolved `match` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MatchConfig {
    pub(crate) population: Utf8PathBuf,
    pub(crate) output: Option<Utf8PathBuf>,
    pub(crate) format: ReportFormat,
    pub(crate) pipeline: PipelineConfig,
}

impl MatchConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.population, ARG_POPULATION)
    }
}

impl TryFrom<MatchArgs> for MatchConfig {
    type Error = CliError;

    fn try_from(args: MatchArgs) -> Result<Self, Self::Error> {
        let population = args.population.ok_or(CliError::MissingArgument {
            field: ARG_POPULATION,
            env: ENV_MATCH_POPULATION,
        })?;
        let format = parse_format(args.format.as_deref())?;

        let defaults = PipelineConfig::default();
        let matcher = Matcher {
            mentee_role: args
                .mentee_role
                .as_deref()
                .map(|value| parse_role(ARG_MENTEE_ROLE, value))
                .transpose()?
                .unwrap_or(defaults.matcher.mentee_role),
            mentor_role: args
                .mentor_role
                .as_deref()
                .map(|value| parse_role(ARG_MENTOR_ROLE, value))
                .transpose()?
                .unwrap_or(defaults.matcher.mentor_role),
            top_n: args.top_n.unwrap_or(defaults.matcher.top_n),
        };
        let weights = defaults.adjuster.weights;
        let adjuster = AdjusterConfig {
            weights: AdjustmentWeights {
                tenure: args.tenure_weight.unwrap_or(weights.tenure),
                gender: args.gender_weight.unwrap_or(weights.gender),
                age: args.age_weight.unwrap_or(weights.age),
            },
            age_band_years: args.age_band.unwrap_or(defaults.adjuster.age_band_years),
        };

        Ok(Self {
            population,
            output: args.output,
            format,
            pipeline: PipelineConfig {
                adjuster,
                matcher,
                ..defaults
            },
        })
    }
}

/// Run `match`, writing to `stdout` unless an output path is configured.
pub(crate) fn run_match(args: MatchArgs, stdout: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    execute_match(&config, stdout)
}

pub(crate) fn execute_match(config: &MatchConfig, stdout: &mut dyn Write) -> Result<(), CliError> {
    let population = load_population(&config.population)?;
    let pipeline = MatchPipeline::new(config.pipeline)?;
    let output = pipeline.run(&population)?;

    match &config.output {
        Some(path) => {
            let mut file =
                mentor_fs::create_utf8_file(path).map_err(|source| CliError::CreateOutput {
                    path: path.clone(),
                    source,
                })?;
            write_match_report(&mut file, &population, &output.matches, config.format)?;
            info!("optimal matches have been written to {path}");
            Ok(())
        }
        None => write_match_report(stdout, &population, &output.matches, config.format),
    }
}
