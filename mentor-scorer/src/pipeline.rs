//! End-to-end scoring: encode, compare, adjust, rank.

#![forbid(unsafe_code)]

use log::info;
use mentor_core::{MatchResult, Population, SimilarityMatrix};

use crate::{
    AdjusterConfig, AdjustmentInputs, Encoding, Matcher, ScoringError, SuitabilityWeights,
    WeightsError, adjust_similarity, cosine_similarity_matrix, encode_population,
    suitability_scores,
};

/// Configuration for every stage of [`MatchPipeline`].
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PipelineConfig {
    /// Secondary signal weights and age band.
    pub adjuster: AdjusterConfig,
    /// Suitability coefficients.
    pub suitability: SuitabilityWeights,
    /// Mentee and mentor roles plus the candidate limit.
    pub matcher: Matcher,
}

impl PipelineConfig {
    /// Validate every weight before any work happens.
    ///
    /// # Errors
    /// Returns the first [`WeightsError`] found.
    pub fn validate(self) -> Result<Self, WeightsError> {
        self.adjuster.validate()?;
        self.suitability.validate()?;
        Ok(self)
    }
}

/// Every artefact produced by a pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    /// Feature matrix and normalization details.
    pub encoding: Encoding,
    /// Cosine similarity of the feature rows.
    pub raw: SimilarityMatrix,
    /// Similarity after blending in secondary signals.
    pub adjusted: SimilarityMatrix,
    /// Suitability score per person, in population order.
    pub suitability: Vec<f64>,
    /// Ranked candidates per mentee.
    pub matches: MatchResult,
}

/// Runs the matching stages over a population.
///
/// # Examples
/// ```
/// use mentor_core::{PersonRecord, Population, Role};
/// use mentor_scorer::{MatchPipeline, PipelineConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let population = Population::new(vec![
///     PersonRecord::new("Ada", Role::JuniorPm).with_interests(["chess"]).with_age(30.0),
///     PersonRecord::new("Grace", Role::SeniorPm).with_interests(["chess"]).with_age(31.0),
/// ])?;
/// let output = MatchPipeline::new(PipelineConfig::default())?.run(&population)?;
/// assert_eq!(output.matches.len(), 1);
/// assert_eq!(output.suitability.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MatchPipeline {
    config: PipelineConfig,
}

impl MatchPipeline {
    /// Build a pipeline after validating `config`.
    ///
    /// # Errors
    /// Returns [`ScoringError::Weights`] when a weight is invalid.
    pub fn new(config: PipelineConfig) -> Result<Self, ScoringError> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Score `population` and rank candidates.
    ///
    /// # Errors
    /// Propagates [`ScoringError`] from any stage.
    pub fn run(&self, population: &Population) -> Result<PipelineOutput, ScoringError> {
        let encoding = encode_population(population)?;
        let raw = cosine_similarity_matrix(&encoding.features);

        let genders: Vec<&str> = population.iter().map(|p| p.gender.as_str()).collect();
        let ages: Vec<f64> = population.iter().map(|p| p.age).collect();
        let inputs = AdjustmentInputs {
            tenure: &encoding.tenure.values,
            genders: &genders,
            ages: &ages,
        };
        let adjusted = adjust_similarity(&raw, &inputs, &self.config.adjuster)?;
        let suitability = suitability_scores(population, &encoding, self.config.suitability)?;
        let matches = self.config.matcher.find_matches(&adjusted, population)?;

        info!(
            "scored {} people across {} features; {} mentees matched",
            population.len(),
            encoding.features.cols(),
            matches.len()
        );
        Ok(PipelineOutput {
            encoding,
            raw,
            adjusted,
            suitability,
            matches,
        })
    }
}
