//! Scoring stages for mentor matching.
//!
//! The crate turns a validated [`Population`](mentor_core::Population) into
//! ranked mentor candidates in four deterministic stages:
//! - **Encoding** builds one numeric row per person from sorted interest,
//!   skillset and race vocabularies plus min-max scaled age.
//! - **Raw similarity** is the all-pairs cosine similarity of those rows.
//! - **Adjustment** blends raw similarity with tenure proximity, gender
//!   agreement and an inclusive age band.
//! - **Matching** ranks positive-scoring mentors for every mentee.
//!
//! Suitability scores are computed alongside but are reported only; the
//! matcher never reads them.
//!
//! # Examples
//!
//! ```
//! use mentor_core::test_support::mentoring_population;
//! use mentor_scorer::{MatchPipeline, PipelineConfig};
//!
//! let output = MatchPipeline::new(PipelineConfig::default())
//!     .and_then(|pipeline| pipeline.run(&mentoring_population()))
//!     .expect("score population");
//! let ada = output.matches.get("Ada").expect("Ada is a mentee");
//! assert_eq!(ada.candidates.first().map(|c| c.name.as_str()), Some("Grace"));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod adjust;
mod encoder;
mod error;
mod matcher;
mod pipeline;
mod similarity;
mod suitability;

pub use adjust::{
    AdjusterConfig, AdjustmentInputs, AdjustmentWeights, DEFAULT_AGE_BAND_YEARS,
    DEFAULT_SECONDARY_WEIGHT, adjust_similarity,
};
pub use encoder::{Encoding, FeatureVocabulary, NormalizedAttribute, encode_population};
pub use error::{ScoringError, WeightsError};
pub use matcher::{DEFAULT_TOP_N, Matcher};
pub use pipeline::{MatchPipeline, PipelineConfig, PipelineOutput};
pub use similarity::{cosine_similarity, cosine_similarity_matrix};
pub use suitability::{SuitabilityWeights, suitability_scores};

/// Convert a count into `f64`, saturating at `u32::MAX`.
pub(crate) fn count_as_f64(count: usize) -> f64 {
    f64::from(u32::try_from(count).unwrap_or(u32::MAX))
}
