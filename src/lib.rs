//! Facade crate for the mentor matching engine.
//!
//! This crate re-exports the population model, the dataset loader, and the
//! scoring pipeline so embedders can depend on a single crate.

#![forbid(unsafe_code)]

pub use mentor_core::{
    MatchCandidate, MatchResult, MemberMatches, PersonRecord, Population, PopulationError, Role,
    SimilarityMatrix, Tags, UnknownRoleError,
};

pub use mentor_data::{LoadPopulationError, PopulationFormat, load_population};

pub use mentor_scorer::{
    AdjusterConfig, AdjustmentWeights, MatchPipeline, Matcher, PipelineConfig, PipelineOutput,
    ScoringError, SuitabilityWeights,
};
