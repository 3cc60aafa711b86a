//! Error types raised by the scoring pipeline.
#![forbid(unsafe_code)]

use mentor_core::MatrixShapeError;
use thiserror::Error;

/// Configuration values rejected before any scoring runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightsError {
    /// A weight was negative, above one, or not finite.
    #[error("{name} weight {value} must be a finite value in 0.0..=1.0")]
    InvalidWeight {
        /// Name of the offending weight.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// The adjustment weights sum above one, which would make the base
    /// similarity contribution negative.
    #[error("adjustment weights sum to {total}, which exceeds 1.0")]
    WeightOverflow {
        /// Sum of the tenure, gender and age weights.
        total: f64,
    },
    /// The age band was negative or not finite.
    #[error("age band {value} must be a finite, non-negative number of years")]
    InvalidAgeBand {
        /// Rejected value.
        value: f64,
    },
}

/// Errors raised while scoring a population.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    /// Pipeline configuration was invalid.
    #[error(transparent)]
    Weights(#[from] WeightsError),
    /// Inputs to a stage disagreed on the population size.
    #[error("{stage} expected {expected} entries but found {found}")]
    DimensionMismatch {
        /// Stage that detected the mismatch.
        stage: &'static str,
        /// Size implied by the similarity matrix or population.
        expected: usize,
        /// Size actually supplied.
        found: usize,
    },
    /// A matrix could not be assembled.
    #[error("failed to build the {stage} matrix")]
    Shape {
        /// Stage that built the matrix.
        stage: &'static str,
        /// Source shape error.
        #[source]
        source: MatrixShapeError,
    },
}
