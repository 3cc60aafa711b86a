//! Standalone per-person suitability scores.
//!
//! The score rewards seniority and breadth:
//!
//! ```text
//! 0.1 * age + 0.1 * tenure
//!   + 0.4 * interests_i / |interest vocabulary|
//!   + 0.4 * skillsets_i / |skillset vocabulary|
//! ```
//!
//! Age and tenure are the normalized values from the encoder. The breadth
//! denominators are the global vocabulary sizes, identical for everyone. An
//! empty vocabulary contributes `0.0`. The matcher does not consume these
//! scores.

#![forbid(unsafe_code)]

use mentor_core::Population;

use crate::{Encoding, ScoringError, WeightsError, count_as_f64};

/// Coefficients of the suitability formula.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SuitabilityWeights {
    /// Multiplier for normalized age.
    pub age: f64,
    /// Multiplier for normalized years at office.
    pub tenure: f64,
    /// Multiplier for interest breadth.
    pub interests: f64,
    /// Multiplier for skillset breadth.
    pub skillsets: f64,
}

impl SuitabilityWeights {
    /// Validate the coefficients and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightsError::InvalidWeight`] when a coefficient is negative
    /// or not finite.
    pub fn validate(self) -> Result<Self, WeightsError> {
        let named = [
            ("suitability age", self.age),
            ("suitability tenure", self.tenure),
            ("suitability interests", self.interests),
            ("suitability skillsets", self.skillsets),
        ];
        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(WeightsError::InvalidWeight { name, value });
            }
        }
        Ok(self)
    }
}

impl Default for SuitabilityWeights {
    fn default() -> Self {
        Self {
            age: 0.1,
            tenure: 0.1,
            interests: 0.4,
            skillsets: 0.4,
        }
    }
}

/// Score every person in `population`, in population order.
///
/// # Errors
/// Returns [`ScoringError::Weights`] for invalid coefficients and
/// [`ScoringError::DimensionMismatch`] when `encoding` was built for a
/// different population.
pub fn suitability_scores(
    population: &Population,
    encoding: &Encoding,
    weights: SuitabilityWeights,
) -> Result<Vec<f64>, ScoringError> {
    let weights = weights.validate()?;
    if encoding.features.rows() != population.len() {
        return Err(ScoringError::DimensionMismatch {
            stage: "suitability",
            expected: population.len(),
            found: encoding.features.rows(),
        });
    }

    let interest_width = encoding.vocabulary.interests().len();
    let skillset_width = encoding.vocabulary.skillsets().len();
    let skillset_end = interest_width.saturating_add(skillset_width);

    let scores = encoding
        .features
        .iter_rows()
        .enumerate()
        .map(|(index, row)| {
            let interests = block_sum(row, 0, interest_width);
            let skillsets = block_sum(row, interest_width, skillset_end);
            let parts = ScoreParts {
                age: encoding.age.values.get(index).copied().unwrap_or_default(),
                tenure: encoding.tenure.values.get(index).copied().unwrap_or_default(),
                interests: breadth(interests, interest_width),
                skillsets: breadth(skillsets, skillset_width),
            };
            parts.combine(weights)
        })
        .collect();
    Ok(scores)
}

struct ScoreParts {
    age: f64,
    tenure: f64,
    interests: f64,
    skillsets: f64,
}

impl ScoreParts {
    #[expect(
        clippy::float_arithmetic,
        reason = "suitability is a weighted sum of its parts"
    )]
    fn combine(&self, weights: SuitabilityWeights) -> f64 {
        weights.age * self.age
            + weights.tenure * self.tenure
            + weights.interests * self.interests
            + weights.skillsets * self.skillsets
    }
}

fn block_sum(row: &[f64], start: usize, end: usize) -> f64 {
    row.get(start..end).map_or(0.0, |block| block.iter().sum())
}

#[expect(
    clippy::float_arithmetic,
    reason = "breadth divides a tag count by the vocabulary size"
)]
fn breadth(count: f64, vocabulary_size: usize) -> f64 {
    if vocabulary_size == 0 {
        return 0.0;
    }
    count / count_as_f64(vocabulary_size)
}
