//! Blend raw similarity with secondary pairwise signals.
//!
//! For every ordered pair `(i, j)`:
//!
//! ```text
//! tenure = 1 - |tenure_i - tenure_j|          (normalized tenure)
//! gender = 1 if gender_i == gender_j else 0
//! age    = 1 if |age_i - age_j| <= band else 0  (raw years)
//! adjusted = (1 - w_t - w_g - w_a) * raw + w_t * tenure + w_g * gender + w_a * age
//! ```
//!
//! All three secondary terms are symmetric, so a symmetric raw matrix stays
//! symmetric. Any future asymmetric term breaks that property.

#![forbid(unsafe_code)]

use log::debug;
use mentor_core::SimilarityMatrix;

use crate::{ScoringError, WeightsError};

/// Default weight for each secondary signal.
pub const DEFAULT_SECONDARY_WEIGHT: f64 = 0.1;
/// Default inclusive age band, in years.
pub const DEFAULT_AGE_BAND_YEARS: f64 = 5.0;
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Weights applied to the secondary similarity signals.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AdjustmentWeights {
    /// Weight of tenure proximity.
    pub tenure: f64,
    /// Weight of gender agreement.
    pub gender: f64,
    /// Weight of age-band agreement.
    pub age: f64,
}

impl AdjustmentWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightsError::InvalidWeight`] when a weight is not finite or
    /// falls outside `0.0..=1.0`, and [`WeightsError::WeightOverflow`] when
    /// the weights sum above `1.0`.
    pub fn validate(self) -> Result<Self, WeightsError> {
        for (name, value) in self.named() {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(WeightsError::InvalidWeight { name, value });
            }
        }
        let total = self.total();
        if total > 1.0 + WEIGHT_SUM_TOLERANCE {
            return Err(WeightsError::WeightOverflow { total });
        }
        Ok(self)
    }

    /// Sum of the three weights.
    #[expect(clippy::float_arithmetic, reason = "weights are summed for validation")]
    #[must_use]
    pub fn total(self) -> f64 {
        self.tenure + self.gender + self.age
    }

    /// Share of the score left to the raw similarity.
    #[expect(
        clippy::float_arithmetic,
        reason = "the base share is one minus each secondary weight"
    )]
    #[must_use]
    pub fn base(self) -> f64 {
        1.0 - self.tenure - self.gender - self.age
    }

    const fn named(self) -> [(&'static str, f64); 3] {
        [
            ("tenure", self.tenure),
            ("gender", self.gender),
            ("age", self.age),
        ]
    }
}

impl Default for AdjustmentWeights {
    fn default() -> Self {
        Self {
            tenure: DEFAULT_SECONDARY_WEIGHT,
            gender: DEFAULT_SECONDARY_WEIGHT,
            age: DEFAULT_SECONDARY_WEIGHT,
        }
    }
}

/// Adjuster configuration: signal weights and the age band.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AdjusterConfig {
    /// Secondary signal weights.
    pub weights: AdjustmentWeights,
    /// Maximum age gap, in years, that still counts as the same band.
    pub age_band_years: f64,
}

impl AdjusterConfig {
    /// Validate weights and the age band.
    ///
    /// # Errors
    /// Propagates [`AdjustmentWeights::validate`] failures and returns
    /// [`WeightsError::InvalidAgeBand`] for a negative or non-finite band.
    pub fn validate(self) -> Result<Self, WeightsError> {
        self.weights.validate()?;
        if !self.age_band_years.is_finite() || self.age_band_years < 0.0 {
            return Err(WeightsError::InvalidAgeBand {
                value: self.age_band_years,
            });
        }
        Ok(self)
    }
}

impl Default for AdjusterConfig {
    fn default() -> Self {
        Self {
            weights: AdjustmentWeights::default(),
            age_band_years: DEFAULT_AGE_BAND_YEARS,
        }
    }
}

/// Per-person attributes consumed by the adjuster, in population order.
#[derive(Debug, Clone, Copy)]
pub struct AdjustmentInputs<'a> {
    /// Normalized years at office.
    pub tenure: &'a [f64],
    /// Gender labels.
    pub genders: &'a [&'a str],
    /// Raw ages in years.
    pub ages: &'a [f64],
}

/// Blend `raw` with tenure, gender and age-band agreement.
///
/// # Errors
/// Returns [`ScoringError::Weights`] for invalid configuration and
/// [`ScoringError::DimensionMismatch`] when an input slice does not match the
/// matrix size.
///
/// # Examples
/// ```
/// use mentor_core::SimilarityMatrix;
/// use mentor_scorer::{AdjusterConfig, AdjustmentInputs, adjust_similarity};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let raw = SimilarityMatrix::from_values(2, vec![1.0, 0.0, 0.0, 1.0])?;
/// let inputs = AdjustmentInputs {
///     tenure: &[0.0, 1.0],
///     genders: &["F", "F"],
///     ages: &[30.0, 33.0],
/// };
/// let adjusted = adjust_similarity(&raw, &inputs, &AdjusterConfig::default())?;
/// // 0.7 * 0.0 + 0.1 * 0.0 + 0.1 * 1.0 + 0.1 * 1.0
/// assert!((adjusted.get(0, 1).unwrap_or_default() - 0.2).abs() < 1e-12);
/// # Ok(())
/// # }
/// ```
pub fn adjust_similarity(
    raw: &SimilarityMatrix,
    inputs: &AdjustmentInputs<'_>,
    config: &AdjusterConfig,
) -> Result<SimilarityMatrix, ScoringError> {
    let config = config.validate()?;
    let n = raw.len();
    check_len("tenure", n, inputs.tenure.len())?;
    check_len("gender", n, inputs.genders.len())?;
    check_len("age", n, inputs.ages.len())?;

    let weights = config.weights;
    let base = weights.base();
    let mut adjusted = SimilarityMatrix::zeros(n);
    for i in 0..n {
        for j in 0..n {
            let (Some(raw_ij), Some(entry)) = (raw.get(i, j), adjusted.get_mut(i, j)) else {
                continue;
            };
            let signals = PairSignals {
                tenure: tenure_similarity(inputs.tenure, i, j),
                gender: gender_similarity(inputs.genders, i, j),
                age: age_similarity(inputs.ages, i, j, config.age_band_years),
            };
            *entry = blend(base, weights, raw_ij, signals);
        }
    }
    debug!(
        "adjusted {n}x{n} similarity with weights tenure={}, gender={}, age={}",
        weights.tenure, weights.gender, weights.age
    );
    Ok(adjusted)
}

#[derive(Debug, Clone, Copy)]
struct PairSignals {
    tenure: f64,
    gender: f64,
    age: f64,
}

#[expect(
    clippy::float_arithmetic,
    reason = "adjusted similarity is a weighted sum of the signals"
)]
fn blend(base: f64, weights: AdjustmentWeights, raw: f64, signals: PairSignals) -> f64 {
    base * raw
        + weights.tenure * signals.tenure
        + weights.gender * signals.gender
        + weights.age * signals.age
}

#[expect(
    clippy::float_arithmetic,
    reason = "tenure proximity is one minus the normalized gap"
)]
fn tenure_similarity(tenure: &[f64], i: usize, j: usize) -> f64 {
    match (tenure.get(i), tenure.get(j)) {
        (Some(a), Some(b)) => 1.0 - (a - b).abs(),
        _ => 0.0,
    }
}

fn gender_similarity(genders: &[&str], i: usize, j: usize) -> f64 {
    match (genders.get(i), genders.get(j)) {
        (Some(a), Some(b)) if a == b => 1.0,
        _ => 0.0,
    }
}

#[expect(clippy::float_arithmetic, reason = "the age gap is a difference in years")]
fn age_similarity(ages: &[f64], i: usize, j: usize, band: f64) -> f64 {
    match (ages.get(i), ages.get(j)) {
        (Some(a), Some(b)) if (a - b).abs() <= band => 1.0,
        _ => 0.0,
    }
}

fn check_len(stage: &'static str, expected: usize, found: usize) -> Result<(), ScoringError> {
    if expected == found {
        Ok(())
    } else {
        Err(ScoringError::DimensionMismatch {
            stage,
            expected,
            found,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn identity(n: usize) -> SimilarityMatrix {
        let mut matrix = SimilarityMatrix::zeros(n);
        for i in 0..n {
            if let Some(entry) = matrix.get_mut(i, i) {
                *entry = 1.0;
            }
        }
        matrix
    }

    #[rstest]
    #[case::default(AdjustmentWeights::default())]
    #[case::all_secondary(AdjustmentWeights { tenure: 0.5, gender: 0.25, age: 0.25 })]
    #[case::raw_only(AdjustmentWeights { tenure: 0.0, gender: 0.0, age: 0.0 })]
    fn accepts_weights_up_to_one(#[case] weights: AdjustmentWeights) {
        assert_eq!(weights.validate(), Ok(weights));
    }

    #[rstest]
    fn rejects_weight_overflow() {
        let weights = AdjustmentWeights {
            tenure: 0.5,
            gender: 0.5,
            age: 0.5,
        };
        assert!(matches!(
            weights.validate(),
            Err(WeightsError::WeightOverflow { .. })
        ));
    }

    #[rstest]
    #[case(-0.1)]
    #[case(1.5)]
    #[case(f64::NAN)]
    fn rejects_out_of_range_weight(#[case] value: f64) {
        let weights = AdjustmentWeights {
            gender: value,
            ..AdjustmentWeights::default()
        };
        assert!(matches!(
            weights.validate(),
            Err(WeightsError::InvalidWeight { name: "gender", .. })
        ));
    }

    #[rstest]
    fn rejects_negative_age_band() {
        let config = AdjusterConfig {
            age_band_years: -1.0,
            ..AdjusterConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(WeightsError::InvalidAgeBand { .. })
        ));
    }

    #[rstest]
    #[case::inside_band(30.0, 35.0, 1.0)]
    #[case::outside_band(30.0, 35.5, 0.0)]
    fn age_band_is_inclusive_hard_threshold(#[case] a: f64, #[case] b: f64, #[case] expected: f64) {
        assert_eq!(age_similarity(&[a, b], 0, 1, DEFAULT_AGE_BAND_YEARS), expected);
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "tests compare floating point values")]
    fn blends_each_signal() {
        let raw = SimilarityMatrix::from_values(2, vec![1.0, 0.5, 0.5, 1.0]).expect("shape");
        let inputs = AdjustmentInputs {
            tenure: &[0.25, 1.0],
            genders: &["F", "M"],
            ages: &[30.0, 40.0],
        };
        let adjusted =
            adjust_similarity(&raw, &inputs, &AdjusterConfig::default()).expect("adjust");
        // 0.7 * 0.5 + 0.1 * 0.25 + 0.1 * 0.0 + 0.1 * 0.0
        let off_diagonal = adjusted.get(0, 1).expect("entry");
        assert!((off_diagonal - 0.375).abs() < 1e-12, "got {off_diagonal}");
        let diagonal = adjusted.get(1, 1).expect("entry");
        assert!((diagonal - 1.0).abs() < 1e-12, "got {diagonal}");
        assert!(adjusted.is_symmetric(1e-15));
    }

    #[rstest]
    fn zero_weights_preserve_raw_matrix() {
        let raw = SimilarityMatrix::from_values(2, vec![1.0, 0.3, 0.3, 1.0]).expect("shape");
        let inputs = AdjustmentInputs {
            tenure: &[0.0, 1.0],
            genders: &["F", "M"],
            ages: &[20.0, 60.0],
        };
        let config = AdjusterConfig {
            weights: AdjustmentWeights {
                tenure: 0.0,
                gender: 0.0,
                age: 0.0,
            },
            ..AdjusterConfig::default()
        };
        let adjusted = adjust_similarity(&raw, &inputs, &config).expect("adjust");
        assert_eq!(adjusted, raw);
    }

    #[rstest]
    fn rejects_mismatched_inputs() {
        let inputs = AdjustmentInputs {
            tenure: &[0.0, 1.0],
            genders: &["F"],
            ages: &[20.0, 60.0],
        };
        let err = adjust_similarity(&identity(2), &inputs, &AdjusterConfig::default())
            .expect_err("length mismatch");
        assert_eq!(
            err,
            ScoringError::DimensionMismatch {
                stage: "gender",
                expected: 2,
                found: 1,
            }
        );
    }

    #[rstest]
    fn rejects_invalid_weights_before_scoring() {
        let config = AdjusterConfig {
            weights: AdjustmentWeights {
                tenure: 0.6,
                gender: 0.6,
                age: 0.0,
            },
            ..AdjusterConfig::default()
        };
        let inputs = AdjustmentInputs {
            tenure: &[0.0],
            genders: &["F"],
            ages: &[20.0],
        };
        let err = adjust_similarity(&identity(1), &inputs, &config).expect_err("overflow");
        assert!(matches!(
            err,
            ScoringError::Weights(WeightsError::WeightOverflow { .. })
        ));
    }
}
