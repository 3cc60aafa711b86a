//! Feature encoding: turn person records into fixed-width numeric rows.
//!
//! Column layout, left to right:
//!
//! ```text
//! [ interest multi-hot | skillset multi-hot | normalized age | race one-hot ]
//! ```
//!
//! Vocabularies are fitted on the whole population and sorted
//! lexicographically, so identical input always yields a bit-identical
//! matrix. Gender is deliberately absent; it only feeds the adjuster.

#![forbid(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, warn};
use mentor_core::{DenseMatrix, Population};

use crate::ScoringError;

/// Sorted vocabularies observed across the population.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeatureVocabulary {
    interests: Vec<String>,
    skillsets: Vec<String>,
    races: Vec<String>,
}

impl FeatureVocabulary {
    /// Fit vocabularies on every record of `population`.
    #[must_use]
    pub fn fit(population: &Population) -> Self {
        let interests: BTreeSet<&str> = population
            .iter()
            .flat_map(|p| p.interests.iter().map(String::as_str))
            .collect();
        let skillsets: BTreeSet<&str> = population
            .iter()
            .flat_map(|p| p.skillsets.iter().map(String::as_str))
            .collect();
        let races: BTreeSet<&str> = population.iter().map(|p| p.race.as_str()).collect();
        Self {
            interests: interests.into_iter().map(str::to_owned).collect(),
            skillsets: skillsets.into_iter().map(str::to_owned).collect(),
            races: races.into_iter().map(str::to_owned).collect(),
        }
    }

    /// Distinct interest tags in column order.
    #[must_use]
    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    /// Distinct skillset tags in column order.
    #[must_use]
    pub fn skillsets(&self) -> &[String] {
        &self.skillsets
    }

    /// Distinct race labels in column order.
    #[must_use]
    pub fn races(&self) -> &[String] {
        &self.races
    }

    /// Total feature width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.age_column()
            .saturating_add(1)
            .saturating_add(self.races.len())
    }

    /// Column holding the normalized age.
    #[must_use]
    pub fn age_column(&self) -> usize {
        self.interests.len().saturating_add(self.skillsets.len())
    }

    /// Human-readable name for every column, in order.
    #[must_use]
    pub fn column_names(&self) -> Vec<String> {
        let interests = self.interests.iter().map(|tag| format!("interest:{tag}"));
        let skillsets = self.skillsets.iter().map(|tag| format!("skillset:{tag}"));
        let races = self.races.iter().map(|label| format!("race:{label}"));
        interests
            .chain(skillsets)
            .chain(std::iter::once("age".to_owned()))
            .chain(races)
            .collect()
    }
}

/// A continuous attribute min-max scaled into `0.0..=1.0`.
///
/// When every value is identical the attribute is `degenerate` and all
/// normalized values are `0.0`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedAttribute {
    /// Normalized values in population order.
    pub values: Vec<f64>,
    /// Population minimum of the raw values.
    pub min: f64,
    /// Population maximum of the raw values.
    pub max: f64,
    /// Whether `min == max` forced every value to `0.0`.
    pub degenerate: bool,
}

impl NormalizedAttribute {
    /// Min-max scale `raw`, logging `name` when the range collapses.
    #[expect(
        clippy::float_arithmetic,
        reason = "min-max scaling subtracts and divides by the range"
    )]
    #[must_use]
    pub fn min_max(name: &str, raw: &[f64]) -> Self {
        let Some(&first) = raw.first() else {
            return Self::default();
        };
        let (min, max) = raw
            .iter()
            .fold((first, first), |(lo, hi), &value| (lo.min(value), hi.max(value)));
        let range = max - min;
        if range == 0.0 {
            warn!("every {name} value equals {min}; normalizing {name} to 0.0 for all people");
            return Self {
                values: vec![0.0; raw.len()],
                min,
                max,
                degenerate: true,
            };
        }
        Self {
            values: raw.iter().map(|value| (value - min) / range).collect(),
            min,
            max,
            degenerate: false,
        }
    }
}

/// Everything the downstream stages need from the encoder.
#[derive(Debug, Clone, PartialEq)]
pub struct Encoding {
    /// One row per person, see the module docs for the layout.
    pub features: DenseMatrix,
    /// Vocabularies defining the categorical columns.
    pub vocabulary: FeatureVocabulary,
    /// Normalized age, also stored in the age column.
    pub age: NormalizedAttribute,
    /// Normalized years at office.
    pub tenure: NormalizedAttribute,
}

/// Encode `population` into a feature matrix.
///
/// # Errors
/// Returns [`ScoringError::Shape`] when the matrix cannot be allocated.
///
/// # Examples
/// ```
/// use mentor_core::{PersonRecord, Population, Role};
/// use mentor_scorer::encode_population;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let population = Population::new(vec![
///     PersonRecord::new("Ada", Role::JuniorPm).with_interests(["chess"]).with_age(30.0),
///     PersonRecord::new("Grace", Role::SeniorPm).with_skillsets(["sql"]).with_age(40.0),
/// ])?;
/// let encoding = encode_population(&population)?;
/// assert_eq!(encoding.vocabulary.column_names(), ["interest:chess", "skillset:sql", "age", "race:"]);
/// assert_eq!(encoding.features.row(1), Some(&[0.0, 1.0, 1.0, 1.0][..]));
/// # Ok(())
/// # }
/// ```
pub fn encode_population(population: &Population) -> Result<Encoding, ScoringError> {
    let vocabulary = FeatureVocabulary::fit(population);
    let ages: Vec<f64> = population.iter().map(|p| p.age).collect();
    let tenures: Vec<f64> = population.iter().map(|p| p.tenure).collect();
    let age = NormalizedAttribute::min_max("age", &ages);
    let tenure = NormalizedAttribute::min_max("years at office", &tenures);

    let mut features = DenseMatrix::zeros(population.len(), vocabulary.width())
        .map_err(|source| ScoringError::Shape {
            stage: "feature",
            source,
        })?;

    let interest_columns = column_index(vocabulary.interests(), 0);
    let skillset_columns = column_index(vocabulary.skillsets(), vocabulary.interests().len());
    let race_columns = column_index(vocabulary.races(), vocabulary.age_column().saturating_add(1));

    for (row, person) in population.iter().enumerate() {
        let tags = person
            .interests
            .iter()
            .filter_map(|tag| interest_columns.get(tag.as_str()))
            .chain(
                person
                    .skillsets
                    .iter()
                    .filter_map(|tag| skillset_columns.get(tag.as_str())),
            )
            .chain(race_columns.get(person.race.as_str()));
        for &col in tags {
            set(&mut features, row, col, 1.0);
        }
        let age_value = age.values.get(row).copied().unwrap_or_default();
        set(&mut features, row, vocabulary.age_column(), age_value);
    }

    debug!(
        "encoded {} people into {} feature columns ({} interests, {} skillsets, {} races)",
        features.rows(),
        features.cols(),
        vocabulary.interests().len(),
        vocabulary.skillsets().len(),
        vocabulary.races().len(),
    );

    Ok(Encoding {
        features,
        vocabulary,
        age,
        tenure,
    })
}

fn column_index(labels: &[String], offset: usize) -> BTreeMap<&str, usize> {
    labels
        .iter()
        .enumerate()
        .map(|(position, label)| (label.as_str(), offset.saturating_add(position)))
        .collect()
}

fn set(matrix: &mut DenseMatrix, row: usize, col: usize, value: f64) {
    if let Some(entry) = matrix.get_mut(row, col) {
        *entry = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentor_core::test_support::{mentoring_population, population_of};
    use mentor_core::{PersonRecord, Role};
    use rstest::rstest;

    #[rstest]
    fn vocabularies_are_sorted_and_independent() {
        let population = population_of(vec![
            PersonRecord::new("Ada", Role::JuniorPm)
                .with_interests(["sql", "chess"])
                .with_race("White"),
            PersonRecord::new("Grace", Role::SeniorPm)
                .with_interests(["archery"])
                .with_skillsets(["sql"])
                .with_race("Asian"),
        ]);
        let vocabulary = FeatureVocabulary::fit(&population);
        assert_eq!(vocabulary.interests(), ["archery", "chess", "sql"]);
        assert_eq!(vocabulary.skillsets(), ["sql"]);
        assert_eq!(vocabulary.races(), ["Asian", "White"]);
        assert_eq!(vocabulary.width(), 7);
        assert_eq!(vocabulary.age_column(), 4);
    }

    #[rstest]
    fn rows_follow_column_layout() {
        let encoding = encode_population(&mentoring_population()).expect("encode");
        assert_eq!(
            encoding.vocabulary.column_names(),
            [
                "interest:chess",
                "interest:sailing",
                "skillset:roadmaps",
                "skillset:sql",
                "age",
                "race:Asian",
                "race:Black",
                "race:White",
            ]
        );
        assert_eq!(
            encoding.features.row(0),
            Some(&[1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0][..])
        );
        assert_eq!(
            encoding.features.row(2),
            Some(&[0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0][..])
        );
        assert_eq!(
            encoding.features.row(3),
            Some(&[0.0, 1.0, 0.0, 0.0, 0.5, 0.0, 1.0, 0.0][..])
        );
    }

    #[rstest]
    fn normalizes_tenure_against_population_range() {
        let encoding = encode_population(&mentoring_population()).expect("encode");
        assert_eq!(encoding.tenure.values, vec![0.5, 0.5, 0.0, 1.0]);
        assert_eq!(encoding.tenure.min, 0.0);
        assert_eq!(encoding.tenure.max, 4.0);
        assert!(!encoding.tenure.degenerate);
    }

    #[rstest]
    fn degenerate_range_normalizes_to_zero() {
        let attribute = NormalizedAttribute::min_max("age", &[40.0, 40.0, 40.0]);
        assert!(attribute.degenerate);
        assert_eq!(attribute.values, vec![0.0, 0.0, 0.0]);
        assert!(attribute.values.iter().all(|v| v.is_finite()));
    }

    #[rstest]
    fn single_person_is_degenerate() {
        let population = population_of(vec![
            PersonRecord::new("Solo", Role::JuniorPm).with_age(33.0).with_tenure(1.0),
        ]);
        let encoding = encode_population(&population).expect("encode");
        assert!(encoding.age.degenerate);
        assert!(encoding.tenure.degenerate);
        assert_eq!(encoding.features.get(0, encoding.vocabulary.age_column()), Some(0.0));
    }

    #[rstest]
    fn empty_population_encodes_to_empty_matrix() {
        let population = population_of(Vec::new());
        let encoding = encode_population(&population).expect("encode");
        assert_eq!(encoding.features.rows(), 0);
        assert!(encoding.age.values.is_empty());
        assert!(!encoding.age.degenerate);
    }

    #[rstest]
    fn encoding_is_deterministic() {
        let first = encode_population(&mentoring_population()).expect("encode");
        let second = encode_population(&mentoring_population()).expect("encode");
        let bits = |e: &Encoding| -> Vec<u64> {
            e.features.as_slice().iter().map(|v| v.to_bits()).collect()
        };
        assert_eq!(bits(&first), bits(&second));
        assert_eq!(first.vocabulary, second.vocabulary);
    }
}
