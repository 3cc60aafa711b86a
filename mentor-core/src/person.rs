//! Person records: one row of the population dataset.

use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Role;

/// Ordered set of free-form tags (interests or skillsets).
pub type Tags = BTreeSet<String>;

/// A single employee profile.
///
/// Records are assembled with the chaining `with_*` methods and checked by
/// [`PersonRecord::validate`] (which [`Population::new`](crate::Population::new)
/// calls for every record). Tags are stored in a [`BTreeSet`], so duplicates
/// collapse and iteration is lexicographic.
///
/// # Examples
/// ```
/// use mentor_core::{PersonRecord, Role};
///
/// let person = PersonRecord::new("Ada", Role::JuniorPm)
///     .with_age(29.0)
///     .with_tenure(2.0)
///     .with_interests(["hiking", "chess", "hiking"]);
/// assert_eq!(person.interests.len(), 2);
/// assert!(person.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PersonRecord {
    /// Unique display name.
    pub name: String,
    /// Role used to partition the population.
    pub role: Role,
    /// Interest tags.
    pub interests: Tags,
    /// Skillset tags.
    pub skillsets: Tags,
    /// Categorical race label.
    pub race: String,
    /// Categorical gender label.
    pub gender: String,
    /// Age in years.
    pub age: f64,
    /// Years at the office.
    pub tenure: f64,
}

/// Errors returned by [`PersonRecord::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PersonRecordError {
    /// The name was empty or whitespace.
    #[error("person name must not be empty")]
    EmptyName,
    /// Age was negative or not finite.
    #[error("age {value} for '{name}' must be finite and non-negative")]
    InvalidAge {
        /// Offending person.
        name: String,
        /// Rejected value.
        value: f64,
    },
    /// Tenure was negative or not finite.
    #[error("years at office {value} for '{name}' must be finite and non-negative")]
    InvalidTenure {
        /// Offending person.
        name: String,
        /// Rejected value.
        value: f64,
    },
}

impl PersonRecord {
    /// Start a record with empty tags, empty labels and zero age and tenure.
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            interests: Tags::new(),
            skillsets: Tags::new(),
            race: String::new(),
            gender: String::new(),
            age: 0.0,
            tenure: 0.0,
        }
    }

    /// Replace the interest tags.
    #[must_use]
    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests = interests.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the skillset tags.
    #[must_use]
    pub fn with_skillsets<I, S>(mut self, skillsets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skillsets = skillsets.into_iter().map(Into::into).collect();
        self
    }

    /// Set the race label.
    #[must_use]
    pub fn with_race(mut self, race: impl Into<String>) -> Self {
        self.race = race.into();
        self
    }

    /// Set the gender label.
    #[must_use]
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    /// Set the age in years.
    #[must_use]
    pub fn with_age(mut self, age: f64) -> Self {
        self.age = age;
        self
    }

    /// Set the years at office.
    #[must_use]
    pub fn with_tenure(mut self, tenure: f64) -> Self {
        self.tenure = tenure;
        self
    }

    /// Check the record's invariants.
    ///
    /// # Errors
    /// Returns [`PersonRecordError`] for an empty name or a negative or
    /// non-finite age or tenure.
    pub fn validate(&self) -> Result<(), PersonRecordError> {
        if self.name.trim().is_empty() {
            return Err(PersonRecordError::EmptyName);
        }
        if !is_non_negative(self.age) {
            return Err(PersonRecordError::InvalidAge {
                name: self.name.clone(),
                value: self.age,
            });
        }
        if !is_non_negative(self.tenure) {
            return Err(PersonRecordError::InvalidTenure {
                name: self.name.clone(),
                value: self.tenure,
            });
        }
        Ok(())
    }
}

const fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
