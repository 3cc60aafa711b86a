//! The ordered, validated collection of person records.
//!
//! The position of a record in the population is its identity for every
//! derived matrix: row `i` of a feature or similarity matrix always refers to
//! `population.get(i)`.

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::Serialize;
use thiserror::Error;

use crate::{PersonRecord, PersonRecordError, Role};

/// Index-addressable population of person records.
///
/// # Examples
/// ```
/// use mentor_core::{PersonRecord, Population, Role};
///
/// # fn main() -> Result<(), mentor_core::PopulationError> {
/// let population = Population::new(vec![
///     PersonRecord::new("Ada", Role::JuniorPm),
///     PersonRecord::new("Grace", Role::SeniorPm),
/// ])?;
/// assert_eq!(population.len(), 2);
/// assert_eq!(population.indices_with_role(Role::SeniorPm), vec![1]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Population {
    people: Vec<PersonRecord>,
}

/// Errors returned by [`Population::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PopulationError {
    /// A record failed validation.
    #[error("record {index} is malformed: {source}")]
    MalformedRecord {
        /// Position of the record in the input.
        index: usize,
        /// Underlying validation failure.
        #[source]
        source: PersonRecordError,
    },
    /// Two records share a name.
    #[error("duplicate person name '{name}' at record {index}")]
    DuplicateName {
        /// Repeated name.
        name: String,
        /// Position of the second occurrence.
        index: usize,
    },
}

impl Population {
    /// Validate every record and build a population.
    ///
    /// The first invalid record fails the whole population so index alignment
    /// never silently shifts.
    ///
    /// # Errors
    /// Returns [`PopulationError`] when a record is malformed or a name is
    /// repeated.
    pub fn new(people: Vec<PersonRecord>) -> Result<Self, PopulationError> {
        let mut seen = HashSet::with_capacity(people.len());
        for (index, person) in people.iter().enumerate() {
            person
                .validate()
                .map_err(|source| PopulationError::MalformedRecord { index, source })?;
            if !seen.insert(person.name.as_str()) {
                return Err(PopulationError::DuplicateName {
                    name: person.name.clone(),
                    index,
                });
            }
        }
        Ok(Self { people })
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Report whether the population has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Return the record at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PersonRecord> {
        self.people.get(index)
    }

    /// Iterate over records in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, PersonRecord> {
        self.people.iter()
    }

    /// Borrow the records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[PersonRecord] {
        &self.people
    }

    /// Find the index of the record with `name`.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.people.iter().position(|person| person.name == name)
    }

    /// Indices of every record holding `role`, in ascending order.
    #[must_use]
    pub fn indices_with_role(&self, role: Role) -> Vec<usize> {
        self.people
            .iter()
            .enumerate()
            .filter(|(_, person)| person.role == role)
            .map(|(index, _)| index)
            .collect()
    }

    /// Consume the population and return its records.
    #[must_use]
    pub fn into_inner(self) -> Vec<PersonRecord> {
        self.people
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a PersonRecord;
    type IntoIter = std::slice::Iter<'a, PersonRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
