//! Ranked match lists produced for each mentee.
//!
//! A [`MatchResult`] maps every member of the mentee subgroup to an ordered
//! list of at most `top_n` [`MatchCandidate`]s from the mentor subgroup.
//! Candidates carry a snapshot of the mentor's attributes at the time of
//! matching rather than a reference into the population.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{PersonRecord, Tags};

/// A single ranked mentor candidate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchCandidate {
    /// Candidate's name.
    pub name: String,
    /// Adjusted similarity between mentee and candidate.
    pub score: f64,
    /// Candidate interests at matching time.
    pub interests: Tags,
    /// Candidate skillsets at matching time.
    pub skillsets: Tags,
    /// Candidate age at matching time.
    pub age: f64,
}

impl MatchCandidate {
    /// Snapshot `person` with the given `score`.
    #[must_use]
    pub fn snapshot(person: &PersonRecord, score: f64) -> Self {
        Self {
            name: person.name.clone(),
            score,
            interests: person.interests.clone(),
            skillsets: person.skillsets.clone(),
            age: person.age,
        }
    }
}

/// Candidates ranked for one mentee, best first.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MemberMatches {
    /// Mentee's name.
    pub member: String,
    /// Ranked candidates, highest score first.
    pub candidates: Vec<MatchCandidate>,
}

impl MemberMatches {
    /// Candidate scores in rank order.
    #[must_use]
    pub fn scores(&self) -> Vec<f64> {
        self.candidates.iter().map(|c| c.score).collect()
    }
}

/// Match lists for every mentee, in population order.
///
/// # Examples
/// ```
/// use mentor_core::{MatchResult, MemberMatches};
///
/// let result = MatchResult::new(vec![MemberMatches {
///     member: "Ada".into(),
///     candidates: Vec::new(),
/// }]);
/// assert_eq!(result.len(), 1);
/// assert!(result.get("Ada").is_some_and(|m| m.candidates.is_empty()));
/// assert!(result.get("Grace").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MatchResult {
    members: Vec<MemberMatches>,
}

impl MatchResult {
    /// Wrap per-member match lists.
    #[expect(
        clippy::missing_const_for_fn,
        reason = "match lists are produced at runtime by the matcher"
    )]
    #[must_use]
    pub fn new(members: Vec<MemberMatches>) -> Self {
        Self { members }
    }

    /// Match list for the mentee called `member`, if present.
    #[must_use]
    pub fn get(&self, member: &str) -> Option<&MemberMatches> {
        self.members.iter().find(|m| m.member == member)
    }

    /// Iterate over mentees in population order.
    pub fn iter(&self) -> std::slice::Iter<'_, MemberMatches> {
        self.members.iter()
    }

    /// Number of mentees.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Report whether there are no mentees.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Consume the result and return the per-member lists.
    #[must_use]
    pub fn into_inner(self) -> Vec<MemberMatches> {
        self.members
    }
}

impl<'a> IntoIterator for &'a MatchResult {
    type Item = &'a MemberMatches;
    type IntoIter = std::slice::Iter<'a, MemberMatches>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
