//! Rank mentor candidates for every mentee.
//!
//! For each person holding the mentee role, candidates are the people holding
//! the mentor role whose adjusted similarity is strictly positive. Candidates
//! are ordered by score, highest first, with ties broken by name so the output
//! never depends on population order. At most `top_n` survive.

#![forbid(unsafe_code)]

use std::cmp::Ordering;

use log::{debug, info};
use mentor_core::{MatchCandidate, MatchResult, MemberMatches, Population, Role, SimilarityMatrix};

use crate::ScoringError;

/// Default number of candidates kept per mentee.
pub const DEFAULT_TOP_N: usize = 3;

/// Selects mentee and mentor subgroups and how many candidates to keep.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Matcher {
    /// Role whose members receive match lists.
    pub mentee_role: Role,
    /// Role whose members are eligible candidates.
    pub mentor_role: Role,
    /// Maximum number of candidates per mentee.
    pub top_n: usize,
}

impl Default for Matcher {
    fn default() -> Self {
        Self {
            mentee_role: Role::JuniorPm,
            mentor_role: Role::SeniorPm,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl Matcher {
    /// Produce ranked match lists from an adjusted similarity matrix.
    ///
    /// Every mentee appears in the result, in population order, even when no
    /// candidate scores above zero. When both roles are equal a mentee may be
    /// listed as their own candidate.
    ///
    /// # Errors
    /// Returns [`ScoringError::DimensionMismatch`] when `similarity` does not
    /// cover exactly the people in `population`.
    ///
    /// # Examples
    /// ```
    /// use mentor_core::{PersonRecord, Population, Role, SimilarityMatrix};
    /// use mentor_scorer::Matcher;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let population = Population::new(vec![
    ///     PersonRecord::new("Ada", Role::JuniorPm),
    ///     PersonRecord::new("Grace", Role::SeniorPm),
    /// ])?;
    /// let similarity = SimilarityMatrix::from_values(2, vec![1.0, 0.8, 0.8, 1.0])?;
    /// let result = Matcher::default().find_matches(&similarity, &population)?;
    /// let ada = result.get("Ada").map(|m| m.scores());
    /// assert_eq!(ada, Some(vec![0.8]));
    /// # Ok(())
    /// # }
    /// ```
    pub fn find_matches(
        &self,
        similarity: &SimilarityMatrix,
        population: &Population,
    ) -> Result<MatchResult, ScoringError> {
        if similarity.len() != population.len() {
            return Err(ScoringError::DimensionMismatch {
                stage: "matcher",
                expected: population.len(),
                found: similarity.len(),
            });
        }

        let mentees = population.indices_with_role(self.mentee_role);
        let mentors = population.indices_with_role(self.mentor_role);
        debug!(
            "matching {} {} mentees against {} {} mentors",
            mentees.len(),
            self.mentee_role,
            mentors.len(),
            self.mentor_role
        );

        let members: Vec<MemberMatches> = mentees
            .iter()
            .filter_map(|&mentee| {
                let person = population.get(mentee)?;
                Some(MemberMatches {
                    member: person.name.clone(),
                    candidates: self.rank(mentee, &mentors, similarity, population),
                })
            })
            .collect();

        let unmatched = members.iter().filter(|m| m.candidates.is_empty()).count();
        info!(
            "produced match lists for {} mentees ({unmatched} without candidates)",
            members.len()
        );
        Ok(MatchResult::new(members))
    }

    fn rank(
        &self,
        mentee: usize,
        mentors: &[usize],
        similarity: &SimilarityMatrix,
        population: &Population,
    ) -> Vec<MatchCandidate> {
        if self.top_n == 0 {
            return Vec::new();
        }
        let mut candidates: Vec<MatchCandidate> = mentors
            .iter()
            .filter_map(|&mentor| {
                let score = similarity.get(mentee, mentor)?;
                let person = population.get(mentor)?;
                (score > 0.0).then(|| MatchCandidate::snapshot(person, score))
            })
            .collect();
        candidates.sort_by(by_score_then_name);
        candidates.truncate(self.top_n);
        candidates
    }
}

fn by_score_then_name(a: &MatchCandidate, b: &MatchCandidate) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.name.cmp(&b.name))
}
