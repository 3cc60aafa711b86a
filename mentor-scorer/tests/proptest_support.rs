//! Proptest strategies for scoring pipeline property tests.
//!
//! Generated populations always pass validation: names are reassigned from
//! the position so they stay unique, and ages and tenures are non-negative.

use std::collections::BTreeSet;

use mentor_core::{PersonRecord, Population, Role};
use proptest::prelude::*;

const INTERESTS: [&str; 6] = ["chess", "cycling", "hiking", "music", "sailing", "yoga"];
const SKILLSETS: [&str; 4] = ["analytics", "roadmaps", "sql", "ux"];
const RACES: [&str; 3] = ["Asian", "Black", "White"];
const GENDERS: [&str; 3] = ["F", "M", "X"];

/// Strategy for a valid population of `min_count..=max_count` people.
pub fn population_strategy(
    min_count: usize,
    max_count: usize,
) -> impl Strategy<Value = Population> {
    proptest::collection::vec(person_strategy(), min_count..=max_count).prop_map(|people| {
        let renamed = people
            .into_iter()
            .enumerate()
            .map(|(index, mut person)| {
                person.name = format!("person-{index:03}");
                person
            })
            .collect();
        Population::new(renamed).unwrap_or_default()
    })
}

/// Strategy for a single record with a placeholder name.
fn person_strategy() -> impl Strategy<Value = PersonRecord> {
    let role = prop_oneof![Just(Role::JuniorPm), Just(Role::SeniorPm)];
    (
        role,
        tag_subset(&INTERESTS),
        tag_subset(&SKILLSETS),
        proptest::sample::select(RACES.to_vec()),
        proptest::sample::select(GENDERS.to_vec()),
        18_u8..=70_u8,
        0_u8..=30_u8,
    )
        .prop_map(|(role, interests, skillsets, race, gender, age, tenure)| {
            PersonRecord::new("placeholder", role)
                .with_interests(interests)
                .with_skillsets(skillsets)
                .with_race(race)
                .with_gender(gender)
                .with_age(f64::from(age))
                .with_tenure(f64::from(tenure))
        })
}

fn tag_subset(vocabulary: &'static [&'static str]) -> impl Strategy<Value = BTreeSet<String>> {
    proptest::sample::subsequence(vocabulary.to_vec(), 0..=vocabulary.len())
        .prop_map(|tags| tags.into_iter().map(str::to_owned).collect())
}
