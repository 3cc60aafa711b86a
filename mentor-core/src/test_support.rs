//! Test-only population fixtures shared by unit and behaviour tests.

use crate::{PersonRecord, Population, Role};

/// Build a population from records that are known to be valid.
///
/// # Panics
/// Panics when the records fail validation; fixtures should fail fast.
#[expect(clippy::expect_used, reason = "fixtures should fail fast during setup")]
#[must_use]
pub fn population_of(people: Vec<PersonRecord>) -> Population {
    Population::new(people).expect("fixture population must be valid")
}

/// Four-person population: one mentee, an identical mentor, a dissimilar
/// mentor and a second mentee sharing nothing with anyone.
///
/// Indices: `0 = Ada` (Junior), `1 = Grace` (Senior, Ada's twin),
/// `2 = Edsger` (Senior, opposite on every axis), `3 = Linus` (Junior).
#[must_use]
pub fn mentoring_population() -> Population {
    population_of(vec![
        PersonRecord::new("Ada", Role::JuniorPm)
            .with_interests(["chess"])
            .with_skillsets(["roadmaps"])
            .with_race("Asian")
            .with_gender("F")
            .with_age(30.0)
            .with_tenure(2.0),
        PersonRecord::new("Grace", Role::SeniorPm)
            .with_interests(["chess"])
            .with_skillsets(["roadmaps"])
            .with_race("Asian")
            .with_gender("F")
            .with_age(30.0)
            .with_tenure(2.0),
        PersonRecord::new("Edsger", Role::SeniorPm)
            .with_skillsets(["sql"])
            .with_race("White")
            .with_gender("M")
            .with_age(60.0)
            .with_tenure(0.0),
        PersonRecord::new("Linus", Role::JuniorPm)
            .with_interests(["sailing"])
            .with_race("Black")
            .with_gender("M")
            .with_age(45.0)
            .with_tenure(4.0),
    ])
}

/// Deterministic synthetic population of `size` people.
///
/// Tags, labels and numeric attributes cycle through small vocabularies so
/// every attribute has spread once `size >= 4`. Even indices are Junior PMs.
#[must_use]
pub fn synthetic_population(size: usize) -> Population {
    const INTERESTS: [&str; 5] = ["chess", "cycling", "hiking", "music", "sailing"];
    const SKILLSETS: [&str; 4] = ["analytics", "roadmaps", "sql", "ux"];
    const RACES: [&str; 3] = ["Asian", "Black", "White"];
    const GENDERS: [&str; 2] = ["F", "M"];

    let people = (0..size)
        .map(|index| {
            let role = if index.is_multiple_of(2) {
                Role::JuniorPm
            } else {
                Role::SeniorPm
            };
            let stride = index.wrapping_mul(7);
            let second_interest = stride.checked_div(3).unwrap_or(0);
            let gender = index.checked_div(2).unwrap_or(0);
            let age_years = stride.checked_rem(40).unwrap_or(0).saturating_add(22);
            let age = f64::from(u8::try_from(age_years).unwrap_or(22));
            let tenure = f64::from(u8::try_from(index.checked_rem(11).unwrap_or(0)).unwrap_or(0));
            PersonRecord::new(format!("person-{index:04}"), role)
                .with_interests([pick(&INTERESTS, index), pick(&INTERESTS, second_interest)])
                .with_skillsets([pick(&SKILLSETS, stride)])
                .with_race(pick(&RACES, index))
                .with_gender(pick(&GENDERS, gender))
                .with_age(age)
                .with_tenure(tenure)
        })
        .collect();
    population_of(people)
}

fn pick(items: &[&'static str], index: usize) -> &'static str {
    items
        .get(index.checked_rem(items.len()).unwrap_or(0))
        .copied()
        .unwrap_or_default()
}
