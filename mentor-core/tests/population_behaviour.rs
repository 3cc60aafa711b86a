#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for population validation.

use std::cell::RefCell;

use mentor_core::{PersonRecord, Population, PopulationError, Role};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Shared state for population scenarios.
pub struct TestContext {
    records: RefCell<Vec<PersonRecord>>,
    result: RefCell<Option<Result<Population, PopulationError>>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        records: RefCell::new(Vec::new()),
        result: RefCell::new(None),
    }
}

#[given("records for a junior and two seniors")]
fn base_records(context: &TestContext) {
    context.records.borrow_mut().extend([
        PersonRecord::new("Ada", Role::JuniorPm).with_age(27.0),
        PersonRecord::new("Grace", Role::SeniorPm).with_age(41.0),
        PersonRecord::new("Barbara", Role::SeniorPm).with_age(52.0),
    ]);
}

#[given("a second record named \"Ada\"")]
fn duplicate_record(context: &TestContext) {
    context
        .records
        .borrow_mut()
        .push(PersonRecord::new("Ada", Role::SeniorPm));
}

#[given("a record with a negative age")]
fn negative_age_record(context: &TestContext) {
    context
        .records
        .borrow_mut()
        .push(PersonRecord::new("Ken", Role::JuniorPm).with_age(-3.0));
}

#[when("I build the population")]
fn build_population(context: &TestContext) {
    let records = context.records.borrow().clone();
    *context.result.borrow_mut() = Some(Population::new(records));
}

#[then("the population is created")]
fn population_created(context: &TestContext) {
    assert!(matches!(*context.result.borrow(), Some(Ok(_))));
}

#[then("the senior subgroup holds indices 1 and 2")]
fn senior_indices(context: &TestContext) {
    let result = context.result.borrow();
    let population = result
        .as_ref()
        .and_then(|r| r.as_ref().ok())
        .expect("population should be built");
    assert_eq!(population.indices_with_role(Role::SeniorPm), vec![1, 2]);
}

#[then("a duplicate name error names \"Ada\"")]
fn duplicate_error(context: &TestContext) {
    let result = context.result.borrow();
    let err = result
        .as_ref()
        .and_then(|r| r.as_ref().err())
        .expect("population should fail");
    assert!(matches!(err, PopulationError::DuplicateName { name, index: 3 } if name == "Ada"));
}

#[then("a malformed record error is returned for record 3")]
fn malformed_error(context: &TestContext) {
    let result = context.result.borrow();
    let err = result
        .as_ref()
        .and_then(|r| r.as_ref().err())
        .expect("population should fail");
    assert!(matches!(
        err,
        PopulationError::MalformedRecord { index: 3, .. }
    ));
}

#[scenario(path = "tests/features/population.feature", index = 0)]
fn valid_records_keep_order(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/population.feature", index = 1)]
fn duplicate_name_fails(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/population.feature", index = 2)]
fn negative_age_fails(context: TestContext) {
    let _ = context;
}
