//! Core domain types for the mentor matching engine.
//!
//! These models provide basic validation to keep downstream
//! components honest. Constructors return `Result` to surface
//! invalid input early, and every derived matrix is aligned with the
//! population index assigned at load time.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod matching;
pub mod matrix;
pub mod person;
pub mod population;
pub mod role;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use matching::{MatchCandidate, MatchResult, MemberMatches};
pub use matrix::{DenseMatrix, MatrixShapeError, SimilarityMatrix};
pub use person::{PersonRecord, PersonRecordError, Tags};
pub use population::{Population, PopulationError};
pub use role::{Role, UnknownRoleError};
