//! Population loading for the mentor matching engine.
//!
//! Responsibilities:
//! - Read population files from disk through `mentor-fs`.
//! - Decode dataset records (JSON array, JSON Lines or CSV) into
//!   [`PersonRecord`](mentor_core::PersonRecord)s.
//! - Hand the records to [`Population::new`](mentor_core::Population::new)
//!   so validation happens in one place.
//!
//! Boundaries:
//! - List-valued columns must already be JSON arrays; in CSV the cell holds
//!   the array as text. Other list notations are rejected, never evaluated.
//! - Scoring rules live in `mentor-scorer`.

#![forbid(unsafe_code)]

mod error;
mod loader;
mod record;

pub use error::LoadPopulationError;
pub use loader::{
    PopulationFormat, load_population, parse_population_csv, parse_population_json,
    parse_population_json_lines,
};
pub use record::DatasetRecord;
