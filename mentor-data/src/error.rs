//! Errors raised while loading a population.

use camino::Utf8PathBuf;
use mentor_core::{PopulationError, UnknownRoleError};
use thiserror::Error;

/// Failures while reading or decoding a population file.
#[derive(Debug, Error)]
pub enum LoadPopulationError {
    /// The file could not be opened.
    #[error("failed to open population file at {path}")]
    Open {
        /// File that was requested.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The file could not be read as UTF-8 text.
    #[error("failed to read population file at {path}")]
    Read {
        /// File being read.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The content was not valid population JSON.
    #[error("invalid population data on line {line}")]
    Parse {
        /// 1-based line of the failure.
        line: usize,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// A CSV row could not be read or did not match the dataset columns.
    #[error("invalid population CSV on line {line}")]
    Csv {
        /// 1-based line of the failure.
        line: usize,
        /// Reader error.
        #[source]
        source: csv::Error,
    },
    /// A record decoded but carried an unusable value.
    #[error("record {index} ({name}) is invalid")]
    Record {
        /// 0-based record position.
        index: usize,
        /// Name from the record.
        name: String,
        /// Reason the record was rejected.
        #[source]
        source: UnknownRoleError,
    },
    /// The decoded records did not form a valid population.
    #[error(transparent)]
    Population(#[from] PopulationError),
}
