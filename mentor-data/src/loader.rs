//! Read population files and turn dataset records into a [`Population`].

use std::io::Read;

use camino::Utf8Path;
use log::{debug, info};
use mentor_core::{PersonRecord, Population};
use mentor_fs::open_utf8_file;

use crate::record::CsvRow;
use crate::{DatasetRecord, LoadPopulationError};

/// Supported on-disk layouts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PopulationFormat {
    /// A single JSON array of records.
    Json,
    /// One JSON record per line; blank lines are skipped.
    JsonLines,
    /// Comma-separated values with a header row naming the dataset columns.
    Csv,
}

impl PopulationFormat {
    /// Pick a format from the file extension.
    ///
    /// `.jsonl` and `.ndjson` select [`Self::JsonLines`], `.csv` selects
    /// [`Self::Csv`]; anything else is read as a JSON array.
    #[must_use]
    pub fn from_path(path: &Utf8Path) -> Self {
        match path.extension().map(str::to_ascii_lowercase).as_deref() {
            Some("jsonl" | "ndjson") => Self::JsonLines,
            Some("csv") => Self::Csv,
            _ => Self::Json,
        }
    }

    fn parse(self, input: &str) -> Result<Population, LoadPopulationError> {
        match self {
            Self::Json => parse_population_json(input),
            Self::JsonLines => parse_population_json_lines(input),
            Self::Csv => parse_population_csv(input),
        }
    }
}

/// Load and validate the population stored at `path`.
///
/// # Errors
/// Returns [`LoadPopulationError`] when the file cannot be read, does not
/// decode, or describes an invalid population.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use mentor_data::load_population;
///
/// # fn main() -> Result<(), mentor_data::LoadPopulationError> {
/// let population = load_population(Utf8Path::new("profiles.json"))?;
/// println!("{} people", population.len());
/// # Ok(())
/// # }
/// ```
pub fn load_population(path: &Utf8Path) -> Result<Population, LoadPopulationError> {
    let mut file = open_utf8_file(path).map_err(|source| LoadPopulationError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|source| LoadPopulationError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let format = PopulationFormat::from_path(path);
    debug!("decoding {path} as {format:?}");
    let population = format.parse(&contents)?;
    info!("loaded {} people from {path}", population.len());
    Ok(population)
}

/// Decode a JSON array of dataset records.
///
/// # Errors
/// Returns [`LoadPopulationError::Parse`] for malformed JSON,
/// [`LoadPopulationError::Record`] for an unknown role and
/// [`LoadPopulationError::Population`] when validation fails.
///
/// # Examples
/// ```
/// use mentor_data::parse_population_json;
///
/// let population = parse_population_json(
///     r#"[{"Name": "Ada", "Age": 30, "Years at office": 2, "Gender": "F", "Race": "Asian",
///          "Interests": ["chess"], "Skillsets": [], "PM_Type": "Junior PM"}]"#,
/// )
/// .expect("valid population");
/// assert_eq!(population.len(), 1);
/// ```
pub fn parse_population_json(input: &str) -> Result<Population, LoadPopulationError> {
    let records: Vec<DatasetRecord> = serde_json::from_str(input).map_err(|source| {
        LoadPopulationError::Parse {
            line: source.line(),
            source,
        }
    })?;
    build(records)
}

/// Decode JSON Lines, one dataset record per non-blank line.
///
/// # Errors
/// As [`parse_population_json`]; parse errors carry the 1-based line of the
/// offending record.
pub fn parse_population_json_lines(input: &str) -> Result<Population, LoadPopulationError> {
    let records = input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(offset, line)| {
            serde_json::from_str::<DatasetRecord>(line).map_err(|source| {
                LoadPopulationError::Parse {
                    line: offset.saturating_add(1),
                    source,
                }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    build(records)
}

/// Decode CSV with a header row, one dataset record per row.
///
/// `Interests` and `Skillsets` cells must hold JSON arrays, such as
/// `"[""chess"", ""music""]"` once CSV-quoted. Cells and headers are trimmed
/// and unknown columns, including an unnamed index column, are ignored.
///
/// # Errors
/// Returns [`LoadPopulationError::Csv`] for unreadable rows or missing
/// columns, [`LoadPopulationError::Parse`] for a list cell that is not a JSON
/// array, and otherwise as [`parse_population_json`]. Lines are 1-based and
/// count the header.
///
/// # Examples
/// ```
/// use mentor_data::parse_population_csv;
///
/// let population = parse_population_csv(
///     "Name,Age,Years at office,Gender,Race,Interests,Skillsets,PM_Type\n\
///      Ada,30,2,F,Asian,\"[\"\"chess\"\"]\",[],Junior PM\n",
/// )
/// .expect("valid population");
/// assert_eq!(population.len(), 1);
/// ```
pub fn parse_population_csv(input: &str) -> Result<Population, LoadPopulationError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());
    let headers = reader
        .headers()
        .map_err(|source| csv_error(1, source))?
        .clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let fields = row.map_err(|source| {
            let line = source.position().map_or(0, |position| line_number(position.line()));
            csv_error(line, source)
        })?;
        let line = fields
            .position()
            .map_or(0, |position| line_number(position.line()));
        let decoded: CsvRow = fields
            .deserialize(Some(&headers))
            .map_err(|source| csv_error(line, source))?;
        let record = decoded
            .into_record()
            .map_err(|source| LoadPopulationError::Parse { line, source })?;
        records.push(record);
    }
    build(records)
}

const fn csv_error(line: usize, source: csv::Error) -> LoadPopulationError {
    LoadPopulationError::Csv { line, source }
}

fn line_number(line: u64) -> usize {
    usize::try_from(line).unwrap_or(usize::MAX)
}

fn build(records: Vec<DatasetRecord>) -> Result<Population, LoadPopulationError> {
    let people = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let name = record.name.clone();
            PersonRecord::try_from(record)
                .map_err(|source| LoadPopulationError::Record { index, name, source })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Population::new(people)?)
}
