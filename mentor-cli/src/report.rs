//! Render match and suitability reports.
//!
//! The text layout lists each mentee followed by their ranked candidates,
//! one indented line per candidate and a blank line between mentees. Tag lists
//! print as quoted, bracketed lists such as `['chess', 'sql']`.

use std::io::Write;
use std::str::FromStr;

use mentor_core::{MatchResult, PersonRecord, Population, Role, Tags};
use serde::Serialize;

use crate::CliError;

/// Output layout for reports.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl FromStr for ReportFormat {
    type Err = CliError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(CliError::InvalidFormat {
                value: value.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
struct SuitabilityEntry<'a> {
    name: &'a str,
    role: Role,
    suitability: f64,
}

/// Write ranked matches for every mentee.
pub(crate) fn write_match_report(
    writer: &mut dyn Write,
    population: &Population,
    matches: &MatchResult,
    format: ReportFormat,
) -> Result<(), CliError> {
    match format {
        ReportFormat::Json => write_json(writer, matches),
        ReportFormat::Text => {
            for member in matches {
                let Some(mentee) = population
                    .position(&member.member)
                    .and_then(|index| population.get(index))
                else {
                    continue;
                };
                writeln!(writer, "Optimal matches for {}:", describe(mentee))
                    .map_err(CliError::WriteReport)?;
                for candidate in &member.candidates {
                    writeln!(
                        writer,
                        "  {} (Interests: {}, Skillsets: {}, Age: {}) with similarity score: {:.4}",
                        candidate.name,
                        tag_list(&candidate.interests),
                        tag_list(&candidate.skillsets),
                        candidate.age,
                        candidate.score,
                    )
                    .map_err(CliError::WriteReport)?;
                }
                writeln!(writer).map_err(CliError::WriteReport)?;
            }
            Ok(())
        }
    }
}

/// Write one suitability score per person, in population order.
pub(crate) fn write_suitability_report(
    writer: &mut dyn Write,
    population: &Population,
    scores: &[f64],
    format: ReportFormat,
) -> Result<(), CliError> {
    let entries: Vec<SuitabilityEntry<'_>> = population
        .iter()
        .zip(scores)
        .map(|(person, &suitability)| SuitabilityEntry {
            name: &person.name,
            role: person.role,
            suitability,
        })
        .collect();
    match format {
        ReportFormat::Json => write_json(writer, &entries),
        ReportFormat::Text => {
            for entry in &entries {
                writeln!(
                    writer,
                    "{} ({}): {:.4}",
                    entry.name, entry.role, entry.suitability
                )
                .map_err(CliError::WriteReport)?;
            }
            Ok(())
        }
    }
}

fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteReport)?;
    writer.write_all(b"\n").map_err(CliError::WriteReport)
}

fn describe(person: &PersonRecord) -> String {
    format!(
        "{} (Interests: {}, Skillsets: {}, Age: {})",
        person.name,
        tag_list(&person.interests),
        tag_list(&person.skillsets),
        person.age
    )
}

fn tag_list(tags: &Tags) -> String {
    let quoted: Vec<String> = tags.iter().map(|tag| quote(tag)).collect();
    format!("[{}]", quoted.join(", "))
}

fn quote(tag: &str) -> String {
    if tag.contains('\'') && !tag.contains('"') {
        format!("\"{tag}\"")
    } else {
        format!("'{}'", tag.replace('\\', "\\\\").replace('\'', "\\'"))
    }
}
