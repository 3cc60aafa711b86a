//! Dataset record layout.

use std::collections::BTreeSet;

use mentor_core::{PersonRecord, Role, UnknownRoleError};
use serde::Deserialize;

/// One row of a population dataset, keyed by the dataset's column names.
///
/// Every listed column is required. Other columns are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DatasetRecord {
    /// `Name` column.
    #[serde(rename = "Name")]
    pub name: String,
    /// `Age` column, in years.
    #[serde(rename = "Age")]
    pub age: f64,
    /// `Years at office` column.
    #[serde(rename = "Years at office")]
    pub years_at_office: f64,
    /// `Gender` column.
    #[serde(rename = "Gender")]
    pub gender: String,
    /// `Race` column.
    #[serde(rename = "Race")]
    pub race: String,
    /// `Interests` column; must be a JSON array.
    #[serde(rename = "Interests")]
    pub interests: BTreeSet<String>,
    /// `Skillsets` column; must be a JSON array.
    #[serde(rename = "Skillsets")]
    pub skillsets: BTreeSet<String>,
    /// `PM_Type` column, for example `Junior PM`.
    #[serde(rename = "PM_Type")]
    pub pm_type: String,
}

/// A CSV row before its list cells are decoded.
///
/// `Interests` and `Skillsets` hold JSON arrays as text, for example
/// `["chess", "music"]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct CsvRow {
    #[serde(rename = "Name")]
    pub(crate) name: String,
    #[serde(rename = "Age")]
    pub(crate) age: f64,
    #[serde(rename = "Years at office")]
    pub(crate) years_at_office: f64,
    #[serde(rename = "Gender")]
    pub(crate) gender: String,
    #[serde(rename = "Race")]
    pub(crate) race: String,
    #[serde(rename = "Interests")]
    pub(crate) interests: String,
    #[serde(rename = "Skillsets")]
    pub(crate) skillsets: String,
    #[serde(rename = "PM_Type")]
    pub(crate) pm_type: String,
}

impl CsvRow {
    /// Decode both list cells. Non-JSON text such as `['chess']` is an error.
    pub(crate) fn into_record(self) -> Result<DatasetRecord, serde_json::Error> {
        Ok(DatasetRecord {
            interests: serde_json::from_str(&self.interests)?,
            skillsets: serde_json::from_str(&self.skillsets)?,
            name: self.name,
            age: self.age,
            years_at_office: self.years_at_office,
            gender: self.gender,
            race: self.race,
            pm_type: self.pm_type,
        })
    }
}

impl TryFrom<DatasetRecord> for PersonRecord {
    type Error = UnknownRoleError;

    fn try_from(record: DatasetRecord) -> Result<Self, Self::Error> {
        let role: Role = record.pm_type.parse()?;
        Ok(Self::new(record.name, role)
            .with_interests(record.interests)
            .with_skillsets(record.skillsets)
            .with_race(record.race)
            .with_gender(record.gender)
            .with_age(record.age)
            .with_tenure(record.years_at_office))
    }
}
