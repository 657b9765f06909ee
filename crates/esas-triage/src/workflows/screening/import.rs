use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use super::domain::{PatientIdentity, RawAnswers, ScreeningSubmission, ScreeningType, SymptomId};

/// Failure reading a batch export. Score and identity problems are not import
/// errors; they surface per row when the batch is screened.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read screening export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid screening CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("item column {0} appears more than once")]
    DuplicateItemColumn(SymptomId),
}

/// Identity cell that could not be read; rejects only its own row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("row {row}: invalid {column} '{value}'")]
pub struct InvalidField {
    pub row: usize,
    pub column: &'static str,
    pub value: String,
}

/// One parsed CSV row, numbered from 1 after the header.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedScreening {
    pub row: usize,
    pub patient_name: String,
    pub submission: Result<ScreeningSubmission, InvalidField>,
}

/// Reads batch screening exports with patient columns and item columns `1`..`9`.
pub struct ScreeningImporter;

impl ScreeningImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ImportedScreening>, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ImportedScreening>, ImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let columns: Vec<Column> = csv_reader.headers()?.iter().map(Column::from_header).collect();
        let mut seen = BTreeSet::new();
        for column in &columns {
            if let Column::Item(symptom) = column {
                if !seen.insert(*symptom) {
                    return Err(ImportError::DuplicateItemColumn(*symptom));
                }
            }
        }

        let mut imports = Vec::new();
        for (index, record) in csv_reader.records().enumerate() {
            let record = record?;
            let row = index + 1;
            let patient_name = columns
                .iter()
                .zip(record.iter())
                .find(|(column, _)| matches!(column, Column::Name))
                .map(|(_, cell)| cell.to_string())
                .unwrap_or_default();

            imports.push(ImportedScreening {
                row,
                patient_name,
                submission: read_row(row, &columns, &record),
            });
        }

        Ok(imports)
    }
}

fn read_row(
    row: usize,
    columns: &[Column],
    record: &csv::StringRecord,
) -> Result<ScreeningSubmission, InvalidField> {
    let mut patient = PatientIdentity::default();
    let mut screening_type = ScreeningType::default();
    let mut answers = RawAnswers::new();

    for (column, cell) in columns.iter().zip(record.iter()) {
        if cell.is_empty() {
            continue;
        }
        let invalid = |field: &'static str| InvalidField {
            row,
            column: field,
            value: cell.to_string(),
        };
        match column {
            Column::Name => patient.name = cell.to_string(),
            Column::Age => patient.age = Some(cell.parse().map_err(|_| invalid("age"))?),
            Column::Gender => patient.gender = Some(cell.to_string()),
            Column::Facility => patient.facility = Some(cell.to_string()),
            Column::ScreeningType => {
                screening_type = cell.parse().map_err(|_| invalid("screening_type"))?;
            }
            Column::Item(symptom) => {
                answers.insert(symptom.key().to_string(), Value::String(cell.to_string()));
            }
            Column::Ignored => {}
        }
    }

    Ok(ScreeningSubmission {
        answers,
        patient,
        screening_type,
    })
}

enum Column {
    Name,
    Age,
    Gender,
    Facility,
    ScreeningType,
    Item(SymptomId),
    Ignored,
}

impl Column {
    // Legacy exports prefix identity columns with `patient_`.
    fn from_header(header: &str) -> Self {
        let normalized = header.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "name" | "patient_name" => Column::Name,
            "age" | "patient_age" => Column::Age,
            "gender" | "patient_gender" => Column::Gender,
            "facility" | "facility_name" => Column::Facility,
            "screening_type" => Column::ScreeningType,
            other => SymptomId::ALL
                .into_iter()
                .find(|symptom| symptom.key() == other)
                .map(Column::Item)
                .unwrap_or(Column::Ignored),
        }
    }
}
