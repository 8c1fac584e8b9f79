//! CSV ingestion of the reference tables.
//!
//! # Directory Structure
//!
//! ```text
//! data/
//! ├── employee.csv
//! ├── attendance.csv
//! ├── leave.csv
//! ├── holiday.csv
//! ├── meal.csv
//! └── manual_ot.csv
//! ```
//!
//! Headers may use either the snake_case field names or the legacy
//! workbook headers (`Employee ID`, `Clock-in`, `Festival Name`, ...).

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::ReferenceTables;

impl ReferenceTables {
    /// Loads all six tables from a directory of CSV files.
    ///
    /// A missing file is a structural failure and aborts the load.
    pub fn load_dir<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let tables = Self {
            employees: read_table(path, "employee.csv", "Employee")?,
            attendance: read_table(path, "attendance.csv", "Attendance")?,
            leave: read_table(path, "leave.csv", "Leave")?,
            holidays: read_table(path, "holiday.csv", "Holiday")?,
            meals: read_table(path, "meal.csv", "Meal")?,
            manual_ot: read_table(path, "manual_ot.csv", "Manual OT")?,
        };

        info!(
            data_dir = %path.display(),
            employees = tables.employees.len(),
            attendance = tables.attendance.len(),
            "Reference tables loaded"
        );

        Ok(tables)
    }
}

fn read_table<T: DeserializeOwned>(dir: &Path, file: &str, table: &str) -> EngineResult<Vec<T>> {
    let path = dir.join(file);
    if !path.is_file() {
        return Err(EngineError::MissingTable {
            table: table.to_string(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(&path)
        .map_err(|e| EngineError::TableParseError {
            table: table.to_string(),
            row: 0,
            message: e.to_string(),
        })?;

    reader
        .deserialize()
        .enumerate()
        .map(|(index, row)| {
            row.map_err(|e| EngineError::TableParseError {
                table: table.to_string(),
                row: index + 1,
                message: e.to_string(),
            })
        })
        .collect()
}
