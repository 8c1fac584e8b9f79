//! Report artifact writer.
//!
//! Writes one JSON document per department and one company-wide master
//! document into an output directory:
//!
//! ```text
//! out/
//! ├── January_DL_Report.json
//! ├── January_QA_Assembly_Report.json   # "QA/Assembly"
//! └── Master_Report.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{DepartmentReport, MasterRow, RunReport};

/// File name of the master report.
pub const MASTER_REPORT_FILE: &str = "Master_Report.json";

#[derive(Serialize)]
struct DepartmentDocument<'a> {
    run_id: String,
    generated_at: String,
    engine_version: &'a str,
    month: &'a str,
    #[serde(flatten)]
    department: &'a DepartmentReport,
}

#[derive(Serialize)]
struct MasterDocument<'a> {
    run_id: String,
    generated_at: String,
    engine_version: &'a str,
    month: &'a str,
    rows: &'a [MasterRow],
}

/// Department name made safe for use in a file name.
///
/// ```
/// use attendance_engine::report::safe_department_name;
///
/// assert_eq!(safe_department_name("QA/Assembly"), "QA_Assembly");
/// assert_eq!(safe_department_name(r"Ops\Night"), "Ops_Night");
/// ```
pub fn safe_department_name(department: &str) -> String {
    department.replace(['/', '\\'], "_")
}

/// File name of a department report, e.g. `January_DL_Report.json`.
pub fn department_file_name(month: &str, department: &str) -> String {
    format!("{}_{}_Report.json", month, safe_department_name(department))
}

/// Writes every department report and the master report under `dir`.
///
/// Creates `dir` if needed and returns the written paths, departments
/// first and the master report last.
pub fn write_run<P: AsRef<Path>>(dir: P, month: &str, run: &RunReport) -> EngineResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|e| EngineError::ReportWriteError {
        path: dir.display().to_string(),
        message: e.to_string(),
    })?;

    let run_id = run.run_id.to_string();
    let generated_at = run.generated_at.to_rfc3339();
    let mut written = Vec::with_capacity(run.departments.len() + 1);

    for department in &run.departments {
        let path = dir.join(department_file_name(month, &department.department));
        write_json(
            &path,
            &DepartmentDocument {
                run_id: run_id.clone(),
                generated_at: generated_at.clone(),
                engine_version: &run.engine_version,
                month,
                department,
            },
        )?;
        info!(
            department = %department.department,
            path = %path.display(),
            "Department report written"
        );
        written.push(path);
    }

    let path = dir.join(MASTER_REPORT_FILE);
    write_json(
        &path,
        &MasterDocument {
            run_id,
            generated_at,
            engine_version: &run.engine_version,
            month,
            rows: &run.master,
        },
    )?;
    info!(path = %path.display(), rows = run.master.len(), "Master report written");
    written.push(path);

    Ok(written)
}

fn write_json<T: Serialize>(path: &Path, document: &T) -> EngineResult<()> {
    let to_error = |message: String| EngineError::ReportWriteError {
        path: path.display().to_string(),
        message,
    };

    let json = serde_json::to_string_pretty(document).map_err(|e| to_error(e.to_string()))?;
    fs::write(path, json).map_err(|e| to_error(e.to_string()))
}
