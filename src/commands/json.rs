/// JSON export: `{ "<id>": [ {task, completed, username}, ... ] }` to `{id}.json`.
use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::cli::{OutputCtx, write_exported};
use crate::report::{Report, ReportError};
use crate::types::TaskRecord;

/// Write `report` to `{out_dir}/{id}.json` and announce the path on stdout.
///
/// # Errors
///
/// Returns `ReportError::Io` if the file cannot be created or flushed, or
/// `ReportError::Json` if serialization fails.
pub fn run(report: &Report, ctx: &OutputCtx) -> Result<(), ReportError> {
    let path = ctx.artifact_path(&report.employee_id, "json");
    let shown = path.display().to_string();

    let mut file = std::fs::File::create(&path).map_err(|source| ReportError::Io {
        path: shown.clone(),
        source,
    })?;
    write_document(report, &mut file).map_err(|source| ReportError::Json {
        path: shown.clone(),
        source,
    })?;
    file.flush().map_err(|source| ReportError::Io {
        path: shown.clone(),
        source,
    })?;
    drop(file);

    tracing::debug!(path = %shown, tasks = report.total(), "wrote json");
    write_exported(&shown)
}

/// Serialize the single-key document with 4-space indentation.
///
/// # Errors
///
/// Returns `serde_json::Error` on serialization or write failure.
pub fn write_document<W: Write>(report: &Report, out: W) -> Result<(), serde_json::Error> {
    let mut document: BTreeMap<&str, Vec<TaskRecord>> = BTreeMap::new();
    document.insert(report.employee_id.as_str(), report.records());

    let mut ser = Serializer::with_formatter(out, PrettyFormatter::with_indent(b"    "));
    document.serialize(&mut ser)
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::cli::ExportMode;
    use crate::report::test_helpers::{sample_report, task};

    fn document(report: &Report) -> String {
        let mut buf = Vec::new();
        write_document(report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_bret_scenario() {
        let mut report = sample_report();
        report.employee.name = None;
        let value: Value = serde_json::from_str(&document(&report)).unwrap();
        assert_eq!(
            value,
            json!({"1": [
                {"task": "a", "completed": true, "username": "Bret"},
                {"task": "b", "completed": false, "username": "Bret"}
            ]})
        );
    }

    #[test]
    fn test_single_key_with_all_tasks() {
        let mut report = sample_report();
        report.tasks.push(task("c", true));
        let value: Value = serde_json::from_str(&document(&report)).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["1"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_round_trip_preserves_title_and_completed_in_order() {
        let mut report = sample_report();
        report.tasks = vec![task("zeta", false), task("alpha", true), task("mid", false)];
        let parsed: BTreeMap<String, Vec<TaskRecord>> =
            serde_json::from_str(&document(&report)).unwrap();

        let got: Vec<(&str, bool)> = parsed["1"]
            .iter()
            .map(|r| (r.task.as_str(), r.completed))
            .collect();
        let want: Vec<(&str, bool)> = report
            .tasks
            .iter()
            .map(|t| (t.title.as_str(), t.completed))
            .collect();
        assert_eq!(got, want);
    }

    #[test]
    fn test_four_space_indent_and_raw_utf8() {
        let mut report = sample_report();
        report.tasks = vec![task("café", true)];
        let text = document(&report);
        assert!(text.contains("\n    \"1\": ["));
        assert!(text.contains("café"));
    }

    #[test]
    fn test_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = OutputCtx::new(ExportMode::Json, dir.path(), false);

        run(&sample_report(), &ctx).unwrap();
        let written = std::fs::read_to_string(dir.path().join("1.json")).unwrap();
        let value: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["1"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_task_list_writes_empty_array() {
        let mut report = sample_report();
        report.tasks.clear();
        let value: Value = serde_json::from_str(&document(&report)).unwrap();
        assert_eq!(value, json!({"1": []}));
    }
}
