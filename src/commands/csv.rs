/// CSV export: every task to `{id}.csv`, all fields quoted, no header.
use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::cli::{OutputCtx, write_exported};
use crate::report::{Report, ReportError};

/// Write `report` to `{out_dir}/{id}.csv` and announce the path on stdout.
///
/// # Errors
///
/// Returns `ReportError::Io` if the file cannot be created or stdout is
/// closed, or `ReportError::Csv` if a row cannot be written.
pub fn run(report: &Report, ctx: &OutputCtx) -> Result<(), ReportError> {
    let path = ctx.artifact_path(&report.employee_id, "csv");
    let shown = path.display().to_string();

    let file = std::fs::File::create(&path).map_err(|source| ReportError::Io {
        path: shown.clone(),
        source,
    })?;
    write_rows(report, file).map_err(|source| ReportError::Csv {
        path: shown.clone(),
        source,
    })?;

    tracing::debug!(path = %shown, rows = report.total(), "wrote csv");
    write_exported(&shown)
}

/// Write one `[id, username, completed, title]` row per task.
///
/// `completed` is rendered as `True`/`False`; a missing username becomes an
/// empty field.
///
/// # Errors
///
/// Returns `csv::Error` on any write failure.
pub fn write_rows<W: Write>(report: &Report, out: W) -> Result<(), csv::Error> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .from_writer(out);

    let id = report.employee_id.as_str();
    let username = report.username().unwrap_or_default();
    for task in &report.tasks {
        let completed = if task.completed { "True" } else { "False" };
        writer.write_record([id, username, completed, task.title.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}
