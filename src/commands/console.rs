/// Console export: completed-task summary on stdout.
use std::io::Write;

use crate::report::{Report, ReportError};

/// Print the summary for `report` to stdout.
///
/// # Errors
///
/// Returns `ReportError::Io` if stdout cannot be written.
pub fn run(report: &Report) -> Result<(), ReportError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(report, &mut out).map_err(|source| ReportError::Io {
        path: "<stdout>".to_owned(),
        source,
    })
}

/// Write the header line and one indented line per completed task.
///
/// # Errors
///
/// Propagates any error from `out`.
pub fn render<W: Write>(report: &Report, out: &mut W) -> std::io::Result<()> {
    writeln!(
        out,
        "Employee {} is done with tasks({}/{}):",
        report.display_name(),
        report.completed_count(),
        report.total()
    )?;
    for title in report.completed() {
        writeln!(out, "\t {title}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::test_helpers::{sample_report, task};

    fn rendered(report: &Report) -> String {
        let mut buf = Vec::new();
        render(report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_summary_lists_completed_only() {
        assert_eq!(
            rendered(&sample_report()),
            "Employee Leanne Graham is done with tasks(1/2):\n\t a\n"
        );
    }

    #[test]
    fn test_counts_match_task_flags() {
        let mut report = sample_report();
        report.tasks = vec![
            task("x", true),
            task("y", false),
            task("z", true),
            task("w", true),
        ];
        let text = rendered(&report);
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Employee Leanne Graham is done with tasks(3/4):")
        );
        assert_eq!(lines.collect::<Vec<_>>(), vec!["\t x", "\t z", "\t w"]);
    }

    #[test]
    fn test_empty_task_list() {
        let mut report = sample_report();
        report.tasks.clear();
        assert_eq!(
            rendered(&report),
            "Employee Leanne Graham is done with tasks(0/0):\n"
        );
    }
}
