/// Command dispatch: runs the pipeline and routes the report to an exporter.
pub mod console;
pub mod csv;
pub mod json;

use crate::api::ApiClient;
use crate::cli::{ExportMode, OutputCtx};
use crate::config::Config;
use crate::report::{EmployeeId, FetchMode, ReportError, fetch_report};

/// Validate, fetch, export.
///
/// The ID is validated before the HTTP client exists, so bad input never
/// reaches the network. Nothing is written until both fetches succeed.
///
/// # Errors
///
/// Returns `ReportError` on invalid input, API failure, or write failure.
pub fn run(
    raw_id: &str,
    config: &Config,
    mode: FetchMode,
    ctx: &OutputCtx,
) -> Result<(), ReportError> {
    let employee_id: EmployeeId = raw_id.parse()?;
    let client = ApiClient::new(config)?;

    let t_fetch = ctx.timer("fetch");
    let report = fetch_report(&client, employee_id, mode)?;
    drop(t_fetch);

    let _t_export = ctx.timer("export");
    match ctx.export {
        ExportMode::Console => console::run(&report),
        ExportMode::Csv => csv::run(&report, ctx),
        ExportMode::Json => json::run(&report, ctx),
    }
}
