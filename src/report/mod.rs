/// Report domain layer: ID validation, the fetch pipeline, error taxonomy.
pub mod employee_id;
pub mod errors;
pub mod pipeline;

pub use employee_id::EmployeeId;
pub use errors::ReportError;
pub use pipeline::{FetchMode, Report, fetch_report};

#[cfg(test)]
pub(crate) mod test_helpers;
