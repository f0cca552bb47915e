/// Errors from the report pipeline.
use thiserror::Error;

use crate::api::ApiError;

/// Every way a run can fail. All of them are terminal.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Wrong number of command-line arguments.
    #[error("{usage}")]
    Usage {
        /// Usage line to show the user.
        usage: String,
    },

    /// The employee ID was not made of decimal digits only.
    #[error("Employee ID must be an integer")]
    InvalidEmployeeId {
        /// The rejected input.
        input: String,
    },

    /// The employee lookup returned a non-200 status.
    #[error("Employee ID not found")]
    EmployeeNotFound {
        /// Underlying status error.
        #[source]
        source: ApiError,
    },

    /// The task lookup returned a non-200 status.
    #[error("Failed to retrieve tasks")]
    TaskFetch {
        /// Underlying status error.
        #[source]
        source: ApiError,
    },

    /// Transport or decode failure talking to the API.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// Could not create or write an output file.
    #[error("Cannot write {path}: {source}")]
    Io {
        /// Output path.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization failed.
    #[error("Cannot write {path}: {source}")]
    Csv {
        /// Output path.
        path: String,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// JSON serialization failed.
    #[error("Cannot write {path}: {source}")]
    Json {
        /// Output path.
        path: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl ReportError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage { .. }
            | Self::InvalidEmployeeId { .. }
            | Self::EmployeeNotFound { .. }
            | Self::TaskFetch { .. }
            | Self::Api(_)
            | Self::Io { .. }
            | Self::Csv { .. }
            | Self::Json { .. } => 1,
        }
    }

    /// Whether the message should be prefixed with `Error:` when shown.
    #[must_use]
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage { .. })
    }
}
