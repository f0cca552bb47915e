/// Output context, error reporting, and logging setup.
use std::error::Error as _;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

use super::args::{ExportMode, USAGE};
use crate::report::{EmployeeId, ReportError};

/// Output context passed to all exporters.
pub struct OutputCtx {
    pub export: ExportMode,
    /// Directory that receives `{id}.csv` / `{id}.json`.
    pub out_dir: PathBuf,
    /// When true, step timers log their elapsed time.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(export: ExportMode, out_dir: &Path, debug: bool) -> Self {
        Self {
            export,
            out_dir: out_dir.to_path_buf(),
            debug,
        }
    }

    /// Start a named step timer. Logs elapsed time on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }

    /// Output file for `id` with the given extension, e.g. `./1.csv`.
    #[must_use]
    pub fn artifact_path(&self, id: &EmployeeId, extension: &str) -> PathBuf {
        self.out_dir.join(format!("{id}.{extension}"))
    }
}

// --- Error output ---

/// Write a terminal error to stdout.
///
/// Usage errors print the usage line verbatim; everything else is prefixed
/// with `Error:`. The full source chain goes to the debug log.
pub fn write_error(err: &ReportError) {
    let stdout = std::io::stdout();
    let _ = render_error(err, &mut stdout.lock());

    if let ReportError::InvalidEmployeeId { input } = err {
        tracing::debug!(input = %input, "rejected employee id");
    }
    let mut source = err.source();
    while let Some(cause) = source {
        tracing::debug!(cause = %cause, "caused by");
        source = cause.source();
    }
}

/// Write the user-facing line for `err`.
///
/// # Errors
///
/// Propagates any error from `out`.
pub fn render_error<W: Write>(err: &ReportError, out: &mut W) -> std::io::Result<()> {
    if err.is_usage() {
        writeln!(out, "{err}")
    } else {
        writeln!(out, "Error: {err}")
    }
}

/// Tell the user where an export landed.
///
/// # Errors
///
/// Returns `ReportError::Io` if stdout cannot be written.
pub fn write_exported(path: &str) -> Result<(), ReportError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Data exported to {path}")
        .and_then(|()| out.flush())
        .map_err(|source| ReportError::Io {
            path: "<stdout>".to_owned(),
            source,
        })
}

/// Build the usage error shown for malformed command lines.
#[must_use]
pub fn usage_error() -> ReportError {
    ReportError::Usage {
        usage: USAGE.to_owned(),
    }
}

// --- Logging ---

/// Install the stderr log subscriber.
///
/// `RUST_LOG` is honoured; `--debug` forces the `debug` level. Stdout is left
/// alone so report output stays clean.
pub fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            tracing::debug!(step = self.label, "{ms:.2}ms");
        }
    }
}
