/// CLI layer: argument parsing and output context.
pub mod args;
pub mod output;

pub use args::{Cli, ExportMode};
pub use output::{OutputCtx, init_logging, usage_error, write_error, write_exported};
