//! CLI command handlers. Each command is in its own file for clarity.

mod clean;
mod completions;
mod show;
mod upload;

pub use clean::run_clean;
pub use completions::run_completions;
pub use show::run_show;
pub use upload::run_upload;
