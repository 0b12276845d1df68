//! CLI commands
//!
//! Command implementation for the `bumper` binary.

mod bump;
mod report;
mod style;

pub use bump::run_bump;
