//! Goto Dialog Library
//!
//! Headless host for the goto dialog controller. The controller itself lives
//! in `goto-app`; shared types in `goto-core`.

// Module declarations
pub mod headless;

// Re-export main entry points
pub use headless::runner::run_headless;
