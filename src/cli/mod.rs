//! Command Line Interface (CLI) layer for SARCEOS.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for single-product and batch
//! resolution. It wires user-provided options to the library functionality
//! exposed via `sarceos::api`.
//!
//! If you are embedding SARCEOS into another application, prefer using
//! the high-level `sarceos::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
