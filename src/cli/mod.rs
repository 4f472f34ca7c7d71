//! Command line layer for ressel.
//!
//! Argument parsing (`args`), CLI errors (`errors`), and the dispatch logic
//! (`runner`) that maps a subcommand onto a [`ressel::ResizePolicy`].
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
