//! ressel CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, resolve one policy, print
//! the result. For programmatic use, prefer the library API.

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
