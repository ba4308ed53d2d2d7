//! Command-line front end for the plain-text quiz to GIFT converter.

mod cli;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}
