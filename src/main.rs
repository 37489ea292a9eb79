use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use jestname::cli;
use jestname::logging::{self, Verbosity};
use jestname::output::OutputFormatter;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let location = &args.location;
    let resolution = jestname::resolve_file(&location.path, location.line, args.language)
        .with_context(|| format!("Failed to resolve test name at {location}"))?;

    let output = OutputFormatter::format(&location.path, &resolution, args.format)?;
    println!("{output}");

    Ok(())
}
