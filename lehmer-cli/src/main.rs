use anyhow::{Context, Result};
use clap::Parser;
use lehmer_cli::{run, Args};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let lines = run(&args).context("Failed to generate sequence")?;
    for line in lines {
        println!("{}", line);
    }

    Ok(())
}
