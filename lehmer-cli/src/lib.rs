//! Command-line front end for inspecting Lehmer sequences.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lehmer_core::stateless::{double_from_seed, int_from_seed};
use lehmer_core::{Lehmer, Random, SeedSource, TickCount};

#[derive(Parser, Debug)]
#[command(author, version, about = "Print reproducible Lehmer random sequences", long_about = None)]
pub struct Args {
    /// Seed value, signed or unsigned 32-bit (decimal or 0x-prefixed hex). Time-seeded if omitted
    #[arg(short, long, value_parser = parse_seed, allow_hyphen_values = true)]
    pub seed: Option<u32>,

    /// Number of values to draw
    #[arg(short = 'n', long, default_value_t = 10)]
    pub count: usize,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Integers in [min, max)
    Int {
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        min: i32,
        #[arg(long, default_value_t = i32::MAX, allow_hyphen_values = true)]
        max: i32,
    },
    /// Floating-point values in [min, max)
    Double {
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        min: f64,
        #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
        max: f64,
    },
    /// A hex dump of random bytes
    Bytes {
        #[arg(short, long, default_value_t = 16)]
        len: usize,
    },
    /// Raw 32-bit state words
    Raw,
    /// One stateless integer draw from the seed, ignoring --count
    Once {
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        min: i32,
        #[arg(long, default_value_t = i32::MAX, allow_hyphen_values = true)]
        max: i32,
    },
    /// One stateless floating-point draw from the seed, ignoring --count
    OnceDouble {
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        min: f64,
        #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
        max: f64,
    },
}

/// Parses a seed given as unsigned, signed (bit-reinterpreted) or hex.
pub fn parse_seed(s: &str) -> Result<u32, String> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        return u32::from_str_radix(hex, 16).map_err(|e| format!("invalid hex seed '{}': {}", s, e));
    }
    if let Ok(seed) = s.parse::<u32>() {
        return Ok(seed);
    }
    s.parse::<i32>()
        .map(|seed| seed as u32)
        .map_err(|_| format!("seed '{}' is not a 32-bit integer", s))
}

impl Command {
    /// Whether the command draws `--count` values from one generator.
    pub fn is_counted(&self) -> bool {
        !matches!(self, Command::Once { .. } | Command::OnceDouble { .. })
    }
}

/// Runs `command` and returns the lines to print.
pub fn render(seed: u32, count: usize, command: &Command) -> Result<Vec<String>> {
    if count == 0 && command.is_counted() {
        anyhow::bail!("--count must be at least 1");
    }

    let mut rng = Lehmer::new(seed);

    let lines = match *command {
        Command::Int { min, max } => (0..count)
            .map(|_| rng.next_int_range(min, max).map(|v| v.to_string()))
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to draw integers")?,
        Command::Double { min, max } => (0..count)
            .map(|_| rng.next_double_range(min, max).map(|v| v.to_string()))
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to draw doubles")?,
        Command::Bytes { len } => (0..count)
            .map(|_| {
                let mut buffer = vec![0u8; len];
                rng.next_bytes(&mut buffer);
                buffer.iter().map(|b| format!("{:02x}", b)).collect::<String>()
            })
            .collect(),
        Command::Raw => (0..count).map(|_| format!("{:#010x}", rng.draw())).collect(),
        Command::Once { min, max } => vec![int_from_seed(seed, min, max)
            .context("Failed to draw stateless integer")?
            .to_string()],
        Command::OnceDouble { min, max } => vec![double_from_seed(seed, min, max)
            .context("Failed to draw stateless double")?
            .to_string()],
    };

    Ok(lines)
}

/// Resolves the seed and renders the requested sequence.
pub fn run(args: &Args) -> Result<Vec<String>> {
    let seed = match args.seed {
        Some(seed) => seed,
        None => {
            let seed = TickCount.seed();
            log::info!("No seed given, using time-derived seed {}", seed);
            seed
        }
    };
    log::debug!("Seed: {} ({:#010x}), command: {:?}", seed, seed, args.command);

    render(seed, args.count, &args.command)
}
