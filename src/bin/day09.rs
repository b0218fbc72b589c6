use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use log::error;
use tracing_subscriber::filter::LevelFilter;

use rope_bridge::commands::read_commands;
use rope_bridge::{InputError, Simulator};

#[derive(Parser, Debug)]
#[clap(name = "day09")]
struct Cli {
    /// Print every knot after each step.
    #[arg(short = 't', long)]
    trace: bool,

    /// Repeat for more log output on stderr.
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Puzzle input. Reads stdin when absent.
    file: Option<PathBuf>,
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(level(args.verbose))
        .with_writer(std::io::stderr)
        .init();

    let commands = match &args.file {
        Some(path) => File::open(path)
            .map_err(InputError::from)
            .and_then(read_commands),
        None => read_commands(std::io::stdin().lock()),
    }
    .map_err(|e| {
        error!("{}", e);
        e
    })?;

    let mut sim: Simulator = Simulator::new();
    let visited = sim.run(commands, |s| {
        if args.trace {
            println!("{}", s.rope());
        }
    })?;

    println!("{}", visited);

    Ok(())
}
