use std::path::PathBuf;
use std::process::ExitCode;

use blockcycle::{script, SearchMode, SearchOptions};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

/// Find the shortest solutions to a level script.
#[derive(Parser, Debug)]
#[command(name = "solver", version)]
struct Cli {
    /// Level script to load.
    #[arg(value_name = "LEVEL")]
    level: PathBuf,

    /// Longest chain of hits to consider.
    #[arg(short, long, default_value_t = 10)]
    depth: usize,

    /// `pruned` (fast) or `comprehensive` (finds every solution up to the depth).
    #[arg(short, long, default_value_t = SearchMode::Pruned)]
    mode: SearchMode,

    /// Stop after this many simulated hits.
    #[arg(long)]
    budget: Option<usize>,

    /// More logging; repeat for more.
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .init();

    let mut system = match script::load(&cli.level) {
        Ok(system) => system,
        Err(e) => {
            eprintln!("{}: {}", cli.level.display(), e);
            return ExitCode::FAILURE;
        }
    };

    print!("{}", system);

    let mut options = SearchOptions::with_max_depth(cli.depth);
    options.mode = cli.mode;
    options.budget = cli.budget;
    let report = system.search_solutions(options);
    tracing::info!(depth = report.depth, expanded = report.expanded, "search done");

    match system.best_answers() {
        None if report.exhausted => {
            println!("no solution found before running out of budget");
            ExitCode::FAILURE
        }
        None => {
            println!("no solution within {} hits", cli.depth);
            ExitCode::FAILURE
        }
        Some(chains) => {
            println!("shortest solution: {} hits", system.best_length());
            for chain in chains {
                println!("{}", chain.join(" "));
            }
            ExitCode::SUCCESS
        }
    }
}
