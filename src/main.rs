use clap::Parser;
use knight_path::config::{Config, ConfigSource};
use knight_path::{format_path, render_board, Puzzle, PuzzleError};
use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::process::ExitCode;

/// Shortest knight path on a board with obstacles
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Puzzle to solve: `.json` or a text layout. A random board is used when omitted.
    #[arg(short, long)]
    puzzle: Option<PathBuf>,

    /// Seed for the random board
    #[arg(long)]
    seed: Option<u64>,

    /// Write the puzzle as JSON before solving
    #[arg(long)]
    save: Option<PathBuf>,
}

fn load_puzzle(args: &Args, config: &Config) -> Result<Puzzle, PuzzleError> {
    match &args.puzzle {
        Some(path) => {
            info!("Loading puzzle from {}", path.display());
            Puzzle::load(path)
        }
        None => {
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            Puzzle::random(&mut rng, &config.board, &config.obstacles)
        }
    }
}

fn run(args: &Args, config: &Config) -> Result<(), PuzzleError> {
    let puzzle = load_puzzle(args, config)?;

    if let Some(path) = &args.save {
        puzzle.save_to_file(path)?;
        info!("Saved puzzle to {}", path.display());
    }

    println!("{}", render_board(&puzzle, &[]));

    let solution = puzzle.solve()?;
    let path = solution.start_to_target();

    println!("{}", render_board(&puzzle, &path));
    println!("Moves: {}", solution.move_count);
    println!("Path: {}", format_path(&path));
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let (config, source) = Config::load(&args.config);

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    match source {
        ConfigSource::File => info!("Loaded configuration from {}", args.config.display()),
        ConfigSource::Missing => info!(
            "No {} found, using default configuration",
            args.config.display()
        ),
        ConfigSource::Invalid(e) => {
            warn!("Failed to parse {}: {}", args.config.display(), e);
            warn!("Using default configuration");
        }
    }

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
