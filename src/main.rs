//! Command-line driver for the bounded Game of Life universe.
//!
//! Usage:
//!   life_universe random --rows 20 --cols 40 --percent 30 -n 100
//!   life_universe load pattern.txt -n 50
//!   life_universe preset glider --rows 20 --cols 20 -n 80 --window
//!   life_universe presets

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info, warn};

use life_universe::application::{
    EngineState, InitialPattern, RunConfig, Simulation, SimulationConfig, Universe, UniverseError,
};
use life_universe::presets;
use life_universe::rendering::{ConsoleRenderer, window};

#[derive(Parser, Debug)]
#[command(name = "life_universe")]
#[command(version)]
#[command(about = "Conway's Game of Life on a bounded grid")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Pause between generations, in milliseconds.
    #[arg(long, default_value_t = 200, global = true)]
    delay_ms: u64,

    /// Draw in a window instead of the terminal.
    #[arg(long, global = true)]
    window: bool,

    /// End the run early once a generation no longer changes the grid.
    #[arg(long, global = true)]
    stop_when_stable: bool,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start from a randomly filled grid.
    Random {
        #[arg(long)]
        rows: usize,
        #[arg(long)]
        cols: usize,
        /// Chance of each cell starting alive, 0-100.
        #[arg(long, default_value_t = 30)]
        percent: u8,
        /// Number of generations to run.
        #[arg(short = 'n', long)]
        generations: u64,
        /// RNG seed; a time-derived seed is used when omitted.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Start from a pattern file.
    Load {
        path: PathBuf,
        #[arg(short = 'n', long)]
        generations: u64,
    },

    /// Start from a named preset centred on an empty grid.
    Preset {
        name: String,
        #[arg(long)]
        rows: usize,
        #[arg(long)]
        cols: usize,
        #[arg(short = 'n', long)]
        generations: u64,
    },

    /// List the available presets.
    Presets,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let Some(config) = run_config(&cli) else {
        for pattern in presets::all_patterns() {
            println!("{:<12} {}", pattern.name, pattern.description);
        }
        return Ok(());
    };
    config.validate()?;

    let universe = build_universe(&config)?;
    let simulation = Simulation::new(SimulationConfig::from(&config));

    if cli.window {
        window::run_windowed(universe, simulation);
        return Ok(());
    }

    run_console(universe, simulation)
}

fn init_tracing(level: &str) {
    // stderr keeps log lines out of the rendered frames on stdout
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init();
}

/// `None` for commands that do not run a simulation
fn run_config(cli: &Cli) -> Option<RunConfig> {
    let (initial, generations) = match &cli.command {
        Commands::Random {
            rows,
            cols,
            percent,
            generations,
            seed,
        } => (
            InitialPattern::Random {
                rows: *rows,
                cols: *cols,
                alive_percentage: *percent,
                seed: *seed,
            },
            *generations,
        ),
        Commands::Load { path, generations } => (InitialPattern::File(path.clone()), *generations),
        Commands::Preset {
            name,
            rows,
            cols,
            generations,
        } => (
            InitialPattern::Preset {
                name: name.clone(),
                rows: *rows,
                cols: *cols,
            },
            *generations,
        ),
        Commands::Presets => return None,
    };

    Some(RunConfig {
        initial,
        generations,
        delay: Duration::from_millis(cli.delay_ms),
        stop_when_stable: cli.stop_when_stable,
    })
}

fn build_universe(config: &RunConfig) -> Result<Universe> {
    match &config.initial {
        InitialPattern::Random {
            rows,
            cols,
            alive_percentage,
            seed,
        } => {
            let seed = seed.unwrap_or_else(time_seed);
            info!(seed, "seeding random grid");
            let mut rng = StdRng::seed_from_u64(seed);
            let mut universe = Universe::new(*rows, *cols);
            universe.seed_random(*alive_percentage, &mut rng);
            Ok(universe)
        }
        InitialPattern::File(path) => {
            let universe = load_with_retry(path.clone(), &mut io::stdin().lock())?;
            if universe.state() == EngineState::Uninitialized {
                bail!("pattern declares an empty grid; nothing to simulate");
            }
            debug!("loaded grid\n{}", universe.snapshot());
            Ok(universe)
        }
        InitialPattern::Preset { name, rows, cols } => {
            let pattern =
                presets::by_name(name).with_context(|| format!("unknown preset `{name}`"))?;
            let mut universe = Universe::new(*rows, *cols);
            universe.place_pattern(&pattern);
            Ok(universe)
        }
    }
}

/// Keep asking for another path while the current one cannot be opened.
/// Gives up when `input` runs dry.
fn load_with_retry(mut path: PathBuf, input: &mut impl BufRead) -> Result<Universe> {
    let mut universe = Universe::new(0, 0);
    loop {
        match universe.load_from_path(&path) {
            Ok(()) => return Ok(universe),
            Err(err @ UniverseError::SourceUnavailable { .. }) => {
                warn!("{err}");
                eprint!("Could not open the file. Please enter another path: ");
                io::stderr().flush()?;

                let mut line = String::new();
                if input.read_line(&mut line)? == 0 {
                    return Err(err).context("no further pattern path was given");
                }
                path = PathBuf::from(line.trim());
            }
            Err(err) => return Err(err.into()),
        }
    }
}

fn run_console(mut universe: Universe, mut simulation: Simulation) -> Result<()> {
    let mut renderer = ConsoleRenderer::new(io::stdout().lock());
    let summary = simulation.run(&mut universe, &mut renderer)?;
    drop(renderer);
    if summary.stabilized {
        println!("Grid stabilized after {} generations.", summary.generations_run);
    }
    Ok(())
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_random() {
        let cli = Cli::try_parse_from([
            "life_universe", "random", "--rows", "4", "--cols", "5", "-n", "3", "--seed", "9",
        ])
        .unwrap();
        let config = run_config(&cli).unwrap();
        assert_eq!(config.generations, 3);
        assert_eq!(config.delay, Duration::from_millis(200));
        assert_eq!(
            config.initial,
            InitialPattern::Random {
                rows: 4,
                cols: 5,
                alive_percentage: 30,
                seed: Some(9),
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "life_universe", "load", "p.txt", "-n", "2", "--delay-ms", "0", "--stop-when-stable",
        ])
        .unwrap();
        let config = run_config(&cli).unwrap();
        assert_eq!(config.delay, Duration::ZERO);
        assert!(config.stop_when_stable);
    }

    #[test]
    fn test_presets_command_has_no_run() {
        let cli = Cli::try_parse_from(["life_universe", "presets"]).unwrap();
        assert!(run_config(&cli).is_none());
    }

    #[test]
    fn test_retry_reads_next_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("retry.txt");
        std::fs::write(&path, "2 2\n11\n11\n").unwrap();

        let missing = dir.path().join("missing.txt");
        let mut input = io::Cursor::new(format!("{}\n", path.display()));
        let universe = load_with_retry(missing, &mut input).unwrap();

        assert_eq!(universe.population(), 4);
    }

    #[test]
    fn test_retry_gives_up_when_input_ends() {
        let missing = PathBuf::from("/definitely/not/here.txt");
        let mut input = io::Cursor::new(String::new());
        let err = load_with_retry(missing, &mut input).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<UniverseError>(),
            Some(UniverseError::SourceUnavailable { .. })
        ));
    }
}
