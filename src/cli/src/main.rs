#![warn(clippy::pedantic)]

mod config;
mod render;
mod session;

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::owo_colors::OwoColorize;
use config::{DEFAULT_CONFIG_PATH, SessionConfig};
use env_logger::TimestampPrecision;
use hollow_cube::format_sequence;
use log::{LevelFilter, info};
use session::{Command, Session};
use std::{
    io,
    path::{Path, PathBuf},
};

/// Turn, scramble and solve hollow N×N×N cubes
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The session configuration file to use, in TOML format.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Side length of the cube, overriding the configuration
    #[arg(long)]
    size: Option<usize>,

    /// Seed for the scramble generator, overriding the configuration
    #[arg(long)]
    seed: Option<u64>,

    /// Print face numbers without colors
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the faces of a solved cube.
    Show,
    /// Apply a sequence of turns and print the result.
    Apply {
        /// The turns to apply, e.g. "Y0 Z1' X2".
        sequence: String,
    },
    /// Scramble the cube and print the scramble and the solution.
    Scramble {
        /// Number of random turns, overriding the configuration
        #[arg(long, short = 'n')]
        count: Option<usize>,
    },
    /// Read turns and commands from stdin, one line at a time.
    Repl,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let mut config = match &cli.config {
        Some(path) => SessionConfig::load(path, true)?,
        None => SessionConfig::load(Path::new(DEFAULT_CONFIG_PATH), false)?,
    };
    if let Some(size) = cli.size {
        config.size = size;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.no_color {
        config.color = false;
    }
    info!("Loaded configuration: {config:?}");

    let mut session = Session::new(config)?;

    match cli.command {
        Commands::Show => {
            print!("{}", render::render(session.cube(), session.config().color));
        }
        Commands::Apply { sequence } => {
            session.apply_text(&sequence)?;
            print!("{}", render::render(session.cube(), session.config().color));
            println!("Solved: {}", session.cube().is_solved());
        }
        Commands::Scramble { count } => {
            let scramble = session.scramble(count);
            println!("Scramble: {}", format_sequence(&scramble));
            print!("{}", render::render(session.cube(), session.config().color));
            let solution = session.solve();
            println!("Solution: {}", format_sequence(&solution));
            println!("Solved: {}", session.cube().is_solved());
        }
        Commands::Repl => run_repl(&mut session)?,
    }

    Ok(())
}

fn run_repl(session: &mut Session) -> color_eyre::Result<()> {
    eprintln!("Enter turns like `Y0 Z1' X2`, or one of: scramble [N], solve, reset, history, show, exit");
    print!("{}", render::render(session.cube(), session.config().color));

    let mut line = String::new();
    loop {
        line.clear();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let command = match Command::parse(&line, session.cube().size()) {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{}", err.red());
                continue;
            }
        };
        if command == Command::Exit {
            break;
        }
        let shows_cube = !matches!(command, Command::History);

        match session.execute(command) {
            Ok(Some(output)) => println!("{output}"),
            Ok(None) => {}
            Err(err) => {
                eprintln!("{}", err.red());
                continue;
            }
        }
        if shows_cube {
            print!("{}", render::render(session.cube(), session.config().color));
        }
    }

    eprintln!("Exiting");
    Ok(())
}
