//! 3x3x3 Cube Simulator
//!
//! Turns the faces of a virtual 3x3x3 cube from the terminal. With no
//! subcommand it starts an interactive session; the subcommands run a single
//! scramble, algorithm, or inversion and exit.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::info;

use cubesim::render::{render_net, Palette};
use cubesim::session::{
    parse_scramble_length, Command, Reply, Session, SessionConfig, DEFAULT_SCRAMBLE_LENGTH, HELP,
};
use cubesim::{Algorithm, CubeState};

/// Simulates a 3x3x3 cube in the terminal.
#[derive(Parser)]
#[command(name = "cubesim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Mode>,

    /// Print facelets as letters instead of colored blocks.
    #[arg(long, global = true)]
    no_color: bool,

    /// Default number of moves for `scramble` in the interactive session.
    #[arg(long, default_value_t = DEFAULT_SCRAMBLE_LENGTH, value_parser = scramble_length)]
    scramble_length: usize,

    /// Seed for scrambles in the interactive session.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Mode {
    /// Start the interactive session (the default).
    Interactive,
    /// Scramble a solved cube and print the scramble and the result.
    Scramble {
        /// Number of moves.
        #[arg(short, long, default_value_t = DEFAULT_SCRAMBLE_LENGTH, value_parser = scramble_length)]
        length: usize,
        /// Seed for a repeatable scramble.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Apply an algorithm to a solved cube and print the result.
    Apply {
        /// Whitespace-separated moves, e.g. "R U R' U'".
        algorithm: String,
    },
    /// Print the algorithm that undoes the given one.
    Invert {
        /// Whitespace-separated moves, e.g. "R U R' U'".
        algorithm: String,
    },
}

fn scramble_length(input: &str) -> Result<usize, String> {
    parse_scramble_length(input).map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let palette = if cli.no_color {
        Palette::Letters
    } else {
        Palette::Ansi
    };

    match cli.command {
        None | Some(Mode::Interactive) => {
            let config = SessionConfig {
                palette,
                default_scramble_length: cli.scramble_length,
                seed: cli.seed,
                ..SessionConfig::default()
            };
            if let Err(e) = run_interactive(config) {
                eprintln!("Terminal error: {}", e);
                return ExitCode::FAILURE;
            }
        }
        Some(Mode::Scramble { length, seed }) => run_scramble(length, seed, palette),
        Some(Mode::Apply { algorithm }) => return run_apply(&algorithm, palette),
        Some(Mode::Invert { algorithm }) => return run_invert(&algorithm),
    }

    ExitCode::SUCCESS
}

/// Reads commands from stdin until `quit` or end of input.
fn run_interactive(config: SessionConfig) -> io::Result<()> {
    info!("starting interactive session with {config:?}");
    let mut session = Session::new(config);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("3x3x3 cube simulator. Type 'help' for commands, 'quit' to exit.");
    println!("{}", session.status());

    loop {
        print!("\n> ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            println!();
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match session.execute(command) {
            Reply::Text(text) => println!("{}", text),
            Reply::Quit => break,
            Reply::Solution(solution) => {
                println!("History reversal ({} moves):", solution.len());
                println!("{}", solution);
                print!("Apply it? (y/n): ");
                io::stdout().flush()?;
                let answer = lines.next().transpose()?.unwrap_or_default();
                if answer.trim().eq_ignore_ascii_case("y") {
                    println!("{}", session.apply_solution(&solution));
                }
            }
        }
    }

    info!("session ended");
    println!("Bye");
    Ok(())
}

/// Scrambles a fresh cube and prints the scramble and the net.
fn run_scramble(length: usize, seed: Option<u64>, palette: Palette) {
    let mut rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let mut cube = CubeState::new();
    let scramble = cube.scramble_with(length, &mut rng);
    println!("{}", scramble);
    print!("{}", render_net(&cube, palette));
}

/// Applies an algorithm to a fresh cube and prints the net.
fn run_apply(algorithm: &str, palette: Palette) -> ExitCode {
    let mut cube = CubeState::new();
    match cube.apply_sequence(algorithm) {
        Ok(count) => {
            info!("applied {count} moves");
            print!("{}", render_net(&cube, palette));
            println!("Solved: {}", if cube.is_solved() { "yes" } else { "no" });
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", HELP);
            ExitCode::FAILURE
        }
    }
}

/// Prints the inverse of an algorithm.
fn run_invert(algorithm: &str) -> ExitCode {
    match algorithm.parse::<Algorithm>() {
        Ok(algorithm) => {
            println!("{}", algorithm.inverse());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["cubesim", "--no-color", "scramble", "-l", "5"]).unwrap();
        assert!(cli.no_color);
        assert!(matches!(
            cli.command,
            Some(Mode::Scramble {
                length: 5,
                seed: None
            })
        ));

        assert!(Cli::try_parse_from(["cubesim", "scramble", "-l", "10001"]).is_err());
        assert!(Cli::try_parse_from(["cubesim", "--scramble-length", "-1"]).is_err());

        let cli = Cli::try_parse_from(["cubesim", "invert", "R U"]).unwrap();
        assert!(matches!(cli.command, Some(Mode::Invert { ref algorithm }) if algorithm == "R U"));

        let cli = Cli::try_parse_from(["cubesim"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.scramble_length, DEFAULT_SCRAMBLE_LENGTH);
    }
}
