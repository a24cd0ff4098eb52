//! Interactive command session.
//!
//! Parses one line of user input into a `Command` and runs it against an owned
//! `CubeState`. All user-facing text is produced here; the binary only moves
//! lines between the terminal and the session.

use std::str::FromStr;

use log::debug;
use thiserror::Error;

use crate::cube::CubeState;
use crate::moves::{Algorithm, MoveParseError};
use crate::render::{render_net, Palette};

pub const DEFAULT_SCRAMBLE_LENGTH: usize = 20;
pub const DEFAULT_HISTORY_PREVIEW: usize = 20;
/// Largest scramble a command may request.
pub const MAX_SCRAMBLE_LENGTH: usize = 10_000;

pub const HELP: &str = "\
Moves:
  U U' U2   turn the up face (clockwise, counter-clockwise, half)
  D D' D2   turn the down face
  F F' F2   turn the front face
  B B' B2   turn the back face
  L L' L2   turn the left face
  R R' R2   turn the right face
  Several moves may be given on one line, separated by spaces.

Commands:
  show         show the cube
  reset        return to the solved state and clear the history
  scramble     scramble with the default number of moves
  scramble N   scramble with N moves
  solve        reverse the recorded history
  history      show every move since the last reset
  undo         undo the last move
  help         show this message
  quit         exit";

/// Session settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub palette: Palette,
    /// Moves used by `scramble` without an explicit count.
    pub default_scramble_length: usize,
    /// How many trailing moves the status block shows.
    pub history_preview: usize,
    /// Seed for scrambles; `None` seeds from the system.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            default_scramble_length: DEFAULT_SCRAMBLE_LENGTH,
            history_preview: DEFAULT_HISTORY_PREVIEW,
            seed: None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("{0} (type 'help' for the command list)")]
    InvalidMove(#[from] MoveParseError),
    #[error(
        "Invalid scramble length {input:?}, expected a whole number from 0 to {max}",
        max = MAX_SCRAMBLE_LENGTH
    )]
    InvalidScrambleLength { input: String },
    #[error("Unexpected argument {input:?} for '{command}'")]
    UnexpectedArgument {
        command: &'static str,
        input: String,
    },
}

/// One line of user input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Show,
    Reset,
    Scramble(Option<usize>),
    Solve,
    History,
    Undo,
    Help,
    Quit,
    Moves(Algorithm),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let lowered = line.trim().to_lowercase();
        let mut words = lowered.split_whitespace();
        let Some(first) = words.next() else {
            return Ok(Command::Show);
        };
        let argument = words.next();

        let command = match first {
            "show" => Command::Show,
            "reset" => Command::Reset,
            "solve" => Command::Solve,
            "history" => Command::History,
            "undo" => Command::Undo,
            "help" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            "scramble" => {
                let length = argument.map(parse_scramble_length).transpose()?;
                if let Some(extra) = words.next() {
                    return Err(CommandError::UnexpectedArgument {
                        command: "scramble",
                        input: extra.to_string(),
                    });
                }
                return Ok(Command::Scramble(length));
            }
            // anything else is a list of moves
            _ => return Ok(Command::Moves(line.to_uppercase().parse()?)),
        };

        match argument {
            Some(extra) => Err(CommandError::UnexpectedArgument {
                command: command.name(),
                input: extra.to_string(),
            }),
            None => Ok(command),
        }
    }
}

/// Parses a scramble length no larger than `MAX_SCRAMBLE_LENGTH`.
pub fn parse_scramble_length(input: &str) -> Result<usize, CommandError> {
    input
        .parse::<usize>()
        .ok()
        .filter(|&length| length <= MAX_SCRAMBLE_LENGTH)
        .ok_or_else(|| CommandError::InvalidScrambleLength {
            input: input.to_string(),
        })
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Show => "show",
            Command::Reset => "reset",
            Command::Scramble(_) => "scramble",
            Command::Solve => "solve",
            Command::History => "history",
            Command::Undo => "undo",
            Command::Help => "help",
            Command::Quit => "quit",
            Command::Moves(_) => "moves",
        }
    }
}

/// Result of running a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Text to print.
    Text(String),
    /// A reversal of the history that the caller may offer to apply with
    /// `Session::apply_solution`.
    Solution(Algorithm),
    /// The user asked to leave.
    Quit,
}

/// A cube plus the settings and random source used to drive it.
pub struct Session {
    cube: CubeState,
    config: SessionConfig,
    rng: fastrand::Rng,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self {
            cube: CubeState::new(),
            config,
            rng,
        }
    }

    pub fn cube(&self) -> &CubeState {
        &self.cube
    }

    /// Runs one command.
    pub fn execute(&mut self, command: Command) -> Reply {
        debug!("executing {command:?}");
        match command {
            Command::Show => Reply::Text(self.status()),
            Command::Reset => {
                self.cube.reset();
                Reply::Text(format!("Cube reset\n{}", self.status()))
            }
            Command::Scramble(length) => {
                let length = length.unwrap_or(self.config.default_scramble_length);
                let scramble = self.cube.scramble_with(length, &mut self.rng);
                Reply::Text(format!("Scramble: {scramble}\n{}", self.status()))
            }
            Command::Solve => {
                if self.cube.is_solved() {
                    Reply::Text("Already solved".to_string())
                } else if self.cube.history().is_empty() {
                    Reply::Text("No history to reverse".to_string())
                } else {
                    Reply::Solution(self.cube.history_inverse())
                }
            }
            Command::History => {
                let history = self.cube.history();
                if history.is_empty() {
                    Reply::Text("No moves yet".to_string())
                } else {
                    let moves = Algorithm(history.to_vec());
                    Reply::Text(format!("History ({} moves):\n{moves}", history.len()))
                }
            }
            Command::Undo => match self.cube.undo_last() {
                Ok(undone) => Reply::Text(format!("Undid {undone}\n{}", self.status())),
                Err(err) => Reply::Text(err.to_string()),
            },
            Command::Help => Reply::Text(HELP.to_string()),
            Command::Quit => Reply::Quit,
            Command::Moves(algorithm) => {
                self.cube.apply_algorithm(&algorithm);
                Reply::Text(self.status())
            }
        }
    }

    /// Applies a solution returned in `Reply::Solution` and shows the result.
    pub fn apply_solution(&mut self, solution: &Algorithm) -> String {
        self.cube.apply_algorithm(solution);
        format!("Solution applied\n{}", self.status())
    }

    /// The net, whether the cube is solved, and the most recent moves.
    pub fn status(&self) -> String {
        let mut status = render_net(&self.cube, self.config.palette);
        status.push('\n');
        status.push_str(if self.cube.is_solved() {
            "Solved: yes"
        } else {
            "Solved: no"
        });
        let history = self.cube.history();
        if !history.is_empty() {
            let skip = history.len().saturating_sub(self.config.history_preview);
            let recent = Algorithm(history[skip..].to_vec());
            status.push_str(&format!("\nHistory: {recent}"));
        }
        status
    }
}
