//! Cube state: the facelet grid plus the log of moves applied to it.

use log::{debug, trace};
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::facelet::{solved_facelets, Color, Face, FaceGrid, FACE_DIM, FACE_SIZE, NUM_FACELETS};
use crate::geometry::quarter_turn;
use crate::moves::{history_inverse, Algorithm, Move, MoveParseError, Turn};
use crate::scramble::{RandomSource, ScrambleMoves};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("Invalid move: {0}")]
    InvalidMove(#[from] MoveParseError),
    #[error("Nothing to undo")]
    NothingToUndo,
}

/// A 3x3x3 cube.
///
/// Cloning copies both the facelets and the log; the clone shares nothing
/// with the original.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CubeState {
    facelets: [Color; NUM_FACELETS],
    log: Vec<Move>,
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeState {
    /// Creates a solved cube with an empty move log.
    pub fn new() -> Self {
        Self {
            facelets: solved_facelets(),
            log: Vec::new(),
        }
    }

    /// Turns `face` and records the move.
    pub fn apply(&mut self, face: Face, turn: Turn) {
        self.apply_move(Move::new(face, turn));
    }

    /// Applies a move and appends it to the log.
    pub fn apply_move(&mut self, mv: Move) {
        trace!("applying {mv}");
        self.permute(mv);
        self.log.push(mv);
    }

    /// Applies every move of an algorithm in order.
    pub fn apply_algorithm(&mut self, algorithm: &Algorithm) {
        for &mv in algorithm {
            self.apply_move(mv);
        }
    }

    /// Parses a whitespace-separated algorithm and applies it.
    ///
    /// The whole text is parsed before anything is applied, so a malformed
    /// token leaves the facelets and the log untouched. Returns the number of
    /// moves applied.
    ///
    /// # Errors
    ///
    /// Returns `CubeError::InvalidMove` for the first token that fails to parse.
    pub fn apply_sequence(&mut self, text: &str) -> Result<usize, CubeError> {
        let algorithm: Algorithm = text.parse()?;
        self.apply_algorithm(&algorithm);
        Ok(algorithm.len())
    }

    /// Returns whether every face is a single color.
    pub fn is_solved(&self) -> bool {
        self.facelets
            .chunks_exact(FACE_SIZE)
            .all(|face| face.iter().all(|&color| color == face[0]))
    }

    /// Restores the solved facelets and clears the log.
    pub fn reset(&mut self) {
        debug!("resetting cube ({} logged moves dropped)", self.log.len());
        self.facelets = solved_facelets();
        self.log.clear();
    }

    /// Applies `length` random moves drawn from a fresh `fastrand::Rng`.
    pub fn scramble(&mut self, length: usize) -> Algorithm {
        self.scramble_with(length, &mut fastrand::Rng::new())
    }

    /// Applies `length` random moves drawn from `source`, returning them.
    ///
    /// No two consecutive moves turn the same face.
    pub fn scramble_with<S: RandomSource + ?Sized>(
        &mut self,
        length: usize,
        source: &mut S,
    ) -> Algorithm {
        let mut moves = Vec::new();
        for mv in ScrambleMoves::new(source, length) {
            self.apply_move(mv);
            moves.push(mv);
        }
        let scramble = Algorithm(moves);
        debug!("scrambled with {scramble}");
        scramble
    }

    /// Undoes the most recent move.
    ///
    /// The move is removed from the log and its inverse is applied without
    /// being recorded, so the log ends up one entry shorter. Returns the move
    /// that was undone.
    ///
    /// # Errors
    ///
    /// Returns `CubeError::NothingToUndo` if the log is empty.
    pub fn undo_last(&mut self) -> Result<Move, CubeError> {
        let last = self.log.pop().ok_or(CubeError::NothingToUndo)?;
        self.permute(last.inverse());
        debug!("undid {last}");
        Ok(last)
    }

    /// Returns a copy of one face's facelets.
    pub fn facelets_of(&self, face: Face) -> FaceGrid {
        let start = face.index() * FACE_SIZE;
        std::array::from_fn(|row| {
            std::array::from_fn(|col| self.facelets[start + row * FACE_DIM + col])
        })
    }

    /// Moves applied since the last reset, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.log
    }

    /// The log reversed with every move inverted.
    ///
    /// Applying it returns the cube to the state it was in before the logged
    /// moves, which is the solved state only if the log starts from solved.
    pub fn history_inverse(&self) -> Algorithm {
        history_inverse(&self.log)
    }

    /// Number of facelets of each color. Always 9 of each.
    pub fn color_census(&self) -> FxHashMap<Color, usize> {
        let mut census = FxHashMap::default();
        for &color in &self.facelets {
            *census.entry(color).or_insert(0) += 1;
        }
        census
    }

    fn permute(&mut self, mv: Move) {
        for _ in 0..mv.turn.quarter_turns() {
            quarter_turn(&mut self.facelets, mv.face);
        }
    }
}
