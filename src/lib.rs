//! 3x3x3 Cube Simulator Library
//!
//! Models the facelets of a 3x3x3 twisty puzzle and the face turns that
//! permute them. Every turn is a table-driven permutation of the 54
//! facelets, so the turns form a permutation group: four quarter turns of a
//! face are the identity, `X` and `X'` cancel, and sequences compose.

pub mod cube;
pub mod facelet;
pub mod geometry;
pub mod moves;
pub mod render;
pub mod scramble;
pub mod session;

pub use cube::{CubeError, CubeState};
pub use facelet::{Color, Face, FaceGrid};
pub use moves::{history_inverse, inverse_notation, Algorithm, Move, MoveParseError, Turn};
pub use scramble::RandomSource;
