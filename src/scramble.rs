//! Random scramble generation.

use crate::facelet::Face;
use crate::moves::{Move, Turn};

/// Source of uniform random indices for scramble generation.
///
/// `fastrand::Rng` is the default source. Tests supply a scripted one to get
/// an exact, repeatable sequence.
pub trait RandomSource {
    /// Returns an index drawn uniformly from `0..bound`. `bound` is never zero.
    ///
    /// Out-of-range results are reduced modulo `bound` by the caller.
    fn index_below(&mut self, bound: usize) -> usize;
}

impl RandomSource for fastrand::Rng {
    fn index_below(&mut self, bound: usize) -> usize {
        self.usize(..bound)
    }
}

/// Draws scramble moves one at a time.
///
/// Each face is drawn uniformly from the faces other than the previous draw's
/// face, so no two consecutive moves turn the same face.
pub struct ScrambleMoves<'a, S: RandomSource + ?Sized> {
    source: &'a mut S,
    previous_face: Option<Face>,
    remaining: usize,
}

impl<'a, S: RandomSource + ?Sized> ScrambleMoves<'a, S> {
    pub fn new(source: &'a mut S, length: usize) -> Self {
        Self {
            source,
            previous_face: None,
            remaining: length,
        }
    }
}

impl<S: RandomSource + ?Sized> ScrambleMoves<'_, S> {
    fn draw(&mut self, bound: usize) -> usize {
        self.source.index_below(bound) % bound
    }
}

impl<S: RandomSource + ?Sized> Iterator for ScrambleMoves<'_, S> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        // skip over the previous face instead of drawing it
        let face = match self.previous_face {
            Some(previous) => {
                let index = self.draw(Face::ALL.len() - 1);
                Face::ALL[if index < previous.index() { index } else { index + 1 }]
            }
            None => Face::ALL[self.draw(Face::ALL.len())],
        };
        let turn = Turn::ALL[self.draw(Turn::ALL.len())];

        self.previous_face = Some(face);
        Some(Move::new(face, turn))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
