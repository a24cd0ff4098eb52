//! Face-turn geometry.
//!
//! A clockwise quarter turn of a face does two things:
//! - rotates the face's own 3x3 grid 90 degrees clockwise
//! - cycles the four strips of facelets on the neighboring faces that touch it
//!
//! The strips are static data (`NEIGHBOR_STRIPS`). The permutation for each
//! face is built from them at compile time, so all twelve generators go
//! through the same table lookup.

use crate::facelet::{facelet_index, Face, FACE_DIM, NUM_FACELETS, NUM_FACES};

/// A row or column of a face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    Row(usize),
    Col(usize),
}

/// Three facelets on a neighboring face that move together during a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Strip {
    pub face: Face,
    pub line: Line,
    /// Whether the cells are taken from the end of the line backwards.
    pub reversed: bool,
}

impl Strip {
    const fn row(face: Face, row: usize) -> Self {
        Self {
            face,
            line: Line::Row(row),
            reversed: false,
        }
    }

    const fn col(face: Face, col: usize) -> Self {
        Self {
            face,
            line: Line::Col(col),
            reversed: false,
        }
    }

    const fn rev(self) -> Self {
        Self {
            reversed: !self.reversed,
            ..self
        }
    }

    /// Facelet index of the `i`th cell along this strip.
    pub const fn cell(self, i: usize) -> usize {
        let i = if self.reversed { FACE_DIM - 1 - i } else { i };
        match self.line {
            Line::Row(row) => facelet_index(self.face, row, i),
            Line::Col(col) => facelet_index(self.face, i, col),
        }
    }
}

/// Adjacent strips for each face, indexed by `Face::index`.
///
/// During a clockwise quarter turn, cell `i` of strip `k` moves to cell `i` of
/// strip `k + 1` (wrapping), which is the direction the turned face's own
/// stickers travel.
pub const NEIGHBOR_STRIPS: [[Strip; 4]; NUM_FACES] = {
    use Face::*;
    [
        // Up
        [
            Strip::row(Front, 0),
            Strip::row(Left, 0),
            Strip::row(Back, 0),
            Strip::row(Right, 0),
        ],
        // Down
        [
            Strip::row(Front, 2),
            Strip::row(Right, 2),
            Strip::row(Back, 2),
            Strip::row(Left, 2),
        ],
        // Front
        [
            Strip::row(Up, 2),
            Strip::col(Right, 0),
            Strip::row(Down, 0).rev(),
            Strip::col(Left, 2).rev(),
        ],
        // Back
        [
            Strip::row(Up, 0).rev(),
            Strip::col(Left, 0),
            Strip::row(Down, 2),
            Strip::col(Right, 2).rev(),
        ],
        // Left
        [
            Strip::col(Up, 0),
            Strip::col(Front, 0),
            Strip::col(Down, 0),
            Strip::col(Back, 2).rev(),
        ],
        // Right
        [
            Strip::col(Up, 2),
            Strip::col(Back, 0).rev(),
            Strip::col(Down, 2),
            Strip::col(Front, 2),
        ],
    ]
};

/// Source-to-destination map of one clockwise quarter turn.
///
/// `table[src] = dest` means the facelet at `src` ends up at `dest`.
pub type TurnTable = [u8; NUM_FACELETS];

/// Builds the clockwise quarter-turn table for one face.
const fn build_turn_table(face: Face) -> TurnTable {
    let mut table = [0u8; NUM_FACELETS];

    // start from the identity
    let mut src = 0;
    while src < NUM_FACELETS {
        table[src] = src as u8;
        src += 1;
    }

    // rotate the face's own grid: (row, col) -> (col, 2 - row)
    let mut row = 0;
    while row < FACE_DIM {
        let mut col = 0;
        while col < FACE_DIM {
            table[facelet_index(face, row, col)] =
                facelet_index(face, col, FACE_DIM - 1 - row) as u8;
            col += 1;
        }
        row += 1;
    }

    // cycle the neighboring strips
    let strips = NEIGHBOR_STRIPS[face.index()];
    let mut k = 0;
    while k < 4 {
        let from = strips[k];
        let to = strips[(k + 1) % 4];
        let mut i = 0;
        while i < FACE_DIM {
            table[from.cell(i)] = to.cell(i) as u8;
            i += 1;
        }
        k += 1;
    }

    table
}

/// Clockwise quarter-turn tables for every face, indexed by `Face::index`.
pub const QUARTER_TURNS: [TurnTable; NUM_FACES] = [
    build_turn_table(Face::Up),
    build_turn_table(Face::Down),
    build_turn_table(Face::Front),
    build_turn_table(Face::Back),
    build_turn_table(Face::Left),
    build_turn_table(Face::Right),
];

/// Applies one clockwise quarter turn of `face` to a facelet array in place.
#[inline]
pub fn quarter_turn<T: Copy>(facelets: &mut [T; NUM_FACELETS], face: Face) {
    let original = *facelets;
    for (src, &dest) in QUARTER_TURNS[face.index()].iter().enumerate() {
        facelets[dest as usize] = original[src];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facelet::{facelet_position, FACE_SIZE};

    /// Facelet array where every cell holds its own index.
    fn labelled() -> [usize; NUM_FACELETS] {
        std::array::from_fn(|i| i)
    }

    #[test]
    fn test_turn_tables_are_permutations() {
        for face in Face::ALL {
            let mut seen = [false; NUM_FACELETS];
            for (src, &dest) in QUARTER_TURNS[face.index()].iter().enumerate() {
                let dest = dest as usize;
                assert!(dest < NUM_FACELETS, "{face:?} maps {src} out of bounds");
                assert!(!seen[dest], "{face:?} maps two facelets to {dest}");
                seen[dest] = true;
            }
        }
    }

    #[test]
    fn test_centers_are_fixed() {
        for turned in Face::ALL {
            for face in Face::ALL {
                let center = facelet_index(face, 1, 1);
                assert_eq!(
                    QUARTER_TURNS[turned.index()][center] as usize,
                    center,
                    "{turned:?} moved the center of {face:?}"
                );
            }
        }
    }

    #[test]
    fn test_quarter_turn_moves_twenty_facelets() {
        for face in Face::ALL {
            let moved = QUARTER_TURNS[face.index()]
                .iter()
                .enumerate()
                .filter(|&(src, &dest)| src != dest as usize)
                .count();
            // 8 on the turned face plus 4 strips of 3
            assert_eq!(moved, 20, "{face:?} moved {moved} facelets");
        }
    }

    #[test]
    fn test_opposite_face_is_untouched() {
        let opposite = |face: Face| match face {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
        };
        for face in Face::ALL {
            let table = &QUARTER_TURNS[face.index()];
            let start = opposite(face).index() * FACE_SIZE;
            for idx in start..start + FACE_SIZE {
                assert_eq!(table[idx] as usize, idx);
            }
        }
    }

    #[test]
    fn test_strips_stay_on_their_faces() {
        for face in Face::ALL {
            let table = &QUARTER_TURNS[face.index()];
            let strip_faces: Vec<Face> = NEIGHBOR_STRIPS[face.index()]
                .iter()
                .map(|strip| strip.face)
                .collect();
            for (src, &dest) in table.iter().enumerate() {
                let (src_face, _, _) = facelet_position(src);
                let (dest_face, _, _) = facelet_position(dest as usize);
                if src_face == face {
                    assert_eq!(dest_face, face);
                } else if src != dest as usize {
                    assert!(strip_faces.contains(&src_face));
                    assert!(strip_faces.contains(&dest_face));
                }
            }
        }
    }

    #[test]
    fn test_up_turn_moves_front_row_to_left() {
        let mut facelets = labelled();
        quarter_turn(&mut facelets, Face::Up);
        for col in 0..FACE_DIM {
            assert_eq!(
                facelets[facelet_index(Face::Left, 0, col)],
                facelet_index(Face::Front, 0, col)
            );
            assert_eq!(
                facelets[facelet_index(Face::Front, 0, col)],
                facelet_index(Face::Right, 0, col)
            );
        }
    }

    #[test]
    fn test_front_turn_moves_up_row_to_right_column() {
        let mut facelets = labelled();
        quarter_turn(&mut facelets, Face::Front);
        for i in 0..FACE_DIM {
            assert_eq!(
                facelets[facelet_index(Face::Right, i, 0)],
                facelet_index(Face::Up, 2, i)
            );
        }
        // the face's own corner travels clockwise
        assert_eq!(
            facelets[facelet_index(Face::Front, 0, 2)],
            facelet_index(Face::Front, 0, 0)
        );
    }

    /// Order of the product of two clockwise quarter turns.
    fn product_order(first: Face, second: Face) -> usize {
        let start = labelled();
        let mut facelets = start;
        let mut order = 0;
        loop {
            quarter_turn(&mut facelets, first);
            quarter_turn(&mut facelets, second);
            order += 1;
            if facelets == start {
                return order;
            }
        }
    }

    #[test]
    fn test_adjacent_pairs_have_order_105() {
        for first in Face::ALL {
            for &strip in &NEIGHBOR_STRIPS[first.index()] {
                assert_eq!(
                    product_order(first, strip.face),
                    105,
                    "{first:?} {:?}",
                    strip.face
                );
            }
        }
    }
}
