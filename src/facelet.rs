//! Face and color definitions and facelet index arithmetic.
//!
//! The cube surface is stored as a flat array of 54 facelets. Faces are laid
//! out in `Face` order, each as a row-major 3x3 grid, so a facelet's index is
//! `face * 9 + row * 3 + col`.

/// Facelets along one edge of a face.
pub const FACE_DIM: usize = 3;

/// Facelets per face.
pub const FACE_SIZE: usize = FACE_DIM * FACE_DIM;

/// Number of faces.
pub const NUM_FACES: usize = 6;

/// Facelets on the whole cube.
pub const NUM_FACELETS: usize = NUM_FACES * FACE_SIZE;

/// A snapshot of one face, row-major.
pub type FaceGrid = [[Color; FACE_DIM]; FACE_DIM];

/// One of the six faces.
///
/// Orientation convention: Up row 0 touches Back and row 2 touches Front.
/// The four side faces have row 0 against Up and row 2 against Down.
/// Down row 0 touches Front.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    Up = 0,
    Down = 1,
    Front = 2,
    Back = 3,
    Left = 4,
    Right = 5,
}

impl Face {
    /// All faces in index order.
    pub const ALL: [Face; NUM_FACES] = [
        Face::Up,
        Face::Down,
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
    ];

    /// Position of this face in the facelet array, in units of faces.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The notation letter for turns of this face.
    pub const fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Left => 'L',
            Face::Right => 'R',
        }
    }

    /// Parses a notation letter. Only upper-case letters are accepted.
    pub const fn from_letter(letter: char) -> Option<Face> {
        match letter {
            'U' => Some(Face::Up),
            'D' => Some(Face::Down),
            'F' => Some(Face::Front),
            'B' => Some(Face::Back),
            'L' => Some(Face::Left),
            'R' => Some(Face::Right),
            _ => None,
        }
    }

    /// The color this face shows when the cube is solved.
    pub const fn home_color(self) -> Color {
        match self {
            Face::Up => Color::White,
            Face::Down => Color::Yellow,
            Face::Front => Color::Green,
            Face::Back => Color::Blue,
            Face::Left => Color::Orange,
            Face::Right => Color::Red,
        }
    }
}

/// A facelet color.
///
/// Colors are opaque tags; the renderer decides how each one is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Orange,
    Red,
}

impl Color {
    pub const ALL: [Color; NUM_FACES] = [
        Color::White,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Orange,
        Color::Red,
    ];
}

/// Converts a (face, row, col) position to a facelet index.
#[inline(always)]
pub const fn facelet_index(face: Face, row: usize, col: usize) -> usize {
    face.index() * FACE_SIZE + row * FACE_DIM + col
}

/// Converts a facelet index back to its (face, row, col) position.
#[inline(always)]
pub const fn facelet_position(index: usize) -> (Face, usize, usize) {
    let face = Face::ALL[index / FACE_SIZE];
    let offset = index % FACE_SIZE;
    (face, offset / FACE_DIM, offset % FACE_DIM)
}

/// The solved surface: every face filled with its home color.
pub const fn solved_facelets() -> [Color; NUM_FACELETS] {
    let mut facelets = [Color::White; NUM_FACELETS];
    let mut i = 0;
    while i < NUM_FACELETS {
        facelets[i] = Face::ALL[i / FACE_SIZE].home_color();
        i += 1;
    }
    facelets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_roundtrip() {
        for face in Face::ALL {
            assert_eq!(Face::from_letter(face.letter()), Some(face));
        }
        assert_eq!(Face::from_letter('u'), None);
        assert_eq!(Face::from_letter('X'), None);
    }

    #[test]
    fn test_home_colors_are_distinct() {
        let mut colors: Vec<Color> = Face::ALL.iter().map(|f| f.home_color()).collect();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), NUM_FACES);
    }

    #[test]
    fn test_index_position_roundtrip() {
        for idx in 0..NUM_FACELETS {
            let (face, row, col) = facelet_position(idx);
            assert_eq!(facelet_index(face, row, col), idx, "Roundtrip failed for {idx}");
        }
    }

    #[test]
    fn test_solved_facelets_layout() {
        let facelets = solved_facelets();
        assert_eq!(facelets[facelet_index(Face::Up, 0, 0)], Color::White);
        assert_eq!(facelets[facelet_index(Face::Front, 1, 1)], Color::Green);
        assert_eq!(facelets[facelet_index(Face::Right, 2, 2)], Color::Red);
    }
}
