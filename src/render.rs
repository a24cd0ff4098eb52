//! Text rendering of the unfolded cube.
//!
//! Layout:
//!
//! ```text
//!       U U U
//!       U U U
//!       U U U
//! L L L F F F R R R B B B
//! L L L F F F R R R B B B
//! L L L F F F R R R B B B
//!       D D D
//!       D D D
//!       D D D
//! ```

use crate::cube::CubeState;
use crate::facelet::{Color, Face, FaceGrid, FACE_DIM};

/// Faces drawn side by side in the middle band of the net.
const SIDE_BAND: [Face; 4] = [Face::Left, Face::Front, Face::Right, Face::Back];

/// How facelet colors are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Palette {
    /// One letter per color.
    Letters,
    /// A colored block per facelet, using ANSI escapes.
    #[default]
    Ansi,
}

impl Palette {
    /// Returns the text for one facelet.
    pub fn draw(self, color: Color) -> &'static str {
        match self {
            Palette::Letters => match color {
                Color::White => "W",
                Color::Yellow => "Y",
                Color::Green => "G",
                Color::Blue => "B",
                Color::Orange => "O",
                Color::Red => "R",
            },
            Palette::Ansi => match color {
                Color::White => "\x1b[97m█\x1b[0m",
                Color::Yellow => "\x1b[93m█\x1b[0m",
                Color::Green => "\x1b[92m█\x1b[0m",
                Color::Blue => "\x1b[94m█\x1b[0m",
                Color::Orange => "\x1b[38;5;208m█\x1b[0m",
                Color::Red => "\x1b[91m█\x1b[0m",
            },
        }
    }
}

/// Formats one row of a face, facelets separated by spaces.
fn format_row(grid: &FaceGrid, row: usize, palette: Palette) -> String {
    grid[row]
        .iter()
        .map(|&color| palette.draw(color))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders the cube as an unfolded net, one line per facelet row.
pub fn render_net(cube: &CubeState, palette: Palette) -> String {
    // Up and Down sit above Front, which starts after one face width plus a gap
    let indent = " ".repeat(2 * FACE_DIM);
    let up = cube.facelets_of(Face::Up);
    let down = cube.facelets_of(Face::Down);
    let band: Vec<FaceGrid> = SIDE_BAND.iter().map(|&f| cube.facelets_of(f)).collect();

    let mut output = String::new();
    for row in 0..FACE_DIM {
        output.push_str(&indent);
        output.push_str(&format_row(&up, row, palette));
        output.push('\n');
    }
    for row in 0..FACE_DIM {
        let line: Vec<String> = band
            .iter()
            .map(|grid| format_row(grid, row, palette))
            .collect();
        output.push_str(&line.join(" "));
        output.push('\n');
    }
    for row in 0..FACE_DIM {
        output.push_str(&indent);
        output.push_str(&format_row(&down, row, palette));
        output.push('\n');
    }

    output
}
