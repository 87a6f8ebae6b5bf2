use std::ops::{Index, IndexMut};

use crate::color::{Color, Face};

/// A 3x3 grid of stickers, row-major. Every face shares one orientation
/// convention, the standard unfolded net:
///
/// ```text
///           U
///        L  F  R  B
///           D
/// ```
///
/// `U` has row 0 against `B` and row 2 against `F`. `D` has row 0 against
/// `F` and row 2 against `B`. The four side faces have row 0 against `U`,
/// and the left column of each touches the side face to its left in the net
/// (`B`'s left column touches `R`, `L`'s left column touches `B`).
pub type Grid = [[Color; 3]; 3];

/// The colors of all 54 stickers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    faces: [Grid; 6],
}

impl CubeState {
    #[must_use]
    pub fn solved() -> Self {
        CubeState {
            faces: Face::ALL.map(|face| [[face.solved_color(); 3]; 3]),
        }
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        Face::ALL
            .into_iter()
            .all(|face| self[face].as_flattened().iter().all(|&c| c == face.solved_color()))
    }

    #[must_use]
    pub fn sticker(&self, face: Face, row: usize, col: usize) -> Color {
        self[face][row][col]
    }

    /// Overwrite a single sticker. This bypasses the move engine and can
    /// produce states that are unreachable by turning.
    pub fn set_sticker(&mut self, face: Face, row: usize, col: usize, color: Color) {
        self[face][row][col] = color;
    }

    /// How many stickers of each color there are, indexed by `Color as usize`.
    #[must_use]
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for grid in &self.faces {
            for &color in grid.as_flattened() {
                counts[color as usize] += 1;
            }
        }
        counts
    }

    /// Every face in `Face::ALL` order with its grid.
    pub fn faces(&self) -> impl Iterator<Item = (Face, &Grid)> {
        Face::ALL.into_iter().zip(self.faces.iter())
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}

impl Index<Face> for CubeState {
    type Output = Grid;

    fn index(&self, index: Face) -> &Self::Output {
        &self.faces[index as usize]
    }
}

impl IndexMut<Face> for CubeState {
    fn index_mut(&mut self, index: Face) -> &mut Self::Output {
        &mut self.faces[index as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_has_nine_of_each() {
        let state = CubeState::solved();
        assert!(state.is_solved());
        assert_eq!(state.color_counts(), [9; 6]);
        assert_eq!(state.sticker(Face::F, 1, 1), Color::G);
    }

    #[test]
    fn set_sticker_unsolves() {
        let mut state = CubeState::solved();
        state.set_sticker(Face::U, 0, 0, Color::Y);
        assert!(!state.is_solved());
        assert_eq!(state.color_counts()[Color::W as usize], 8);
        assert_eq!(state.color_counts()[Color::Y as usize], 10);
    }
}
