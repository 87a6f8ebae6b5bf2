//! The 54 character facelet string understood by two-phase solvers.
//!
//! Faces are written in `U R F D L B` order, each flattened row-major. Every
//! character names the face whose solved color matches the sticker, not the
//! face the sticker currently sits on.

use thiserror::Error;

use crate::{
    color::{Color, Face},
    state::CubeState,
};

pub const FACELET_COUNT: usize = 54;

pub const FACE_ORDER: [Face; 6] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

pub const SOLVED_FACELETS: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FaceletError {
    #[error("Expected 54 facelets but got {0}")]
    WrongLength(usize),
    #[error("Invalid facelet {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("Expected 9 facelets of {face} but got {count}")]
    WrongCount { face: Face, count: usize },
    #[error("The center of {face} is {found}")]
    CenterMismatch { face: Face, found: Face },
}

/// Encode `state` as a facelet string.
#[must_use]
pub fn encode(state: &CubeState) -> String {
    FACE_ORDER
        .iter()
        .flat_map(|&face| state[face].as_flattened())
        .map(|&color: &Color| color.canonical_face().letter())
        .collect()
}

/// Check that `facelets` is well formed: the right length and alphabet, nine
/// facelets of every face, and fixed centers. This does not check that the
/// string is a reachable permutation; that is left to the solver.
///
/// # Errors
///
/// Returns the first problem found. See [`FaceletError`].
pub fn validate(facelets: &str) -> Result<(), FaceletError> {
    let letters = facelets.chars().collect::<Vec<_>>();
    if letters.len() != FACELET_COUNT {
        return Err(FaceletError::WrongLength(letters.len()));
    }

    let mut counts = [0; 6];
    for (position, &character) in letters.iter().enumerate() {
        let face = Face::from_letter(character)
            .ok_or(FaceletError::InvalidCharacter { character, position })?;
        counts[face as usize] += 1;
    }

    for face in Face::ALL {
        let count = counts[face as usize];
        if count != 9 {
            return Err(FaceletError::WrongCount { face, count });
        }
    }

    for (i, &face) in FACE_ORDER.iter().enumerate() {
        // Every letter was validated above
        let found = Face::from_letter(letters[i * 9 + 4]).unwrap_or(face);
        if found != face {
            return Err(FaceletError::CenterMismatch { face, found });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation;
    use crate::moves::apply_all;

    fn encode_sequence(sequence: &str) -> String {
        let mut state = CubeState::solved();
        apply_all(&mut state, &notation::parse(sequence).unwrap());
        encode(&state)
    }

    #[test]
    fn solved() {
        assert_eq!(encode(&CubeState::solved()), SOLVED_FACELETS);
        assert_eq!(validate(SOLVED_FACELETS), Ok(()));
    }

    #[test]
    fn known_sequences() {
        // Standard U R F D L B facelet layout
        static TESTS: [[&str; 2]; 5] = [
            ["U", "UUUUUUUUUBBBRRRRRRRRRFFFFFFDDDDDDDDDFFFLLLLLLLLLBBBBBB"],
            [
                "U2 R2 L D2 L F2 B2 U' D' F U R' L2 U2 D L F' B2 D R2",
                "FLLLULFRFRUURRRBBBLDDFFUBRUDFRDDUFLDUFUFLDLBRBDRBBULBD",
            ],
            [
                "R L2 U2 D2 R2 U2 R' D2 R' F' R L2 B R2 L' F' B2 U' D' F B2 U R' L2",
                "DUULUFBDDRRFURDBFLRBBUFBLBLULURDLLBDFUUFLRBDFRFRLBDFRD",
            ],
            [
                "F U' F' B' L' U F B R F' B D2 F B2 U2 R2 U2 D2 F B",
                "RRDBUFDLBLLFLRRURBRUDLFDLRRUUBUDBRBLDDBDLBUFFLDFFBFUUF",
            ],
            [
                "U2 D2 L2 F' B L2 B2 U2 F' R L2 F' B2 U2 D F' U' D2 R U2 D F2",
                "LBDLULDDURDRRRFRURBFFRFBFRDLDBDDBDFBBULRLFFBUFLUUBUULL",
            ],
        ];

        for [sequence, facelets] in TESTS {
            assert_eq!(encode_sequence(sequence), facelets, "{sequence}");
            assert_eq!(validate(facelets), Ok(()));
        }
    }

    #[test]
    fn stickers_are_named_by_solved_face() {
        let mut state = CubeState::solved();
        state.set_sticker(Face::U, 0, 0, Color::G);
        assert!(encode(&state).starts_with('F'));
    }

    #[test]
    fn validation_errors() {
        assert_eq!(validate("UUU"), Err(FaceletError::WrongLength(3)));

        let mut bad_char = SOLVED_FACELETS.to_owned();
        bad_char.replace_range(10..11, "X");
        assert_eq!(
            validate(&bad_char),
            Err(FaceletError::InvalidCharacter {
                character: 'X',
                position: 10
            })
        );

        let mut bad_count = SOLVED_FACELETS.to_owned();
        bad_count.replace_range(0..1, "R");
        assert_eq!(
            validate(&bad_count),
            Err(FaceletError::WrongCount {
                face: Face::U,
                count: 8
            })
        );

        // Swap the U and R centers; counts stay at nine
        let mut bad_center = SOLVED_FACELETS.to_owned();
        bad_center.replace_range(4..5, "R");
        bad_center.replace_range(13..14, "U");
        assert_eq!(
            validate(&bad_center),
            Err(FaceletError::CenterMismatch {
                face: Face::U,
                found: Face::R
            })
        );
    }
}
