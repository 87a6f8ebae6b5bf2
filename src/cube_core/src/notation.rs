use itertools::Itertools;
use log::debug;
use thiserror::Error;

use crate::{color::Face, moves::Move};

/// A move string that could not be parsed. Positions are zero-based character
/// offsets into the input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidNotation {
    #[error("Invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("Modifier {character:?} at position {position} does not follow a face letter")]
    DanglingModifier { character: char, position: usize },
}

impl InvalidNotation {
    #[must_use]
    pub fn character(self) -> char {
        match self {
            InvalidNotation::InvalidCharacter { character, .. }
            | InvalidNotation::DanglingModifier { character, .. } => character,
        }
    }

    #[must_use]
    pub fn position(self) -> usize {
        match self {
            InvalidNotation::InvalidCharacter { position, .. }
            | InvalidNotation::DanglingModifier { position, .. } => position,
        }
    }
}

/// Parse a move string such as `"R U R' U'"` or `"RUR'U'F2"`.
///
/// Input is uppercased first. Spaces separate moves but are never required. A
/// face letter immediately followed by `'` or `2` forms one move; on its own
/// it is a clockwise quarter turn. The whole string is checked before anything
/// is returned, so a malformed string never yields a partial prefix.
///
/// # Errors
///
/// Any character other than a face letter, a space, `'` or `2` is an
/// [`InvalidNotation::InvalidCharacter`]. A `'` or `2` that does not directly
/// follow a face letter is an [`InvalidNotation::DanglingModifier`].
pub fn parse(text: &str) -> Result<Vec<Move>, InvalidNotation> {
    let mut moves = Vec::new();
    let mut chars = text
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .enumerate()
        .peekable();

    while let Some((position, character)) = chars.next() {
        let face = match character {
            ' ' => continue,
            '\'' | '2' => {
                return Err(InvalidNotation::DanglingModifier {
                    character,
                    position,
                });
            }
            _ => Face::from_letter(character).ok_or(InvalidNotation::InvalidCharacter {
                character,
                position,
            })?,
        };

        let move_ = match chars.next_if(|&(_, c)| c == '\'' || c == '2') {
            Some((_, '\'')) => Move::counter_clockwise(face),
            Some(_) => Move::half(face),
            None => Move::clockwise(face),
        };
        moves.push(move_);
    }

    debug!("Parsed {} moves from {text:?}", moves.len());

    Ok(moves)
}

/// Format moves in standard notation, separated by spaces.
#[must_use]
pub fn format(moves: &[Move]) -> String {
    moves.iter().join(" ")
}
