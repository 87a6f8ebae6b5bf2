use std::fmt::{self, Display};

use crate::{color::Face, engine, state::CubeState};

/// The sense of a quarter turn, as seen looking straight at the turned face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Magnitude {
    Quarter,
    Half,
}

/// A single move in standard notation: `R`, `R'` or `R2`.
///
/// Half turns are always clockwise; `R2` and `R2'` are the same move, and only
/// the former is representable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
    pub magnitude: Magnitude,
}

impl Direction {
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

impl Move {
    #[must_use]
    pub const fn clockwise(face: Face) -> Self {
        Move {
            face,
            direction: Direction::Clockwise,
            magnitude: Magnitude::Quarter,
        }
    }

    #[must_use]
    pub const fn counter_clockwise(face: Face) -> Self {
        Move {
            face,
            direction: Direction::CounterClockwise,
            magnitude: Magnitude::Quarter,
        }
    }

    #[must_use]
    pub const fn half(face: Face) -> Self {
        Move {
            face,
            direction: Direction::Clockwise,
            magnitude: Magnitude::Half,
        }
    }

    #[must_use]
    pub const fn quarter(face: Face, direction: Direction) -> Self {
        Move {
            face,
            direction,
            magnitude: Magnitude::Quarter,
        }
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self.magnitude {
            Magnitude::Quarter => Move::quarter(self.face, self.direction.inverse()),
            Magnitude::Half => self,
        }
    }

    /// Apply the move to `state`. A half turn is two clockwise quarter turns
    /// through the same engine entry point.
    pub fn apply(self, state: &mut CubeState) {
        match self.magnitude {
            Magnitude::Quarter => engine::turn(state, self.face, self.direction),
            Magnitude::Half => {
                engine::turn(state, self.face, Direction::Clockwise);
                engine::turn(state, self.face, Direction::Clockwise);
            }
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.magnitude, self.direction) {
            (Magnitude::Half, _) => write!(f, "{}2", self.face),
            (Magnitude::Quarter, Direction::Clockwise) => write!(f, "{}", self.face),
            (Magnitude::Quarter, Direction::CounterClockwise) => write!(f, "{}'", self.face),
        }
    }
}

/// Apply every move of `moves` to `state`, in order.
pub fn apply_all(state: &mut CubeState, moves: &[Move]) {
    for move_ in moves {
        move_.apply(state);
    }
}

/// The sequence that undoes `moves`.
#[must_use]
pub fn invert_sequence(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|move_| move_.inverse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Move::clockwise(Face::R).to_string(), "R");
        assert_eq!(Move::counter_clockwise(Face::U).to_string(), "U'");
        assert_eq!(Move::half(Face::B).to_string(), "B2");
    }

    #[test]
    fn inverse() {
        assert_eq!(Move::clockwise(Face::L).inverse(), Move::counter_clockwise(Face::L));
        assert_eq!(Move::counter_clockwise(Face::D).inverse(), Move::clockwise(Face::D));
        assert_eq!(Move::half(Face::F).inverse(), Move::half(Face::F));
    }

    #[test]
    fn sequence_then_inverse_is_identity() {
        let moves = [
            Move::clockwise(Face::R),
            Move::half(Face::U),
            Move::counter_clockwise(Face::F),
            Move::clockwise(Face::B),
            Move::counter_clockwise(Face::L),
            Move::half(Face::D),
        ];
        let mut state = CubeState::solved();
        apply_all(&mut state, &moves);
        assert!(!state.is_solved());
        apply_all(&mut state, &invert_sequence(&moves));
        assert!(state.is_solved());
    }
}
