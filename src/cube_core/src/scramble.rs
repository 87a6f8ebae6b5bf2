use std::ops::RangeInclusive;

use fastrand::Rng;
use log::debug;

use crate::{color::Face, moves::Move, state::CubeState};

/// The number of moves in a scramble is drawn uniformly from this range.
pub const SCRAMBLE_LENGTH: RangeInclusive<usize> = 25..=40;

/// Draw one random move.
///
/// The face is uniform. The kind is one of five equally likely outcomes: one
/// counterclockwise quarter turn, one half turn, and three clockwise quarter
/// turns. Over many draws this gives clockwise, counterclockwise and half
/// turns in a 3:1:1 ratio.
pub fn random_move(rng: &mut Rng) -> Move {
    let face = Face::ALL[rng.usize(..Face::ALL.len())];
    match rng.u8(0..5) {
        0 => Move::counter_clockwise(face),
        4 => Move::half(face),
        _ => Move::clockwise(face),
    }
}

/// Scramble `state` in place, returning the applied moves in order.
pub fn scramble(state: &mut CubeState, rng: &mut Rng) -> Vec<Move> {
    let length = rng.usize(SCRAMBLE_LENGTH);
    debug!("Scrambling with {length} moves");

    (0..length)
        .map(|_| {
            let move_ = random_move(rng);
            move_.apply(state);
            move_
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::{Direction, Magnitude, apply_all};

    #[test]
    fn length_is_in_range() {
        let mut rng = Rng::with_seed(7);
        for _ in 0..200 {
            let moves = scramble(&mut CubeState::solved(), &mut rng);
            assert!(SCRAMBLE_LENGTH.contains(&moves.len()));
        }
    }

    #[test]
    fn returned_moves_reproduce_the_state() {
        let mut rng = Rng::with_seed(42);
        let mut state = CubeState::solved();
        let moves = scramble(&mut state, &mut rng);

        let mut replayed = CubeState::solved();
        apply_all(&mut replayed, &moves);
        assert_eq!(state, replayed);
        assert_eq!(state.color_counts(), [9; 6]);
    }

    #[test]
    fn same_seed_same_scramble() {
        let a = scramble(&mut CubeState::solved(), &mut Rng::with_seed(3));
        let b = scramble(&mut CubeState::solved(), &mut Rng::with_seed(3));
        assert_eq!(a, b);
    }

    #[test]
    fn kinds_are_skewed_three_one_one() {
        let mut rng = Rng::with_seed(1234);
        let draws = 100_000;
        let mut counts = [0_u32; 3];
        let mut faces = [0_u32; 6];
        for _ in 0..draws {
            let move_ = random_move(&mut rng);
            faces[move_.face as usize] += 1;
            let kind = match (move_.magnitude, move_.direction) {
                (Magnitude::Quarter, Direction::Clockwise) => 0,
                (Magnitude::Quarter, Direction::CounterClockwise) => 1,
                (Magnitude::Half, _) => 2,
            };
            counts[kind] += 1;
        }

        let ratio = |count: u32| f64::from(count) / f64::from(draws);
        assert!((ratio(counts[0]) - 0.6).abs() < 0.01);
        assert!((ratio(counts[1]) - 0.2).abs() < 0.01);
        assert!((ratio(counts[2]) - 0.2).abs() < 0.01);
        for count in faces {
            assert!((ratio(count) - 1.0 / 6.0).abs() < 0.01);
        }
    }
}
