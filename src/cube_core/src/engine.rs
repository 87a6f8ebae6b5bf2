//! Quarter turns of a single face.
//!
//! The geometry is entirely table driven. For every face, [`RINGS`] lists the
//! four border strips of its neighbors in the order a clockwise turn carries
//! stickers: the contents of strip `k` end up in strip `k + 1`. Each strip is
//! listed in clockwise traversal order around the turned face, so element `j`
//! of one strip always lands on element `j` of the next. Where a neighbor's own
//! row or column indexing runs against that traversal, the strip is flagged
//! `reversed`.
//!
//! Note that `B` is the mirror of `F`: seen from the front, `B` turns the other
//! way for the same nominal "clockwise", and its ring runs `U -> L -> D -> R`
//! with the `U` and `R` strips reversed. That is all data in the table below;
//! no code path special cases a face.

use log::trace;

use crate::{
    color::{Color, Face},
    moves::Direction,
    state::{CubeState, Grid},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Line {
    Row(usize),
    Col(usize),
}

/// The three stickers of one neighbor that touch the turned face.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Strip {
    face: Face,
    line: Line,
    reversed: bool,
}

impl Strip {
    const fn new(face: Face, line: Line, reversed: bool) -> Self {
        Strip {
            face,
            line,
            reversed,
        }
    }

    /// The `(row, col)` coordinates of the strip in traversal order.
    fn positions(self) -> [(usize, usize); 3] {
        let mut positions = [0, 1, 2].map(|i| match self.line {
            Line::Row(row) => (row, i),
            Line::Col(col) => (i, col),
        });
        if self.reversed {
            positions.reverse();
        }
        positions
    }

    fn read(self, state: &CubeState) -> [Color; 3] {
        self.positions()
            .map(|(row, col)| state.sticker(self.face, row, col))
    }

    fn write(self, state: &mut CubeState, colors: [Color; 3]) {
        for ((row, col), color) in self.positions().into_iter().zip(colors) {
            state.set_sticker(self.face, row, col, color);
        }
    }
}

use Line::{Col, Row};

/// Indexed by `Face as usize`.
static RINGS: [[Strip; 4]; 6] = [
    // U
    [
        Strip::new(Face::B, Row(0), false),
        Strip::new(Face::R, Row(0), false),
        Strip::new(Face::F, Row(0), false),
        Strip::new(Face::L, Row(0), false),
    ],
    // D
    [
        Strip::new(Face::F, Row(2), false),
        Strip::new(Face::R, Row(2), false),
        Strip::new(Face::B, Row(2), false),
        Strip::new(Face::L, Row(2), false),
    ],
    // L
    [
        Strip::new(Face::U, Col(0), false),
        Strip::new(Face::F, Col(0), false),
        Strip::new(Face::D, Col(0), false),
        Strip::new(Face::B, Col(2), true),
    ],
    // R
    [
        Strip::new(Face::U, Col(2), true),
        Strip::new(Face::B, Col(0), false),
        Strip::new(Face::D, Col(2), true),
        Strip::new(Face::F, Col(2), true),
    ],
    // F
    [
        Strip::new(Face::U, Row(2), false),
        Strip::new(Face::R, Col(0), false),
        Strip::new(Face::D, Row(0), true),
        Strip::new(Face::L, Col(2), true),
    ],
    // B
    [
        Strip::new(Face::U, Row(0), true),
        Strip::new(Face::L, Col(0), false),
        Strip::new(Face::D, Row(2), false),
        Strip::new(Face::R, Col(2), true),
    ],
];

/// Rotate a grid a quarter turn in place.
fn rotate_grid(grid: &mut Grid, direction: Direction) {
    let old = *grid;
    for (row, cells) in grid.iter_mut().enumerate() {
        for (col, cell) in cells.iter_mut().enumerate() {
            *cell = match direction {
                Direction::Clockwise => old[2 - col][row],
                Direction::CounterClockwise => old[col][2 - row],
            };
        }
    }
}

/// Turn `face` a quarter turn in `direction`.
///
/// This touches exactly the nine stickers of `face` and the twelve border
/// stickers of its four neighbors. Every strip is read before any strip is
/// written, so a turn never feeds a neighbor's freshly written value into
/// another neighbor. Half turns are two calls with the same arguments.
pub fn turn(state: &mut CubeState, face: Face, direction: Direction) {
    trace!("Turning {face} {direction:?}");

    rotate_grid(&mut state[face], direction);

    let ring = &RINGS[face as usize];
    let captured: [[Color; 3]; 4] = ring.map(|strip| strip.read(state));

    // Clockwise pulls each strip from its predecessor in the ring,
    // counterclockwise from its successor
    let offset = match direction {
        Direction::Clockwise => 3,
        Direction::CounterClockwise => 1,
    };
    for (i, strip) in ring.iter().enumerate() {
        strip.write(state, captured[(i + offset) % 4]);
    }
}
