#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! The state and move engine of a 3x3x3 cube, along with notation parsing,
//! scrambling, and the facelet bridge to an external two-phase solver.

pub mod color;
pub mod engine;
pub mod facelet;
pub mod moves;
pub mod notation;
pub mod scramble;
pub mod session;
pub mod solver;
pub mod state;

pub use color::{Color, Face};
pub use moves::{Direction, Magnitude, Move};
pub use session::{Cube, LogEntry, MoveLog};
pub use state::CubeState;

#[macro_export]
macro_rules! start {
    ($msg:expr) => {
        concat!("⏳ ", $msg)
    };
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}
