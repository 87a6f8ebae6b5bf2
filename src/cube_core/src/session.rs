//! The command interface a front end drives the cube through.

use std::fmt::{self, Display};

use fastrand::Rng;
use itertools::Itertools;
use log::debug;
use thiserror::Error;

use crate::{
    color::{Color, Face},
    moves::{Direction, Move},
    notation::{self, InvalidNotation},
    scramble,
    solver::{self, DEFAULT_MAX_DEPTH, Resolution, ResolutionError, Solver},
    state::CubeState,
};

/// One entry of the move log shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    Move(Move),
    AlreadySolved,
    ResolutionError(String),
}

/// The moves applied since the last reset, scramble or solve request. The log
/// is for display only; nothing reads it back to drive the cube.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveLog {
    entries: Vec<LogEntry>,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintError {
    #[error("Centers cannot be repainted")]
    Center,
    #[error("Sticker ({row}, {col}) is off the face")]
    OutOfRange { row: usize, col: usize },
}

/// A cube together with its solved reference and move log.
#[derive(Debug, Clone)]
pub struct Cube {
    state: CubeState,
    solved: CubeState,
    log: MoveLog,
    max_depth: u8,
}

impl MoveLog {
    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Only the moves, skipping any status entries.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.entries.iter().filter_map(|entry| match entry {
            LogEntry::Move(move_) => Some(*move_),
            _ => None,
        })
    }

    fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    fn extend_moves(&mut self, moves: &[Move]) {
        self.entries.extend(moves.iter().copied().map(LogEntry::Move));
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogEntry::Move(move_) => write!(f, "{move_}"),
            LogEntry::AlreadySolved => write!(f, "Cube already solved"),
            LogEntry::ResolutionError(message) => write!(f, "Resolution Error: {message}"),
        }
    }
}

impl Display for MoveLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entries.iter().join(" "))
    }
}

impl Cube {
    #[must_use]
    pub fn new() -> Self {
        let state = CubeState::solved();
        Cube {
            solved: state.clone(),
            state,
            log: MoveLog::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Bound the search depth handed to the solver.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn snapshot(&self) -> &CubeState {
        &self.state
    }

    #[must_use]
    pub fn move_log(&self) -> &MoveLog {
        &self.log
    }

    #[must_use]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Turn one face a quarter turn.
    pub fn apply_move(&mut self, face: Face, direction: Direction) {
        let move_ = Move::quarter(face, direction);
        move_.apply(&mut self.state);
        self.log.push(LogEntry::Move(move_));
    }

    /// Apply already parsed moves in order, for example a solution returned by
    /// [`Cube::request_solve`].
    pub fn apply_moves(&mut self, moves: &[Move]) {
        for move_ in moves {
            move_.apply(&mut self.state);
        }
        self.log.extend_moves(moves);
    }

    /// Parse and apply a move string.
    ///
    /// # Errors
    ///
    /// If `text` is not valid notation. The cube is left untouched.
    pub fn apply_notation(&mut self, text: &str) -> Result<(), InvalidNotation> {
        let moves = notation::parse(text)?;
        self.apply_moves(&moves);
        Ok(())
    }

    /// Restore the solved state and clear the log.
    pub fn reset(&mut self) {
        self.state.clone_from(&self.solved);
        self.log.clear();
        debug!("Reset the cube");
    }

    /// Apply a random scramble. The log is replaced by the scramble's moves.
    pub fn scramble(&mut self, rng: &mut Rng) -> &MoveLog {
        self.log.clear();
        let moves = scramble::scramble(&mut self.state, rng);
        self.log.extend_moves(&moves);
        &self.log
    }

    /// Ask `solver` how to solve the current state. The log is cleared and then
    /// holds either the solution, the "already solved" marker, or the error.
    /// The cube itself is never changed.
    ///
    /// # Errors
    ///
    /// See [`ResolutionError`]. The error is also recorded in the log.
    pub fn request_solve<S: Solver + ?Sized>(
        &mut self,
        solver: &mut S,
    ) -> Result<Resolution, ResolutionError> {
        self.log.clear();
        let result = solver::resolve(&self.state, solver, self.max_depth);
        match &result {
            Ok(Resolution::AlreadySolved) => self.log.push(LogEntry::AlreadySolved),
            Ok(Resolution::Solution(moves)) => self.log.extend_moves(moves),
            Err(e) => self.log.push(LogEntry::ResolutionError(e.to_string())),
        }
        result
    }

    /// Overwrite one sticker, as when copying colors from a physical cube.
    ///
    /// # Errors
    ///
    /// The center of a face cannot be repainted, and the coordinates must be on
    /// the face.
    pub fn paint(
        &mut self,
        face: Face,
        row: usize,
        col: usize,
        color: Color,
    ) -> Result<(), PaintError> {
        if row > 2 || col > 2 {
            return Err(PaintError::OutOfRange { row, col });
        }
        if (row, col) == (1, 1) {
            return Err(PaintError::Center);
        }
        self.state.set_sticker(face, row, col, color);
        Ok(())
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}
