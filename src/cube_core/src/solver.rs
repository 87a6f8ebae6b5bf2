use std::time::Instant;

use log::{info, warn};
use thiserror::Error;

use crate::{
    facelet::{self, FaceletError, SOLVED_FACELETS},
    moves::Move,
    notation::{self, InvalidNotation},
    start,
    state::CubeState,
    success,
};

/// The search depth bound handed to the solver unless configured otherwise.
pub const DEFAULT_MAX_DEPTH: u8 = 20;

/// An external two-phase solver.
///
/// Given a facelet string (see [`crate::facelet`]) and a depth bound, return a
/// move string over `U D L R F B` with optional `'`/`2` modifiers, separated by
/// spaces or not at all.
pub trait Solver {
    /// # Errors
    ///
    /// If the facelets do not describe a legal cube, or no solution exists
    /// within `max_depth` moves.
    fn solve(&mut self, facelets: &str, max_depth: u8) -> Result<String, SolverError>;
}

impl<S: Solver + ?Sized> Solver for &mut S {
    fn solve(&mut self, facelets: &str, max_depth: u8) -> Result<String, SolverError> {
        (**self).solve(facelets, max_depth)
    }
}

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("{0}")]
    Rejected(String),
    #[error("Could not talk to the solver: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error(transparent)]
    InvalidFacelets(#[from] FaceletError),
    #[error(transparent)]
    Solver(#[from] SolverError),
    #[error("The solver returned malformed moves: {0}")]
    MalformedSolution(#[from] InvalidNotation),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The state was already solved; the solver was not consulted.
    AlreadySolved,
    Solution(Vec<Move>),
}

/// Ask `solver` for a sequence that solves `state`.
///
/// # Errors
///
/// If the encoded state is malformed, the solver rejects it, or the solver's
/// answer cannot be parsed. See [`ResolutionError`].
pub fn resolve<S: Solver + ?Sized>(
    state: &CubeState,
    solver: &mut S,
    max_depth: u8,
) -> Result<Resolution, ResolutionError> {
    let facelets = facelet::encode(state);
    if facelets == SOLVED_FACELETS {
        info!("Cube already solved");
        return Ok(Resolution::AlreadySolved);
    }

    let result = request_solution(&facelets, solver, max_depth);
    if let Err(e) = &result {
        warn!("Could not resolve {facelets}: {e}");
    }

    result
}

fn request_solution<S: Solver + ?Sized>(
    facelets: &str,
    solver: &mut S,
    max_depth: u8,
) -> Result<Resolution, ResolutionError> {
    facelet::validate(facelets)?;

    info!(start!("Solving {} with max depth {}"), facelets, max_depth);
    let start = Instant::now();
    let answer = solver.solve(facelets, max_depth)?;
    let moves = notation::parse(answer.trim())?;
    info!(
        success!("Found a {} move solution in {:.3}s"),
        moves.len(),
        start.elapsed().as_secs_f64()
    );

    Ok(Resolution::Solution(moves))
}
