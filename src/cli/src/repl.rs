use std::{
    io::{self, BufRead, Write},
    ops::ControlFlow,
};

use color_eyre::eyre::{OptionExt, bail, eyre};
use cube_core::{
    Color, Cube, Face, Move, notation,
    solver::{Resolution, Solver},
};
use fastrand::Rng;
use log::{debug, info};
use owo_colors::OwoColorize;

use crate::render::render_net;

const HELP: &str = "\
Enter moves such as `R U R' U'`, or one of:
  scramble                 scramble the cube
  reset                    back to solved
  solve                    ask the solver for a solution
  apply-solution           apply the last solution
  paint <face> <row> <col> <color>
                           repaint a sticker, e.g. `paint F 0 1 W`
  log                      print the move log
  show                     print the cube
  help                     print this message
  quit                     exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Moves(Vec<Move>),
    Scramble,
    Reset,
    Solve,
    ApplySolution,
    Paint {
        face: Face,
        row: usize,
        col: usize,
        color: Color,
    },
    Log,
    Show,
    Help,
    Quit,
}

/// Interpret one line of input. Anything that is not a keyword is notation.
pub fn parse_command(line: &str) -> color_eyre::Result<ReplCommand> {
    let mut words = line.split_whitespace();

    Ok(match words.next().map(str::to_ascii_lowercase).as_deref() {
        Some("scramble") => ReplCommand::Scramble,
        Some("reset") => ReplCommand::Reset,
        Some("solve") => ReplCommand::Solve,
        Some("apply-solution") => ReplCommand::ApplySolution,
        Some("log") => ReplCommand::Log,
        Some("show") => ReplCommand::Show,
        Some("help" | "?") => ReplCommand::Help,
        Some("quit" | "exit") => ReplCommand::Quit,
        Some("paint") => {
            let [face, row, col, color] = [(); 4].map(|()| words.next());
            if words.next().is_some() {
                bail!("Usage: paint <face> <row> <col> <color>");
            }

            ReplCommand::Paint {
                face: letter(face)
                    .and_then(Face::from_letter)
                    .ok_or_eyre("Expected a face among U D L R F B")?,
                row: index(row)?,
                col: index(col)?,
                color: letter(color)
                    .and_then(Color::from_letter)
                    .ok_or_eyre("Expected a color among W Y O R G B")?,
            }
        }
        _ => ReplCommand::Moves(notation::parse(line.trim())?),
    })
}

fn letter(word: Option<&str>) -> Option<char> {
    let mut chars = word?.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c.to_ascii_uppercase()),
        _ => None,
    }
}

fn index(word: Option<&str>) -> color_eyre::Result<usize> {
    let word = word.ok_or_eyre("Usage: paint <face> <row> <col> <color>")?;
    word.parse()
        .map_err(|_| eyre!("`{word}` is not a row or column index"))
}

/// An interactive session around one cube.
pub struct Repl<S> {
    cube: Cube,
    solver: S,
    rng: Rng,
    colored: bool,
    last_solution: Option<Vec<Move>>,
}

impl<S: Solver> Repl<S> {
    pub fn new(cube: Cube, solver: S, rng: Rng, colored: bool) -> Self {
        Repl {
            cube,
            solver,
            rng,
            colored,
            last_solution: None,
        }
    }

    /// Read commands from `input` until it ends or the user quits.
    pub fn run(&mut self, input: impl BufRead) -> color_eyre::Result<()> {
        eprintln!("{HELP}");
        self.show();

        let mut lines = input.lines();
        loop {
            eprint!("{} ", ">".bold());
            io::stderr().flush()?;

            let Some(line) = lines.next().transpose()? else {
                break;
            };
            debug!(target: "repl", "Read {line:?}");

            let flow = match parse_command(&line) {
                Ok(command) => self.execute(command),
                Err(e) => {
                    eprintln!("{}", e.red());
                    ControlFlow::Continue(())
                }
            };
            if flow.is_break() {
                break;
            }
        }

        eprintln!("Exiting");
        Ok(())
    }

    /// Carry out one command, printing its outcome.
    pub fn execute(&mut self, command: ReplCommand) -> ControlFlow<()> {
        match command {
            ReplCommand::Moves(moves) => {
                if moves.is_empty() {
                    return ControlFlow::Continue(());
                }
                self.cube.apply_moves(&moves);
                self.show();
            }
            ReplCommand::Scramble => {
                let log = self.cube.scramble(&mut self.rng);
                println!("{log}");
                self.last_solution = None;
                self.show();
            }
            ReplCommand::Reset => {
                self.cube.reset();
                self.last_solution = None;
                self.show();
            }
            ReplCommand::Solve => {
                match self.cube.request_solve(&mut self.solver) {
                    Ok(Resolution::Solution(moves)) => {
                        info!(target: "repl", "Found a solution of {} moves", moves.len());
                        self.last_solution = Some(moves);
                    }
                    Ok(Resolution::AlreadySolved) | Err(_) => self.last_solution = None,
                }
                println!("{}", self.cube.move_log());
            }
            ReplCommand::ApplySolution => match self.last_solution.take() {
                Some(moves) => {
                    self.cube.apply_moves(&moves);
                    self.show();
                }
                None => eprintln!("{}", "No solution to apply; run `solve` first".red()),
            },
            ReplCommand::Paint {
                face,
                row,
                col,
                color,
            } => match self.cube.paint(face, row, col, color) {
                Ok(()) => {
                    self.last_solution = None;
                    self.show();
                }
                Err(e) => eprintln!("{}", e.red()),
            },
            ReplCommand::Log => println!("{}", self.cube.move_log()),
            ReplCommand::Show => self.show(),
            ReplCommand::Help => eprintln!("{HELP}"),
            ReplCommand::Quit => return ControlFlow::Break(()),
        }

        ControlFlow::Continue(())
    }

    fn show(&self) {
        print!("{}", render_net(self.cube.snapshot(), self.colored));
    }

    #[cfg(test)]
    fn cube(&self) -> &Cube {
        &self.cube
    }
}
