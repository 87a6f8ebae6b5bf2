#![warn(clippy::pedantic)]

mod config;
mod render;
mod repl;
mod twophase;

use std::{io, path::PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use cube_core::{Cube, facelet};
use env_logger::TimestampPrecision;
use fastrand::Rng;
use log::LevelFilter;

use crate::{config::CubeConfig, render::render_net, repl::Repl, twophase::TwophaseProcess};

/// Turn, scramble and solve a virtual 3x3x3 cube
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format.
    #[arg(long, short = 'c', default_value = "cube_config.toml")]
    config: PathBuf,

    /// The level of logging to send to stderr. Can be set zero to three times.
    #[arg(short, long, action = ArgAction::Count)]
    log_level: u8,

    /// Print color letters instead of colored blocks.
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a move sequence to a solved cube and print the result.
    Apply {
        /// Moves in standard notation, e.g. "R U R' U'"
        sequence: String,
    },
    /// Print the solver facelet string of a solved cube after a move sequence.
    Facelets { sequence: String },
    /// Scramble a solved cube and print the scramble.
    Scramble {
        /// Seed for a reproducible scramble; overrides the configuration.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Apply a move sequence, then ask the solver how to undo it.
    Solve {
        sequence: String,
        /// Overrides `solver.max_depth` from the configuration.
        #[arg(long)]
        max_depth: Option<u8>,
    },
    /// Drive a cube interactively. This is the default.
    Repl,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.log_level {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = CubeConfig::load(&cli.config)?;
    let colored = config.display.color && !cli.no_color;

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Apply { sequence } => {
            let mut cube = Cube::new();
            cube.apply_notation(&sequence)?;
            print!("{}", render_net(cube.snapshot(), colored));
            println!("{}", facelet::encode(cube.snapshot()));
        }
        Commands::Facelets { sequence } => {
            let mut cube = Cube::new();
            cube.apply_notation(&sequence)?;
            println!("{}", facelet::encode(cube.snapshot()));
        }
        Commands::Scramble { seed } => {
            let mut rng = rng(seed, &config);
            let mut cube = Cube::new();
            println!("{}", cube.scramble(&mut rng));
            print!("{}", render_net(cube.snapshot(), colored));
        }
        Commands::Solve {
            sequence,
            max_depth,
        } => {
            let mut cube =
                Cube::new().with_max_depth(max_depth.unwrap_or(config.solver.max_depth));
            cube.apply_notation(&sequence)?;

            let mut solver = TwophaseProcess::new(&config.solver);
            cube.request_solve(&mut solver)
                .wrap_err("Could not solve the cube")?;
            println!("{}", cube.move_log());
        }
        Commands::Repl => {
            let cube = Cube::new().with_max_depth(config.solver.max_depth);
            let solver = TwophaseProcess::new(&config.solver);
            Repl::new(cube, solver, rng(None, &config), colored).run(io::stdin().lock())?;
        }
    }

    Ok(())
}

fn rng(seed: Option<u64>, config: &CubeConfig) -> Rng {
    seed.or(config.scramble.seed)
        .map_or_else(Rng::new, Rng::with_seed)
}
