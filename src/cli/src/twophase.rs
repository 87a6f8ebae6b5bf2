use std::{
    env, fs,
    path::PathBuf,
    process::{Command, Stdio},
};

use cube_core::solver::{Solver, SolverError};
use itertools::Itertools;
use log::{debug, warn};

use crate::config::SolverConfig;

/// Solves by spawning an external two-phase solver once per request.
///
/// The program is handed the facelet string through its arguments and is
/// expected to print the solution as the last line of its output, e.g.
///
/// ```text
/// 30.177ms
/// R F2 R' U R U2 F2 U2 F' D' R D2 L2 D2 L' U2 F2 (17)
/// ```
pub struct TwophaseProcess {
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl TwophaseProcess {
    pub fn new(config: &SolverConfig) -> Self {
        TwophaseProcess {
            program: config.program.clone(),
            args: config.args.clone(),
            working_dir: config.working_dir.clone(),
        }
    }

    fn args(&self, facelets: &str, max_depth: u8) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| {
                arg.replace("{facelets}", facelets)
                    .replace("{max_depth}", &max_depth.to_string())
            })
            .collect()
    }

    fn working_dir(&self) -> PathBuf {
        if let Some(dir) = &self.working_dir {
            return dir.clone();
        }

        // The solver will dump tables in its current directory; lets have it
        // dump them in some cache
        let mut cache = dirs::cache_dir().unwrap_or_else(|| {
            warn!(target: "twophase", "No cache directory available; using the temp directory");
            env::temp_dir()
        });
        cache.push("twophase-tables");
        cache
    }
}

impl Solver for TwophaseProcess {
    fn solve(&mut self, facelets: &str, max_depth: u8) -> Result<String, SolverError> {
        let dir = self.working_dir();
        fs::create_dir_all(&dir)?;

        let args = self.args(facelets, max_depth);
        debug!(
            target: "twophase",
            "Running {} {} in {}",
            self.program,
            args.iter().join(" "),
            dir.display()
        );

        let output = Command::new(&self.program)
            .current_dir(dir)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !output.status.success() {
            return Err(SolverError::Rejected(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stdout.trim()
            )));
        }

        extract_solution(&stdout)
    }
}

/// Pull the move sequence out of the solver's output.
fn extract_solution(stdout: &str) -> Result<String, SolverError> {
    let Some(line) = stdout.lines().map(str::trim).rfind(|line| !line.is_empty()) else {
        return Err(SolverError::Rejected(
            "The solver printed nothing".to_owned(),
        ));
    };

    if line.starts_with("Error") {
        return Err(SolverError::Rejected(line.to_owned()));
    }

    // Remove parentheses and the trailing move count
    Ok(line
        .replace(['(', ')'], "")
        .split(' ')
        .filter(|v| v.chars().next().is_some_and(|v| !v.is_ascii_digit()))
        .join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_timing_and_move_count() {
        let stdout = "30.177ms\nR F2 R' U R U2 F2 U2 F' D' R D2 L2 D2 L' U2 F2 (17)\n";
        assert_eq!(
            extract_solution(stdout).unwrap(),
            "R F2 R' U R U2 F2 U2 F' D' R D2 L2 D2 L' U2 F2"
        );
    }

    #[test]
    fn plain_solution() {
        assert_eq!(extract_solution("U' R2 F\n\n").unwrap(), "U' R2 F");
    }

    #[test]
    fn error_lines_are_rejections() {
        assert!(matches!(
            extract_solution("Error 8\n"),
            Err(SolverError::Rejected(message)) if message == "Error 8"
        ));
        assert!(extract_solution("").is_err());
    }

    #[test]
    fn substitutes_placeholders() {
        let solver = TwophaseProcess::new(&SolverConfig {
            program: "twophase".to_owned(),
            args: vec!["-m".to_owned(), "{max_depth}".to_owned(), "{facelets}".to_owned()],
            max_depth: 20,
            working_dir: None,
        });
        assert_eq!(solver.args("UUU", 24), ["-m", "24", "UUU"]);
    }

    #[test]
    fn missing_program_is_an_io_error() {
        let mut solver = TwophaseProcess::new(&SolverConfig {
            program: "this-solver-does-not-exist".to_owned(),
            working_dir: Some(env::temp_dir()),
            ..SolverConfig::default()
        });
        assert!(matches!(
            solver.solve(cube_core::facelet::SOLVED_FACELETS, 20),
            Err(SolverError::Io(_))
        ));
    }
}
