use std::{
    fs, io,
    path::{Path, PathBuf},
};

use color_eyre::eyre::WrapErr;
use cube_core::solver::DEFAULT_MAX_DEPTH;
use log::info;
use serde::{Deserialize, Serialize};

/// Global front end configuration, read from a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    pub solver: SolverConfig,
    pub display: DisplayConfig,
    pub scramble: ScrambleConfig,
}

/// How to run the external two-phase solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// The program to spawn for every solve request.
    pub program: String,
    /// Arguments passed to `program`. `{facelets}` and `{max_depth}` are
    /// substituted.
    pub args: Vec<String>,
    pub max_depth: u8,
    /// Where the solver runs; solvers tend to dump their pruning tables in the
    /// current directory. Defaults to a per-user cache directory.
    pub working_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Draw colored blocks instead of color letters.
    pub color: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrambleConfig {
    /// Seed for reproducible scrambles.
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            program: "kociemba".to_owned(),
            args: vec!["{facelets}".to_owned()],
            max_depth: DEFAULT_MAX_DEPTH,
            working_dir: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { color: true }
    }
}

impl CubeConfig {
    /// Read the configuration at `path`, falling back to the defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => toml::from_str(&text)
                .wrap_err_with(|| format!("Failed to parse configuration file {}", path.display())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(
                    target: "config",
                    "No configuration at {}, using defaults",
                    path.display()
                );
                Ok(Self::default())
            }
            Err(e) => Err(e)
                .wrap_err_with(|| format!("Failed to read configuration file {}", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let config: CubeConfig = toml::from_str("").unwrap();
        assert_eq!(config, CubeConfig::default());
        assert_eq!(config.solver.max_depth, 20);
        assert!(config.display.color);
        assert_eq!(config.scramble.seed, None);
    }

    #[test]
    fn partial_file() {
        let config: CubeConfig = toml::from_str(
            r#"
            [solver]
            program = "twophase"
            args = ["-m", "{max_depth}", "{facelets}"]

            [scramble]
            seed = 42
            "#,
        )
        .unwrap();
        assert_eq!(config.solver.program, "twophase");
        assert_eq!(config.solver.args.len(), 3);
        assert_eq!(config.solver.max_depth, 20);
        assert_eq!(config.scramble.seed, Some(42));
        assert!(config.display.color);
    }

    #[test]
    fn missing_file_is_default() {
        let config = CubeConfig::load(Path::new("/nonexistent/cube_config.toml")).unwrap();
        assert_eq!(config, CubeConfig::default());
    }
}
