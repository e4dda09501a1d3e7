//! TOML run configuration.
//!
//! ```toml
//! [search]
//! termination = "drain"      # or "first_goal"
//! max_nodes = 5000000
//!
//! [strategy]
//! algorithm = "a_star_manhattan"
//! cost_mode = "cumulative"   # or "last_edge"
//!
//! [puzzle]
//! size = 3
//! goal = [[0, 1, 2], [3, 4, 5], [6, 7, 8]]
//! move_costs = { left = 1, down = 1, right = 1, up = 1 }
//!
//! [output]
//! dir = "solutions"
//! ```
//!
//! Every section and field is optional. CLI flags override file values.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use trellis_search::policy::SearchPolicy;
use trellis_search::strategy::{CostMode, Strategy, StrategyKind};

use crate::report::DEFAULT_REPORT_DIR;
use crate::worlds::sliding_moves::MoveCosts;
use crate::worlds::sliding_tile::{BoardError, Goal};

/// Error loading or interpreting a config file.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, detail: String },
    Parse { path: PathBuf, detail: String },
    /// The values parsed but do not describe a runnable search.
    Invalid { detail: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, detail } => write!(f, "reading {}: {detail}", path.display()),
            Self::Parse { path, detail } => write!(f, "parsing {}: {detail}", path.display()),
            Self::Invalid { detail } => write!(f, "invalid config: {detail}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<BoardError> for ConfigError {
    fn from(e: BoardError) -> Self {
        Self::Invalid {
            detail: e.to_string(),
        }
    }
}

/// Top-level structure of a run config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    #[serde(default)]
    pub search: SearchPolicy,
    #[serde(default)]
    pub strategy: StrategyConfig,
    #[serde(default)]
    pub puzzle: PuzzleConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Which strategy to rank with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StrategyConfig {
    #[serde(default = "default_algorithm")]
    pub algorithm: StrategyKind,
    #[serde(default)]
    pub cost_mode: CostMode,
}

fn default_algorithm() -> StrategyKind {
    StrategyKind::AStarManhattan
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            cost_mode: CostMode::default(),
        }
    }
}

/// Board side, goal and move costs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PuzzleConfig {
    #[serde(default = "default_size")]
    pub size: usize,
    /// Goal rows. Absent means tiles in order with the blank last.
    #[serde(default)]
    pub goal: Option<Vec<Vec<u8>>>,
    #[serde(default)]
    pub move_costs: MoveCosts,
}

fn default_size() -> usize {
    3
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            goal: None,
            move_costs: MoveCosts::default(),
        }
    }
}

impl PuzzleConfig {
    /// The configured goal, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for malformed goal rows.
    pub fn goal(&self) -> Result<Option<Goal>, ConfigError> {
        self.goal
            .as_deref()
            .map(Goal::from_rows)
            .transpose()
            .map_err(ConfigError::from)
    }
}

/// Where reports go.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
}

fn default_dir() -> PathBuf {
    PathBuf::from(DEFAULT_REPORT_DIR)
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}

impl RunConfig {
    /// Parse from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown fields, and
    /// [`ConfigError::Invalid`] if the result fails [`RunConfig::validate`].
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse {
            path: origin.to_path_buf(),
            detail: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the values describe a runnable search.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for an invalid policy, an unsupported
    /// strategy combination or a malformed goal.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.search.validate().map_err(|e| ConfigError::Invalid {
            detail: e.to_string(),
        })?;
        self.strategy()?;
        if let Some(goal) = self.puzzle.goal()? {
            if goal.size() != self.puzzle.size {
                return Err(ConfigError::Invalid {
                    detail: format!(
                        "goal is {0}x{0} but puzzle.size is {1}",
                        goal.size(),
                        self.puzzle.size
                    ),
                });
            }
        }
        Ok(())
    }

    /// The configured strategy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for `last_edge` with a distance
    /// heuristic.
    pub fn strategy(&self) -> Result<Strategy, ConfigError> {
        Strategy::new(self.strategy.algorithm, self.strategy.cost_mode).map_err(|e| {
            ConfigError::Invalid {
                detail: e.to_string(),
            }
        })
    }
}

/// Load and validate a [`RunConfig`] from a TOML file.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
/// [`RunConfig::from_toml`].
pub fn load_run_config(path: &Path) -> Result<RunConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;
    let config = RunConfig::from_toml(&text, path)?;
    tracing::info!(path = %path.display(), "loaded run config");
    Ok(config)
}
