//! Solution reports: the text file written after a successful search and
//! its JSON summary.
//!
//! # File layout
//!
//! ```text
//! <dir>/<puzzle>-<algorithm>-<signature>.txt
//!
//! Size of Explored Set (# of visited nodes): <explored>
//! Total # of visited nodes (counting duplicates): <pops>
//! Amount of Moves (depth): <moves>
//! Path from Initial to Solution:
//! ...
//! ```
//!
//! The directory path is never part of any digest.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use trellis_kernel::digest::{canonical_hash, ContentHash, DOMAIN_REPORT};
use trellis_kernel::state::Cost;
use trellis_search::search::SearchStats;
use trellis_search::strategy::{CostMode, StrategyKind};

/// Default directory for report files.
pub const DEFAULT_REPORT_DIR: &str = "solutions";

/// Error producing or writing a report.
#[derive(Debug)]
pub enum ReportError {
    /// The search found no solution, so there is nothing to write.
    Unsolved,
    /// I/O error during write.
    Io { detail: String },
    /// JSON serialization failed.
    Json { detail: String },
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsolved => f.write_str("no solution to report"),
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::Json { detail } => write!(f, "JSON error: {detail}"),
        }
    }
}

impl std::error::Error for ReportError {}

/// File-name label of a strategy kind.
#[must_use]
pub const fn algorithm_label(kind: StrategyKind) -> &'static str {
    match kind {
        StrategyKind::AStarManhattan => "AStarManhattanCost",
        StrategyKind::AStarEuclidean => "AStarEuclideanCost",
        StrategyKind::AStarMisplacedTiles => "AStarMisplacedTileCost",
        StrategyKind::UniformCost => "UniformCost",
    }
}

/// The solved part of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionSummary {
    /// Path length in edges.
    pub moves: u32,
    /// Cumulative edge cost of the path.
    pub g_cost: Cost,
    /// Operator names from the root to the solution.
    pub operators: Vec<String>,
    /// Rendered path trace.
    pub trace: String,
    /// `sha256:` digest of `trace` under the path-trace domain.
    pub trace_digest: String,
}

/// Outcome of one search run, solved or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionReport {
    pub puzzle: String,
    pub strategy: StrategyKind,
    pub cost_mode: CostMode,
    /// Initial-state signature.
    pub signature: String,
    pub stats: SearchStats,
    pub solution: Option<SolutionSummary>,
}

impl SolutionReport {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    /// `<puzzle>-<algorithm>-<signature>.txt`
    #[must_use]
    pub fn file_name(&self) -> String {
        format!(
            "{}-{}-{}.txt",
            self.puzzle,
            algorithm_label(self.strategy),
            self.signature
        )
    }

    /// Text contents of the report file.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Unsolved`] if there is no solution.
    pub fn render_text(&self) -> Result<String, ReportError> {
        let solution = self.solution.as_ref().ok_or(ReportError::Unsolved)?;
        Ok(format!(
            "Size of Explored Set (# of visited nodes): {}\n\
             Total # of visited nodes (counting duplicates): {}\n\
             Amount of Moves (depth): {}\n\
             {}",
            self.stats.explored, self.stats.pops, solution.moves, solution.trace
        ))
    }

    /// Digest of the rendered text file.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Unsolved`] if there is no solution.
    pub fn digest(&self) -> Result<ContentHash, ReportError> {
        let text = self.render_text()?;
        Ok(canonical_hash(DOMAIN_REPORT, text.as_bytes()))
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string_pretty(self).map_err(|e| ReportError::Json {
            detail: e.to_string(),
        })
    }
}

/// Write the report's text file into `dir`, creating the directory if
/// needed. Returns the path written.
///
/// # Errors
///
/// Returns [`ReportError::Unsolved`] for an unsolved report and
/// [`ReportError::Io`] if the directory or file cannot be written.
pub fn write_report(dir: &Path, report: &SolutionReport) -> Result<PathBuf, ReportError> {
    let text = report.render_text()?;
    std::fs::create_dir_all(dir).map_err(|e| ReportError::Io {
        detail: format!("create {}: {e}", dir.display()),
    })?;
    let path = dir.join(report.file_name());
    std::fs::write(&path, text).map_err(|e| ReportError::Io {
        detail: format!("write {}: {e}", path.display()),
    })?;
    tracing::info!(path = %path.display(), "report written");
    Ok(path)
}
