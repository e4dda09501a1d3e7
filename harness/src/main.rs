//! `trellis`: solve sliding-tile puzzles from the command line.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use trellis_harness::config::{load_run_config, RunConfig};
use trellis_harness::console::Console;
use trellis_harness::contract::SearchWorld;
use trellis_harness::report::{write_report, SolutionReport};
use trellis_harness::runner::run_search;
use trellis_harness::worlds::puzzle::SlidingPuzzle;
use trellis_harness::worlds::sliding_tile::{parse_cells, Goal};
use trellis_search::policy::Termination;
use trellis_search::strategy::{CostMode, Strategy, StrategyKind};

#[derive(Parser)]
#[command(name = "trellis", about = "Best-first search for sliding-tile puzzles")]
struct Cli {
    /// TOML run config; CLI flags override its values.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a board given on the command line.
    Solve {
        /// Initial cells in row-major order, e.g. "1,2,5,3,4,0,6,7,8".
        #[arg(long)]
        board: String,
        /// Goal cells; defaults to the config goal, then to blank-last.
        #[arg(long)]
        goal: Option<String>,
        #[arg(long, value_enum)]
        algorithm: Option<AlgorithmArg>,
        #[arg(long, value_enum)]
        cost_mode: Option<CostModeArg>,
        /// Stop at the first goal instead of draining the frontier.
        #[arg(long)]
        first_goal: bool,
        /// Maximum number of search nodes.
        #[arg(long)]
        max_nodes: Option<u64>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Enter a board and pick an algorithm interactively.
    Interactive {
        /// Board side length.
        #[arg(long)]
        size: Option<usize>,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(clap::Args)]
struct OutputArgs {
    /// Directory for report files.
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Do not write a report file.
    #[arg(long)]
    no_write: bool,
    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    UniformCost,
    AStarManhattan,
    AStarEuclidean,
    AStarMisplacedTiles,
}

impl From<AlgorithmArg> for StrategyKind {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::UniformCost => Self::UniformCost,
            AlgorithmArg::AStarManhattan => Self::AStarManhattan,
            AlgorithmArg::AStarEuclidean => Self::AStarEuclidean,
            AlgorithmArg::AStarMisplacedTiles => Self::AStarMisplacedTiles,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CostModeArg {
    Cumulative,
    LastEdge,
}

impl From<CostModeArg> for CostMode {
    fn from(arg: CostModeArg) -> Self {
        match arg {
            CostModeArg::Cumulative => Self::Cumulative,
            CostModeArg::LastEdge => Self::LastEdge,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format_args!("{e:#}"), "trellis failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => load_run_config(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RunConfig::default(),
    };

    match cli.command {
        Command::Solve {
            board,
            goal,
            algorithm,
            cost_mode,
            first_goal,
            max_nodes,
            output,
        } => {
            if let Some(kind) = algorithm {
                config.strategy.algorithm = kind.into();
            }
            if let Some(mode) = cost_mode {
                config.strategy.cost_mode = mode.into();
            }
            if first_goal {
                config.search.termination = Termination::FirstGoal;
            }
            if max_nodes.is_some() {
                config.search.max_nodes = max_nodes;
            }

            let puzzle = puzzle_from_args(&board, goal.as_deref(), &config)?;
            let strategy = config.strategy().context("choosing strategy")?;
            solve(&puzzle, strategy, &config, &output)
        }
        Command::Interactive { size, output } => {
            let size = size.unwrap_or(config.puzzle.size);
            // Reject unsupported sides before prompting for cells.
            Goal::blank_last(size).with_context(|| format!("board size {size}"))?;
            let stdin = io::stdin();
            let mut console = Console::new(stdin.lock(), io::stdout());
            let session = console.session(size).context("reading board from console")?;
            let puzzle = SlidingPuzzle::new(
                session.size,
                session.cells,
                session.goal,
                config.puzzle.move_costs,
            )
            .context("building puzzle from console input")?;
            let strategy = Strategy::new(session.kind, config.strategy.cost_mode)
                .context("choosing strategy")?;
            solve(&puzzle, strategy, &config, &output)
        }
    }
}

/// Build the puzzle for `solve` from the `--board` and `--goal` texts. A
/// missing `--goal` falls back to the config goal, then to blank-last.
fn puzzle_from_args(
    board: &str,
    goal: Option<&str>,
    config: &RunConfig,
) -> Result<SlidingPuzzle> {
    let (size, cells) = parse_cells(board).context("parsing --board")?;
    let goal = match goal {
        Some(text) => {
            let (goal_size, goal_cells) = parse_cells(text).context("parsing --goal")?;
            Some(Goal::new(goal_size, goal_cells).context("parsing --goal")?)
        }
        None => config.puzzle.goal().context("reading goal from config")?,
    };
    SlidingPuzzle::new(size, cells, goal, config.puzzle.move_costs)
        .context("--board does not fit the goal")
}

fn solve(
    puzzle: &SlidingPuzzle,
    strategy: Strategy,
    config: &RunConfig,
    output: &OutputArgs,
) -> Result<()> {
    let report = run_search(puzzle, strategy, &config.search)
        .with_context(|| format!("searching {} with {strategy}", puzzle.signature()))?;
    print_report(&report, output.json)?;

    if report.is_solved() && !output.no_write {
        let dir = output.out_dir.as_ref().unwrap_or(&config.output.dir);
        let path = write_report(dir, &report)
            .with_context(|| format!("writing report to {}", dir.display()))?;
        let digest = report.digest().context("hashing report")?;
        tracing::info!(digest = %digest, path = %path.display(), "solution saved");
    }
    Ok(())
}

fn print_report(report: &SolutionReport, json: bool) -> Result<()> {
    if json {
        println!("{}", report.to_json().context("encoding report as JSON")?);
    } else if report.is_solved() {
        println!("{}", report.render_text().context("rendering report")?);
    } else {
        println!(
            "No solution found after exploring {} states.",
            report.stats.explored
        );
    }
    Ok(())
}
