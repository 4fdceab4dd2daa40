//! Queens - enumerate and browse N-Queens solutions from the terminal.
//!
//! The solver places no limit on board size, so this front end refuses boards
//! above `max_board_size` (see [`config`]) unless `--force` is given.

mod browse;
mod config;
mod output;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use config::QueensConfig;
use output::{Format, Report};
use queens_core::{BoardSize, Solution, SolveError};
use queens_engine::{
    count_cancellable, count_divide_cancellable, solve_cancellable, verify_cancellable, Solutions,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "queens")]
#[command(about = "N-Queens solution enumerator")]
struct Cli {
    /// Path to the configuration file [default: queens.toml]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Abort the search after this many milliseconds
    #[arg(long, global = true)]
    time_limit_ms: Option<u64>,

    /// Search boards larger than the configured maximum
    #[arg(long, global = true)]
    force: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every solution for an NxN board
    Solve {
        /// Board size
        #[arg(allow_negative_numbers = true)]
        n: i64,
        /// Stop after this many solutions
        #[arg(short, long)]
        limit: Option<usize>,
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<Format>,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Count solutions without printing them
    Count {
        /// Board size
        #[arg(allow_negative_numbers = true)]
        n: i64,
        /// Split the count by the first-row queen's column
        #[arg(long)]
        divide: bool,
    },
    /// Step through solutions interactively
    Browse {
        /// Board size
        #[arg(allow_negative_numbers = true)]
        n: i64,
        /// Solution to show first (1-based)
        #[arg(long, default_value = "1")]
        start: usize,
    },
    /// Check the fast search against the slow reference search
    Verify {
        /// Largest board size to check, starting from 0
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
}

fn main() -> anyhow::Result<()> {
    // stdout carries solutions; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(QueensConfig::config_path);
    let config = QueensConfig::load_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    tracing::info!("Config: {:?}", config_path);
    tracing::debug!(?config, "effective config");

    let time_limit = cli.time_limit_ms.or(config.time_limit_ms);

    match cli.command {
        Commands::Solve {
            n,
            limit,
            format,
            output,
        } => {
            check_size(n, &config, cli.force)?;
            let format = format.unwrap_or(config.default_format);
            let cancel = cancel_after(time_limit);

            let started = Instant::now();
            let (solutions, complete) = collect_solutions(n, limit, &cancel)?;
            tracing::info!(
                n,
                solutions = solutions.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "search complete"
            );

            let report = Report {
                size: BoardSize::from_signed(n)?,
                solutions: &solutions,
                complete,
            };
            match output {
                Some(path) => {
                    report
                        .write_to_file(&path, format, &config.markers)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Wrote {} to {}", report.summary(), path.display());
                }
                None => {
                    let stdout = io::stdout();
                    let mut out = stdout.lock();
                    report.render(format, &config.markers, &mut out)?;
                    if format != Format::Json {
                        writeln!(out, "{}", report.summary())?;
                    }
                }
            }
        }
        Commands::Count { n, divide } => {
            check_size(n, &config, cli.force)?;
            let size = BoardSize::from_signed(n)?;
            let cancel = cancel_after(time_limit);
            let started = Instant::now();
            for line in count_lines(size, divide, &cancel)? {
                println!("{}", line);
            }
            tracing::info!(
                n,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "count complete"
            );
        }
        Commands::Browse { n, start } => {
            check_size(n, &config, cli.force)?;
            let cancel = cancel_after(time_limit);
            let (solutions, _) = collect_solutions(n, None, &cancel)?;
            let start = start_index(start, solutions.len())?;
            let stdin = io::stdin();
            let stdout = io::stdout();
            browse::run(
                &solutions,
                &config.markers,
                start,
                stdin.lock(),
                &mut stdout.lock(),
            )?;
        }
        Commands::Verify { n } => {
            check_size(n, &config, cli.force)?;
            let max = BoardSize::from_signed(n)?;
            let cancel = cancel_after(time_limit);
            let mut failures = 0;
            for size in (0..=max.get()).map(BoardSize::new) {
                let result = verify_cancellable(size, &cancel)?;
                println!("{}", result);
                if !result.is_ok() {
                    failures += 1;
                }
            }
            if failures > 0 {
                bail!("{} board size(s) failed verification", failures);
            }
        }
    }

    Ok(())
}

/// Refuses boards the caller has not opted into.
///
/// Negative sizes pass through so the solver reports them itself.
fn check_size(n: i64, config: &QueensConfig, force: bool) -> anyhow::Result<()> {
    if force {
        return Ok(());
    }
    match usize::try_from(n) {
        Ok(size) if size > config.max_board_size => bail!(
            "board size {} is above max_board_size {}; pass --force to search anyway",
            size,
            config.max_board_size
        ),
        _ => Ok(()),
    }
}

/// Returns a flag that is raised once `limit_ms` has elapsed.
fn cancel_after(limit_ms: Option<u64>) -> Arc<AtomicBool> {
    let flag = Arc::new(AtomicBool::new(false));
    if let Some(ms) = limit_ms {
        let timer = flag.clone();
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(ms));
            tracing::warn!("Time limit of {}ms reached, cancelling search", ms);
            timer.store(true, Ordering::Relaxed);
        });
    }
    flag
}

/// Collects up to `limit` solutions, honouring the cancel flag.
///
/// The flag in the result is true when the search ran to the end, i.e. no
/// solutions were left out.
fn collect_solutions(
    n: i64,
    limit: Option<usize>,
    cancel: &AtomicBool,
) -> Result<(Vec<Solution>, bool), SolveError> {
    let Some(limit) = limit else {
        return solve_cancellable(n, cancel).map(|found| (found, true));
    };
    let size = BoardSize::from_signed(n)?;
    let mut iter: Solutions<'_> = Solutions::with_cancel(size, cancel);
    let found: Vec<Solution> = iter.by_ref().take(limit).collect();
    let complete = iter.next().is_none();
    if iter.is_cancelled() {
        return Err(SolveError::Cancelled);
    }
    Ok((found, complete))
}

/// Formats the output of the `count` subcommand.
fn count_lines(
    size: BoardSize,
    divide: bool,
    cancel: &AtomicBool,
) -> Result<Vec<String>, SolveError> {
    if !divide {
        return Ok(vec![count_cancellable(size, cancel)?.to_string()]);
    }
    let results = count_divide_cancellable(size, cancel)?;
    let mut lines: Vec<String> = results
        .iter()
        .map(|(col, nodes)| format!("{}: {}", col, nodes))
        .collect();
    // The empty board has no first row to split on.
    let total = if results.is_empty() {
        count_cancellable(size, cancel)?
    } else {
        results.iter().map(|(_, nodes)| nodes).sum()
    };
    lines.push(format!("total: {}", total));
    Ok(lines)
}

/// Converts the 1-based `--start` value to an index into `len` solutions.
fn start_index(start: usize, len: usize) -> anyhow::Result<usize> {
    if len == 0 {
        return Ok(0);
    }
    if start == 0 || start > len {
        bail!("--start {} is out of range, expected 1 to {}", start, len);
    }
    Ok(start - 1)
}
