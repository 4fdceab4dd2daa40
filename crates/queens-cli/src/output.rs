//! Rendering solution lists for the terminal or a file.
//!
//! All formats are row-major and 0-indexed. The JSON format is meant for
//! other programs and has the following structure:
//! ```json
//! {
//!   "board_size": 4,
//!   "count": 2,
//!   "complete": true,
//!   "solutions": [
//!     [[0, 1], [1, 3], [2, 0], [3, 2]],
//!     [[0, 2], [1, 0], [2, 3], [3, 1]]
//!   ]
//! }
//! ```
//! `complete` is false when `--limit` cut the list short.

use queens_core::{BoardSize, Markers, Solution};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// How solutions are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// One board drawing per solution.
    #[default]
    Grid,
    /// `(row,col)` pairs, one solution per line.
    Coords,
    /// Column per row, comma separated, one solution per line.
    Compact,
    /// A single JSON document.
    Json,
}

/// JSON representation of a solution list.
#[derive(Serialize)]
struct SolutionSetJson {
    board_size: BoardSize,
    count: usize,
    /// False when the list was cut short by `--limit`.
    complete: bool,
    /// Queens as `[row, col]` pairs.
    solutions: Vec<Vec<(usize, usize)>>,
}

/// A solution list plus what is needed to describe it.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub size: BoardSize,
    pub solutions: &'a [Solution],
    /// False when the list was truncated on purpose.
    pub complete: bool,
}

impl Report<'_> {
    /// Writes the report in the given format.
    pub fn render<W: Write>(
        &self,
        format: Format,
        markers: &Markers,
        out: &mut W,
    ) -> io::Result<()> {
        match format {
            Format::Grid => self.render_grid(markers, out),
            Format::Coords => {
                for solution in self.solutions {
                    let cells: Vec<String> =
                        solution.queens().map(|c| c.to_string()).collect();
                    writeln!(out, "{}", cells.join(" "))?;
                }
                Ok(())
            }
            Format::Compact => {
                for solution in self.solutions {
                    writeln!(out, "{}", solution)?;
                }
                Ok(())
            }
            Format::Json => {
                serde_json::to_writer_pretty(&mut *out, &self.to_json())?;
                writeln!(out)
            }
        }
    }

    /// Writes the report to a file at `path`.
    pub fn write_to_file(&self, path: &Path, format: Format, markers: &Markers) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.render(format, markers, &mut out)?;
        out.flush()
    }

    /// Returns the summary line printed after the solutions.
    pub fn summary(&self) -> String {
        match (self.solutions.len(), self.complete) {
            (0, true) => format!("No solutions exist for {}", self.size),
            (n, true) => format!("{} solutions for {}", n, self.size),
            (n, false) => format!("first {} solutions for {}", n, self.size),
        }
    }

    fn render_grid<W: Write>(&self, markers: &Markers, out: &mut W) -> io::Result<()> {
        let total = self.solutions.len();
        for (i, solution) in self.solutions.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "#{} / {}", i + 1, total)?;
            write_board(solution, markers, out)?;
        }
        Ok(())
    }

    fn to_json(&self) -> SolutionSetJson {
        SolutionSetJson {
            board_size: self.size,
            count: self.solutions.len(),
            complete: self.complete,
            solutions: self
                .solutions
                .iter()
                .map(|s| s.queens().map(Into::into).collect())
                .collect(),
        }
    }
}

/// Draws one board, top row first.
pub fn write_board<W: Write>(
    solution: &Solution,
    markers: &Markers,
    out: &mut W,
) -> io::Result<()> {
    for row in solution.to_rows(markers) {
        writeln!(out, "{}", row)?;
    }
    Ok(())
}
