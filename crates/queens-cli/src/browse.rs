//! Interactive paging through a solution list.
//!
//! Commands are read one per line:
//! - `n`, `next` or an empty line: next solution
//! - `p`, `prev`: previous solution
//! - a number: jump to that solution (1-based)
//! - `q`, `quit` or end of input: stop
//!
//! Paging wraps around at both ends.

use crate::output::write_board;
use queens_core::{Markers, Pager, Solution};
use std::io::{self, BufRead, Write};

const PROMPT: &str = "[n]ext [p]rev [#] [q]uit> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Next,
    Prev,
    Jump(usize),
    Quit,
    Unknown,
}

impl Command {
    fn parse(line: &str) -> Self {
        match line.trim().to_ascii_lowercase().as_str() {
            "" | "n" | "next" => Command::Next,
            "p" | "prev" => Command::Prev,
            "q" | "quit" => Command::Quit,
            other => match other.parse::<usize>() {
                Ok(index) if index > 0 => Command::Jump(index - 1),
                _ => Command::Unknown,
            },
        }
    }
}

/// Runs the pager until the user quits or input ends.
///
/// `start` is the 0-based index shown first.
pub fn run<R: BufRead, W: Write>(
    solutions: &[Solution],
    markers: &Markers,
    start: usize,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    let mut pager = Pager::at(solutions.len(), start);
    let Some(mut index) = pager.current() else {
        writeln!(out, "{}", pager.status())?;
        return Ok(());
    };

    let mut lines = input.lines();
    loop {
        write_board(&solutions[index], markers, out)?;
        writeln!(out, "{}", pager.status())?;
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };
        let moved = match Command::parse(&line?) {
            Command::Next => pager.forward(),
            Command::Prev => pager.back(),
            Command::Jump(i) if i < pager.len() => {
                pager = Pager::at(pager.len(), i);
                pager.current()
            }
            Command::Jump(_) | Command::Unknown => {
                writeln!(out, "Unknown command, or index out of range")?;
                None
            }
            Command::Quit => return Ok(()),
        };
        if let Some(i) = moved {
            index = i;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four() -> Vec<Solution> {
        vec![
            Solution::new(vec![1, 3, 0, 2]).unwrap(),
            Solution::new(vec![2, 0, 3, 1]).unwrap(),
        ]
    }

    fn session(solutions: &[Solution], start: usize, input: &str) -> String {
        let mut out = Vec::new();
        run(
            solutions,
            &Markers::default(),
            start,
            input.as_bytes(),
            &mut out,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    fn statuses(transcript: &str) -> Vec<&str> {
        transcript
            .lines()
            .filter(|l| l.ends_with(" solutions"))
            .collect()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse(""), Command::Next);
        assert_eq!(Command::parse(" N \n"), Command::Next);
        assert_eq!(Command::parse("prev"), Command::Prev);
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(Command::parse("3"), Command::Jump(2));
        assert_eq!(Command::parse("0"), Command::Unknown);
        assert_eq!(Command::parse("left"), Command::Unknown);
    }

    #[test]
    fn next_wraps_around() {
        let out = session(&four(), 0, "n\nn\nq\n");
        assert_eq!(
            statuses(&out),
            vec!["1 / 2 solutions", "2 / 2 solutions", "1 / 2 solutions"]
        );
    }

    #[test]
    fn prev_wraps_around() {
        let out = session(&four(), 0, "p\nq\n");
        assert_eq!(statuses(&out), vec!["1 / 2 solutions", "2 / 2 solutions"]);
        assert!(out.contains("..Q.\nQ...\n...Q\n.Q..\n"));
    }

    #[test]
    fn jump_and_bad_input() {
        let out = session(&four(), 0, "2\n9\nq\n");
        assert_eq!(
            statuses(&out),
            vec!["1 / 2 solutions", "2 / 2 solutions", "2 / 2 solutions"]
        );
        assert!(out.contains("Unknown command"));
    }

    #[test]
    fn end_of_input_stops() {
        let out = session(&four(), 1, "");
        assert_eq!(statuses(&out), vec!["2 / 2 solutions"]);
    }

    #[test]
    fn empty_list() {
        let out = session(&[], 0, "n\n");
        assert_eq!(out, "No solutions found.\n");
    }
}
