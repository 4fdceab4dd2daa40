//! Property tests for the solver over small boards.

use proptest::prelude::*;
use queens_core::{BoardSize, Cell, Markers, Solution};
use queens_engine::{count, solutions, solutions_with, solve, PairwiseScan, SolveError};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn every_solution_is_non_attacking(n in 0usize..=8) {
        for solution in solutions(BoardSize::new(n)) {
            let queens: Vec<Cell> = solution.queens().collect();
            prop_assert_eq!(queens.len(), n);
            for (row, queen) in queens.iter().enumerate() {
                prop_assert_eq!(queen.row, row);
                prop_assert!(queen.col < n);
            }
            for (i, a) in queens.iter().enumerate() {
                for b in &queens[i + 1..] {
                    prop_assert_ne!(a.row, b.row);
                    prop_assert_ne!(a.col, b.col);
                    prop_assert_ne!(a.row.abs_diff(b.row), a.col.abs_diff(b.col));
                }
            }
        }
    }

    #[test]
    fn lazy_prefix_matches_eager(n in 0usize..=9, k in 0usize..20) {
        let all = solve(n as i64).unwrap();
        let prefix: Vec<Solution> = solutions(BoardSize::new(n)).take(k).collect();
        prop_assert_eq!(prefix.as_slice(), &all[..k.min(all.len())]);
    }

    #[test]
    fn fast_and_reference_agree(n in 0usize..=7) {
        let size = BoardSize::new(n);
        let fast: Vec<Solution> = solutions(size).collect();
        let slow: Vec<Solution> = solutions_with::<PairwiseScan>(size).collect();
        prop_assert_eq!(fast, slow);
    }

    #[test]
    fn count_matches_enumeration(n in 0usize..=9) {
        let size = BoardSize::new(n);
        prop_assert_eq!(count(size), solutions(size).count() as u64);
    }

    #[test]
    fn negative_sizes_are_rejected(n in i64::MIN..0) {
        prop_assert_eq!(solve(n), Err(SolveError::InvalidArgument(n)));
    }

    #[test]
    fn grid_shape_reads_back(n in 4usize..=8, pick in 0usize..100) {
        let all = solve(n as i64).unwrap();
        let solution = &all[pick % all.len()];
        let markers = Markers::default();
        let rows = solution.to_rows(&markers);
        prop_assert_eq!(rows.len(), n);
        prop_assert!(rows.iter().all(|r| r.chars().count() == n));
        prop_assert!(rows.iter().all(|r| r.matches(markers.queen).count() == 1));
        let back = Solution::from_rows(&rows, &markers).unwrap();
        prop_assert_eq!(&back, solution);
    }
}

#[test]
fn four_queens_scenario() {
    let found = solve(4).unwrap();
    let cells: Vec<Vec<(usize, usize)>> = found
        .iter()
        .map(|s| s.queens().map(Into::into).collect())
        .collect();
    assert_eq!(
        cells,
        vec![
            vec![(0, 1), (1, 3), (2, 0), (3, 2)],
            vec![(0, 2), (1, 0), (2, 3), (3, 1)],
        ]
    );
}

#[test]
fn published_counts() {
    for (n, expected) in [(0, 1), (1, 1), (2, 0), (3, 0), (4, 2), (5, 10), (6, 4), (8, 92)] {
        assert_eq!(solve(n).unwrap().len(), expected, "n = {}", n);
    }
}

#[test]
fn invalid_input_is_not_an_empty_result() {
    let err = solve(-1).unwrap_err();
    assert_eq!(err, SolveError::InvalidArgument(-1));
    assert_eq!(err.to_string(), "invalid board size: -1 (must be non-negative)");
}
