use rand::rngs::StdRng;
use rand::SeedableRng;

use sudoku_engine::{
    enumerate_solutions, generate_with_rng, solve_in_place, solve_stepwise, Cell, ConstraintBoard,
    Difficulty, Grid, NoSolution, Step,
};

// a uniquely solvable 27-clue puzzle
const UNIQUE_PUZZLE: &str =
    "...2...633....54.1..1..398........9....538....3........263..5..5.37....847...1...";

fn solved_grid() -> Grid {
    let mut board = ConstraintBoard::empty();
    solve_in_place(&mut board).unwrap();
    board.into_grid()
}

#[test]
fn solve_empty_grid() {
    let grid = solved_grid();
    assert!(grid.is_solved());
}

#[test]
fn solve_line_puzzle() {
    let puzzle = Grid::from_str_line(UNIQUE_PUZZLE).unwrap();
    let solution = puzzle.solve_unique().unwrap();
    assert!(solution.is_solved());
    // clues survive solving
    for cell in Cell::all() {
        if let Some(digit) = puzzle.digit(cell) {
            assert_eq!(solution.digit(cell), Some(digit));
        }
    }
}

#[test]
fn solve_agrees_with_enumeration() {
    let puzzle = Grid::from_str_line(UNIQUE_PUZZLE).unwrap();

    let mut board = ConstraintBoard::from_grid(puzzle).unwrap();
    solve_in_place(&mut board).unwrap();
    let solved = board.into_grid();

    let mut board = ConstraintBoard::from_grid(puzzle).unwrap();
    let first = enumerate_solutions(&mut board).next().unwrap();

    // both walk the same cells in the same digit order
    assert_eq!(solved, first);
}

#[test]
fn conflicting_input_rejected() {
    let mut line = ".".repeat(81);
    line.replace_range(0..1, "5");
    line.replace_range(6..7, "5"); // second 5 in the top row
    let grid = Grid::from_str_line(&line).unwrap();
    assert!(ConstraintBoard::from_grid(grid).is_err());
}

#[test]
fn unsolvable_board_restored_on_failure() {
    // cell (0, 8) can hold nothing: 1..=8 fill its row, the 9 is in its block
    let mut line = String::new();
    line.push_str("12345678.");
    line.push_str("......9..");
    line.push_str(&".".repeat(63));
    let grid = Grid::from_str_line(&line).unwrap();

    let mut board = ConstraintBoard::from_grid(grid).unwrap();
    assert_eq!(solve_in_place(&mut board), Err(NoSolution));
    assert_eq!(board, ConstraintBoard::from_grid(grid).unwrap());
}

#[test]
fn single_erased_cell_has_unique_completion() {
    let solved = solved_grid();
    let cell = Cell::from_row_col(3, 4);
    let mut puzzle = solved.to_matrix();
    puzzle[3][4] = 0;
    let puzzle = Grid::from_matrix(puzzle).unwrap();
    assert_eq!(puzzle.digit(cell), None);

    let mut board = ConstraintBoard::from_grid(puzzle).unwrap();
    let solutions: Vec<_> = enumerate_solutions(&mut board).collect();
    assert_eq!(solutions, vec![solved]);
    // fully consumed, the walk undid every placement
    assert_eq!(*board.grid(), puzzle);
}

#[test]
fn empty_grid_has_many_solutions() {
    let mut board = ConstraintBoard::empty();
    let two: Vec<_> = enumerate_solutions(&mut board).take(2).collect();
    assert_eq!(two.len(), 2);
    assert!(two[0].is_solved());
    assert!(two[1].is_solved());
    assert_ne!(two[0], two[1]);

    assert!(Grid::empty().solve_unique().is_none());
    assert_eq!(Grid::empty().solve_at_most(3).len(), 3);
}

#[test]
fn abandoned_enumeration_leaves_board_mutated() {
    let mut board = ConstraintBoard::empty();
    let first = enumerate_solutions(&mut board).next().unwrap();
    // the walk stopped right after its first solution, so the board still
    // holds it; reuse requires rebuilding from the original grid
    assert_eq!(*board.grid(), first);
    assert!(board.grid().is_solved());
}

#[test]
fn generated_puzzles_match_difficulty() {
    let mut rng = StdRng::seed_from_u64(42);
    for &difficulty in &Difficulty::ALL {
        let (puzzle, solution) = generate_with_rng(difficulty, &mut rng).unwrap();
        assert!(solution.is_solved());

        let n_removed = (81 - puzzle.n_clues()) as u8;
        assert!(
            difficulty.removal_range().contains(&n_removed),
            "{} puzzle had {} cells removed",
            difficulty,
            n_removed
        );

        // every clue comes from the solution
        for cell in Cell::all() {
            if let Some(digit) = puzzle.digit(cell) {
                assert_eq!(solution.digit(cell), Some(digit));
            }
        }

        // the carving loop guarantees uniqueness
        let mut board = ConstraintBoard::from_grid(puzzle).unwrap();
        let solutions: Vec<_> = enumerate_solutions(&mut board).collect();
        assert_eq!(solutions, vec![solution]);
    }
}

#[test]
fn empty_cell_order_controls_search_not_success() {
    let puzzle = Grid::from_str_line(UNIQUE_PUZZLE).unwrap();
    let mut board = ConstraintBoard::from_grid(puzzle).unwrap();
    let mut reversed: Vec<Cell> = board.empty_cells().to_vec();
    reversed.reverse();
    board.set_empty_cells(reversed);

    solve_in_place(&mut board).unwrap();
    assert!(board.grid().is_solved());
}

#[test]
fn stepwise_event_grammar() {
    let puzzle = Grid::from_str_line(UNIQUE_PUZZLE).unwrap();
    let mut board = ConstraintBoard::from_grid(puzzle).unwrap();
    let n_empty = board.empty_cells().len();

    let mut n_places = 0i64;
    let mut n_erases = 0i64;
    let mut selected = false;
    for step in solve_stepwise(&mut board) {
        match step.unwrap() {
            Step::Select(_) => selected = true,
            // Erase and Place only ever follow a Select for their cell
            Step::Erase => {
                assert!(selected);
                n_erases += 1;
            }
            Step::Place(_) => {
                assert!(selected);
                n_places += 1;
            }
        }
    }

    // net placements fill exactly the empty cells
    assert_eq!(n_places - n_erases, n_empty as i64);
    assert!(board.grid().is_solved());
}
