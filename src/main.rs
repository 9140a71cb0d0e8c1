use std::env;
use std::process;

use sudoku_engine::{generate, Difficulty};

fn main() {
    let arg = env::args().nth(1).unwrap_or_else(|| "medium".to_string());
    let difficulty: Difficulty = match arg.parse() {
        Ok(difficulty) => difficulty,
        Err(err) => {
            eprintln!("{}: {}", err, arg);
            eprintln!("usage: sudoku-engine [easy|medium|hard]");
            process::exit(1);
        }
    };

    let (puzzle, solution) = generate(difficulty);
    println!("{} puzzle ({} clues):\n", difficulty, puzzle.n_clues());
    println!("{}\n", puzzle);
    println!("solution:\n");
    println!("{}", solution);
}
