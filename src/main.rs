use std::env;
use std::process::ExitCode;
use std::time::Duration;

use olive_othello::board::position::{Position, Side};
use olive_othello::engines::engine_iterative::IterativeEngine;
use olive_othello::engines::engine_trait::{Engine, SearchBudget};
use olive_othello::utils::render_position::{render_position, square_name};

/// Searches the opening position for black and prints the chosen move.
/// Optional single argument: the time budget in seconds (default 1.0).
fn main() -> ExitCode {
    let budget = match env::args().nth(1) {
        Some(arg) => match arg.parse::<f64>() {
            Ok(seconds) => SearchBudget::from_seconds(seconds),
            Err(_) => {
                eprintln!("expected a time budget in seconds, got '{arg}'");
                return ExitCode::FAILURE;
            }
        },
        None => SearchBudget::default(),
    };

    let position = Position::start_pos();
    print!("{}", render_position(&position));
    println!(
        "searching for {} with {:?} budget",
        Side::Black.symbol(),
        Duration::from_secs_f64(budget.time_limit_s.max(0.0))
    );

    let mut engine = IterativeEngine::new();
    match engine.choose_move(&position, Side::Black, &budget) {
        Ok(output) => {
            for line in &output.info_lines {
                println!("{line}");
            }
            match output.best_move {
                Some(square) => println!("bestmove {}", square_name(square)),
                None => println!("bestmove (pass)"),
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("search failed: {err}");
            ExitCode::FAILURE
        }
    }
}
