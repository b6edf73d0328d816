extern crate minimax_ttt;

use minimax_ttt::boards::tic_tac_toe::{Mark, Outcome, TicTacToeBoard};
use minimax_ttt::minimax::Minimax;
use minimax_ttt::random::StandardRandomGenerator;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr, filtered by RUST_LOG (e.g. `RUST_LOG=minimax_ttt=debug`)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    // One engine per side
    let mut x_engine: Minimax<TicTacToeBoard, StandardRandomGenerator> = Minimax::for_side(Mark::X);
    let mut o_engine: Minimax<TicTacToeBoard, StandardRandomGenerator> = Minimax::for_side(Mark::O);
    let mut board = TicTacToeBoard::new();

    // Print the value of every opening move
    let opening = x_engine.analyze(&board).expect("X moves first on an empty board");
    for candidate in &opening.candidates {
        println!("Move: {:?} = {}", candidate.b_move, candidate.score);
    }
    println!("Positions searched: {}", opening.nodes_visited);

    // Play the game out
    while !board.outcome().is_terminal() {
        let mover = board.turn();
        let engine = match mover {
            Mark::X => &mut x_engine,
            Mark::O => &mut o_engine,
        };
        let report = engine.choose_move(&mut board).expect("game is in progress");
        println!("\n{mover} plays {:?}\n{board}", report.best_move);
    }

    println!("\n{}", board.outcome());
    assert_eq!(board.outcome(), Outcome::Tie);
}
