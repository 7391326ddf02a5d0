use std::env;
use std::process::ExitCode;

use checkers_engine::board::BoardSize;
use checkers_engine::engine::{Game, GameState, Player};
use checkers_engine::Side;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: legal_moves <size> <token1> <token2> ...");
        return ExitCode::FAILURE;
    }

    let size: BoardSize = match args[1].parse() {
        Ok(size) => size,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut game = Game::new(
        size,
        Player::human(Side::First, "First"),
        Player::human(Side::Second, "Second"),
    );
    for token in args.iter().skip(2) {
        if let Err(e) = game.submit(token) {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    }

    let legal_moves = game.legal_moves();
    match game.state() {
        GameState::AwaitingMove { side, chain_from } => {
            println!("side_to_move: {side}");
            match chain_from {
                Some(square) => println!("state: chain capture from {square}"),
                None => println!("state: awaiting move"),
            }
        }
        GameState::Finished(outcome) => {
            println!("side_to_move: none");
            println!("state: finished ({outcome})");
            match outcome.winner() {
                Some(side) => println!("winner: {side}"),
                None => println!("winner: none"),
            }
        }
    }
    println!("legal_moves: {}", legal_moves.len());
    for mv in &legal_moves {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
