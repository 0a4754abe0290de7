//! Demo game: a random-mover (White) against the alpha-beta search
//! (Black), from the standard starting position.

use minimax_chess::board::{search, Board, Color};
use minimax_chess::RandomAgent;

const SEARCH_DEPTH: u32 = 3;

fn main() {
    env_logger::init();

    let mut board = Board::new();
    let mut white = RandomAgent::new(Color::White);
    let mut count = 1;

    loop {
        let Some(white_move) = white.pick_move(&mut board) else {
            println!("Game over! White has no more moves.");
            break;
        };
        println!(
            "Move {count}: {}",
            white_move.describe(Color::White)
        );
        board.make_move(&white_move);

        let Some(black_move) = search::best_move(&mut board, Color::Black, SEARCH_DEPTH) else {
            println!("Game over! Black has no more moves.");
            break;
        };
        println!(
            "Move {count}: {}",
            black_move.describe(Color::Black)
        );
        board.make_move(&black_move);

        count += 1;
    }

    match board.winner() {
        Some(Color::White) => println!("White wins!"),
        Some(Color::Black) => println!("Black wins!"),
        None => println!("It's a draw!"),
    }
}
