use capture_core::{Board, Cell, Coordinate, GameState, Player, BOARD_SIZE};
use crossterm::style::Stylize;

pub fn print_board(board: &Board) {
    println!("\n  0 1 2 3 4 5 6 7");
    println!("  ---------------");

    for row in 0..BOARD_SIZE {
        print!("{} ", row);

        for col in 0..BOARD_SIZE {
            let cell = Coordinate::new(row, col)
                .map(|c| board.get(c))
                .unwrap_or_default();
            match cell {
                Cell::Empty => print!(". "),
                Cell::A => print!("{} ", "A".red().bold()),
                Cell::B => print!("{} ", "B".blue().bold()),
            }
        }

        println!("| {}", row);
    }

    println!("  ---------------");
    println!(
        "A: {}  B: {}  score (B - A): {}",
        board.count(Player::A),
        board.count(Player::B),
        board.global_score()
    );
}

pub fn print_status(state: &GameState) {
    println!(
        "{} to move, rounds left A: {} B: {}",
        state.turn,
        state.rounds_left(Player::A),
        state.rounds_left(Player::B)
    );
}

pub fn print_result(state: &GameState) {
    print_board(&state.board);
    match state.winner() {
        Some(player) => println!("Game over: {} wins", player),
        None => println!("Game over: draw"),
    }
}
