use std::thread;
use std::time::Instant;

use colored::Colorize;
use memorymatch_rs::games::memorymatch::{status, tile_views, MemoryMatchGame, Status};
use rand::seq::SliceRandom;
use rand::thread_rng;

const BOARD_COLUMNS: usize = 4;
const HIDDEN_LABEL: &str = "❓";

fn main() {
    demo_session();
    random_play();
}

/// Plays one session with random flips at the real re-hide pacing and prints
/// the board after every step.
fn demo_session() {
    let mut rng = thread_rng();
    let mut game = MemoryMatchGame::new();
    print_board(&game);

    while game.winner.is_none() {
        if let Some(timer) = game.take_rehide_timer() {
            thread::sleep(timer.delay);
            game.fire_rehide(timer);
            print_board(&game);
            continue;
        }
        let moves = game.get_moves();
        let tile_id = *moves.choose(&mut rng).expect("should have a move to make");
        game.select_tile(tile_id);
        print_board(&game);
    }

    match status(&game) {
        Status::Win => println!("{}", "You win! All pairs matched.".green()),
        Status::Loss => println!("{}", "Game over! Out of flips.".red()),
        Status::InProgress { .. } => unreachable!("session left the loop unfinished"),
    }
    println!(
        "final snapshot: {}",
        serde_json::to_string(&game).expect("game state serializes")
    );
}

/// Random playthroughs with the re-hide fired immediately, for throughput
/// numbers comparable across changes.
fn random_play() {
    let start = Instant::now();
    let mut rng = thread_rng();
    let mut wins = 0;
    let mut losses = 0;

    for _ in 0..10_000 {
        let mut game = MemoryMatchGame::new();
        game.with_no_changes();
        while game.winner.is_none() {
            if let Some(timer) = game.take_rehide_timer() {
                game.fire_rehide(timer);
                continue;
            }
            let moves = game.get_moves();
            let tile_id = *moves.choose(&mut rng).expect("should have a move to make");
            game.select_tile(tile_id);
        }
        match status(&game) {
            Status::Win => wins += 1,
            _ => losses += 1,
        }
    }

    println!(
        "10,000 random sessions in {:?}: {} wins, {} losses",
        start.elapsed(),
        wins,
        losses
    );
}

fn print_board(game: &MemoryMatchGame) {
    for row in tile_views(game).chunks(BOARD_COLUMNS) {
        let line: Vec<String> = row
            .iter()
            .map(|view| match view.face {
                Some(symbol) => symbol.emoji().to_string(),
                None => HIDDEN_LABEL.to_string(),
            })
            .collect();
        println!("{}", line.join(" "));
    }
    println!("flips remaining: {}\n", game.flips_remaining);
}
