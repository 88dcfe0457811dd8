//! Geister -- a two-player hidden-ghost board game on the console.
//!
//! Deals the standard starting position and runs a game between two
//! console players, or against a random bot when `--bot` is given.

use std::io;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use geister::board::{Board, Seat};
use geister::game::Game;
use geister::player::{ConsolePlayer, Player, RandomPlayer};
use geister::setup::standard_setup;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let north_is_bot = args.iter().any(|a| a == "--bot");

    let mut board = Board::new();
    let mut rng = SmallRng::from_entropy();
    if let Err(e) = standard_setup(&mut board, &mut rng) {
        eprintln!("setup failed: {}", e);
        return;
    }

    let south: Box<dyn Player> = Box::new(ConsolePlayer::stdio(Seat::South));
    let north: Box<dyn Player> = if north_is_bot {
        Box::new(RandomPlayer::new(Seat::North))
    } else {
        Box::new(ConsolePlayer::stdio(Seat::North))
    };

    let mut game = Game::new(board, south, north);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    game.run(&mut out);
}
