//! Amazons self-play driver: the search agent plays both sides.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use amazons::search::{Search, SearchParams};
use amazons::Board;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Stop after this many moves even if the game is undecided
    #[arg(short, long, default_value_t = 200)]
    max_moves: usize,

    /// Search every move at this fixed depth instead of the move-count policy
    #[arg(short, long)]
    depth: Option<u8>,

    /// Search all legal moves instead of only blocking ones
    #[arg(long)]
    no_filter: bool,

    /// Print the board after every move
    #[arg(short, long)]
    boards: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut params = SearchParams::new().blocking_filter(!args.no_filter);
    if let Some(depth) = args.depth {
        params = params.fixed_depth(depth);
    }
    let mut search = Search::new(params);
    let mut board = Board::new();

    println!("{}", board);
    while board.winner().is_none() && board.num_moves() < args.max_moves {
        let side = board.turn();
        let Some(mv) = search.choose_move(&board) else {
            // Only a hand-built position can leave the side to move stuck undecided
            break;
        };
        if let Err(e) = board.make_move(mv) {
            eprintln!("engine produced a bad move: {}", e);
            std::process::exit(1);
        }
        println!("{:>3}. {} {}", board.num_moves(), side, mv);
        search.stats().log_summary();
        if args.boards {
            println!("{}", board);
        }
    }

    println!("{}", board);
    match board.winner() {
        Some(winner) => {
            info!(moves = board.num_moves(), "game over");
            println!("{} wins.", winner);
        }
        None => println!("No winner after {} moves.", board.num_moves()),
    }
}
