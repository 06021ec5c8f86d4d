use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use amazons::{Board, Color};

#[derive(Parser, Debug)]
#[command(author, version, about = "Count leaf nodes of the Amazons move tree", long_about = None)]
struct Args {
    /// Board diagram file (W, B, S, - cells, row 10 first); starting position if absent
    #[arg(long)]
    diagram: Option<PathBuf>,

    /// Side to move in the diagram position
    #[arg(long, default_value = "white", value_parser = parse_color)]
    turn: Color,

    #[arg(short, long, default_value_t = 1)]
    depth: u8,

    /// Print the count for each root move
    #[arg(long)]
    divide: bool,
}

fn parse_color(s: &str) -> Result<Color, String> {
    match s.to_ascii_lowercase().as_str() {
        "white" | "w" => Ok(Color::White),
        "black" | "b" => Ok(Color::Black),
        other => Err(format!("unknown side {:?}", other)),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut board = match &args.diagram {
        Some(path) => {
            let text = match std::fs::read_to_string(path) {
                Ok(text) => text,
                Err(e) => {
                    eprintln!("cannot read {}: {}", path.display(), e);
                    std::process::exit(1);
                }
            };
            match Board::from_diagram(&text, args.turn) {
                Ok(board) => board,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            }
        }
        None => Board::new(),
    };

    println!("Running perft at depth {} on\n{}", args.depth, board);

    let start = std::time::Instant::now();
    let nodes = if args.divide && args.depth > 0 {
        let root_moves: Vec<_> = board.legal_moves().collect();
        let mut total = 0;
        for mv in root_moves {
            board.make_move_unchecked(mv);
            let n = perft(&mut board, args.depth - 1);
            board.undo();
            println!("{}: {}", mv, n);
            total += n;
        }
        total
    } else {
        perft(&mut board, args.depth)
    };
    let duration = start.elapsed();

    println!(
        "perft({}) = {} nodes ({} ms, {:.2} Mnps)",
        args.depth,
        nodes,
        duration.as_millis(),
        nodes as f64 / (duration.as_micros().max(1) as f64)
    );
}

fn perft(board: &mut Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    if depth == 1 {
        return board.legal_moves().count() as u64;
    }

    let mut nodes = 0;
    let moves: Vec<_> = board.legal_moves().collect();
    for mv in moves {
        board.make_move_unchecked(mv);
        nodes += perft(board, depth - 1);
        board.undo();
    }
    nodes
}
