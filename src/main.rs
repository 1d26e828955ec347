//! Gomoku terminal front-end
//!
//! Hotseat two-player game. All rules live in the library; this binary
//! parses input, renders the board, and reports results.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use gomoku::{Game, Level, PlaceResult, Pos, Stone};

#[derive(Parser)]
#[command(name = "gomoku", about = "Two-player Gomoku (five-in-a-row) in the terminal")]
struct Args {
    /// Board size preset
    #[arg(long, value_enum, default_value_t = LevelArg::Basic)]
    level: LevelArg,

    /// Explicit board side length, 5 to 15 (overrides --level)
    #[arg(long)]
    size: Option<usize>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LevelArg {
    /// 11x11 board
    Basic,
    /// 15x15 board
    High,
}

impl From<LevelArg> for Level {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Basic => Level::Basic,
            LevelArg::High => Level::High,
        }
    }
}

fn stone_name(stone: Stone) -> &'static str {
    match stone {
        Stone::Black => "Black",
        Stone::White => "White",
        Stone::Empty => "Empty",
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut game = match args.size {
        Some(size) => match Game::with_size(size) {
            Ok(game) => game,
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => Game::new(args.level.into()),
    };

    let size = game.board().size();
    println!("Gomoku {size}x{size}. Black is X, White is O.");
    println!("Enter moves as `row col`, or: undo, reset, quit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{}", game.board());

        if game.is_over() {
            print!("game over > ");
        } else {
            print!("{} > ", stone_name(game.turn()));
        }
        if io::stdout().flush().is_err() {
            break;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => break,
        };

        match line.trim() {
            "" => continue,
            "quit" | "q" => break,
            "reset" => {
                game.reset();
                println!("board cleared, Black to move");
            }
            "undo" => match game.undo() {
                Some(last) => println!(
                    "took back {} at ({}, {})",
                    stone_name(last.stone),
                    last.pos.row,
                    last.pos.col
                ),
                None => println!("nothing to undo"),
            },
            input => match parse_move(input) {
                Some(pos) => match game.place(pos) {
                    Ok(PlaceResult::Continue) => {}
                    Ok(PlaceResult::Win(color)) => {
                        println!("{} wins!", stone_name(color));
                        println!("`reset` to play again, `undo` to take back, `quit` to exit.");
                    }
                    Ok(PlaceResult::Draw) => {
                        println!("Draw: the board is full.");
                        println!("`reset` to play again, `undo` to take back, `quit` to exit.");
                    }
                    Err(err) => println!("{err}"),
                },
                None => println!("enter a move as `row col` (e.g. `5 5`), or undo/reset/quit"),
            },
        }
    }

    ExitCode::SUCCESS
}

fn parse_move(input: &str) -> Option<Pos> {
    let mut parts = input.split_whitespace();
    let row = parts.next()?.parse::<u8>().ok()?;
    let col = parts.next()?.parse::<u8>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Pos::new(row, col))
}
