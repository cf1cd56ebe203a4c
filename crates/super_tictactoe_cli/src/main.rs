//! Super Tic-Tac-Toe - terminal front-end.
//!
//! A deliberately thin presentation layer: it renders the current
//! [`GameState`], maps text input to `(board, cell)` pairs, and owns the
//! single state snapshot. All game logic lives in the engine.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use super_tictactoe::{GameState, Position};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Super Tic-Tac-Toe - play in the terminal
#[derive(Parser, Debug)]
#[command(name = "super-tictactoe")]
#[command(about = "Super tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Dump the final game state as JSON when the game ends
    #[arg(long)]
    json: bool,

    /// Show the move history after every move
    #[arg(long)]
    history: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    info!("Starting super tic-tac-toe");
    println!("Super Tic-Tac-Toe");
    println!("Enter moves as: <board> <cell>  (0-8, row-major)");
    println!("Commands: reset, quit\n");

    let mut state = GameState::new();
    let stdin = io::stdin();

    loop {
        render(&state, cli.history);

        if state.is_over() {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&state)?);
            }
            break;
        }

        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "quit" | "q" => break,
            "reset" => {
                debug!("Resetting game");
                state = GameState::new();
            }
            input => match parse_move(input) {
                Some((board, cell)) => match state.apply_move(board, cell) {
                    Ok(next) => {
                        debug!(%board, %cell, "Move accepted");
                        state = next;
                    }
                    Err(e) => println!("Illegal move: {}\n", e),
                },
                None => println!("Expected two numbers 0-8, 'reset', or 'quit'\n"),
            },
        }
    }

    info!("Exiting");
    Ok(())
}

/// Parses "board cell" input into a pair of positions.
fn parse_move(input: &str) -> Option<(Position, Position)> {
    let mut parts = input.split_whitespace();
    let board = Position::from_index(parts.next()?.parse().ok()?)?;
    let cell = Position::from_index(parts.next()?.parse().ok()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some((board, cell))
}

/// Renders the board grid, the per-board outcome summary, and the status line.
fn render(state: &GameState, with_history: bool) {
    println!("{}", state.display());
    println!("{}", state.status_string());

    if with_history && !state.history().is_empty() {
        println!("History:");
        for mov in state.history() {
            println!("  {}", mov);
        }
    }

    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_move() {
        assert_eq!(
            parse_move("0 4"),
            Some((Position::TopLeft, Position::Center))
        );
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(parse_move("9 0"), None);
        assert_eq!(parse_move("0 12"), None);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_move(""), None);
        assert_eq!(parse_move("one two"), None);
        assert_eq!(parse_move("1 2 3"), None);
    }
}
