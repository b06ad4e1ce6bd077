use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::Level;

use std::io::{stdin, stdout, BufRead, Write};
use std::time::Duration;

use connect4_minimax::{
    outcome::GameStatus,
    session::{GameSession, AUTOMATED},
    GameError, COLUMNS,
};

mod terminal;

/// Pause before the automated player answers, so its move can be followed
const THINKING_DELAY: Duration = Duration::from_millis(300);

/// Set to any value to log search diagnostics to stderr
const LOG_ENV_VAR: &str = "CONNECT4_LOG";

fn main() -> Result<()> {
    let level = if std::env::var_os(LOG_ENV_VAR).is_some() {
        Level::Debug
    } else {
        Level::Warn
    };
    simple_logger::init_with_level(level)?;

    let mut session = GameSession::new();
    let stdin = stdin();

    println!("Welcome to Connect 4\n");
    println!("You play Yellow and move first, the computer plays Red.");

    // game loop
    loop {
        terminal::display(&session)?;

        match session.status() {
            GameStatus::InProgress if session.current_player() == AUTOMATED => {
                let spinner = ProgressBar::new_spinner();
                spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.red} {msg}"));
                spinner.set_message("Red is thinking...");
                spinner.enable_steady_tick(80);
                std::thread::sleep(THINKING_DELAY);

                let reply = session.play_automated_move();
                spinner.finish_and_clear();

                match reply? {
                    Some(column) => println!("Red plays column {}", column + 1),
                    None => println!("Red has no legal move"),
                }
            }
            GameStatus::InProgress => {
                print!("Move input > ");
                stdout().flush().expect("Failed to flush to stdout!");
                let input_str = match read_input(&mut stdin.lock())? {
                    Some(line) => line,
                    // stdin closed
                    None => break,
                };

                let column = match input_str.trim().parse::<usize>() {
                    Ok(column) if column >= 1 => column - 1,
                    _ => {
                        println!("Invalid number: {}", input_str.trim());
                        continue;
                    }
                };

                if let Err(err) = session.on_human_move(column) {
                    println!("{}", describe(err));
                    // try the move again
                    continue;
                }
            }

            // end states
            status => {
                match status {
                    GameStatus::Win { player, .. } if player == AUTOMATED => {
                        println!("Red (AI) wins!")
                    }
                    GameStatus::Win { .. } => println!("Yellow (You) win!"),
                    _ => println!("It's a draw!"),
                }

                print!("Enter a space to reset the game, anything else to quit: ");
                stdout().flush().expect("Failed to flush to stdout!");
                match read_input(&mut stdin.lock())? {
                    Some(buffer) if buffer.starts_with(' ') => session.reset(),
                    _ => break,
                }
            }
        }
    }
    Ok(())
}

/// Reads one line of input, `None` once the input is exhausted
fn read_input<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut buffer = String::new();
    match reader.read_line(&mut buffer)? {
        0 => Ok(None),
        _ => Ok(Some(buffer)),
    }
}

/// Phrases a refused move in the 1-indexed columns the player types
fn describe(err: GameError) -> String {
    match err {
        GameError::ColumnOutOfRange { column, .. } => format!(
            "Invalid move, column {} out of range. Columns must be between 1 and {}",
            column + 1,
            COLUMNS
        ),
        GameError::ColumnFull { column } => format!("Invalid move, column {} full", column + 1),
        other => other.to_string(),
    }
}
