use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_minimax::{session::GameSession, Cell, COLUMNS, ROWS};

/// Draws the board of `session`, top row first, under 1-indexed column labels
pub fn display(session: &GameSession) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=COLUMNS).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(format!("\n{}\n", cols))))?;

    for row in 0..ROWS {
        for column in 0..COLUMNS {
            let cell = session.cell_state(row, column).unwrap_or(Cell::Empty);
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match cell {
                        Cell::Red => Color::Red,
                        Cell::Yellow => Color::Yellow,
                        Cell::Empty => Color::DarkBlue,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
