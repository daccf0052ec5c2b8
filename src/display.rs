use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color as TermColor, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_minimax::{Board, Color, GridBoard, WIDTH};

/// Draws the board to the terminal, top row first, with column numbers above
pub fn display(board: &GridBoard) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;

    let (rows, columns) = board.dimensions();
    for row in 0..rows {
        for col in 0..columns {
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(TermColor::DarkBlue)
                    .with(match board.cell(row, col) {
                        Color::Positive => TermColor::Red,
                        Color::Negative => TermColor::Yellow,
                        Color::Empty => TermColor::DarkBlue,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
