use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent, Stylize},
    QueueableCommand,
};
use npuzzle::PuzzleState;

use std::io::{self, Write};

/// Writes a board in its text form, highlighting tiles already in their
/// goal cell when `color` is set
pub fn write_board<W: Write>(out: &mut W, board: &PuzzleState, color: bool) -> io::Result<()> {
    if !color {
        return write!(out, "{}", board);
    }

    let n = board.dimension();
    let width = (n * n - 1).to_string().len();

    writeln!(out, "{}", n)?;
    for (row, tiles) in board.rows().enumerate() {
        for (col, &tile) in tiles.iter().enumerate() {
            if col > 0 {
                write!(out, " ")?;
            }
            let text = format!("{:>width$}", tile);
            let in_place = tile != 0 && tile as usize == row * n + col + 1;
            let styled = if tile == 0 {
                style(text).with(Color::DarkGrey)
            } else if in_place {
                style(text).with(Color::Green).attribute(Attribute::Bold)
            } else {
                style(text)
            };
            out.queue(PrintStyledContent(styled))?;
        }
        writeln!(out)?;
    }
    out.flush()
}
