//! Common drawing code.

use super::Draw;
use std::io::{self, Write};
use termion::{clear, color, cursor};

impl<W: Write> Draw<W> {
    pub(crate) fn default_bg() -> impl color::Color {
        color::Black
    }
    pub(crate) fn default_fg() -> impl color::Color {
        color::LightWhite
    }

    pub(crate) fn set_colors(
        &mut self,
        foreground: impl color::Color,
        background: impl color::Color,
    ) -> io::Result<()> {
        write!(
            self.out,
            "{}{}",
            color::Fg(foreground),
            color::Bg(background),
        )
    }

    pub fn draw_text(&mut self, col: usize, row: usize, text: &str) -> io::Result<()> {
        let (col, row) = Self::goto_args(col, row)?;
        write!(self.out, "{}{}", cursor::Goto(col, row), text)
    }

    /// Like `draw_text`, but blanks the rest of the line first.
    pub fn draw_line(&mut self, col: usize, row: usize, text: &str) -> io::Result<()> {
        let (col, row) = Self::goto_args(col, row)?;
        write!(
            self.out,
            "{}{}{}",
            cursor::Goto(col, row),
            clear::UntilNewline,
            text
        )
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn goto_args(col: usize, row: usize) -> io::Result<(u16, u16)> {
        let fit = |v: usize| {
            u16::try_from(v).map_err(|_| {
                io::Error::new(io::ErrorKind::InvalidInput, "position should fit in a u16")
            })
        };
        Ok((fit(col)?, fit(row)?))
    }
}
