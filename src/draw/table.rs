//! The card table canvas, drawn as terminal cells.

use super::{Draw, CANVAS_SIZE, CELL_SIZE};
use crate::surface::{Color, Rect, Surface};
use std::io::{self, Write};
use std::ops::Range;
use termion::color::Rgb;

impl Color {
    fn rgb(self) -> Rgb {
        match self {
            Color::White => Rgb(0xff, 0xff, 0xff),
            Color::Black => Rgb(0x00, 0x00, 0x00),
            Color::Felt => Rgb(0x00, 0x64, 0x00),
        }
    }
}

/// Maps canvas units onto a fixed grid of terminal cells.
///
/// The fill colour of every cell is tracked so text keeps the background it
/// is written over. A cleared cell counts as `Color::Black`.
pub struct TermSurface<W: Write> {
    draw: Draw<W>,
    origin: (usize, usize),
    cols: usize,
    rows: usize,
    background: Vec<Color>,
}

impl<W: Write> TermSurface<W> {
    pub fn new(out: W, origin: (usize, usize)) -> Self {
        let cols = (CANVAS_SIZE.0 / CELL_SIZE.0) as usize;
        let rows = (CANVAS_SIZE.1 / CELL_SIZE.1) as usize;
        Self {
            draw: Draw::new(out),
            origin,
            cols,
            rows,
            background: vec![Color::Black; cols * rows],
        }
    }

    pub fn writer(&self) -> &W {
        self.draw.get_ref()
    }

    /// Fill colour of a cell, or None outside the grid.
    pub fn background_at(&self, col: usize, row: usize) -> Option<Color> {
        (col < self.cols && row < self.rows).then(|| self.background[row * self.cols + col])
    }

    /// Cells covered by `len` units from `start`, clipped to `count` cells.
    fn cell_span(start: i32, len: u32, cell: u32, count: usize) -> Option<Range<usize>> {
        if len == 0 || count == 0 {
            return None;
        }
        let cell = i64::from(cell);
        let first = i64::from(start).div_euclid(cell).max(0);
        let last = (i64::from(start) + i64::from(len) - 1)
            .div_euclid(cell)
            .min(count as i64 - 1);
        (first <= last).then(|| first as usize..last as usize + 1)
    }

    fn paint(&mut self, cols: Range<usize>, rows: Range<usize>, color: Color) -> io::Result<()> {
        let blank = " ".repeat(cols.len());
        self.draw.set_colors(color.rgb(), color.rgb())?;
        for row in rows {
            self.background[row * self.cols..][cols.clone()].fill(color);
            self.draw
                .draw_text(self.origin.0 + cols.start, self.origin.1 + row, &blank)?;
        }
        Ok(())
    }
}

impl<W: Write> Surface for TermSurface<W> {
    fn size(&self) -> (u32, u32) {
        (
            self.cols as u32 * CELL_SIZE.0,
            self.rows as u32 * CELL_SIZE.1,
        )
    }

    fn clear(&mut self) -> io::Result<()> {
        self.paint(0..self.cols, 0..self.rows, Color::Black)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> io::Result<()> {
        let cols = Self::cell_span(rect.x, rect.width, CELL_SIZE.0, self.cols);
        let rows = Self::cell_span(rect.y, rect.height, CELL_SIZE.1, self.rows);
        match (cols, rows) {
            (Some(cols), Some(rows)) => self.paint(cols, rows, color),
            _ => Ok(()),
        }
    }

    fn fill_text(&mut self, x: i32, y: i32, text: &str, color: Color) -> io::Result<()> {
        let row = i64::from(y).div_euclid(i64::from(CELL_SIZE.1));
        if row < 0 || row >= self.rows as i64 {
            return Ok(());
        }
        let row = row as usize;
        let first_col = i64::from(x).div_euclid(i64::from(CELL_SIZE.0));

        let mut buf = [0u8; 4];
        for (i, ch) in text.chars().enumerate() {
            let col = first_col + i as i64;
            if col < 0 {
                continue;
            }
            if col >= self.cols as i64 {
                break;
            }
            let col = col as usize;
            let background = self.background[row * self.cols + col];
            self.draw.set_colors(color.rgb(), background.rgb())?;
            self.draw.draw_text(
                self.origin.0 + col,
                self.origin.1 + row,
                ch.encode_utf8(&mut buf),
            )?;
        }
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        self.draw.flush()
    }
}
