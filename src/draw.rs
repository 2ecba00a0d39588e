//! Terminal rendering: the table surface, the chart and the screen itself.

mod chart;
mod common;
mod table;
mod terminal;

pub use chart::TermChart;
pub use table::TermSurface;
pub use terminal::Terminal;

use std::io::Write;

/// Canvas size in canvas units.
pub const CANVAS_SIZE: (u32, u32) = (800, 400);
/// Canvas units covered by one terminal cell.
pub const CELL_SIZE: (u32, u32) = (10, 20);
/// Terminal position of canvas cell (0, 0); row 1 holds the key help.
pub const CANVAS_ORIGIN: (usize, usize) = (1, 2);
/// Terminal position of the chart title, one row below the canvas.
pub const CHART_ORIGIN: (usize, usize) = (
    1,
    CANVAS_ORIGIN.1 + (CANVAS_SIZE.1 / CELL_SIZE.1) as usize + 1,
);

/// Positioned, coloured text output. Columns and rows are 1-based.
pub struct Draw<W: Write> {
    out: W,
}

impl<W: Write> Draw<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }
}
