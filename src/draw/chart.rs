//! Draws the win probability chart as horizontal bars.

use super::Draw;
use crate::chart::{ChartRenderer, ChartWidget};
use std::io::{self, Write};
use termion::color;

pub struct TermChart<W: Write> {
    draw: Draw<W>,
    origin: (usize, usize),
}

impl<W: Write> TermChart<W> {
    const BAR_WIDTH: usize = 40;
    const LABEL_WIDTH: usize = 8;

    pub fn new(out: W, origin: (usize, usize)) -> Self {
        Self {
            draw: Draw::new(out),
            origin,
        }
    }

    pub fn writer(&self) -> &W {
        self.draw.get_ref()
    }

    /// Filled cells for `value`; the bar is clamped, the printed value is not.
    fn bar_cells(value: f64) -> usize {
        if value.is_nan() {
            return 0;
        }
        (value.clamp(0.0, 1.0) * Self::BAR_WIDTH as f64).round() as usize
    }

    fn bar(label: &str, value: f64) -> String {
        let filled = Self::bar_cells(value);
        format!(
            "{label:<width$} {}{} {value:.2}",
            "█".repeat(filled),
            "░".repeat(Self::BAR_WIDTH - filled),
            width = Self::LABEL_WIDTH,
        )
    }
}

impl<W: Write> ChartRenderer for TermChart<W> {
    fn render(&mut self, chart: &ChartWidget) -> io::Result<()> {
        let (col, mut row) = self.origin;

        self.draw
            .set_colors(color::LightYellow, Draw::<W>::default_bg())?;
        self.draw.draw_line(col, row, &chart.dataset.label)?;
        row += 1;

        self.draw
            .set_colors(Draw::<W>::default_fg(), Draw::<W>::default_bg())?;
        for (label, value) in chart.bars() {
            self.draw.draw_line(col, row, &Self::bar(label, value))?;
            row += 1;
        }
        self.draw.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    type Chart = TermChart<Vec<u8>>;

    #[test_case(0.0 => 0)]
    #[test_case(0.5 => 20)]
    #[test_case(0.7 => 28)]
    #[test_case(1.0 => 40)]
    #[test_case(1.5 => 40 ; "above one")]
    #[test_case(-0.2 => 0 ; "negative")]
    #[test_case(f64::NAN => 0 ; "nan")]
    fn test_bar_cells(value: f64) -> usize {
        Chart::bar_cells(value)
    }

    #[test]
    fn test_bar_text() {
        let bar = Chart::bar("Dealer", 0.25);
        assert!(bar.starts_with("Dealer   ██████████░"));
        assert!(bar.ends_with(" 0.25"));
        assert_eq!(bar.matches('░').count(), 30);
    }

    #[test]
    fn test_render_writes_title_and_bars() {
        let mut chart = Chart::new(Vec::new(), (1, 23));
        let mut widget = ChartWidget::win_probabilities();
        widget.dataset.data = vec![0.7, 0.3];
        chart.render(&widget).unwrap();

        let out = String::from_utf8(chart.writer().clone()).unwrap();
        assert!(out.contains("Win probability"));
        assert!(out.contains(&Chart::bar("Player", 0.7)));
        assert!(out.contains(&Chart::bar("Dealer", 0.3)));
    }
}
