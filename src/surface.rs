//! A 2D drawing surface addressed in canvas units.

use std::io;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
    /// Table felt, #006400
    Felt,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Anything drawn outside `size()` is clipped; it is never an error.
pub trait Surface {
    fn size(&self) -> (u32, u32);
    fn clear(&mut self) -> io::Result<()>;
    fn fill_rect(&mut self, rect: Rect, color: Color) -> io::Result<()>;
    /// Draws `text` with its anchor at `(x, y)`.
    fn fill_text(&mut self, x: i32, y: i32, text: &str, color: Color) -> io::Result<()>;
    /// Makes everything drawn so far visible.
    fn present(&mut self) -> io::Result<()>;
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) enum Op {
        Clear,
        FillRect(Rect, Color),
        FillText(i32, i32, String, Color),
    }

    /// Records draw calls instead of drawing.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSurface {
        pub ops: Vec<Op>,
        pub presented: usize,
    }

    impl RecordingSurface {
        pub(crate) fn rects_of(&self, color: Color) -> Vec<Rect> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::FillRect(rect, c) if *c == color => Some(*rect),
                    _ => None,
                })
                .collect()
        }

        pub(crate) fn texts(&self) -> Vec<(i32, i32, &str)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::FillText(x, y, text, _) => Some((*x, *y, text.as_str())),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> (u32, u32) {
            (800, 400)
        }

        fn clear(&mut self) -> io::Result<()> {
            self.ops.push(Op::Clear);
            Ok(())
        }

        fn fill_rect(&mut self, rect: Rect, color: Color) -> io::Result<()> {
            self.ops.push(Op::FillRect(rect, color));
            Ok(())
        }

        fn fill_text(&mut self, x: i32, y: i32, text: &str, color: Color) -> io::Result<()> {
            self.ops.push(Op::FillText(x, y, text.to_string(), color));
            Ok(())
        }

        fn present(&mut self) -> io::Result<()> {
            self.presented += 1;
            Ok(())
        }
    }
}
