//! Draws a dealt hand onto the table surface.

use crate::game_state::GameState;
use crate::surface::{Color, Rect, Surface};
use std::io;

pub struct GameView<S: Surface> {
    surface: S,
}

impl<S: Surface> GameView<S> {
    pub const CARD_WIDTH: u32 = 60;
    pub const CARD_HEIGHT: u32 = 90;
    const LABEL_OFFSET: (i32, i32) = (10, 50);

    const CARD_STEP: i32 = 80;
    const PLAYER_INIT: (i32, i32) = (100, 250);
    const DEALER_INIT: (i32, i32) = (100, 50);
    const TABLE_INIT: (i32, i32) = (300, 150);

    const NOTICE_BAND_HEIGHT: u32 = 40;
    const NOTICE_POS: (i32, i32) = (10, 390);

    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// A white card at `(x, y)` with `label` in black.
    pub fn draw_card(&mut self, x: i32, y: i32, label: &str) -> io::Result<()> {
        let rect = Rect::new(x, y, Self::CARD_WIDTH, Self::CARD_HEIGHT);
        self.surface.fill_rect(rect, Color::White)?;
        self.surface.fill_text(
            x + Self::LABEL_OFFSET.0,
            y + Self::LABEL_OFFSET.1,
            label,
            Color::Black,
        )
    }

    /// Repaints the whole table. Long rows run off the right edge.
    pub fn draw_game(&mut self, game: &GameState) -> io::Result<()> {
        self.draw_table()?;

        self.draw_row(Self::PLAYER_INIT, &game.player_cards)?;
        self.draw_row(Self::DEALER_INIT, &game.dealer_cards)?;
        self.draw_row(Self::TABLE_INIT, &game.table_cards)?;

        self.surface.present()
    }

    /// Clears the canvas to bare felt.
    pub fn draw_table(&mut self) -> io::Result<()> {
        let (width, height) = self.surface.size();
        self.surface.clear()?;
        self.surface
            .fill_rect(Rect::new(0, 0, width, height), Color::Felt)
    }

    /// One line of text along the bottom edge, replacing the previous one.
    pub fn draw_notice(&mut self, text: &str) -> io::Result<()> {
        let (width, height) = self.surface.size();
        let top = height.saturating_sub(Self::NOTICE_BAND_HEIGHT) as i32;
        self.surface.fill_rect(
            Rect::new(0, top, width, Self::NOTICE_BAND_HEIGHT),
            Color::Felt,
        )?;
        self.surface
            .fill_text(Self::NOTICE_POS.0, Self::NOTICE_POS.1, text, Color::White)?;
        self.surface.present()
    }

    fn draw_row(&mut self, (init_x, y): (i32, i32), cards: &[String]) -> io::Result<()> {
        let mut x = init_x;
        for label in cards {
            self.draw_card(x, y, label)?;
            x += Self::CARD_STEP;
        }
        Ok(())
    }
}
