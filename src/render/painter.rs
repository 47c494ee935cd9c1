use crate::game::{GameState, Position};

use super::surface::{DisplaySurface, Rgb};

pub const BACKGROUND_COLOR: Rgb = Rgb::BLACK;
pub const SNAKE_COLOR: Rgb = Rgb::GREEN;
pub const APPLE_COLOR: Rgb = Rgb::RED;
pub const GAME_OVER_MESSAGE: &str = "OH NO, GAME OVER :(";

/// Paints a [`GameState`] onto any [`DisplaySurface`]
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    cell_size: u32,
}

impl Painter {
    pub fn new(cell_size: u32) -> Self {
        Self { cell_size }
    }

    /// Full repaint: background, then either the game-over message or the
    /// snake with the apple drawn on top.
    pub fn paint<S: DisplaySurface + ?Sized>(&self, surface: &mut S, state: &GameState) {
        surface.clear(BACKGROUND_COLOR);

        if state.is_game_over() {
            surface.draw_centered_text(GAME_OVER_MESSAGE);
            return;
        }

        for cell in state.cells() {
            self.fill_cell(surface, cell, SNAKE_COLOR);
        }
        self.fill_cell(surface, state.apple(), APPLE_COLOR);
    }

    fn fill_cell<S: DisplaySurface + ?Sized>(&self, surface: &mut S, cell: Position, color: Rgb) {
        let size = self.cell_size as i32;
        surface.fill_rect(
            cell.x * size,
            cell.y * size,
            self.cell_size,
            self.cell_size,
            color,
        );
    }
}
