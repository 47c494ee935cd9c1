use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};

use crate::driver::ScoreBoard;
use crate::error::SetupError;
use crate::metrics::SessionMetrics;

use super::renderer::Renderer;
use super::surface::{DisplaySurface, RasterSurface, Rgb};

/// Display surface backed by the real terminal.
///
/// Painting goes to an in-memory raster; [`DisplaySurface::present`] draws
/// that raster together with the score board.
pub struct TerminalSurface {
    terminal: Terminal<CrosstermBackend<Stderr>>,
    raster: RasterSurface,
    renderer: Renderer,
    score: ScoreBoard,
}

impl TerminalSurface {
    /// Take over the terminal: raw mode, alternate screen, hidden cursor.
    ///
    /// Fails without touching the terminal state when the window is too
    /// small for the board.
    pub fn open(raster: RasterSurface, score: ScoreBoard) -> Result<Self, SetupError> {
        let (needed_cols, needed_rows) = Renderer::required_size(raster.columns(), raster.rows());
        let (cols, rows) = crossterm::terminal::size()?;
        if cols < needed_cols || rows < needed_rows {
            return Err(SetupError::SurfaceTooSmall {
                needed_cols,
                needed_rows,
                cols,
                rows,
            });
        }

        enable_raw_mode()?;
        let mut stderr = stderr();
        if let Err(err) = execute!(stderr, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stderr)) {
            Ok(terminal) => terminal,
            Err(err) => {
                let _ = execute!(std::io::stderr(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                return Err(err.into());
            }
        };

        let mut surface = Self {
            terminal,
            raster,
            renderer: Renderer::new(),
            score,
        };
        if let Err(err) = surface.terminal.hide_cursor().and_then(|_| surface.terminal.clear()) {
            let _ = surface.close();
            return Err(err.into());
        }
        Ok(surface)
    }

    /// Restore the terminal to the state it had before [`TerminalSurface::open`]
    pub fn close(&mut self) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        self.terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

impl DisplaySurface for TerminalSurface {
    fn clear(&mut self, color: Rgb) {
        self.raster.clear(color);
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb) {
        self.raster.fill_rect(x, y, width, height, color);
    }

    fn draw_centered_text(&mut self, message: &str) {
        self.raster.draw_centered_text(message);
    }

    fn present(&mut self, metrics: &SessionMetrics) -> Result<()> {
        let score = self.score.get();
        let (raster, renderer) = (&self.raster, &self.renderer);
        self.terminal
            .draw(|frame| renderer.render(frame, raster, score, metrics))
            .context("Failed to draw frame")?;
        Ok(())
    }
}
