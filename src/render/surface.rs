//! Drawing target contract and an in-memory raster implementation.

use anyhow::Result;

use crate::metrics::SessionMetrics;

/// 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);
    pub const GREEN: Rgb = Rgb(0x00, 0xff, 0x00);
    pub const RED: Rgb = Rgb(0xff, 0x00, 0x00);
}

/// Fixed-size 2D surface the game paints onto.
///
/// Coordinates are display units with the origin at the top-left corner.
pub trait DisplaySurface {
    fn clear(&mut self, color: Rgb);

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb);

    /// Show a single message centred on the surface, in place of the board
    fn draw_centered_text(&mut self, message: &str);

    /// Push the painted frame to the real screen, if there is one
    fn present(&mut self, _metrics: &SessionMetrics) -> Result<()> {
        Ok(())
    }
}

/// Surface that stores one colour per board cell.
///
/// Rectangles are snapped to the cell grid: every cell a rectangle overlaps
/// takes its colour. Anything outside the surface is clipped.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterSurface {
    columns: usize,
    rows: usize,
    cell_size: u32,
    cells: Vec<Rgb>,
    message: Option<String>,
}

impl RasterSurface {
    pub fn new(columns: usize, rows: usize, cell_size: u32) -> Self {
        Self {
            columns,
            rows,
            cell_size: cell_size.max(1),
            cells: vec![Rgb::BLACK; columns * rows],
            message: None,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Size in display units
    pub fn size(&self) -> (u32, u32) {
        (
            self.columns as u32 * self.cell_size,
            self.rows as u32 * self.cell_size,
        )
    }

    /// Colour of a cell, or `None` outside the surface
    pub fn cell(&self, column: usize, row: usize) -> Option<Rgb> {
        if column < self.columns && row < self.rows {
            Some(self.cells[row * self.columns + column])
        } else {
            None
        }
    }

    /// Centred message drawn since the last clear
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Number of cells currently painted `color`
    pub fn count(&self, color: Rgb) -> usize {
        self.cells.iter().filter(|&&c| c == color).count()
    }

    /// Cell span covered by `[start, start + len)` in display units
    fn span(&self, start: i32, len: u32, limit: usize) -> std::ops::Range<usize> {
        let size = self.cell_size as i64;
        let first = (start as i64).div_euclid(size).max(0);
        let end = (start as i64 + len as i64 + size - 1).div_euclid(size);
        let end = end.clamp(0, limit as i64);
        let first = first.min(end);
        first as usize..end as usize
    }
}

impl DisplaySurface for RasterSurface {
    fn clear(&mut self, color: Rgb) {
        self.cells.fill(color);
        self.message = None;
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb) {
        let columns = self.span(x, width, self.columns);
        for row in self.span(y, height, self.rows) {
            let start = row * self.columns;
            self.cells[start + columns.start..start + columns.end].fill(color);
        }
    }

    fn draw_centered_text(&mut self, message: &str) {
        self.message = Some(message.to_string());
    }
}
