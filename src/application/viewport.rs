use std::ops::Range;

use crate::domain::CellPos;

/// Viewport maps between screen pixels and grid cells.
/// The canvas is drawn unscaled from `origin` with a fixed cell size.
pub struct Viewport {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_px: f32,
}

impl Viewport {
    pub fn new(origin_x: f32, origin_y: f32, cell_px: f32) -> Self {
        Self { origin_x, origin_y, cell_px }
    }

    /// Convert screen coordinates to a cell of a `cols` x `rows` grid.
    /// Anything left of or above the origin, or past the last cell, is no cell.
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32, cols: usize, rows: usize) -> Option<CellPos> {
        if self.cell_px <= 0.0 {
            return None;
        }
        let dx = screen_x - self.origin_x;
        let dy = screen_y - self.origin_y;
        if !(dx >= 0.0 && dy >= 0.0) {
            return None;
        }
        let x = (dx / self.cell_px) as usize;
        let y = (dy / self.cell_px) as usize;
        (x < cols && y < rows).then_some((x, y))
    }

    /// Top-left pixel of a cell
    pub fn cell_to_screen(&self, x: usize, y: usize) -> (f32, f32) {
        (
            self.origin_x + x as f32 * self.cell_px,
            self.origin_y + y as f32 * self.cell_px,
        )
    }

    /// Scroll by a pixel delta. The canvas may not scroll past `margin` from
    /// the top-left of the visible `area`, nor leave empty space beyond its far edge.
    pub fn scroll(&mut self, dx: f32, dy: f32, canvas: (f32, f32), area: (f32, f32), margin: f32) {
        let min_x = (area.0 - canvas.0 - margin).min(margin);
        let min_y = (area.1 - canvas.1 - margin).min(margin);
        self.origin_x = (self.origin_x + dx).clamp(min_x, margin);
        self.origin_y = (self.origin_y + dy).clamp(min_y, margin);
    }

    /// Columns and rows of a `cols` x `rows` grid that show at least partly
    /// inside a visible `area` whose top-left is the screen origin
    pub fn visible_cells(&self, cols: usize, rows: usize, area: (f32, f32)) -> (Range<usize>, Range<usize>) {
        (
            visible_axis(self.origin_x, self.cell_px, area.0, cols),
            visible_axis(self.origin_y, self.cell_px, area.1, rows),
        )
    }

    /// Pixel size of a `cols` x `rows` canvas
    pub fn canvas_size(&self, cols: usize, rows: usize) -> (f32, f32) {
        (cols as f32 * self.cell_px, rows as f32 * self.cell_px)
    }
}

fn visible_axis(origin: f32, cell_px: f32, extent: f32, count: usize) -> Range<usize> {
    if cell_px <= 0.0 {
        return 0..0;
    }
    let start = ((-origin / cell_px).floor().max(0.0) as usize).min(count);
    let end = (((extent - origin) / cell_px).ceil().max(0.0) as usize).min(count);
    start..end.max(start)
}
