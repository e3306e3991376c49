use super::{Cell, Layer};
use rayon::prelude::*;

/// Grid coordinates as (column, row)
pub type CellPos = (usize, usize);

/// Side length of one cell in meters (1 cell = 10cm)
pub const CELL_METERS: f64 = 0.1;

/// Longest grid axis. Larger rooms are capped here so `width * height`
/// stays allocatable.
pub const MAX_SIDE_CELLS: usize = 1000;

/// Longest room side in meters, matching `MAX_SIDE_CELLS`
pub const MAX_ROOM_METERS: f64 = MAX_SIDE_CELLS as f64 * CELL_METERS;

/// Number of cells covering a real-world length.
/// Negative and NaN lengths produce an empty axis; lengths past
/// `MAX_ROOM_METERS` are capped.
pub fn cells_for_meters(meters: f64) -> usize {
    ((meters * 10.0).floor().max(0.0) as usize).min(MAX_SIDE_CELLS)
}

/// A usable room side length: finite and non-negative, capped at
/// `MAX_ROOM_METERS`. None for anything else.
pub fn room_meters(meters: f64) -> Option<f64> {
    (meters.is_finite() && meters >= 0.0).then(|| meters.min(MAX_ROOM_METERS))
}

/// Reachable-cell tally for the side panel
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Coverage {
    pub floor: usize,
    pub elevated: usize,
    pub both: usize,
}

impl Coverage {
    /// Area in square meters covered by `cells` cells
    pub fn area_m2(cells: usize) -> f64 {
        cells as f64 * CELL_METERS * CELL_METERS
    }

    fn merge(self, other: Self) -> Self {
        Self {
            floor: self.floor + other.floor,
            elevated: self.elevated + other.elevated,
            both: self.both + other.both,
        }
    }
}

/// Grid holds the two reachability layers of a room, row-major.
#[derive(Clone, PartialEq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell unreachable on both layers.
    /// Each side is capped at `MAX_SIDE_CELLS`.
    pub fn new(width: usize, height: usize) -> Self {
        let width = width.min(MAX_SIDE_CELLS);
        let height = height.min(MAX_SIDE_CELLS);
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; width * height],
        }
    }

    /// Get grid dimensions as (columns, rows)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.contains(x, y).then(|| self.cells[self.get_index(x, y)])
    }

    /// Layer flag at position; out-of-bounds reads as unreachable
    pub fn is_set(&self, x: usize, y: usize, layer: Layer) -> bool {
        self.get(x, y).is_some_and(|cell| cell.get(layer))
    }

    /// Set one layer flag; out-of-bounds writes are ignored
    pub fn set(&mut self, x: usize, y: usize, layer: Layer, reachable: bool) {
        if self.contains(x, y) {
            let idx = self.get_index(x, y);
            self.cells[idx].set(layer, reachable);
        }
    }

    /// Replace a whole cell; out-of-bounds writes are ignored
    pub fn set_cell(&mut self, x: usize, y: usize, cell: Cell) {
        if self.contains(x, y) {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Set every cell of the inclusive rectangle spanned by two corners.
    /// Corners may be given in any order; the part outside the grid is skipped.
    pub fn fill_rect(&mut self, a: CellPos, b: CellPos, layer: Layer, reachable: bool) {
        let (x0, x1) = (a.0.min(b.0), a.0.max(b.0));
        let (y0, y1) = (a.1.min(b.1), a.1.max(b.1));
        for y in y0..=y1.min(self.height.saturating_sub(1)) {
            for x in x0..=x1.min(self.width.saturating_sub(1)) {
                self.set(x, y, layer, reachable);
            }
        }
    }

    /// Build a grid of new dimensions, carrying over the overlapping region
    pub fn resized(&self, width: usize, height: usize) -> Self {
        let mut next = Self::new(width, height);
        for y in 0..next.height.min(self.height) {
            for x in 0..next.width.min(self.width) {
                let idx = next.get_index(x, y);
                next.cells[idx] = self.cells[self.get_index(x, y)];
            }
        }
        next
    }

    /// Row-major copy, `rows[y][x]`
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        if self.width == 0 {
            return vec![Vec::new(); self.height];
        }
        self.cells.chunks(self.width).map(<[Cell]>::to_vec).collect()
    }

    /// Build a grid from rows; ragged or short input is padded with empty cells
    /// and anything past `width` x `height` is dropped.
    pub fn from_rows(rows: &[Vec<Cell>], width: usize, height: usize) -> Self {
        let mut grid = Self::new(width, height);
        for (y, row) in rows.iter().take(height).enumerate() {
            for (x, cell) in row.iter().take(width).enumerate() {
                grid.set_cell(x, y, *cell);
            }
        }
        grid
    }

    /// Count reachable cells per layer, one row per rayon task
    pub fn coverage(&self) -> Coverage {
        if self.width == 0 {
            return Coverage::default();
        }
        self.cells
            .par_chunks(self.width)
            .map(|row| {
                row.iter().fold(Coverage::default(), |acc, cell| Coverage {
                    floor: acc.floor + usize::from(cell.floor),
                    elevated: acc.elevated + usize::from(cell.elevated),
                    both: acc.both + usize::from(cell.floor && cell.elevated),
                })
            })
            .reduce(Coverage::default, Coverage::merge)
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| (idx % self.width, idx / self.width, *cell))
    }
}
