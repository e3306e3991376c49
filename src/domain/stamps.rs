use super::CellPos;

/// Fixed multi-cell shapes applied in one click, centered on the clicked cell
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum StampShape {
    /// 3x3 block
    #[default]
    Square,
    /// 1x5 horizontal run
    Line,
}

impl StampShape {
    pub const fn name(self) -> &'static str {
        match self {
            StampShape::Square => "Square 3x3",
            StampShape::Line => "Line 1x5",
        }
    }

    /// Offsets from the center cell, as (dx, dy)
    pub const fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            StampShape::Square => &[
                (-1, -1), (0, -1), (1, -1),
                (-1, 0), (0, 0), (1, 0),
                (-1, 1), (0, 1), (1, 1),
            ],
            StampShape::Line => &[(-2, 0), (-1, 0), (0, 0), (1, 0), (2, 0)],
        }
    }

    /// Cells covered when stamped at `center` on a `width` x `height` grid.
    /// Cells falling outside the grid are skipped.
    pub fn cells_at(self, center: CellPos, width: usize, height: usize) -> impl Iterator<Item = CellPos> {
        self.offsets().iter().filter_map(move |&(dx, dy)| {
            let x = center.0.checked_add_signed(dx)?;
            let y = center.1.checked_add_signed(dy)?;
            (x < width && y < height).then_some((x, y))
        })
    }
}
