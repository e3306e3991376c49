//! Paint modes and the pointer gesture tracked between pointer-down and pointer-up.

use crate::domain::{CellPos, Layer, StampShape};

/// How pointer input paints the active layer
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PaintMode {
    /// Freehand stroke
    #[default]
    Paint,
    /// Two-corner drag, applied on release
    Rectangle,
    /// Fixed shape applied on press
    Stamp(StampShape),
}

impl PaintMode {
    /// All modes in panel order
    pub fn all() -> Vec<PaintMode> {
        vec![
            PaintMode::Paint,
            PaintMode::Rectangle,
            PaintMode::Stamp(StampShape::Square),
            PaintMode::Stamp(StampShape::Line),
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            PaintMode::Paint => "Paint",
            PaintMode::Rectangle => "Rectangle",
            PaintMode::Stamp(shape) => shape.name(),
        }
    }
}

/// In-flight drag. Nothing touches the grid until it is committed.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Freehand stroke: every visited cell is forced to `target`
    Stroke {
        layer: Layer,
        target: bool,
        /// Visited cells in visit order, without repeats
        cells: Vec<CellPos>,
    },
    /// Rectangle drag: the inclusive box from `start` to `end` is forced to `target`
    Rectangle {
        layer: Layer,
        target: bool,
        start: CellPos,
        end: CellPos,
    },
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    /// Feed the cell under the pointer during a drag
    pub fn extend(&mut self, cell: CellPos) {
        match self {
            Gesture::Idle => {}
            Gesture::Stroke { cells, .. } => {
                if !cells.contains(&cell) {
                    cells.push(cell);
                }
            }
            Gesture::Rectangle { end, .. } => *end = cell,
        }
    }

    /// Whether the committed gesture would touch this cell
    pub fn covers(&self, x: usize, y: usize) -> bool {
        match self {
            Gesture::Idle => false,
            Gesture::Stroke { cells, .. } => cells.contains(&(x, y)),
            Gesture::Rectangle { start, end, .. } => {
                (start.0.min(end.0)..=start.0.max(end.0)).contains(&x)
                    && (start.1.min(end.1)..=start.1.max(end.1)).contains(&y)
            }
        }
    }
}
