mod cell;
mod grid;
mod spot;
mod stamps;
mod layout;

pub use cell::{Cell, Layer};
pub use grid::{Grid, CellPos, Coverage, cells_for_meters, room_meters, CELL_METERS, MAX_ROOM_METERS, MAX_SIDE_CELLS};
pub use spot::{Spot, SpotKind};
pub use stamps::StampShape;
pub use layout::RoomLayout;
