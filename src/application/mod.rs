mod editor;
mod export;
mod gesture;
mod history;
mod viewport;

pub use editor::RoomEditor;
pub use export::save_room;
pub use gesture::{Gesture, PaintMode};
pub use history::{History, Snapshot};
pub use viewport::Viewport;
