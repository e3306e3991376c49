// Domain layer - rooms, cells, spots, stamps
pub mod domain;

// Application layer - the editing session
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

pub mod config;
pub mod error;

// Re-exports for convenience
pub use domain::{Cell, Grid, Layer, RoomLayout, Spot, SpotKind, StampShape};
pub use application::{PaintMode, RoomEditor, Viewport};
pub use config::EditorConfig;
