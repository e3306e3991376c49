mod button;
mod dropdown;

pub use button::Button;
pub use dropdown::Dropdown;

use macroquad::prelude::{screen_height, screen_width, Color};

use crate::application::{PaintMode, RoomEditor};
use crate::domain::{Layer, SpotKind};

pub const PANEL_WIDTH: f32 = 220.0;
pub const PANEL_PADDING: f32 = 12.0;
pub const BUTTON_HEIGHT: f32 = 30.0;
/// Gap between the window edge and the canvas
pub const CANVAS_MARGIN: f32 = 16.0;

pub const MODE_DROPDOWN_Y: f32 = 250.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the canvas area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the canvas area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// What a panel button does
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UiAction {
    /// Grow or shrink the room by this many steps
    Width(i32),
    Height(i32),
    Layer(Layer),
    Mode(PaintMode),
    /// Arm a spot kind, or disarm it if already armed
    Spot(SpotKind),
    CancelSpot,
    Undo,
    Save,
    /// Open the room name field
    EditName,
    /// Type into the open name field
    NameChar(char),
    NameBackspace,
    /// Close the name field and apply it
    FinishName,
}

pub fn layer_color(layer: Layer) -> Color {
    match layer {
        Layer::Floor => Color::from_rgba(139, 92, 246, 255),
        Layer::Elevated => Color::from_rgba(168, 85, 247, 255),
    }
}

pub fn spot_color(kind: SpotKind) -> Color {
    match kind {
        SpotKind::Food => Color::from_rgba(249, 115, 22, 255),
        SpotKind::Toilet => Color::from_rgba(59, 130, 246, 255),
        SpotKind::Favorite => Color::from_rgba(234, 179, 8, 255),
    }
}

/// Position of a mode in the dropdown, matching `PaintMode::all()` order
pub fn mode_index(mode: PaintMode) -> usize {
    PaintMode::all().iter().position(|&m| m == mode).unwrap_or(0)
}

/// Paint mode selector, preselected to the editor's current mode
pub fn create_mode_dropdown(editor: &RoomEditor) -> Dropdown {
    let items = PaintMode::all().iter().map(|m| m.name().to_string()).collect();
    let mut dropdown = Dropdown::new(
        panel_x() + PANEL_PADDING,
        MODE_DROPDOWN_Y,
        PANEL_WIDTH - 2.0 * PANEL_PADDING,
        "Paint mode",
        items,
    );
    dropdown.set_selected(mode_index(editor.paint_mode()));
    dropdown
}

/// Build the panel buttons for the current editor state.
/// Rebuilt every frame so highlights and disabled states follow the editor.
pub fn create_buttons(editor: &RoomEditor) -> Vec<(UiAction, Button)> {
    let x = panel_x() + PANEL_PADDING;
    let inner = PANEL_WIDTH - 2.0 * PANEL_PADDING;
    let half = (inner - 8.0) / 2.0;
    let third = (inner - 16.0) / 3.0;
    let small = 30.0;
    let layer = editor.active_layer();
    let name_label = match editor.name_draft() {
        Some(draft) => format!("{}_", draft),
        None => editor.name().to_string(),
    };

    let mut buttons = vec![
        (
            UiAction::EditName,
            Button::new(x, 8.0, inner, BUTTON_HEIGHT, name_label)
                .active(editor.is_renaming(), Color::from_rgba(95, 95, 110, 255)),
        ),
        (UiAction::Width(-1), Button::new(x + inner - 2.0 * small - 6.0, 70.0, small, BUTTON_HEIGHT - 6.0, "-")),
        (UiAction::Width(1), Button::new(x + inner - small, 70.0, small, BUTTON_HEIGHT - 6.0, "+")),
        (UiAction::Height(-1), Button::new(x + inner - 2.0 * small - 6.0, 100.0, small, BUTTON_HEIGHT - 6.0, "-")),
        (UiAction::Height(1), Button::new(x + inner - small, 100.0, small, BUTTON_HEIGHT - 6.0, "+")),
    ];

    for (i, l) in [Layer::Floor, Layer::Elevated].into_iter().enumerate() {
        let label = match l {
            Layer::Floor => "Floor",
            Layer::Elevated => "Elevated",
        };
        buttons.push((
            UiAction::Layer(l),
            Button::new(x + i as f32 * (half + 8.0), 170.0, half, BUTTON_HEIGHT, label)
                .active(l == layer, layer_color(l)),
        ));
    }

    for (i, kind) in SpotKind::all().into_iter().enumerate() {
        buttons.push((
            UiAction::Spot(kind),
            Button::new(x + i as f32 * (third + 8.0), 330.0, third, BUTTON_HEIGHT, kind.name())
                .active(editor.pending_spot() == Some(kind), spot_color(kind))
                .enabled(kind.allowed_on(layer)),
        ));
    }

    buttons.push((
        UiAction::Undo,
        Button::new(x, 400.0, half, BUTTON_HEIGHT + 6.0, "Undo").enabled(editor.can_undo()),
    ));
    buttons.push((
        UiAction::Save,
        Button::new(x + half + 8.0, 400.0, half, BUTTON_HEIGHT + 6.0, "Save")
            .fill(Color::from_rgba(59, 130, 246, 255)),
    ));

    buttons
}
