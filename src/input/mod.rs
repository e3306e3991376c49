use macroquad::prelude::*;

use crate::application::{PaintMode, RoomEditor, Viewport};
use crate::config::EditorConfig;
use crate::domain::{Layer, SpotKind, StampShape};
use crate::ui::{grid_area_height, grid_area_width, Button, UiAction, CANVAS_MARGIN};

/// Pixels scrolled per wheel notch
const SCROLL_SPEED: f32 = 40.0;

/// Apply a panel or keyboard action. Returns true when a save was requested.
pub fn apply_action(editor: &mut RoomEditor, config: &EditorConfig, action: UiAction) -> bool {
    let (width_m, height_m) = editor.dimensions_m();
    match action {
        UiAction::Width(steps) => editor.set_room_dimensions(config.step_room_size(width_m, steps), height_m),
        UiAction::Height(steps) => editor.set_room_dimensions(width_m, config.step_room_size(height_m, steps)),
        UiAction::Layer(layer) => editor.select_layer(layer),
        UiAction::Mode(mode) => editor.select_paint_mode(mode),
        UiAction::Spot(kind) => editor.toggle_spot(kind),
        UiAction::CancelSpot => editor.cancel_spot(),
        UiAction::Undo => editor.undo(),
        UiAction::Save => return true,
        UiAction::EditName => editor.begin_rename(),
        UiAction::NameChar(c) => editor.push_name_char(c),
        UiAction::NameBackspace => editor.pop_name_char(),
        UiAction::FinishName => editor.finish_rename(),
    }
    false
}

/// Keyboard shortcut for a key press, if any
pub fn shortcut(key: KeyCode, ctrl: bool) -> Option<UiAction> {
    let action = match (key, ctrl) {
        (KeyCode::Z, true) | (KeyCode::U, false) => UiAction::Undo,
        (KeyCode::S, true) => UiAction::Save,
        (KeyCode::Key1, false) => UiAction::Layer(Layer::Floor),
        (KeyCode::Key2, false) => UiAction::Layer(Layer::Elevated),
        (KeyCode::P, false) => UiAction::Mode(PaintMode::Paint),
        (KeyCode::R, false) => UiAction::Mode(PaintMode::Rectangle),
        (KeyCode::Q, false) => UiAction::Mode(PaintMode::Stamp(StampShape::Square)),
        (KeyCode::L, false) => UiAction::Mode(PaintMode::Stamp(StampShape::Line)),
        (KeyCode::F, false) => UiAction::Spot(SpotKind::Food),
        (KeyCode::T, false) => UiAction::Spot(SpotKind::Toilet),
        (KeyCode::V, false) => UiAction::Spot(SpotKind::Favorite),
        (KeyCode::Escape, _) => UiAction::CancelSpot,
        _ => return None,
    };
    Some(action)
}

/// Actions for one frame of typing into the name field:
/// characters first, then backspace, then closing the field
pub fn name_field_actions(typed: &[char], backspace: bool, done: bool) -> Vec<UiAction> {
    typed
        .iter()
        .map(|&c| UiAction::NameChar(c))
        .chain(backspace.then_some(UiAction::NameBackspace))
        .chain(done.then_some(UiAction::FinishName))
        .collect()
}

/// Process keyboard shortcuts, or typing while the name field is open.
/// Returns true when a save was requested.
pub fn process_keyboard_input(editor: &mut RoomEditor, config: &EditorConfig) -> bool {
    // Drain every frame so keys pressed earlier do not show up in the name
    let typed: Vec<char> = std::iter::from_fn(get_char_pressed).collect();
    if editor.is_renaming() {
        let done = [KeyCode::Enter, KeyCode::KpEnter, KeyCode::Escape]
            .into_iter()
            .any(is_key_pressed);
        for action in name_field_actions(&typed, is_key_pressed(KeyCode::Backspace), done) {
            apply_action(editor, config, action);
        }
        return false;
    }

    const KEYS: [KeyCode; 13] = [
        KeyCode::Z, KeyCode::U, KeyCode::S, KeyCode::Key1, KeyCode::Key2,
        KeyCode::P, KeyCode::R, KeyCode::Q, KeyCode::L,
        KeyCode::F, KeyCode::T, KeyCode::V, KeyCode::Escape,
    ];
    let ctrl = is_key_down(KeyCode::LeftControl)
        || is_key_down(KeyCode::RightControl)
        || is_key_down(KeyCode::LeftSuper)
        || is_key_down(KeyCode::RightSuper);

    KEYS.iter()
        .filter(|&&key| is_key_pressed(key))
        .filter_map(|&key| shortcut(key, ctrl))
        .fold(false, |save, action| apply_action(editor, config, action) || save)
}

/// A press anywhere but the name button closes an open name field
pub fn finish_name_on_click_away(editor: &mut RoomEditor, buttons: &[(UiAction, Button)], mouse_pos: (f32, f32)) {
    if !editor.is_renaming() || !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }
    let on_name = buttons
        .iter()
        .any(|(action, btn)| *action == UiAction::EditName && btn.is_hovered(mouse_pos));
    if !on_name {
        editor.finish_rename();
    }
}

/// Process panel button clicks. Returns true when a save was requested.
pub fn process_button_clicks(
    editor: &mut RoomEditor,
    config: &EditorConfig,
    buttons: &[(UiAction, Button)],
    mouse_pos: (f32, f32),
) -> bool {
    buttons
        .iter()
        .filter(|(_, btn)| btn.is_clicked(mouse_pos))
        .fold(false, |save, (action, _)| apply_action(editor, config, *action) || save)
}

/// Scroll the canvas with the mouse wheel (Shift scrolls sideways)
pub fn handle_scroll(viewport: &mut Viewport, editor: &RoomEditor) {
    let (wheel_x, wheel_y) = mouse_wheel();
    let shift = is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift);
    let (dx, dy) = if shift { (wheel_y, 0.0) } else { (wheel_x, wheel_y) };

    let notch = |delta: f32| {
        if delta > 0.0 {
            SCROLL_SPEED
        } else if delta < 0.0 {
            -SCROLL_SPEED
        } else {
            0.0
        }
    };

    let (cols, rows) = editor.grid().dimensions();
    viewport.scroll(
        notch(dx),
        notch(dy),
        viewport.canvas_size(cols, rows),
        (grid_area_width(), grid_area_height()),
        CANVAS_MARGIN,
    );
}

/// Feed mouse state into the editor's pointer gesture.
/// `blocked` suppresses new presses, e.g. while a dropdown swallows the click.
pub fn handle_canvas_pointer(editor: &mut RoomEditor, viewport: &Viewport, mouse_pos: (f32, f32), blocked: bool) {
    let (cols, rows) = editor.grid().dimensions();
    let cell = (mouse_pos.0 < grid_area_width())
        .then(|| viewport.screen_to_cell(mouse_pos.0, mouse_pos.1, cols, rows))
        .flatten();

    if is_mouse_button_pressed(MouseButton::Right) {
        editor.cancel_spot();
    }
    if is_mouse_button_pressed(MouseButton::Left) && !blocked {
        editor.pointer_down(cell);
    }
    if !editor.gesture().is_idle() {
        match cell {
            None => editor.pointer_leave(),
            Some(_) if is_mouse_button_down(MouseButton::Left) => editor.pointer_move(cell),
            Some(_) => {}
        }
    }
    if is_mouse_button_released(MouseButton::Left) {
        editor.pointer_up();
    }
}
